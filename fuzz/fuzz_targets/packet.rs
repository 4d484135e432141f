#![no_main]

use lorawan_frame::Packet;

use libfuzzer_sys::{fuzz_target, Corpus};

fuzz_target!(|data: &[u8]| -> Corpus {
    // Largest PHYPayload allowed by any regional plan.
    if data.len() > 255 {
        return Corpus::Reject;
    }

    if let Ok(packet) = Packet::new(data) {
        let _ = packet.mac_payload();
        let _ = packet.mic();

        if let Packet::Data(data) = packet {
            let fhdr = data.fhdr();
            for cmd in fhdr.mac_commands(data.direction()) {
                let _ = cmd.payload();
            }
            let _ = data.frm_payload();
        }
    }

    Corpus::Keep
});
