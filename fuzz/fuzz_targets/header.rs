#![no_main]

use arbitrary::Arbitrary;
use lorawan_frame::{Cid, DevAddr, Direction, MType, Major, Packet};

use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Header {
    mtype: MType,
    major: Major,
    rfu: u8,
    dev_addr: DevAddr,
    fctrl: u8,
    fcnt: u16,
    commands: Vec<(Cid, Vec<u8>)>,
    direction: Direction,
    tail: Vec<u8>,
}

impl Header {
    fn fopts(&self) -> Vec<u8> {
        let mut fopts = Vec::new();
        for (cid, payload) in &self.commands {
            fopts.push(*cid as u8);
            fopts.extend_from_slice(payload);
        }
        fopts.truncate(15);
        fopts
    }

    fn emit(&self) -> Vec<u8> {
        let fopts = self.fopts();

        let mhdr = (self.mtype as u8) << 5 | (self.rfu & 0b111) << 2 | self.major as u8;

        let mut buffer = vec![mhdr];
        buffer.extend_from_slice(self.dev_addr.as_bytes());
        buffer.push((self.fctrl & 0xf0) | fopts.len() as u8);
        buffer.extend_from_slice(&self.fcnt.to_le_bytes());
        buffer.extend_from_slice(&fopts);
        buffer.extend_from_slice(&self.tail);
        buffer.extend_from_slice(&[0; 4]);
        buffer
    }
}

fuzz_target!(|header: Header| {
    let buffer = header.emit();

    let packet = Packet::new(&buffer[..]);

    if header.major == Major::Unknown {
        assert!(packet.is_err());
        return;
    }

    if !header.mtype.is_data() {
        if let Ok(packet) = packet {
            assert_eq!(packet.mhdr().mtype(), header.mtype);
        }
        return;
    }

    let Ok(Packet::Data(data)) = packet else {
        panic!("data message with a consistent frame header was rejected");
    };

    let fhdr = data.fhdr();
    assert_eq!(fhdr.dev_addr(), header.dev_addr);
    assert_eq!(fhdr.fcnt(), header.fcnt);
    assert_eq!(fhdr.fopts(), &header.fopts()[..]);

    let mut commands = fhdr.mac_commands(header.direction);
    let mut parsed = 0;
    for cmd in commands.by_ref() {
        parsed += cmd.len();
        let _ = cmd.name();
    }
    assert_eq!(parsed + commands.remaining().len(), fhdr.fopts().len());
});
