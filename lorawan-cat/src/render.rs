use colored::*;
use lorawan_frame::*;

use crate::input::{decode_bytes, Encoding};
use crate::Result;

struct Writer<'b> {
    buffer: &'b mut String,
    indent: usize,
}

impl<'b> Writer<'b> {
    fn new(buffer: &'b mut String) -> Self {
        Self { buffer, indent: 0 }
    }

    fn increase_indent(&mut self) {
        self.indent += 2;
    }

    fn decrease_indent(&mut self) {
        self.indent = self.indent.saturating_sub(2);
    }

    fn write(&mut self, s: String) {
        self.buffer.push_str(&" ".repeat(self.indent));
        self.buffer.push_str(&s);
    }

    fn writeln(&mut self, s: String) {
        self.write(s);
        self.buffer.push('\n');
    }

    fn section(&mut self, title: &str) {
        self.writeln(title.underline().bold().to_string());
    }

    fn field(&mut self, name: &str, value: impl core::fmt::Display) {
        self.writeln(format!("{}: {}", name.bold(), value));
    }
}

/// Renders LoRaWAN packets as indented, human-readable text.
pub struct PacketParser {}

impl PacketParser {
    pub fn parse_hex(input: &str) -> Result<String> {
        let data = decode_bytes(Encoding::Hex, input)?;
        Self::parse(&data)
    }

    pub fn parse_base64(input: &str) -> Result<String> {
        let data = decode_bytes(Encoding::Base64, input)?;
        Self::parse(&data)
    }

    pub fn parse(input: &[u8]) -> Result<String> {
        let packet = Packet::new(input)?;
        Ok(Self::render(&packet))
    }

    pub fn render<T: AsRef<[u8]>>(packet: &Packet<T>) -> String {
        let mut buffer = String::new();

        let mut w = Writer::new(&mut buffer);

        let mhdr = packet.mhdr();

        // -----------------------------------------------------------------
        // Message Type
        // -----------------------------------------------------------------
        w.section("Message Type");
        w.increase_indent();
        w.field("type", mhdr.mtype().to_string().bright_blue());
        if let Some(direction) = mhdr.direction() {
            w.field("direction", direction);
        }
        w.field(
            "major",
            format!("{} ({:?})", mhdr.major() as usize, mhdr.major()),
        );
        w.decrease_indent();

        // -----------------------------------------------------------------
        // PHYPayload
        // -----------------------------------------------------------------
        w.section("PHYPayload");
        w.increase_indent();
        w.field("MHDR", format!("{:02x}", mhdr.raw()));
        w.field("MACPayload", hex::encode(packet.mac_payload()));
        w.field("MIC", hex::encode(packet.mic()));
        w.decrease_indent();

        match packet {
            Packet::JoinRequest(jr) => {
                // ---------------------------------------------------------
                // Join Request
                // ---------------------------------------------------------
                w.section("Join Request");
                w.increase_indent();
                w.field("AppEUI", jr.app_eui());
                w.field("DevEUI", jr.dev_eui());
                w.field("DevNonce", format!("{:04x}", jr.dev_nonce()));
                w.decrease_indent();
            }
            Packet::JoinAccept(ja) => {
                // ---------------------------------------------------------
                // Join Accept
                // ---------------------------------------------------------
                w.section("Join Accept");
                w.increase_indent();
                w.field("AppNonce", format!("{:06x}", ja.app_nonce()));
                w.field("NetID", ja.net_id());
                w.field("DevAddr", ja.dev_addr());
                w.field("DLSettings", ja.dl_settings());
                w.field("RxDelay", ja.rx_delay());
                if let Some(cf_list) = ja.cf_list() {
                    w.field("CFList", hex::encode(cf_list));
                }
                w.decrease_indent();
            }
            Packet::Data(data) => Self::render_data(&mut w, data),
            Packet::RejoinRequest(raw) | Packet::Proprietary(raw) => {
                w.section("Payload");
                w.increase_indent();
                w.writeln(format!("{:x?}", raw.payload()));
                w.decrease_indent();
            }
        }

        buffer
    }

    fn render_data<T: AsRef<[u8]>>(w: &mut Writer, data: &DataPacket<T>) {
        let direction = data.direction();
        let fhdr = data.fhdr();
        let fctrl = fhdr.fctrl();

        // -----------------------------------------------------------------
        // Frame Header
        // -----------------------------------------------------------------
        w.section("Frame Header");
        w.increase_indent();
        w.field("DevAddr", fhdr.dev_addr());
        w.field("FCtrl", format!("{:02x}", fctrl.bits()));
        w.increase_indent();
        w.field("ADR", fctrl.contains(FCtrl::ADR) as usize);
        match direction {
            Direction::Uplink => {
                w.field("ADRACKReq", fctrl.contains(FCtrl::ADR_ACK_REQ) as usize);
                w.field("ACK", fctrl.contains(FCtrl::ACK) as usize);
                w.field("ClassB", fctrl.contains(FCtrl::F_PENDING) as usize);
            }
            Direction::Downlink => {
                w.field("ACK", fctrl.contains(FCtrl::ACK) as usize);
                w.field("FPending", fctrl.contains(FCtrl::F_PENDING) as usize);
            }
        }
        w.field("FOptsLen", fctrl.fopts_len());
        w.decrease_indent();
        w.field("FCnt", fhdr.fcnt());

        // -----------------------------------------------------------------
        // MAC Commands
        // -----------------------------------------------------------------
        if !fhdr.fopts().is_empty() {
            w.field("FOpts", hex::encode(fhdr.fopts()));
            w.increase_indent();

            let mut commands = fhdr.mac_commands(direction);
            for cmd in commands.by_ref() {
                w.field(cmd.name(), format!("{:x?}", cmd.payload()));
            }

            let remaining = commands.remaining();
            if !remaining.is_empty() {
                w.field("unparsed", format!("{:x?}", remaining));
            }
            w.decrease_indent();
        }
        w.decrease_indent();

        // -----------------------------------------------------------------
        // Frame Port
        // -----------------------------------------------------------------
        if let Some(fport) = data.fport() {
            w.section("Frame Port");
            w.increase_indent();
            w.field(
                "FPort",
                format!(
                    "{}{}",
                    fport,
                    if fport == 0 { " (MAC commands)" } else { "" }
                ),
            );
            w.decrease_indent();
        }

        // -----------------------------------------------------------------
        // Frame Payload
        // -----------------------------------------------------------------
        if let Some(payload) = data.frm_payload() {
            w.section("Frame Payload");
            w.increase_indent();
            w.writeln(format!("{:x?}", payload));
            w.decrease_indent();
        }
    }
}
