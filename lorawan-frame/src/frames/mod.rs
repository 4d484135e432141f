//! Readers for LoRaWAN PHYPayloads.

use crate::{Error, Result};
use crate::{MType, Major, Mhdr, MHDR_LEN, MIC_LEN};

pub(crate) mod data;
pub(crate) mod join_accept;
pub(crate) mod join_request;
pub(crate) mod raw;

pub use data::*;
pub use join_accept::*;
pub use join_request::*;
pub use raw::*;

/// A LoRaWAN PHYPayload, dispatched on its message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Packet<T: AsRef<[u8]>> {
    /// A join request.
    JoinRequest(JoinRequest<T>),
    /// A join accept.
    JoinAccept(JoinAccept<T>),
    /// A data message, in either direction.
    Data(DataPacket<T>),
    /// A rejoin request. Only the raw body is available.
    RejoinRequest(RawPacket<T>),
    /// A proprietary message.
    Proprietary(RawPacket<T>),
}

impl<T: AsRef<[u8]>> Packet<T> {
    /// Create a new [`Packet`] from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short, if the major version is
    /// unknown, or if the message body does not match its message type.
    pub fn new(buffer: T) -> Result<Self> {
        let b = buffer.as_ref();

        if b.len() < MHDR_LEN + MIC_LEN {
            return Err(Error);
        }

        let mhdr = Mhdr::from(b[0]);

        if mhdr.major() == Major::Unknown {
            return Err(Error);
        }

        match mhdr.mtype() {
            MType::JoinRequest => Ok(Packet::JoinRequest(JoinRequest::new(buffer)?)),
            MType::JoinAccept => Ok(Packet::JoinAccept(JoinAccept::new(buffer)?)),
            MType::UnconfirmedDataUp
            | MType::UnconfirmedDataDown
            | MType::ConfirmedDataUp
            | MType::ConfirmedDataDown => Ok(Packet::Data(DataPacket::new(buffer)?)),
            MType::RejoinRequest => Ok(Packet::RejoinRequest(RawPacket::new(buffer)?)),
            MType::Proprietary => Ok(Packet::Proprietary(RawPacket::new(buffer)?)),
        }
    }

    fn buffer(&self) -> &[u8] {
        match self {
            Packet::JoinRequest(p) => p.as_bytes(),
            Packet::JoinAccept(p) => p.as_bytes(),
            Packet::Data(p) => p.as_bytes(),
            Packet::RejoinRequest(p) | Packet::Proprietary(p) => p.as_bytes(),
        }
    }

    /// Return the full PHYPayload.
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer()
    }

    /// Return the MAC header.
    pub fn mhdr(&self) -> Mhdr {
        Mhdr::from(self.buffer()[0])
    }

    /// Return everything between the MAC header and the MIC.
    pub fn mac_payload(&self) -> &[u8] {
        mac_payload(self.buffer())
    }

    /// Return the Message Integrity Code, in wire order.
    pub fn mic(&self) -> [u8; MIC_LEN] {
        mic(self.buffer())
    }
}

/// The MACPayload of a buffer that holds at least an MHDR and a MIC.
pub(crate) fn mac_payload(buffer: &[u8]) -> &[u8] {
    &buffer[MHDR_LEN..buffer.len() - MIC_LEN]
}

/// The MIC of a buffer that holds at least an MHDR and a MIC.
pub(crate) fn mic(buffer: &[u8]) -> [u8; MIC_LEN] {
    let b = &buffer[buffer.len() - MIC_LEN..];
    [b[0], b[1], b[2], b[3]]
}

/// Read a little-endian integer of up to 4 octets.
pub(crate) fn read_le(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .rev()
        .fold(0u32, |acc, b| (acc << 8) | *b as u32)
}
