//! Zero-copy readers for LoRaWAN PHYPayloads.
//!
//! Each reader contains the following functions:
//! - [`new`]: Create a new reader, checking the buffer.
//! - [`new_unchecked`]: Create a new reader without checking the buffer.
//!
//! The most important reader is the [`Packet`] reader, which dispatches on the
//! message type found in the MAC header. It provides the following functions:
//! - [`mhdr`]: returns the [`Mhdr`] of the packet.
//! - [`mac_payload`]: returns everything between the MHDR and the MIC.
//! - [`mic`]: returns the Message Integrity Code.
//!
//! ## Reading a packet
//! ```
//! # use lorawan_frame::{Direction, MType, Packet};
//! let packet: [u8; 18] = [
//!     0x40, 0x01, 0x02, 0x03, 0x04, 0x00, 0x01, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06,
//!     0x07, 0x08, 0x09, 0x0a,
//! ];
//! let packet = Packet::new(&packet[..]).unwrap();
//!
//! assert_eq!(packet.mhdr().mtype(), MType::UnconfirmedDataUp);
//! assert_eq!(packet.mhdr().direction(), Some(Direction::Uplink));
//!
//! let Packet::Data(data) = packet else { return; };
//! let fhdr = data.fhdr();
//!
//! assert_eq!(fhdr.dev_addr().as_u32(), 0x04030201);
//! assert_eq!(fhdr.fcnt(), 1);
//! assert_eq!(data.fport(), Some(1));
//! assert_eq!(data.frm_payload(), Some(&[0x02, 0x03, 0x04, 0x05, 0x06][..]));
//! ```
//!
//! ## Message types
//!
//! - [x] [`JoinRequest`]
//! - [x] [`JoinAccept`]: fields are read as they appear on the wire, the body
//!   is not decrypted.
//! - [x] [`DataPacket`]: confirmed and unconfirmed, uplink and downlink.
//! - [ ] `RejoinRequest`: only the raw body is available.
//! - [x] [`Proprietary`]: only the raw body is available.
//!
//! ## MAC commands
//!
//! MAC commands piggybacked in the FOpts field can be iterated with
//! [`FrameHeader::mac_commands`]. Commands carried in the FRMPayload (FPort 0)
//! are encrypted and are not parsed.
//!
//! [`new`]: Packet::new
//! [`new_unchecked`]: DataPacket::new_unchecked
//! [`mhdr`]: Packet::mhdr
//! [`mac_payload`]: Packet::mac_payload
//! [`mic`]: Packet::mic
#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_code)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(test)]
mod tests;

mod frames;
pub use frames::*;

mod mhdr;
pub use mhdr::*;

mod address;
pub use address::*;

mod fhdr;
pub use fhdr::*;

mod mac_commands;
pub use mac_commands::*;

/// Length of the MAC header in octets.
pub const MHDR_LEN: usize = 1;
/// Length of the Message Integrity Code in octets.
pub const MIC_LEN: usize = 4;

/// An error that can occur when reading a LoRaWAN packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "malformed LoRaWAN packet")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// A type alias for `Result<T, frame::Error>`.
pub type Result<T> = core::result::Result<T, Error>;
