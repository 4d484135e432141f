use crate::{Error, Result};
use crate::{Mhdr, MHDR_LEN, MIC_LEN};

/// A reader for a message whose body is not interpreted (proprietary
/// messages and rejoin requests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawPacket<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> RawPacket<T> {
    /// Create a new [`RawPacket`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot hold an MHDR and a MIC.
    pub fn new(buffer: T) -> Result<Self> {
        if buffer.as_ref().len() < MHDR_LEN + MIC_LEN {
            return Err(Error);
        }

        Ok(Self::new_unchecked(buffer))
    }

    /// Create a new [`RawPacket`] reader without checking the buffer.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the full PHYPayload.
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_ref()
    }

    /// Return the MAC header.
    pub fn mhdr(&self) -> Mhdr {
        Mhdr::from(self.buffer.as_ref()[0])
    }

    /// Return the message body.
    pub fn payload(&self) -> &[u8] {
        super::mac_payload(self.buffer.as_ref())
    }

    /// Return the Message Integrity Code, in wire order.
    pub fn mic(&self) -> [u8; MIC_LEN] {
        super::mic(self.buffer.as_ref())
    }
}
