use crate::{Error, Result};
use crate::{Eui64, MType, Mhdr};

/// A reader for a LoRaWAN Join Request.
///
/// ```notrust
/// +------+--------+--------+----------+-----+
/// | MHDR | AppEUI | DevEUI | DevNonce | MIC |
/// +------+--------+--------+----------+-----+
///    1       8        8         2        4
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinRequest<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> JoinRequest<T> {
    /// Length of a Join Request in octets.
    pub const LEN: usize = 23;

    /// Create a new [`JoinRequest`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is not exactly 23 octets long or does not
    /// carry a Join Request message type.
    pub fn new(buffer: T) -> Result<Self> {
        let b = Self::new_unchecked(buffer);

        if b.buffer.as_ref().len() != Self::LEN {
            return Err(Error);
        }

        if b.mhdr().mtype() != MType::JoinRequest {
            return Err(Error);
        }

        Ok(b)
    }

    /// Create a new [`JoinRequest`] reader without checking the buffer.
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

    /// Return the AppEUI (JoinEUI in LoRaWAN 1.1).
    pub fn app_eui(&self) -> Eui64 {
        Eui64::from_wire(eui(&self.buffer.as_ref()[1..9]))
    }

    /// Return the DevEUI.
    pub fn dev_eui(&self) -> Eui64 {
        Eui64::from_wire(eui(&self.buffer.as_ref()[9..17]))
    }

    /// Return the DevNonce.
    pub fn dev_nonce(&self) -> u16 {
        let b = self.buffer.as_ref();
        u16::from_le_bytes([b[17], b[18]])
    }

    /// Return the Message Integrity Code, in wire order.
    pub fn mic(&self) -> [u8; 4] {
        super::mic(self.buffer.as_ref())
    }
}

fn eui(b: &[u8]) -> [u8; 8] {
    let mut eui = [0u8; 8];
    eui.copy_from_slice(b);
    eui
}
