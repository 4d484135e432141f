//! Frame header readers.

use super::{DevAddr, Direction, MacCommandsIterator};
use super::{Error, Result};

bitflags::bitflags! {
    /// The frame control octet of a frame header.
    ///
    /// The four least significant bits hold the FOpts length, see
    /// [`FCtrl::fopts_len`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FCtrl: u8 {
        /// Adaptive data rate.
        const ADR = 0b1000_0000;
        /// ADR acknowledgment request (uplink only, RFU on downlink).
        const ADR_ACK_REQ = 0b0100_0000;
        /// Acknowledges the last confirmed message.
        const ACK = 0b0010_0000;
        /// Frame pending on downlink, Class B enabled on uplink.
        const F_PENDING = 0b0001_0000;
    }
}

impl FCtrl {
    /// Return the length of the FOpts field in octets.
    pub fn fopts_len(&self) -> usize {
        (self.bits() & 0b1111) as usize
    }
}

/// A reader for the LoRaWAN frame header (FHDR).
///
/// The buffer starts at the DevAddr field and may extend past the frame
/// header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> FrameHeader<T> {
    /// Length of a frame header without FOpts.
    pub const MIN_LEN: usize = 7;

    /// Create a new [`FrameHeader`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short to contain the frame header
    /// and the FOpts it announces.
    pub fn new(buffer: T) -> Result<Self> {
        let fhdr = Self::new_unchecked(buffer);

        if !fhdr.check_len() {
            return Err(Error);
        }

        Ok(fhdr)
    }

    /// Returns `false` if the buffer is too short to contain the frame header.
    fn check_len(&self) -> bool {
        let buffer = self.buffer.as_ref();

        if buffer.len() < Self::MIN_LEN {
            return false;
        }

        buffer.len() >= self.len()
    }

    /// Create a new [`FrameHeader`] reader without length checking.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the length of the frame header, FOpts included.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        Self::MIN_LEN + self.fctrl().fopts_len()
    }

    /// Return the device address.
    pub fn dev_addr(&self) -> DevAddr {
        let b = &self.buffer.as_ref()[..4];
        DevAddr::from_wire([b[0], b[1], b[2], b[3]])
    }

    /// Return the frame control field.
    pub fn fctrl(&self) -> FCtrl {
        FCtrl::from_bits_retain(self.buffer.as_ref()[4])
    }

    /// Return the 16 least significant bits of the frame counter.
    pub fn fcnt(&self) -> u16 {
        let b = self.buffer.as_ref();
        u16::from_le_bytes([b[5], b[6]])
    }

    /// Return the FOpts field.
    pub fn fopts(&self) -> &[u8] {
        &self.buffer.as_ref()[Self::MIN_LEN..self.len()]
    }

    /// Return an [`Iterator`] over the MAC commands in the FOpts field.
    pub fn mac_commands(&self, direction: Direction) -> MacCommandsIterator<'_> {
        MacCommandsIterator::new(self.fopts(), direction)
    }
}
