use crate::{Error, Result};
use crate::{Direction, FrameHeader, MType, Mhdr, MHDR_LEN, MIC_LEN};

/// A reader for a LoRaWAN data message, confirmed or unconfirmed, in either
/// direction.
///
/// ```notrust
/// +------+------+--------+------------+-----+
/// | MHDR | FHDR | FPort? | FRMPayload | MIC |
/// +------+------+--------+------------+-----+
///    1    7..22    0/1       0..N        4
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataPacket<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> DataPacket<T> {
    /// Minimum length of a data message: MHDR, FHDR without FOpts and MIC.
    pub const MIN_LEN: usize = MHDR_LEN + 7 + MIC_LEN;

    /// Create a new [`DataPacket`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the message type is not a data message, or if the
    /// buffer is too short to contain the frame header it announces and a MIC.
    pub fn new(buffer: T) -> Result<Self> {
        let b = Self::new_unchecked(buffer);

        if !b.mhdr().mtype().is_data() {
            return Err(Error);
        }

        if !b.check_len() {
            return Err(Error);
        }

        Ok(b)
    }

    /// Returns `false` if the buffer is too short to contain a valid message.
    fn check_len(&self) -> bool {
        let buffer = self.buffer.as_ref();

        if buffer.len() < Self::MIN_LEN {
            return false;
        }

        FrameHeader::new(self.mac_payload()).is_ok()
    }

    /// Create a new [`DataPacket`] reader without length checking.
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

    /// Return the direction of the message.
    pub fn direction(&self) -> Direction {
        match self.mhdr().mtype() {
            MType::UnconfirmedDataUp | MType::ConfirmedDataUp => Direction::Uplink,
            _ => Direction::Downlink,
        }
    }

    /// Returns `true` when the message must be acknowledged.
    pub fn is_confirmed(&self) -> bool {
        self.mhdr().mtype().is_confirmed()
    }

    /// Return the MACPayload, everything between the MHDR and the MIC.
    pub fn mac_payload(&self) -> &[u8] {
        super::mac_payload(self.buffer.as_ref())
    }

    /// Return a [`FrameHeader`] reader.
    pub fn fhdr(&self) -> FrameHeader<&'_ [u8]> {
        FrameHeader::new_unchecked(self.mac_payload())
    }

    /// Return the frame port, if present.
    pub fn fport(&self) -> Option<u8> {
        self.mac_payload().get(self.fhdr().len()).copied()
    }

    /// Return the frame payload, present whenever the frame port is.
    ///
    /// The payload is encrypted with the AppSKey, or with the NwkSKey when the
    /// frame port is 0.
    pub fn frm_payload(&self) -> Option<&[u8]> {
        let offset = self.fhdr().len() + 1;
        self.mac_payload().get(offset..)
    }

    /// Return the Message Integrity Code, in wire order.
    pub fn mic(&self) -> [u8; MIC_LEN] {
        super::mic(self.buffer.as_ref())
    }
}
