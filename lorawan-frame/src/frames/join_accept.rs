use crate::{Error, Result};
use crate::{DevAddr, MType, Mhdr, NetId};

/// A reader for a LoRaWAN Join Accept.
///
/// ```notrust
/// +------+----------+-------+---------+------------+---------+--------+-----+
/// | MHDR | AppNonce | NetID | DevAddr | DLSettings | RxDelay | CFList | MIC |
/// +------+----------+-------+---------+------------+---------+--------+-----+
///    1        3         3        4          1           1       0/16     4
/// ```
///
/// Everything after the MHDR is encrypted on air. The accessors return the
/// octets as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinAccept<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> JoinAccept<T> {
    /// Length of a Join Accept without CFList.
    pub const LEN: usize = 17;
    /// Length of a Join Accept with CFList.
    pub const LEN_WITH_CF_LIST: usize = 33;

    /// Create a new [`JoinAccept`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is neither 17 nor 33 octets long, or does
    /// not carry a Join Accept message type.
    pub fn new(buffer: T) -> Result<Self> {
        let b = Self::new_unchecked(buffer);

        let len = b.buffer.as_ref().len();
        if len != Self::LEN && len != Self::LEN_WITH_CF_LIST {
            return Err(Error);
        }

        if b.mhdr().mtype() != MType::JoinAccept {
            return Err(Error);
        }

        Ok(b)
    }

    /// Create a new [`JoinAccept`] reader without checking the buffer.
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

    /// Return the AppNonce (JoinNonce in LoRaWAN 1.1).
    pub fn app_nonce(&self) -> u32 {
        super::read_le(&self.buffer.as_ref()[1..4])
    }

    /// Return the network identifier.
    pub fn net_id(&self) -> NetId {
        let b = self.buffer.as_ref();
        NetId::from_wire([b[4], b[5], b[6]])
    }

    /// Return the device address.
    pub fn dev_addr(&self) -> DevAddr {
        let b = self.buffer.as_ref();
        DevAddr::from_wire([b[7], b[8], b[9], b[10]])
    }

    /// Return the downlink settings.
    pub fn dl_settings(&self) -> DlSettings {
        DlSettings::from(self.buffer.as_ref()[11])
    }

    /// Return the delay between TX and RX1, in seconds.
    pub fn rx_delay(&self) -> u8 {
        match self.buffer.as_ref()[12] & 0b1111 {
            0 => 1,
            delay => delay,
        }
    }

    /// Return the optional list of channel frequencies.
    pub fn cf_list(&self) -> Option<&[u8]> {
        let b = self.buffer.as_ref();
        if b.len() == Self::LEN_WITH_CF_LIST {
            Some(&b[13..29])
        } else {
            None
        }
    }

    /// Return the Message Integrity Code, in wire order.
    pub fn mic(&self) -> [u8; 4] {
        super::mic(self.buffer.as_ref())
    }
}

/// A reader for the DLSettings field of a Join Accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DlSettings {
    buffer: u8,
}

impl DlSettings {
    /// Create a new [`DlSettings`] reader.
    pub fn from(buffer: u8) -> Self {
        Self { buffer }
    }

    /// Return the offset between the uplink data rate and the RX1 downlink
    /// data rate.
    pub fn rx1_dr_offset(&self) -> u8 {
        (self.buffer >> 4) & 0b111
    }

    /// Return the data rate of the RX2 window.
    pub fn rx2_data_rate(&self) -> u8 {
        self.buffer & 0b1111
    }
}

impl core::fmt::Display for DlSettings {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "RX1DROffset: {}, RX2DataRate: {}",
            self.rx1_dr_offset(),
            self.rx2_data_rate()
        )
    }
}
