//! MAC command readers.

use super::Direction;
use super::{Error, Result};

/// MAC command identifier, as defined in LoRaWAN 1.0.x.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum Cid {
    /// Connectivity check.
    LinkCheck = 0x02,
    /// Data rate, TX power and channel mask adaptation.
    LinkAdr = 0x03,
    /// Maximum aggregated duty cycle.
    DutyCycle = 0x04,
    /// Reception slot parameters.
    RxParamSetup = 0x05,
    /// Battery level and demodulation margin.
    DevStatus = 0x06,
    /// Channel creation or modification.
    NewChannel = 0x07,
    /// Reception slot timing.
    RxTimingSetup = 0x08,
    /// Dwell time and maximum EIRP.
    TxParamSetup = 0x09,
    /// Downlink frequency of a channel.
    DlChannel = 0x0a,
    /// Network time.
    DeviceTime = 0x0d,
    /// Unknown or proprietary command.
    Unknown,
}

impl From<u8> for Cid {
    fn from(value: u8) -> Self {
        match value {
            0x02 => Self::LinkCheck,
            0x03 => Self::LinkAdr,
            0x04 => Self::DutyCycle,
            0x05 => Self::RxParamSetup,
            0x06 => Self::DevStatus,
            0x07 => Self::NewChannel,
            0x08 => Self::RxTimingSetup,
            0x09 => Self::TxParamSetup,
            0x0a => Self::DlChannel,
            0x0d => Self::DeviceTime,
            _ => Self::Unknown,
        }
    }
}

impl Cid {
    /// Return the payload length of the command in the given direction, or
    /// `None` when the command is unknown.
    pub fn payload_len(&self, direction: Direction) -> Option<usize> {
        let (up, down) = match self {
            Self::LinkCheck => (0, 2),
            Self::LinkAdr => (1, 4),
            Self::DutyCycle => (0, 1),
            Self::RxParamSetup => (1, 4),
            Self::DevStatus => (2, 0),
            Self::NewChannel => (1, 5),
            Self::RxTimingSetup => (0, 1),
            Self::TxParamSetup => (0, 1),
            Self::DlChannel => (1, 4),
            Self::DeviceTime => (0, 5),
            Self::Unknown => return None,
        };

        Some(match direction {
            Direction::Uplink => up,
            Direction::Downlink => down,
        })
    }

    /// Returns `true` when the command sent in the given direction is a
    /// request. Only LinkCheck and DeviceTime are requested by the end-device.
    pub fn is_request(&self, direction: Direction) -> bool {
        let device_initiated = matches!(self, Self::LinkCheck | Self::DeviceTime);
        match direction {
            Direction::Uplink => device_initiated,
            Direction::Downlink => !device_initiated,
        }
    }
}

/// A reader for a single MAC command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacCommand<T: AsRef<[u8]>> {
    buffer: T,
    direction: Direction,
}

impl<T: AsRef<[u8]>> MacCommand<T> {
    /// Create a new [`MacCommand`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the command identifier is unknown, or if the buffer
    /// is too short to contain the command payload.
    pub fn new(buffer: T, direction: Direction) -> Result<Self> {
        let cmd = Self::new_unchecked(buffer, direction);

        if !cmd.check_len() {
            return Err(Error);
        }

        Ok(cmd)
    }

    fn check_len(&self) -> bool {
        let buffer = self.buffer.as_ref();

        if buffer.is_empty() {
            return false;
        }

        match self.cid().payload_len(self.direction) {
            Some(len) => buffer.len() > len,
            None => false,
        }
    }

    /// Create a new [`MacCommand`] reader without checking the buffer.
    pub fn new_unchecked(buffer: T, direction: Direction) -> Self {
        Self { buffer, direction }
    }

    /// Return the command identifier.
    pub fn cid(&self) -> Cid {
        Cid::from(self.buffer.as_ref()[0])
    }

    /// Return the length of the command, identifier included.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        1 + self.cid().payload_len(self.direction).unwrap_or(0)
    }

    /// Return the command payload.
    pub fn payload(&self) -> &[u8] {
        &self.buffer.as_ref()[1..self.len()]
    }

    /// Return the name of the command, e.g. `LinkCheckReq`.
    pub fn name(&self) -> &'static str {
        let request = self.cid().is_request(self.direction);
        match (self.cid(), request) {
            (Cid::LinkCheck, true) => "LinkCheckReq",
            (Cid::LinkCheck, false) => "LinkCheckAns",
            (Cid::LinkAdr, true) => "LinkADRReq",
            (Cid::LinkAdr, false) => "LinkADRAns",
            (Cid::DutyCycle, true) => "DutyCycleReq",
            (Cid::DutyCycle, false) => "DutyCycleAns",
            (Cid::RxParamSetup, true) => "RXParamSetupReq",
            (Cid::RxParamSetup, false) => "RXParamSetupAns",
            (Cid::DevStatus, true) => "DevStatusReq",
            (Cid::DevStatus, false) => "DevStatusAns",
            (Cid::NewChannel, true) => "NewChannelReq",
            (Cid::NewChannel, false) => "NewChannelAns",
            (Cid::RxTimingSetup, true) => "RXTimingSetupReq",
            (Cid::RxTimingSetup, false) => "RXTimingSetupAns",
            (Cid::TxParamSetup, true) => "TxParamSetupReq",
            (Cid::TxParamSetup, false) => "TxParamSetupAns",
            (Cid::DlChannel, true) => "DlChannelReq",
            (Cid::DlChannel, false) => "DlChannelAns",
            (Cid::DeviceTime, true) => "DeviceTimeReq",
            (Cid::DeviceTime, false) => "DeviceTimeAns",
            (Cid::Unknown, _) => "Unknown",
        }
    }
}

/// An [`Iterator`] over [`MacCommand`].
///
/// Iteration stops at the first unknown or truncated command, since the
/// length of anything that follows cannot be known.
#[derive(Debug)]
pub struct MacCommandsIterator<'f> {
    data: &'f [u8],
    direction: Direction,
    offset: usize,
    terminated: bool,
}

impl<'f> MacCommandsIterator<'f> {
    pub(crate) fn new(data: &'f [u8], direction: Direction) -> Self {
        Self {
            data,
            direction,
            offset: 0,
            terminated: data.is_empty(),
        }
    }

    /// Returns the offset of the next MAC command.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the octets that could not be parsed as MAC commands.
    pub fn remaining(&self) -> &'f [u8] {
        &self.data[self.offset..]
    }
}

impl<'f> Iterator for MacCommandsIterator<'f> {
    type Item = MacCommand<&'f [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.terminated {
            return None;
        }

        let Ok(cmd) = MacCommand::new(&self.data[self.offset..], self.direction) else {
            self.terminated = true;
            return None;
        };

        self.offset += cmd.len();

        if self.offset >= self.data.len() {
            self.terminated = true;
        }

        Some(cmd)
    }
}
