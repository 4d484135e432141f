//! MAC header readers.

/// A reader for the LoRaWAN MAC header (MHDR).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mhdr {
    buffer: u8,
}

impl Mhdr {
    /// Create a new [`Mhdr`] reader from the first octet of a PHYPayload.
    pub fn from(buffer: u8) -> Self {
        Self { buffer }
    }

    /// Return the raw MHDR octet.
    pub fn raw(&self) -> u8 {
        self.buffer
    }

    /// Return the message type field.
    pub fn mtype(&self) -> MType {
        MType::from(self.buffer >> 5)
    }

    /// Return the major version field.
    pub fn major(&self) -> Major {
        Major::from(self.buffer & 0b11)
    }

    /// Return the RFU bits.
    pub fn rfu(&self) -> u8 {
        (self.buffer >> 2) & 0b111
    }

    /// Return the direction of the message, if the message type defines one.
    pub fn direction(&self) -> Option<Direction> {
        self.mtype().direction()
    }
}

/// LoRaWAN message type.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum MType {
    /// Join request, sent by an end-device to start OTAA.
    JoinRequest = 0b000,
    /// Join accept, the network's answer to a join request.
    JoinAccept = 0b001,
    /// Uplink data that does not require an acknowledgment.
    UnconfirmedDataUp = 0b010,
    /// Downlink data that does not require an acknowledgment.
    UnconfirmedDataDown = 0b011,
    /// Uplink data that must be acknowledged.
    ConfirmedDataUp = 0b100,
    /// Downlink data that must be acknowledged.
    ConfirmedDataDown = 0b101,
    /// Rejoin request (LoRaWAN 1.1), RFU in 1.0.
    RejoinRequest = 0b110,
    /// Non-standard message.
    Proprietary = 0b111,
}

impl MType {
    /// Return the direction implied by the message type.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::JoinRequest
            | Self::UnconfirmedDataUp
            | Self::ConfirmedDataUp
            | Self::RejoinRequest => Some(Direction::Uplink),
            Self::JoinAccept | Self::UnconfirmedDataDown | Self::ConfirmedDataDown => {
                Some(Direction::Downlink)
            }
            Self::Proprietary => None,
        }
    }

    /// Returns `true` for data messages, confirmed or not.
    pub fn is_data(&self) -> bool {
        matches!(
            self,
            Self::UnconfirmedDataUp
                | Self::UnconfirmedDataDown
                | Self::ConfirmedDataUp
                | Self::ConfirmedDataDown
        )
    }

    /// Returns `true` for confirmed data messages.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::ConfirmedDataUp | Self::ConfirmedDataDown)
    }
}

impl From<u8> for MType {
    fn from(value: u8) -> Self {
        match value & 0b111 {
            0b000 => Self::JoinRequest,
            0b001 => Self::JoinAccept,
            0b010 => Self::UnconfirmedDataUp,
            0b011 => Self::UnconfirmedDataDown,
            0b100 => Self::ConfirmedDataUp,
            0b101 => Self::ConfirmedDataDown,
            0b110 => Self::RejoinRequest,
            _ => Self::Proprietary,
        }
    }
}

impl core::fmt::Display for MType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::JoinRequest => write!(f, "Join Request"),
            Self::JoinAccept => write!(f, "Join Accept"),
            Self::UnconfirmedDataUp => write!(f, "Unconfirmed Data Up"),
            Self::UnconfirmedDataDown => write!(f, "Unconfirmed Data Down"),
            Self::ConfirmedDataUp => write!(f, "Confirmed Data Up"),
            Self::ConfirmedDataDown => write!(f, "Confirmed Data Down"),
            Self::RejoinRequest => write!(f, "Rejoin Request"),
            Self::Proprietary => write!(f, "Proprietary"),
        }
    }
}

/// LoRaWAN major version.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum Major {
    /// LoRaWAN R1.
    LoRaWanR1 = 0b00,
    /// RFU.
    Unknown,
}

impl From<u8> for Major {
    fn from(value: u8) -> Self {
        match value {
            0b00 => Self::LoRaWanR1,
            _ => Self::Unknown,
        }
    }
}

/// Direction of a message.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum Direction {
    /// From the end-device to the network.
    Uplink,
    /// From the network to the end-device.
    Downlink,
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Uplink => write!(f, "up"),
            Self::Downlink => write!(f, "down"),
        }
    }
}
