//! Device and network identifiers.
//!
//! All identifiers are transmitted least significant octet first. They are
//! stored in wire order and displayed most significant octet first, the way
//! they are printed on devices and in network server consoles.

/// A 32-bit device address.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct DevAddr([u8; 4]);

impl DevAddr {
    /// Create a [`DevAddr`] from octets in wire order.
    pub const fn from_wire(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Return the octets in wire order.
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Return the address as an integer.
    pub const fn as_u32(&self) -> u32 {
        u32::from_le_bytes(self.0)
    }

    /// Return the 7-bit network identifier (NwkID) part of the address.
    pub const fn nwk_id(&self) -> u8 {
        self.0[3] >> 1
    }
}

impl core::fmt::Display for DevAddr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:08x}", self.as_u32())
    }
}

/// A 64-bit extended unique identifier (AppEUI, JoinEUI or DevEUI).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Eui64([u8; 8]);

impl Eui64 {
    /// Create an [`Eui64`] from octets in wire order.
    pub const fn from_wire(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Return the octets in wire order.
    pub const fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Return the EUI as an integer.
    pub const fn as_u64(&self) -> u64 {
        u64::from_le_bytes(self.0)
    }
}

impl core::fmt::Display for Eui64 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:016x}", self.as_u64())
    }
}

/// A 24-bit network identifier.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct NetId([u8; 3]);

impl NetId {
    /// Create a [`NetId`] from octets in wire order.
    pub const fn from_wire(bytes: [u8; 3]) -> Self {
        Self(bytes)
    }

    /// Return the network identifier as an integer.
    pub const fn as_u32(&self) -> u32 {
        u32::from_le_bytes([self.0[0], self.0[1], self.0[2], 0])
    }
}

impl core::fmt::Display for NetId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:06x}", self.as_u32())
    }
}
