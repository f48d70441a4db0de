// src/common/error.rs

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Vcnl4040Error<E = ()>
where
    E: core::fmt::Debug, // Debug is enough for the generic fetch/bus error
{
    /// Caller supplied buffer cannot hold an encoded record.
    #[error("Buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },

    /// The underlying sample fetch failed; no record was produced.
    #[error("Sample fetch failed: {0:?}")]
    Fetch(E),

    /// Channel type or index this device never provides.
    #[error("Unsupported channel")]
    UnsupportedChannel,

    /// Valid channel, but the record did not capture it.
    #[error("No data for channel in this record")]
    NoData,

    /// Decode asked for a channel this decoder cannot produce.
    #[error("Invalid channel for decode")]
    InvalidChannel,

    /// Record was written with a layout version this build does not read.
    #[error("Unsupported record version: {0}")]
    UnsupportedVersion(u8),

    /// Reserved presence flag bits were set.
    #[error("Invalid record flags: {0:#04x}")]
    InvalidFlags(u8),

    /// Stored record checksum does not match its contents.
    #[error("CRC mismatch: expected {expected:#06x}, calculated {calculated:#06x}")]
    CrcMismatch { expected: u16, calculated: u16 },

    /// Decoder registry has no free slot left.
    #[error("Decoder registry full")]
    RegistryFull,

    /// A decoder is already registered under this device name.
    #[error("Device already registered")]
    DuplicateDevice,

    /// Bus error from the HAL implementation.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// ID register did not hold the VCNL4040 device id.
    #[error("Unexpected device id: {0:#06x}")]
    InvalidDevice(u16),
}

// Note: the Fetch(E)/Io(E) messages use {:?}, so in no_std `E` only needs
// `core::fmt::Debug`.
