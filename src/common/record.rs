// src/common/record.rs

use super::crc::{encode_crc, verify_crc, CRC_LEN};
use super::error::Vcnl4040Error;

/// Layout version written into byte 0 of every record.
pub const RECORD_VERSION: u8 = 1;

// Byte offsets of the version 1 layout. Field order follows the struct.
const VERSION_OFFSET: usize = 0;
const TIMESTAMP_OFFSET: usize = 1;
const FLAGS_OFFSET: usize = 9;
const PROXIMITY_OFFSET: usize = 10;
const LIGHT_OFFSET: usize = 12;
const BODY_LEN: usize = 14;

/// Size in bytes of an encoded record, checksum included.
pub const ENCODED_LEN: usize = BODY_LEN + CRC_LEN;

const FLAG_PROXIMITY: u8 = 1 << 0;
const FLAG_LIGHT: u8 = 1 << 1;
const FLAGS_RESERVED: u8 = !(FLAG_PROXIMITY | FLAG_LIGHT);

/// Snapshot of one read cycle, as handed from encoder to decoder.
///
/// Raw fields whose presence flag is clear are not meaningful. The
/// accessors [`proximity`](Self::proximity) and [`light`](Self::light)
/// enforce that.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct EncodedRecord {
    pub timestamp_ns: u64,
    pub has_proximity: bool,
    pub has_light: bool,
    pub proximity_raw: u16,
    pub light_raw: u16,
}

impl EncodedRecord {
    /// Raw proximity count, if this record captured it.
    #[inline]
    pub fn proximity(&self) -> Option<u16> {
        self.has_proximity.then_some(self.proximity_raw)
    }

    /// Raw ambient light count, if this record captured it.
    #[inline]
    pub fn light(&self) -> Option<u16> {
        self.has_light.then_some(self.light_raw)
    }

    /// Serializes into the first [`ENCODED_LEN`] bytes of `buf`.
    ///
    /// Raw fields whose flag is clear are written as zero.
    ///
    /// # Errors
    ///
    /// `BufferTooSmall` if `buf` is shorter than [`ENCODED_LEN`]. Nothing is
    /// written in that case.
    pub fn write_to<E: core::fmt::Debug>(&self, buf: &mut [u8]) -> Result<usize, Vcnl4040Error<E>> {
        if buf.len() < ENCODED_LEN {
            return Err(Vcnl4040Error::BufferTooSmall {
                needed: ENCODED_LEN,
                got: buf.len(),
            });
        }

        let mut flags = 0u8;
        if self.has_proximity {
            flags |= FLAG_PROXIMITY;
        }
        if self.has_light {
            flags |= FLAG_LIGHT;
        }

        buf[VERSION_OFFSET] = RECORD_VERSION;
        buf[TIMESTAMP_OFFSET..FLAGS_OFFSET].copy_from_slice(&self.timestamp_ns.to_le_bytes());
        buf[FLAGS_OFFSET] = flags;
        buf[PROXIMITY_OFFSET..LIGHT_OFFSET]
            .copy_from_slice(&self.proximity().unwrap_or(0).to_le_bytes());
        buf[LIGHT_OFFSET..BODY_LEN].copy_from_slice(&self.light().unwrap_or(0).to_le_bytes());

        let trailer = encode_crc(&buf[..BODY_LEN]);
        buf[BODY_LEN..ENCODED_LEN].copy_from_slice(&trailer);

        Ok(ENCODED_LEN)
    }

    /// Serializes into a fresh array.
    pub fn to_bytes(&self) -> [u8; ENCODED_LEN] {
        let mut buf = [0u8; ENCODED_LEN];
        // Cannot fail, the array is exactly ENCODED_LEN long
        let _ = self.write_to::<()>(&mut buf);
        buf
    }

    /// Parses and validates a record from the start of `buf`.
    ///
    /// Trailing bytes past [`ENCODED_LEN`] are ignored so callers can hand
    /// over a larger pool buffer as-is.
    ///
    /// # Errors
    ///
    /// * `BufferTooSmall` if `buf` is shorter than [`ENCODED_LEN`].
    /// * `UnsupportedVersion` if byte 0 is not [`RECORD_VERSION`].
    /// * `CrcMismatch` if the checksum does not cover the contents.
    /// * `InvalidFlags` if reserved flag bits are set.
    pub fn from_bytes(buf: &[u8]) -> Result<Self, Vcnl4040Error> {
        if buf.len() < ENCODED_LEN {
            return Err(Vcnl4040Error::BufferTooSmall {
                needed: ENCODED_LEN,
                got: buf.len(),
            });
        }
        if buf[VERSION_OFFSET] != RECORD_VERSION {
            return Err(Vcnl4040Error::UnsupportedVersion(buf[VERSION_OFFSET]));
        }

        let body = verify_crc::<()>(&buf[..ENCODED_LEN])?;

        let flags = body[FLAGS_OFFSET];
        if flags & FLAGS_RESERVED != 0 {
            return Err(Vcnl4040Error::InvalidFlags(flags));
        }

        let mut timestamp = [0u8; 8];
        timestamp.copy_from_slice(&body[TIMESTAMP_OFFSET..FLAGS_OFFSET]);
        let read_u16 = |at: usize| u16::from_le_bytes([body[at], body[at + 1]]);

        let has_proximity = flags & FLAG_PROXIMITY != 0;
        let has_light = flags & FLAG_LIGHT != 0;

        Ok(EncodedRecord {
            timestamp_ns: u64::from_le_bytes(timestamp),
            has_proximity,
            has_light,
            proximity_raw: if has_proximity { read_u16(PROXIMITY_OFFSET) } else { 0 },
            light_raw: if has_light { read_u16(LIGHT_OFFSET) } else { 0 },
        })
    }
}

impl TryFrom<&[u8]> for EncodedRecord {
    type Error = Vcnl4040Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(value)
    }
}
