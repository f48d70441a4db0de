// src/common/crc.rs

use super::error::Vcnl4040Error;
use crc::{Crc, CRC_16_ARC};

/// Number of checksum bytes trailing an encoded record.
pub const CRC_LEN: usize = 2;

// CRC-16/ARC: poly 0x8005 reflected, init 0, check 0xBB3D.
const CRC_COMPUTER: Crc<u16> = Crc::<u16>::new(&CRC_16_ARC);

/// Calculates the CRC-16/ARC of `data`.
#[inline]
pub fn calculate_crc16(data: &[u8]) -> u16 {
    CRC_COMPUTER.checksum(data)
}

/// Computes the trailer for `data`, LSB first.
pub fn encode_crc(data: &[u8]) -> [u8; CRC_LEN] {
    calculate_crc16(data).to_le_bytes()
}

/// Verifies a buffer whose last two bytes are its CRC (LSB first).
///
/// Returns the payload without the trailer.
///
/// # Errors
///
/// * `BufferTooSmall` if there is no room for a trailer.
/// * `CrcMismatch` if the stored and computed values differ.
pub fn verify_crc<E>(buffer_with_crc: &[u8]) -> Result<&[u8], Vcnl4040Error<E>>
where
    E: core::fmt::Debug,
{
    if buffer_with_crc.len() < CRC_LEN {
        return Err(Vcnl4040Error::BufferTooSmall {
            needed: CRC_LEN,
            got: buffer_with_crc.len(),
        });
    }
    let (data, trailer) = buffer_with_crc.split_at(buffer_with_crc.len() - CRC_LEN);

    let expected = u16::from_le_bytes([trailer[0], trailer[1]]);
    let calculated = calculate_crc16(data);

    if expected == calculated {
        Ok(data)
    } else {
        Err(Vcnl4040Error::CrcMismatch { expected, calculated })
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_value() {
        assert_eq!(calculate_crc16(b"123456789"), 0xBB3D);
        assert_eq!(calculate_crc16(b""), 0x0000);
    }

    #[test]
    fn test_verify_accepts_own_trailer() {
        let mut buf = [0u8; 11];
        buf[..9].copy_from_slice(b"123456789");
        let trailer = encode_crc(&buf[..9]);
        assert_eq!(trailer, [0x3D, 0xBB]);
        buf[9..].copy_from_slice(&trailer);

        let data = verify_crc::<()>(&buf).unwrap();
        assert_eq!(data, b"123456789");
    }

    #[test]
    fn test_verify_rejects_corruption() {
        let calculated = calculate_crc16(b"12");
        let [lo, hi] = (!calculated).to_le_bytes();
        let buf = [b'1', b'2', lo, hi];
        assert_eq!(
            verify_crc::<()>(&buf),
            Err(Vcnl4040Error::CrcMismatch { expected: !calculated, calculated })
        );
    }

    #[test]
    fn test_verify_too_short() {
        assert_eq!(
            verify_crc::<()>(&[0x01]),
            Err(Vcnl4040Error::BufferTooSmall { needed: 2, got: 1 })
        );
    }
}
