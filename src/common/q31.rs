// src/common/q31.rs

/// Shift applied to proximity readings.
pub const PROX_SHIFT: i8 = 16;
/// Shift applied to ambient light readings.
pub const LIGHT_SHIFT: i8 = 16;

/// Converts a raw 16-bit count to Q31 at the given shift.
///
/// The count is left-aligned so that `result * 2^(shift - 31)` equals
/// `raw`. Results above `i32::MAX` saturate.
///
/// At [`PROX_SHIFT`]/[`LIGHT_SHIFT`] the largest count (`0xFFFF`) maps to
/// `0x7FFF_8000`, just under the clamp.
#[inline]
pub fn raw_to_q31(raw: u16, shift: i8) -> i32 {
    scale_to_q31(u32::from(raw), shift)
}

/// [`raw_to_q31`] over a wider raw domain.
pub fn scale_to_q31(raw: u32, shift: i8) -> i32 {
    let left = 31 - i32::from(shift);
    let scaled: u64 = if left < 0 {
        u64::from(raw) >> left.unsigned_abs().min(63)
    } else if left <= 32 {
        // raw < 2^32, so shifting by up to 32 still fits in 64 bits
        u64::from(raw) << left
    } else if raw == 0 {
        0
    } else {
        u64::MAX
    };
    scaled.min(i32::MAX as u64) as i32
}

/// Common header of decoded output.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct DecodedHeader {
    /// Capture time of the first reading.
    pub base_timestamp_ns: u64,
    /// Number of readings that follow.
    pub reading_count: u16,
}

/// One Q31 reading.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Q31SampleData {
    /// Offset from `base_timestamp_ns`. Always 0 here, there is one reading.
    pub timestamp_delta: u32,
    pub value: i32,
}

/// Decoded output for a single channel.
///
/// This device never yields more than one frame, so storage for exactly
/// one reading is enough.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Q31Data {
    pub header: DecodedHeader,
    pub shift: i8,
    pub readings: [Q31SampleData; 1],
}

impl Q31Data {
    /// The reading, if the header says one is present.
    pub fn reading(&self) -> Option<i32> {
        (self.header.reading_count > 0).then_some(self.readings[0].value)
    }
}
