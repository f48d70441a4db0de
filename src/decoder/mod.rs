// src/decoder/mod.rs

pub mod registry;

pub use registry::DecoderRegistry;

use crate::common::{
    channel::{Capabilities, ChannelSpec, SensorChannel},
    error::Vcnl4040Error,
    q31::{raw_to_q31, Q31Data, Q31SampleData, LIGHT_SHIFT, PROX_SHIFT},
    record::EncodedRecord,
};
use core::mem::size_of;

/// Position of a decode iteration.
///
/// The device has no FIFO, so there is at most one frame per record and
/// the iteration is a two-state machine.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum FrameCursor {
    /// Nothing decoded yet.
    #[default]
    Ready,
    /// The single frame has been handed out.
    Exhausted,
}

impl FrameCursor {
    pub const fn new() -> Self {
        FrameCursor::Ready
    }

    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, FrameCursor::Exhausted)
    }
}

/// Byte sizes a consumer needs to pre-allocate decode output.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SizeInfo {
    /// Header plus the first reading.
    pub base_size: usize,
    /// Each additional reading.
    pub frame_size: usize,
}

/// The three entry points a sensor exposes to decode its encoded records.
pub trait SensorDecoder {
    /// Number of frames available for `spec` in `buffer` (0 or 1 here).
    fn frame_count(&self, buffer: &[u8], spec: ChannelSpec) -> Result<u16, Vcnl4040Error>;

    /// Output sizes for `spec`.
    fn size_info(&self, spec: ChannelSpec) -> Result<SizeInfo, Vcnl4040Error>;

    /// Decodes up to `max_count` frames for `spec` into `out`, advancing
    /// `cursor`. Returns the number of frames written.
    fn decode(
        &self,
        buffer: &[u8],
        spec: ChannelSpec,
        cursor: &mut FrameCursor,
        max_count: u16,
        out: &mut Q31Data,
    ) -> Result<u16, Vcnl4040Error>;
}

/// Decoder for VCNL4040 encoded records.
///
/// Which channels it accepts is fixed by the [`Capabilities`] it was built
/// with, normally those of the encoding device (see
/// [`Vcnl4040Encoder::decoder`](crate::Vcnl4040Encoder::decoder)).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Vcnl4040Decoder {
    caps: Capabilities,
}

impl Vcnl4040Decoder {
    pub const fn new(caps: Capabilities) -> Self {
        Self { caps }
    }

    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    fn supports(&self, chan: SensorChannel) -> bool {
        match chan {
            SensorChannel::Proximity => true,
            SensorChannel::Light => self.caps.light(),
            _ => false,
        }
    }

    /// [`SensorDecoder::frame_count`] on an already parsed record.
    ///
    /// A valid channel that the record did not capture is a count of 0,
    /// not an error.
    pub fn frame_count_record(
        &self,
        record: &EncodedRecord,
        spec: ChannelSpec,
    ) -> Result<u16, Vcnl4040Error> {
        if spec.chan_idx != 0 || !self.supports(spec.chan_type) {
            return Err(Vcnl4040Error::UnsupportedChannel);
        }

        let present = match spec.chan_type {
            SensorChannel::Proximity => record.has_proximity,
            _ => record.has_light,
        };
        Ok(u16::from(present))
    }

    /// [`SensorDecoder::decode`] on an already parsed record.
    pub fn decode_record(
        &self,
        record: &EncodedRecord,
        spec: ChannelSpec,
        cursor: &mut FrameCursor,
        max_count: u16,
        out: &mut Q31Data,
    ) -> Result<u16, Vcnl4040Error> {
        if cursor.is_exhausted() || max_count == 0 {
            return Ok(0);
        }

        out.header.base_timestamp_ns = record.timestamp_ns;
        out.header.reading_count = 1;

        let (raw, shift) = match spec.chan_type {
            SensorChannel::Proximity => (record.proximity(), PROX_SHIFT),
            SensorChannel::Light if self.caps.light() => (record.light(), LIGHT_SHIFT),
            _ => return Err(Vcnl4040Error::InvalidChannel),
        };
        let raw = raw.ok_or(Vcnl4040Error::NoData)?;

        out.readings[0] = Q31SampleData {
            timestamp_delta: 0,
            value: raw_to_q31(raw, shift),
        };
        out.shift = shift;

        *cursor = FrameCursor::Exhausted;
        Ok(1)
    }
}

impl SensorDecoder for Vcnl4040Decoder {
    fn frame_count(&self, buffer: &[u8], spec: ChannelSpec) -> Result<u16, Vcnl4040Error> {
        // Reject the channel before looking at the buffer
        if spec.chan_idx != 0 || !self.supports(spec.chan_type) {
            return Err(Vcnl4040Error::UnsupportedChannel);
        }
        let record = EncodedRecord::from_bytes(buffer)?;
        self.frame_count_record(&record, spec)
    }

    fn size_info(&self, spec: ChannelSpec) -> Result<SizeInfo, Vcnl4040Error> {
        if !self.supports(spec.chan_type) {
            return Err(Vcnl4040Error::UnsupportedChannel);
        }
        Ok(SizeInfo {
            base_size: size_of::<Q31Data>(),
            frame_size: size_of::<Q31SampleData>(),
        })
    }

    fn decode(
        &self,
        buffer: &[u8],
        spec: ChannelSpec,
        cursor: &mut FrameCursor,
        max_count: u16,
        out: &mut Q31Data,
    ) -> Result<u16, Vcnl4040Error> {
        if cursor.is_exhausted() {
            return Ok(0);
        }
        let record = EncodedRecord::from_bytes(buffer)?;
        self.decode_record(&record, spec, cursor, max_count, out)
    }
}
