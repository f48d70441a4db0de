// src/encoder/mod.rs

use crate::common::{
    channel::{Capabilities, ChannelSpec, FetchSelector, SensorChannel},
    error::Vcnl4040Error,
    hal_traits::{MonotonicClock, SampleFetch},
    record::{EncodedRecord, ENCODED_LEN},
};
use crate::decoder::Vcnl4040Decoder;

#[cfg(feature = "async")]
use crate::common::hal_traits::SampleFetchAsync;

/// Submit side of the read protocol.
///
/// Each [`encode`](Self::encode) call fetches fresh readings and writes one
/// [`EncodedRecord`] into a caller supplied buffer. The encoder keeps no
/// state between calls besides its collaborators and the capabilities
/// fixed at construction.
#[derive(Debug)]
pub struct Vcnl4040Encoder<S, C> {
    source: S,
    clock: C,
    caps: Capabilities,
}

impl<S, C> Vcnl4040Encoder<S, C> {
    /// Creates an encoder with every capability this build was compiled with.
    pub fn new(source: S, clock: C) -> Self {
        Self::with_capabilities(source, clock, Capabilities::compiled())
    }

    pub fn with_capabilities(source: S, clock: C, caps: Capabilities) -> Self {
        Vcnl4040Encoder { source, clock, caps }
    }

    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    /// Decoder for records produced by this device instance.
    pub fn decoder(&self) -> Vcnl4040Decoder {
        Vcnl4040Decoder::new(self.caps)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Gives back the fetch source and clock.
    pub fn release(self) -> (S, C) {
        (self.source, self.clock)
    }

    /// Presence flags for a request. Channels other than proximity, light
    /// and all are skipped.
    fn request_flags(&self, requested: &[ChannelSpec]) -> (bool, bool) {
        let mut has_proximity = false;
        let mut has_light = false;

        for spec in requested {
            match spec.chan_type {
                SensorChannel::Proximity => has_proximity = true,
                SensorChannel::Light => has_light |= self.caps.light(),
                SensorChannel::All => {
                    has_proximity = true;
                    has_light |= self.caps.light();
                }
                _ => continue,
            }
        }

        (has_proximity, has_light)
    }

    fn check_buffer<E: core::fmt::Debug>(buf: &[u8]) -> Result<(), Vcnl4040Error<E>> {
        if buf.len() < ENCODED_LEN {
            log::error!("Failed to get a read buffer of size {} bytes", ENCODED_LEN);
            return Err(Vcnl4040Error::BufferTooSmall {
                needed: ENCODED_LEN,
                got: buf.len(),
            });
        }
        Ok(())
    }

    fn finish<E: core::fmt::Debug>(
        record: EncodedRecord,
        buf: &mut [u8],
    ) -> Result<EncodedRecord, Vcnl4040Error<E>> {
        record.write_to::<E>(buf)?;
        log::trace!(
            "encoded record ts={} prox={:?} light={:?}",
            record.timestamp_ns,
            record.proximity(),
            record.light()
        );
        Ok(record)
    }
}

impl<S, C> Vcnl4040Encoder<S, C>
where
    S: SampleFetch,
    C: MonotonicClock,
{
    /// Fetches the requested channels and writes an encoded record to `buf`.
    ///
    /// The timestamp is taken before the fetch, so it reflects submission
    /// time. A fetch in progress (`WouldBlock`) is waited out.
    ///
    /// # Errors
    ///
    /// * `BufferTooSmall` if `buf` cannot hold [`ENCODED_LEN`] bytes. No
    ///   fetch is attempted.
    /// * `Fetch` if the sample fetch fails. `buf` is left untouched.
    pub fn encode(
        &mut self,
        requested: &[ChannelSpec],
        buf: &mut [u8],
    ) -> Result<EncodedRecord, Vcnl4040Error<S::Error>> {
        Self::check_buffer::<S::Error>(buf)?;

        let timestamp_ns = self.clock.now_ns();
        let (has_proximity, has_light) = self.request_flags(requested);
        let selector = FetchSelector::for_flags(has_proximity, has_light);

        nb::block!(self.source.sample_fetch(selector)).map_err(|e| {
            log::error!("Failed to fetch samples: {:?}", e);
            Vcnl4040Error::Fetch(e)
        })?;

        let record = EncodedRecord {
            timestamp_ns,
            has_proximity,
            has_light,
            proximity_raw: if has_proximity { self.source.proximity() } else { 0 },
            light_raw: if has_light { self.source.light() } else { 0 },
        };

        Self::finish(record, buf)
    }
}

#[cfg(feature = "async")]
impl<S, C> Vcnl4040Encoder<S, C>
where
    S: SampleFetchAsync,
    C: MonotonicClock,
{
    /// Async version of [`encode`](Self::encode) with the same contract.
    pub async fn encode_async(
        &mut self,
        requested: &[ChannelSpec],
        buf: &mut [u8],
    ) -> Result<EncodedRecord, Vcnl4040Error<S::Error>> {
        Self::check_buffer::<S::Error>(buf)?;

        let timestamp_ns = self.clock.now_ns();
        let (has_proximity, has_light) = self.request_flags(requested);
        let selector = FetchSelector::for_flags(has_proximity, has_light);

        self.source.sample_fetch(selector).await.map_err(|e| {
            log::error!("Failed to fetch samples: {:?}", e);
            Vcnl4040Error::Fetch(e)
        })?;

        let record = EncodedRecord {
            timestamp_ns,
            has_proximity,
            has_light,
            proximity_raw: if has_proximity { self.source.proximity() } else { 0 },
            light_raw: if has_light { self.source.light() } else { 0 },
        };

        Self::finish(record, buf)
    }
}
