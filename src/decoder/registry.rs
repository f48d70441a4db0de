// src/decoder/registry.rs

use super::SensorDecoder;
use crate::common::error::Vcnl4040Error;
use arrayvec::ArrayVec;

/// Fixed-capacity table of decoders, looked up by device name.
///
/// Lets a consumer that only knows a device instance by name find the
/// decoder for the records that instance produces.
pub struct DecoderRegistry<'a, const N: usize> {
    entries: ArrayVec<(&'a str, &'a dyn SensorDecoder), N>,
}

impl<'a, const N: usize> DecoderRegistry<'a, N> {
    pub fn new() -> Self {
        DecoderRegistry { entries: ArrayVec::new() }
    }

    /// Registers `decoder` for the device called `name`.
    ///
    /// # Errors
    ///
    /// * `DuplicateDevice` if `name` is already registered.
    /// * `RegistryFull` if all `N` slots are taken.
    pub fn register(
        &mut self,
        name: &'a str,
        decoder: &'a dyn SensorDecoder,
    ) -> Result<(), Vcnl4040Error> {
        if self.get(name).is_some() {
            return Err(Vcnl4040Error::DuplicateDevice);
        }
        self.entries
            .try_push((name, decoder))
            .map_err(|_| Vcnl4040Error::RegistryFull)?;
        log::debug!("registered decoder for {}", name);
        Ok(())
    }

    /// Decoder registered for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&'a dyn SensorDecoder> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, decoder)| *decoder)
    }

    /// Names of all registered devices, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<const N: usize> Default for DecoderRegistry<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{
        channel::{Capabilities, ChannelSpec},
        record::EncodedRecord,
    };
    use crate::decoder::Vcnl4040Decoder;

    #[test]
    fn test_register_and_lookup() {
        let front = Vcnl4040Decoder::new(Capabilities::PROXIMITY_ONLY);
        let rear = Vcnl4040Decoder::new(Capabilities::compiled());

        let mut registry: DecoderRegistry<'_, 4> = DecoderRegistry::new();
        assert!(registry.is_empty());
        registry.register("vcnl4040@60", &front).unwrap();
        registry.register("vcnl4040@61", &rear).unwrap();
        assert_eq!(registry.len(), 2);

        let mut names = registry.names();
        assert_eq!(names.next(), Some("vcnl4040@60"));
        assert_eq!(names.next(), Some("vcnl4040@61"));
        assert_eq!(names.next(), None);

        let record = EncodedRecord {
            timestamp_ns: 1,
            has_proximity: true,
            ..Default::default()
        }
        .to_bytes();
        let decoder = registry.get("vcnl4040@60").unwrap();
        assert_eq!(decoder.frame_count(&record, ChannelSpec::PROXIMITY), Ok(1));
        // Per-instance capabilities are kept
        assert_eq!(
            decoder.frame_count(&record, ChannelSpec::LIGHT),
            Err(Vcnl4040Error::UnsupportedChannel)
        );

        assert!(registry.get("vcnl4040@62").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let decoder = Vcnl4040Decoder::default();
        let mut registry: DecoderRegistry<'_, 2> = DecoderRegistry::default();
        registry.register("prox", &decoder).unwrap();
        assert_eq!(registry.register("prox", &decoder), Err(Vcnl4040Error::DuplicateDevice));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_full_registry() {
        let decoder = Vcnl4040Decoder::default();
        let mut registry: DecoderRegistry<'_, 1> = DecoderRegistry::new();
        registry.register("a", &decoder).unwrap();
        assert_eq!(registry.register("b", &decoder), Err(Vcnl4040Error::RegistryFull));
    }
}
