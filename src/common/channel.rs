// src/common/channel.rs

/// Sensor channel types a consumer may ask for.
///
/// Only `Proximity`, `Light` and `All` mean anything to this device. The
/// remaining variants exist so requests coming from a generic sensor
/// consumer can be represented and rejected.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SensorChannel {
    /// Proximity count (PS_DATA).
    Proximity,
    /// Ambient light count (ALS_DATA).
    Light,
    /// White channel count. Not exposed by this driver.
    White,
    /// Infrared. Not provided by this device.
    Ir,
    /// Die temperature. Not provided by this device.
    DieTemp,
    /// Every channel the device supports.
    All,
}

/// A channel type plus an instance index.
///
/// The VCNL4040 has a single instance per channel type, so only index 0 is
/// ever valid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ChannelSpec {
    pub chan_type: SensorChannel,
    pub chan_idx: u16,
}

impl ChannelSpec {
    pub const PROXIMITY: ChannelSpec = ChannelSpec::new(SensorChannel::Proximity);
    pub const LIGHT: ChannelSpec = ChannelSpec::new(SensorChannel::Light);
    pub const ALL: ChannelSpec = ChannelSpec::new(SensorChannel::All);

    /// Channel spec for instance 0 of `chan_type`.
    #[inline]
    pub const fn new(chan_type: SensorChannel) -> Self {
        Self { chan_type, chan_idx: 0 }
    }

    #[inline]
    pub const fn with_index(chan_type: SensorChannel, chan_idx: u16) -> Self {
        Self { chan_type, chan_idx }
    }
}

impl From<SensorChannel> for ChannelSpec {
    fn from(value: SensorChannel) -> Self {
        ChannelSpec::new(value)
    }
}

/// What a single sample fetch should read from the device.
///
/// Unlike [`SensorChannel`] this can only name something the part can
/// actually measure.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FetchSelector {
    Proximity,
    Light,
    All,
}

impl FetchSelector {
    /// Picks the narrowest fetch covering both presence flags.
    ///
    /// Proximity is the fallback: it is always fetchable, even if nothing
    /// was requested.
    pub const fn for_flags(has_proximity: bool, has_light: bool) -> Self {
        match (has_proximity, has_light) {
            (true, true) => FetchSelector::All,
            (false, true) => FetchSelector::Light,
            _ => FetchSelector::Proximity,
        }
    }

    #[inline]
    pub const fn includes_proximity(&self) -> bool {
        matches!(self, FetchSelector::Proximity | FetchSelector::All)
    }

    #[inline]
    pub const fn includes_light(&self) -> bool {
        matches!(self, FetchSelector::Light | FetchSelector::All)
    }
}

/// Channel support fixed once at device init.
///
/// Light support needs the `als` feature at build time. Asking for it in a
/// build without the feature silently yields a proximity-only device.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Capabilities {
    light: bool,
}

impl Capabilities {
    /// Proximity only.
    pub const PROXIMITY_ONLY: Capabilities = Capabilities { light: false };

    /// Everything this build was compiled with.
    pub const fn compiled() -> Self {
        Self { light: cfg!(feature = "als") }
    }

    /// Requests light support, clamped to what the build provides.
    pub const fn with_light(light: bool) -> Self {
        Self { light: light && cfg!(feature = "als") }
    }

    #[inline]
    pub const fn light(&self) -> bool {
        self.light
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::compiled()
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_selector_for_flags() {
        assert_eq!(FetchSelector::for_flags(true, true), FetchSelector::All);
        assert_eq!(FetchSelector::for_flags(false, true), FetchSelector::Light);
        assert_eq!(FetchSelector::for_flags(true, false), FetchSelector::Proximity);
        // Nothing requested still fetches proximity
        assert_eq!(FetchSelector::for_flags(false, false), FetchSelector::Proximity);
    }

    #[test]
    fn test_fetch_selector_coverage() {
        assert!(FetchSelector::All.includes_proximity());
        assert!(FetchSelector::All.includes_light());
        assert!(FetchSelector::Proximity.includes_proximity());
        assert!(!FetchSelector::Proximity.includes_light());
        assert!(!FetchSelector::Light.includes_proximity());
        assert!(FetchSelector::Light.includes_light());
    }

    #[test]
    fn test_channel_spec_constructors() {
        assert_eq!(ChannelSpec::PROXIMITY.chan_idx, 0);
        assert_eq!(ChannelSpec::from(SensorChannel::Light), ChannelSpec::LIGHT);
        let spec = ChannelSpec::with_index(SensorChannel::Proximity, 1);
        assert_eq!(spec.chan_idx, 1);
        assert_ne!(spec, ChannelSpec::PROXIMITY);
    }

    #[test]
    fn test_capabilities_clamped_to_build() {
        assert!(!Capabilities::PROXIMITY_ONLY.light());
        assert!(!Capabilities::with_light(false).light());
        assert_eq!(Capabilities::with_light(true).light(), cfg!(feature = "als"));
        assert_eq!(Capabilities::default(), Capabilities::compiled());
    }
}
