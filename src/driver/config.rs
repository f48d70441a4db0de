// src/driver/config.rs

use super::registers::*;

/// IR LED drive current (PS_MS LED_I).
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LedCurrent {
    #[default]
    Ma50 = 0,
    Ma75 = 1,
    Ma100 = 2,
    Ma120 = 3,
    Ma140 = 4,
    Ma160 = 5,
    Ma180 = 6,
    Ma200 = 7,
}

/// IR LED on/off duty ratio (PS_CONF1 PS_Duty).
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LedDuty {
    #[default]
    OneOver40 = 0,
    OneOver80 = 1,
    OneOver160 = 2,
    OneOver320 = 3,
}

/// Proximity integration time in multiples of T (PS_CONF1 PS_IT).
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ProximityIt {
    #[default]
    T1 = 0,
    T1_5 = 1,
    T2 = 2,
    T2_5 = 3,
    T3 = 4,
    T3_5 = 5,
    T4 = 6,
    T8 = 7,
}

/// Ambient light integration time (ALS_CONF ALS_IT).
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum AlsIt {
    #[default]
    Ms80 = 0,
    Ms160 = 1,
    Ms320 = 2,
    Ms640 = 3,
}

impl AlsIt {
    /// Resolution in milli-lux per count at this integration time.
    pub const fn millilux_per_count(&self) -> u32 {
        match self {
            AlsIt::Ms80 => 120,
            AlsIt::Ms160 => 60,
            AlsIt::Ms320 => 30,
            AlsIt::Ms640 => 15,
        }
    }
}

/// Device configuration applied by [`Vcnl4040::init`](super::Vcnl4040::init).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Vcnl4040Config {
    /// 7-bit I2C address.
    pub address: u8,
    pub led_current: LedCurrent,
    pub led_duty: LedDuty,
    pub proximity_it: ProximityIt,
    /// 16-bit proximity output instead of 12-bit.
    pub proximity_high_resolution: bool,
    pub als_it: AlsIt,
    /// Enable the ambient light channel. Ignored in builds without `als`.
    pub light: bool,
}

impl Default for Vcnl4040Config {
    fn default() -> Self {
        Vcnl4040Config {
            address: DEFAULT_ADDRESS,
            led_current: LedCurrent::default(),
            led_duty: LedDuty::default(),
            proximity_it: ProximityIt::default(),
            proximity_high_resolution: true,
            als_it: AlsIt::default(),
            light: true,
        }
    }
}

impl Vcnl4040Config {
    /// PS_CONF1 (low) and PS_CONF2 (high), proximity powered on.
    pub fn ps_conf1_2(&self) -> u16 {
        let mut word =
            (self.led_duty as u16) << PS_DUTY_LOC | (self.proximity_it as u16) << PS_IT_LOC;
        if self.proximity_high_resolution {
            word |= PS_HD;
        }
        word
    }

    /// PS_CONF3 (low, all defaults) and PS_MS (high).
    pub fn ps_conf3_ms(&self) -> u16 {
        (self.led_current as u16) << LED_I_LOC
    }

    /// ALS_CONF. The ALS is shut down unless `light_enabled`.
    pub fn als_conf(&self, light_enabled: bool) -> u16 {
        let word = (self.als_it as u16) << ALS_IT_LOC;
        if light_enabled {
            word
        } else {
            word | ALS_SD
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_words() {
        let config = Vcnl4040Config::default();
        assert_eq!(config.address, 0x60);
        // 1/40 duty, 1T, power on, PS_HD set
        assert_eq!(config.ps_conf1_2(), 0x0800);
        assert_eq!(config.ps_conf3_ms(), 0x0000);
        assert_eq!(config.als_conf(true), 0x0000);
        assert_eq!(config.als_conf(false), 0x0001);
    }

    #[test]
    fn test_custom_words() {
        let config = Vcnl4040Config {
            led_current: LedCurrent::Ma200,
            led_duty: LedDuty::OneOver320,
            proximity_it: ProximityIt::T8,
            proximity_high_resolution: false,
            als_it: AlsIt::Ms640,
            ..Default::default()
        };
        assert_eq!(config.ps_conf1_2(), 0b1100_1110);
        assert_eq!(config.ps_conf3_ms(), 0x0700);
        assert_eq!(config.als_conf(true), 0b1100_0000);
        assert_eq!(config.als_conf(false), 0b1100_0001);
    }

    #[test]
    fn test_als_resolution() {
        assert_eq!(AlsIt::Ms80.millilux_per_count(), 120);
        assert_eq!(AlsIt::Ms640.millilux_per_count(), 15);
    }
}
