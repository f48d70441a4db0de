// src/driver/registers.rs

/// Factory I2C address.
pub const DEFAULT_ADDRESS: u8 = 0x60;

/// Value of the ID register (low byte 0x86, high byte 0x01).
pub const DEVICE_ID: u16 = 0x0186;

/// Command codes. Every register is a 16-bit word, LSB transferred first.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Register {
    AlsConf = 0x00,
    AlsThdh = 0x01,
    AlsThdl = 0x02,
    PsConf1_2 = 0x03,
    PsConf3Ms = 0x04,
    PsCanc = 0x05,
    PsThdl = 0x06,
    PsThdh = 0x07,
    PsData = 0x08,
    AlsData = 0x09,
    WhiteData = 0x0A,
    IntFlag = 0x0B,
    Id = 0x0C,
}

impl From<Register> for u8 {
    fn from(r: Register) -> u8 {
        r as u8
    }
}

// ALS_CONF, low byte
pub const ALS_IT_LOC: u16 = 6;
pub const ALS_SD: u16 = 1 << 0;

// PS_CONF1, low byte
pub const PS_DUTY_LOC: u16 = 6;
pub const PS_IT_LOC: u16 = 1;
pub const PS_SD: u16 = 1 << 0;
// PS_CONF2, high byte
pub const PS_HD: u16 = 1 << (8 + 3);

// PS_MS, high byte of PS_CONF3_MS
pub const LED_I_LOC: u16 = 8;
