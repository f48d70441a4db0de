// src/driver/mod.rs

//! Register-level I2C driver (requires the 'impl-native' feature).
//!
//! [`Vcnl4040`] implements [`SampleFetch`] over a blocking `embedded-hal` bus
//! and, with the 'async' feature, [`SampleFetchAsync`] over an
//! `embedded-hal-async` bus. Either way it can be handed straight to a
//! [`Vcnl4040Encoder`](crate::Vcnl4040Encoder).

pub mod config;
pub mod registers;

pub use config::{AlsIt, LedCurrent, LedDuty, ProximityIt, Vcnl4040Config};
pub use registers::{Register, DEFAULT_ADDRESS, DEVICE_ID};

use crate::common::{
    channel::{Capabilities, FetchSelector},
    error::Vcnl4040Error,
    hal_traits::SampleFetch,
};
use embedded_hal::i2c::I2c;

#[cfg(feature = "async")]
use crate::common::hal_traits::SampleFetchAsync;
#[cfg(feature = "async")]
use embedded_hal_async::i2c::I2c as AsyncI2c;

/// VCNL4040 on an I2C bus.
#[derive(Debug)]
pub struct Vcnl4040<I2C> {
    i2c: I2C,
    config: Vcnl4040Config,
    caps: Capabilities,
    proximity: u16,
    light: u16,
}

impl<I2C> Vcnl4040<I2C> {
    pub fn new(i2c: I2C, config: Vcnl4040Config) -> Self {
        Self {
            i2c,
            caps: Capabilities::with_light(config.light),
            config,
            proximity: 0,
            light: 0,
        }
    }

    /// Hands the bus back.
    pub fn destroy(self) -> I2C {
        self.i2c
    }

    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    #[inline]
    pub fn config(&self) -> &Vcnl4040Config {
        &self.config
    }

    /// Ambient light from the last fetch, in milli-lux.
    pub fn light_millilux(&self) -> u32 {
        u32::from(self.light) * self.config.als_it.millilux_per_count()
    }

    fn check_id<E: core::fmt::Debug>(id: u16) -> Result<(), Vcnl4040Error<E>> {
        if id != DEVICE_ID {
            log::error!("Unexpected device id {:#06x}", id);
            return Err(Vcnl4040Error::InvalidDevice(id));
        }
        Ok(())
    }

    /// Register writes performed by init, in order.
    fn config_writes(&self) -> [(Register, u16); 3] {
        [
            (Register::PsConf1_2, self.config.ps_conf1_2()),
            (Register::PsConf3Ms, self.config.ps_conf3_ms()),
            (Register::AlsConf, self.config.als_conf(self.caps.light())),
        ]
    }

    fn log_initialised(&self) {
        log::info!(
            "VCNL4040 at {:#04x} initialised, light={}",
            self.config.address,
            self.caps.light()
        );
    }
}

impl<I2C> Vcnl4040<I2C>
where
    I2C: I2c,
{
    /// Checks the device id and writes the configuration.
    ///
    /// The ALS is left shut down when the light capability is absent.
    ///
    /// # Errors
    ///
    /// * `InvalidDevice` if the ID register does not read [`DEVICE_ID`].
    /// * `Io` on bus failure.
    pub fn init(&mut self) -> Result<(), Vcnl4040Error<I2C::Error>> {
        let id = self.read_word(Register::Id).map_err(Vcnl4040Error::Io)?;
        Self::check_id::<I2C::Error>(id)?;

        for (reg, word) in self.config_writes() {
            log::debug!("write_reg {:?}({:#04x}) = {:#06x}", reg, reg as u8, word);
            self.write_word(reg, word).map_err(Vcnl4040Error::Io)?;
        }

        self.log_initialised();
        Ok(())
    }

    pub fn read_word(&mut self, reg: Register) -> Result<u16, I2C::Error> {
        let mut buf = [0u8; 2];
        self.i2c.write_read(self.config.address, &[reg.into()], &mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    pub fn write_word(&mut self, reg: Register, word: u16) -> Result<(), I2C::Error> {
        let [lsb, msb] = word.to_le_bytes();
        self.i2c.write(self.config.address, &[reg.into(), lsb, msb])
    }
}

impl<I2C> SampleFetch for Vcnl4040<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn sample_fetch(&mut self, selector: FetchSelector) -> nb::Result<(), Self::Error> {
        if selector.includes_proximity() {
            self.proximity = self.read_word(Register::PsData).map_err(nb::Error::Other)?;
        }
        // Light without the capability is silently skipped, the ALS is off
        if selector.includes_light() && self.caps.light() {
            self.light = self.read_word(Register::AlsData).map_err(nb::Error::Other)?;
        }
        Ok(())
    }

    fn proximity(&self) -> u16 {
        self.proximity
    }

    fn light(&self) -> u16 {
        self.light
    }
}

#[cfg(feature = "async")]
impl<I2C> Vcnl4040<I2C>
where
    I2C: AsyncI2c,
{
    /// Async version of [`init`](Self::init) with the same checks and writes.
    pub async fn init_async(&mut self) -> Result<(), Vcnl4040Error<I2C::Error>> {
        let id = self.read_word_async(Register::Id).await.map_err(Vcnl4040Error::Io)?;
        Self::check_id::<I2C::Error>(id)?;

        for (reg, word) in self.config_writes() {
            log::debug!("write_reg {:?}({:#04x}) = {:#06x}", reg, reg as u8, word);
            self.write_word_async(reg, word).await.map_err(Vcnl4040Error::Io)?;
        }

        self.log_initialised();
        Ok(())
    }

    pub async fn read_word_async(&mut self, reg: Register) -> Result<u16, I2C::Error> {
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.config.address, &[reg.into()], &mut buf)
            .await?;
        Ok(u16::from_le_bytes(buf))
    }

    pub async fn write_word_async(&mut self, reg: Register, word: u16) -> Result<(), I2C::Error> {
        let [lsb, msb] = word.to_le_bytes();
        self.i2c.write(self.config.address, &[reg.into(), lsb, msb]).await
    }
}

#[cfg(feature = "async")]
impl<I2C> SampleFetchAsync for Vcnl4040<I2C>
where
    I2C: AsyncI2c,
{
    type Error = I2C::Error;

    async fn sample_fetch(&mut self, selector: FetchSelector) -> Result<(), Self::Error> {
        if selector.includes_proximity() {
            self.proximity = self.read_word_async(Register::PsData).await?;
        }
        if selector.includes_light() && self.caps.light() {
            self.light = self.read_word_async(Register::AlsData).await?;
        }
        Ok(())
    }

    fn proximity(&self) -> u16 {
        self.proximity
    }

    fn light(&self) -> u16 {
        self.light
    }
}
