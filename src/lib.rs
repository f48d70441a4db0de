// src/lib.rs

//! Read encoding and Q31 decoding for the Vishay VCNL4040 proximity /
//! ambient light sensor.
//!
//! A read is split in two halves that share nothing but a byte buffer:
//!
//! * [`Vcnl4040Encoder`] fetches fresh readings through a [`SampleFetch`]
//!   implementation and writes an [`EncodedRecord`] into a caller buffer.
//! * [`Vcnl4040Decoder`] turns that buffer back into Q31 samples, one
//!   frame per channel at most.
//!
//! # Features
//!
//! - **`als`** (default): ambient light support. Without it the light
//!   channel is never encoded and decodes as unsupported.
//! - **`async`**: [`SampleFetchAsync`], `Vcnl4040Encoder::encode_async` and,
//!   with `impl-native`, the driver on an `embedded-hal-async` bus.
//! - **`impl-native`**: register-level I2C driver on `embedded-hal` 1.0.
//! - **`std`**: forwards to `thiserror/std`.

#![no_std]

pub mod common;
pub mod decoder;
pub mod encoder;

#[cfg(feature = "impl-native")]
pub mod driver;

// Re-export key types for convenience
pub use common::{
    Capabilities, ChannelSpec, EncodedRecord, FetchSelector, MonotonicClock, Q31Data,
    SampleFetch, SensorChannel, Vcnl4040Error,
};
pub use decoder::{DecoderRegistry, FrameCursor, SensorDecoder, SizeInfo, Vcnl4040Decoder};
pub use encoder::Vcnl4040Encoder;

#[cfg(feature = "async")]
pub use common::SampleFetchAsync;

#[cfg(feature = "impl-native")]
pub use driver::{Vcnl4040, Vcnl4040Config};
