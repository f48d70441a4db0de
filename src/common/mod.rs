// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod channel;
pub mod crc;
pub mod error;
pub mod hal_traits;
pub mod q31;
pub mod record;

// --- Re-export key types/traits/functions for easier access ---

// From channel.rs
pub use channel::{Capabilities, ChannelSpec, FetchSelector, SensorChannel};

// From error.rs
pub use error::Vcnl4040Error;

// From hal_traits.rs
pub use hal_traits::{MonotonicClock, SampleFetch}; // Core sync traits

// From q31.rs
pub use q31::{raw_to_q31, DecodedHeader, Q31Data, Q31SampleData, LIGHT_SHIFT, PROX_SHIFT};

// From record.rs
pub use record::{EncodedRecord, ENCODED_LEN, RECORD_VERSION};

// --- Feature-gated re-exports ---

// Async traits (from hal_traits.rs)
#[cfg(feature = "async")]
pub use hal_traits::SampleFetchAsync;
