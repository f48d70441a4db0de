// src/common/hal_traits.rs

use super::channel::FetchSelector;
use core::fmt::Debug;

/// Monotonic time source used to stamp encoded records.
pub trait MonotonicClock {
    /// Current monotonic time in nanoseconds.
    fn now_ns(&self) -> u64;
}

/// Abstraction for the device's "fetch latest readings" operation.
///
/// After a successful fetch, [`proximity`](Self::proximity) and
/// [`light`](Self::light) reflect the freshly read values for every
/// channel covered by the selector.
pub trait SampleFetch {
    /// Associated error type for bus/transport failures.
    type Error: Debug;

    /// Attempts to fetch the channels named by `selector`.
    ///
    /// Returns `Err(nb::Error::WouldBlock)` while a fetch is still in
    /// progress. Other errors are returned as `Err(nb::Error::Other(Self::Error))`.
    fn sample_fetch(&mut self, selector: FetchSelector) -> nb::Result<(), Self::Error>;

    /// Raw proximity count from the last fetch covering proximity.
    fn proximity(&self) -> u16;

    /// Raw ambient light count from the last fetch covering light.
    fn light(&self) -> u16;
}

/// Asynchronous twin of [`SampleFetch`] (requires the 'async' feature).
#[cfg(feature = "async")]
#[allow(async_fn_in_trait)]
pub trait SampleFetchAsync {
    /// Associated error type for bus/transport failures.
    type Error: Debug;

    /// Fetches the channels named by `selector`, completing when the read is done.
    async fn sample_fetch(&mut self, selector: FetchSelector) -> Result<(), Self::Error>;

    /// Raw proximity count from the last fetch covering proximity.
    fn proximity(&self) -> u16;

    /// Raw ambient light count from the last fetch covering light.
    fn light(&self) -> u16;
}

impl<T: SampleFetch + ?Sized> SampleFetch for &mut T {
    type Error = T::Error;

    fn sample_fetch(&mut self, selector: FetchSelector) -> nb::Result<(), Self::Error> {
        T::sample_fetch(self, selector)
    }

    fn proximity(&self) -> u16 {
        T::proximity(self)
    }

    fn light(&self) -> u16 {
        T::light(self)
    }
}

impl<T: MonotonicClock + ?Sized> MonotonicClock for &T {
    fn now_ns(&self) -> u64 {
        T::now_ns(self)
    }
}
