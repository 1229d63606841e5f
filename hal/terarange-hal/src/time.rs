//! Monotonic time source

/// Millisecond clock
///
/// Must be monotonic. The counter is allowed to wrap; consumers compare
/// timestamps with wrapping subtraction.
pub trait Clock {
    /// Milliseconds since an arbitrary epoch (usually boot)
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}
