use std::num::NonZero;

use derive_more::derive::Display;

/// A completion token issued on a [`Stream`][crate::Stream].
///
/// Signals are opaque, totally ordered and monotonically increasing per stream: a signal
/// issued later compares greater than any signal issued earlier on the same stream. A stream
/// with no outstanding work has no signal at all, which is why "no signal" is expressed as
/// [`Option<Signal>::None`] rather than as a reserved zero value - the type cannot represent
/// an idle token by accident.
///
/// Signals from different streams are not comparable in any meaningful way, even though the
/// type system does not prevent it.
///
/// # Example
///
/// ```rust
/// use fences::Signal;
/// use new_zealand::nz;
///
/// let first = Signal::new(nz!(1));
/// let second = Signal::new(nz!(2));
///
/// assert!(first < second);
/// ```
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[display("{_0}")]
pub struct Signal(NonZero<u64>);

impl Signal {
    /// Creates a signal from its raw non-zero token value.
    #[must_use]
    #[inline]
    pub const fn new(value: NonZero<u64>) -> Self {
        Self(value)
    }

    /// The raw token value of the signal.
    #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl From<NonZero<u64>> for Signal {
    #[inline]
    fn from(value: NonZero<u64>) -> Self {
        Self(value)
    }
}
