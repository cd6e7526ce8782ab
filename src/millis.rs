//! Millisecond timestamps as seen by the edge handlers.

use derive_more::derive::Display;

/// Milliseconds since boot, truncated to 32 bits.
///
/// The counter wraps after about 49.7 days, so differences between two readings are taken with
/// [`Milliseconds::elapsed_since`], which wraps as well.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[display("{_0} ms")]
pub struct Milliseconds(pub u32);

impl Milliseconds {
    /// The boot instant.
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn from_millis(millis: u32) -> Self {
        Self(millis)
    }

    /// Keeps the low 32 bits of a 64-bit millisecond count.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "wrapping to 32 bits is the clock's documented behavior"
    )]
    pub const fn from_u64_wrapping(millis: u64) -> Self {
        Self(millis as u32)
    }

    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Time from `earlier` to `self`, correct across a single wrap of the counter.
    #[must_use]
    pub const fn elapsed_since(self, earlier: Self) -> Self {
        Self(self.0.wrapping_sub(earlier.0))
    }

    /// Reads the embassy time driver.
    #[cfg(feature = "board")]
    #[must_use]
    pub fn now() -> Self {
        Self::from_u64_wrapping(embassy_time::Instant::now().as_millis())
    }
}
