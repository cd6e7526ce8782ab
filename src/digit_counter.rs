//! The digit currently on the matrix.

use portable_atomic::{AtomicU8, Ordering};

use crate::debounce::ButtonId;
use crate::digit_pattern::DIGIT_COUNT;

/// Which way a button moves the digit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    Forward,
    Backward,
}

impl From<ButtonId> for Step {
    fn from(button: ButtonId) -> Self {
        match button {
            ButtonId::A => Self::Forward,
            ButtonId::B => Self::Backward,
        }
    }
}

impl Step {
    /// The next digit in this direction, wrapping within `0..=9`.
    ///
    /// Backward adds nine rather than subtracting one, so 0 goes to 9 with no signed arithmetic.
    #[must_use]
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        reason = "operands are below 20; the modulus is a non-zero constant"
    )]
    pub const fn apply(self, digit: u8) -> u8 {
        let offset = match self {
            Self::Forward => 1,
            Self::Backward => DIGIT_COUNT - 1,
        };
        (digit % DIGIT_COUNT + offset) % DIGIT_COUNT
    }
}

/// A cyclic counter over `0..=9`, safe to place in a `static`.
///
/// Only the button edge handler advances it; the renderer and anyone else only read. Because
/// there is one writer, [`advance`](Self::advance) is a plain load and store and needs no
/// compare-and-swap (which the RP2040 does not have).
pub struct DigitCounter(AtomicU8);

impl DigitCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU8::new(0))
    }

    #[must_use]
    pub fn get(&self) -> u8 {
        self.0.load(Ordering::Acquire)
    }

    /// Moves one step and returns the new digit.
    pub fn advance(&self, step: Step) -> u8 {
        let next = step.apply(self.get());
        self.0.store(next, Ordering::Release);
        next
    }
}

impl Default for DigitCounter {
    fn default() -> Self {
        Self::new()
    }
}
