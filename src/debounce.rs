//! Press-edge debouncing for the panel's two buttons.
//!
//! Buttons idle high through a pull-up and read low while held. Only the press edge is gated:
//! a press is accepted when the button is logically released and at least the debounce window
//! has passed since the last accepted press. A release edge is always accepted, so a new press
//! can be recognized as soon as the window has elapsed.

use portable_atomic::{AtomicBool, AtomicU32, Ordering};

use crate::millis::Milliseconds;

/// Default minimum time between two accepted presses of the same button.
pub const DEBOUNCE_WINDOW: Milliseconds = Milliseconds::from_millis(100);

/// Electrical level read from a button line when an edge interrupt fires.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RawLevel {
    High,
    Low,
}

impl RawLevel {
    #[must_use]
    pub const fn from_is_low(is_low: bool) -> Self {
        if is_low { Self::Low } else { Self::High }
    }

    /// Held down (pulled to ground).
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Low)
    }
}

/// Emitted once per accepted physical press.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Activated {
    pub at: Milliseconds,
}

/// Debounced view of one button.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonState {
    /// When the last press was accepted.
    pub last_accepted: Milliseconds,
    /// Logically held down.
    pub pressed: bool,
}

impl ButtonState {
    /// Released, with the last accepted press at boot.
    pub const INITIAL: Self = Self {
        last_accepted: Milliseconds::ZERO,
        pressed: false,
    };

    /// Applies one raw edge.
    ///
    /// ```rust
    /// use digit_panel::debounce::{ButtonState, RawLevel, DEBOUNCE_WINDOW};
    /// use digit_panel::millis::Milliseconds;
    ///
    /// let press = Milliseconds::from_millis(500);
    /// let (state, event) = ButtonState::INITIAL.on_edge(RawLevel::Low, press, DEBOUNCE_WINDOW);
    /// assert!(state.pressed);
    /// assert!(event.is_some());
    ///
    /// // Contact bounce 3 ms later changes nothing.
    /// let bounce = Milliseconds::from_millis(503);
    /// assert_eq!(state.on_edge(RawLevel::Low, bounce, DEBOUNCE_WINDOW), (state, None));
    /// ```
    #[must_use]
    pub const fn on_edge(
        self,
        level: RawLevel,
        now: Milliseconds,
        window: Milliseconds,
    ) -> (Self, Option<Activated>) {
        if !level.is_active() {
            return (
                Self {
                    last_accepted: self.last_accepted,
                    pressed: false,
                },
                None,
            );
        }

        if !self.pressed && now.elapsed_since(self.last_accepted).as_u32() >= window.as_u32() {
            (
                Self {
                    last_accepted: now,
                    pressed: true,
                },
                Some(Activated { at: now }),
            )
        } else {
            (self, None)
        }
    }
}

/// Which of the two buttons.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, derive_more::Display)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    #[display("button A")]
    A,
    #[display("button B")]
    B,
}

/// One button's debounced state, kept in atomics so it can live in a `static` and be read from
/// any context.
///
/// Only the edge handler for this button writes it (single writer); everyone else only loads.
pub struct DebouncedButton {
    id: ButtonId,
    window: Milliseconds,
    last_accepted: AtomicU32,
    pressed: AtomicBool,
}

impl DebouncedButton {
    #[must_use]
    pub const fn new(id: ButtonId, window: Milliseconds) -> Self {
        Self {
            id,
            window,
            last_accepted: AtomicU32::new(ButtonState::INITIAL.last_accepted.as_u32()),
            pressed: AtomicBool::new(ButtonState::INITIAL.pressed),
        }
    }

    #[must_use]
    pub const fn id(&self) -> ButtonId {
        self.id
    }

    #[must_use]
    pub fn state(&self) -> ButtonState {
        ButtonState {
            last_accepted: Milliseconds(self.last_accepted.load(Ordering::Acquire)),
            pressed: self.pressed.load(Ordering::Acquire),
        }
    }

    /// Feeds one raw edge through the state machine, returning the activation, if any.
    ///
    /// Must only be called from this button's edge handler.
    pub fn on_edge(&self, level: RawLevel, now: Milliseconds) -> Option<Activated> {
        let (next, activated) = self.state().on_edge(level, now, self.window);
        self.last_accepted
            .store(next.last_accepted.as_u32(), Ordering::Release);
        self.pressed.store(next.pressed, Ordering::Release);
        activated
    }
}
