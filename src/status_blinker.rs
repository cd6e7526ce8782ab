//! A heartbeat LED toggled on a fixed period, independent of the buttons.
//!
//! The LED can be a plain GPIO ([`DigitalStatus`]) or a PWM channel held at a low duty level
//! while lit ([`DutyStatus`]). Both sit behind [`StatusOutput`] so [`StatusBlinker`] does not
//! care which one the board uses; [`StatusLed`] picks between them at runtime.

#[cfg(feature = "defmt")]
use defmt::warn;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::{Error, Result};

/// PWM counter wrap value for the dimmed variant.
pub const PWM_TOP: u16 = 1000;

/// Compare level while lit: 100 of 1000, about 10% duty.
pub const PWM_ON_LEVEL: u16 = 100;

/// How the status LED is driven.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusDrive {
    /// Fully on or fully off.
    Digital,
    /// PWM with counter wrap `top`; `on_level` while lit, 0 while dark.
    Duty { top: u16, on_level: u16 },
}

impl StatusDrive {
    /// The dimmed variant with the stock 10% level.
    pub const DIMMED: Self = Self::Duty {
        top: PWM_TOP,
        on_level: PWM_ON_LEVEL,
    };
}

/// Anything the blinker can switch between lit and dark.
pub trait StatusOutput {
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if the underlying pin or channel refuses the
    /// new state.
    fn set_lit(&mut self, lit: bool) -> Result<()>;
}

impl<O: StatusOutput + ?Sized> StatusOutput for &mut O {
    fn set_lit(&mut self, lit: bool) -> Result<()> {
        (**self).set_lit(lit)
    }
}

/// A status LED on a plain output pin.
pub struct DigitalStatus<P>(P);

impl<P: OutputPin> DigitalStatus<P> {
    #[must_use]
    pub const fn new(pin: P) -> Self {
        Self(pin)
    }

    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P: OutputPin> StatusOutput for DigitalStatus<P> {
    fn set_lit(&mut self, lit: bool) -> Result<()> {
        self.0
            .set_state(lit.into())
            .map_err(|_| Error::CannotSetOutputState)
    }
}

/// A status LED on a PWM channel, dimmed to `on_level` while lit.
pub struct DutyStatus<D> {
    channel: D,
    on_level: u16,
}

impl<D: SetDutyCycle> DutyStatus<D> {
    #[must_use]
    pub const fn new(channel: D, on_level: u16) -> Self {
        Self { channel, on_level }
    }

    #[must_use]
    pub const fn on_level(&self) -> u16 {
        self.on_level
    }

    pub fn into_inner(self) -> D {
        self.channel
    }
}

impl<D: SetDutyCycle> StatusOutput for DutyStatus<D> {
    fn set_lit(&mut self, lit: bool) -> Result<()> {
        let level = if lit { self.on_level } else { 0 };
        self.channel
            .set_duty_cycle(level)
            .map_err(|_| Error::CannotSetOutputState)
    }
}

/// Either kind of status LED, chosen by [`StatusDrive`] at startup.
pub enum StatusLed<P, D> {
    Digital(DigitalStatus<P>),
    Duty(DutyStatus<D>),
}

impl<P: OutputPin, D: SetDutyCycle> StatusOutput for StatusLed<P, D> {
    fn set_lit(&mut self, lit: bool) -> Result<()> {
        match self {
            Self::Digital(status) => status.set_lit(lit),
            Self::Duty(status) => status.set_lit(lit),
        }
    }
}

/// What a periodic callback wants from its timer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Repeat {
    Continue,
}

/// Toggles a [`StatusOutput`] on every timer tick.
///
/// The blink state belongs to the blinker alone; nothing else reads it.
///
/// ```rust
/// use digit_panel::status_blinker::{Repeat, StatusBlinker, StatusOutput};
///
/// struct Lamp(bool);
/// impl StatusOutput for Lamp {
///     fn set_lit(&mut self, lit: bool) -> digit_panel::Result<()> {
///         self.0 = lit;
///         Ok(())
///     }
/// }
///
/// let mut blinker = StatusBlinker::new(Lamp(false));
/// assert_eq!(blinker.on_timer_tick(), Repeat::Continue);
/// assert!(blinker.output().0);
/// ```
pub struct StatusBlinker<O> {
    output: O,
    lit: bool,
}

impl<O: StatusOutput> StatusBlinker<O> {
    /// Starts dark. The output itself is not touched until the first tick.
    #[must_use]
    pub const fn new(output: O) -> Self {
        Self { output, lit: false }
    }

    /// Flips the LED. Always asks for the timer to keep running.
    ///
    /// A failure to drive the output is logged and otherwise ignored; the next tick tries
    /// again.
    pub fn on_timer_tick(&mut self) -> Repeat {
        self.lit = !self.lit;
        if let Err(err) = self.output.set_lit(self.lit) {
            log_output_error(&err);
        }
        Repeat::Continue
    }

    #[must_use]
    pub const fn is_lit(&self) -> bool {
        self.lit
    }

    #[must_use]
    pub const fn output(&self) -> &O {
        &self.output
    }
}

#[cfg(feature = "defmt")]
fn log_output_error(err: &Error) {
    warn!("status LED: {}", err);
}

#[cfg(not(feature = "defmt"))]
const fn log_output_error(_err: &Error) {}
