//! One output channel of an RP PWM slice, exposed through `embedded_hal::pwm::SetDutyCycle`.
//!
//! - Counter wraps at `top` (1000 for the status LED), default divider
//! - Updates duty WITHOUT reconfiguring the rest of the slice

use core::convert::Infallible;

use embassy_rp::pwm::{Config, Pwm};
use embedded_hal::pwm::{ErrorType, SetDutyCycle};

/// Which half of the slice the pin is wired to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    A,
    B,
}

pub struct PwmChannel<'d> {
    pwm: Pwm<'d>,
    cfg: Config, // Stored so duty updates keep `top` and the divider
    channel: Channel,
}

impl<'d> PwmChannel<'d> {
    /// Takes a slice already bound to its pin, e.g.
    /// `Pwm::new_output_b(p.PWM_SLICE6, p.PIN_13, Config::default())`, and starts it at
    /// duty 0 with the counter wrapping at `top`.
    pub fn new(pwm: Pwm<'d>, channel: Channel, top: u16) -> Self {
        let mut cfg = Config::default();
        cfg.top = top;
        cfg.compare_a = 0;
        cfg.compare_b = 0;
        cfg.enable = true;
        let mut this = Self { pwm, cfg, channel };
        this.pwm.set_config(&this.cfg);
        this
    }
}

impl ErrorType for PwmChannel<'_> {
    type Error = Infallible;
}

impl SetDutyCycle for PwmChannel<'_> {
    fn max_duty_cycle(&self) -> u16 {
        self.cfg.top
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        let duty = duty.min(self.cfg.top);
        match self.channel {
            Channel::A => self.cfg.compare_a = duty,
            Channel::B => self.cfg.compare_b = duty,
        }
        self.pwm.set_config(&self.cfg);
        Ok(())
    }
}
