//! Two buttons step a digit on a 5×5 WS2812 matrix while a status LED blinks on its own timer.
//!
//! The control core ([`panel`], [`debounce`], [`digit_counter`], [`matrix_renderer`],
//! [`status_blinker`]) is hardware independent and builds for the host. The `pico1`/`pico2`
//! features add the RP PIO pixel bus ([`ws2812`]) and PWM channel ([`pwm_channel`]) used by the
//! firmware binary.
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod debounce;
pub mod digit_counter;
pub mod digit_pattern;
pub mod edge_queue;
mod env_text;
mod error;
pub mod led_layout;
pub mod matrix_renderer;
pub mod millis;
pub mod panel;
#[cfg(feature = "board")]
mod pio_irqs;
pub mod pixel_bus;
#[cfg(feature = "board")]
pub mod pwm_channel;
pub mod status_blinker;
#[cfg(feature = "board")]
pub mod ws2812;

// Re-export commonly used items
pub use config::PanelConfig;
pub use error::{Error, Result};
pub use panel::{Activation, DigitPanel, RawEdge};
