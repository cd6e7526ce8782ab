//! The event-dispatch core: raw button edges in, digit changes and frames out.
//!
//! The firmware's button watchers queue edges on an [`EdgeNotifier`]; one task owns the
//! [`DigitPanel`] and feeds them to [`DigitPanel::on_raw_edge`] through
//! [`DigitPanel::handle_next`]. The blinker gets its own tick from a separate timer (see
//! [`crate::status_blinker`]). The two never share state.

#[cfg(feature = "defmt")]
use defmt::info;
use derive_more::derive::Display;

use crate::config::PanelConfig;
use crate::debounce::{ButtonId, DebouncedButton, RawLevel};
use crate::digit_counter::{DigitCounter, Step};
use crate::edge_queue::EdgeNotifier;
use crate::matrix_renderer::{MatrixRenderer, PixelBuffer};
use crate::millis::Milliseconds;
use crate::pixel_bus::{PixelBus, Rgb};

/// One level change on a button line, as delivered by the edge interrupt.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawEdge {
    pub button: ButtonId,
    pub level: RawLevel,
    pub at: Milliseconds,
}

/// An accepted press and the digit it produced; its `Display` is the diagnostic line.
///
/// ```rust
/// use digit_panel::debounce::ButtonId;
/// use digit_panel::panel::Activation;
///
/// let activation = Activation { button: ButtonId::B, digit: 9 };
/// assert_eq!(activation.to_string(), "button B pressed, digit: 9");
/// ```
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[display("{button} pressed, digit: {digit}")]
pub struct Activation {
    pub button: ButtonId,
    pub digit: u8,
}

/// Two debounced buttons driving a digit on the matrix.
///
/// Owned by whichever context handles button edges; that context is the only writer of the
/// button states, the counter and the pixel buffer.
pub struct DigitPanel<B: PixelBus> {
    button_a: DebouncedButton,
    button_b: DebouncedButton,
    counter: DigitCounter,
    renderer: MatrixRenderer<B>,
    foreground: Rgb,
}

impl<B: PixelBus> DigitPanel<B> {
    #[must_use]
    pub const fn new(bus: B, config: &PanelConfig) -> Self {
        Self {
            button_a: DebouncedButton::new(ButtonId::A, config.debounce_window),
            button_b: DebouncedButton::new(ButtonId::B, config.debounce_window),
            counter: DigitCounter::new(),
            renderer: MatrixRenderer::new(bus, config.brightness),
            foreground: config.foreground,
        }
    }

    /// Draws the current digit (0 after construction).
    pub fn show_current(&mut self) {
        self.renderer.render(self.counter.get(), self.foreground);
    }

    /// Handles one raw edge.
    ///
    /// On an accepted press the counter moves first (A forward, B backward), then the new digit
    /// is rendered, then the diagnostic line is logged. Bounces and releases return `None`.
    pub fn on_raw_edge(&mut self, edge: RawEdge) -> Option<Activation> {
        self.button(edge.button).on_edge(edge.level, edge.at)?;

        let digit = self.counter.advance(Step::from(edge.button));
        self.renderer.render(digit, self.foreground);
        let activation = Activation {
            button: edge.button,
            digit,
        };
        #[cfg(feature = "defmt")]
        info!("button {} pressed, digit: {}", activation.button, activation.digit);
        Some(activation)
    }

    /// Waits for the next queued edge and handles it like [`on_raw_edge`](Self::on_raw_edge).
    pub async fn handle_next(&mut self, edges: &EdgeNotifier) -> Option<Activation> {
        let edge = edges.receive().await;
        self.on_raw_edge(edge)
    }

    #[must_use]
    pub const fn button(&self, id: ButtonId) -> &DebouncedButton {
        match id {
            ButtonId::A => &self.button_a,
            ButtonId::B => &self.button_b,
        }
    }

    #[must_use]
    pub fn digit(&self) -> u8 {
        self.counter.get()
    }

    #[must_use]
    pub const fn buffer(&self) -> &PixelBuffer {
        self.renderer.buffer()
    }

    #[must_use]
    pub const fn bus(&self) -> &B {
        self.renderer.bus()
    }
}
