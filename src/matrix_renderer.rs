//! Turns a digit into a frame for the 5×5 matrix and pushes it out.
//!
//! See [`MatrixRenderer`].

use crate::digit_pattern::{pattern_for, LED_COUNT};
use crate::led_layout::DISPLAY_LAYOUT;
use crate::pixel_bus::{Frame, PixelBus, Rgb, OFF};

/// Which LEDs are lit, one entry per physical LED in chain order.
pub type PixelBuffer = [bool; LED_COUNT];

/// A brightness scale in whole percent, capped at 100.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Percent(u8);

impl Percent {
    pub const FULL: Self = Self(100);

    /// Builds a percentage, saturating at 100.
    #[must_use]
    pub const fn new(percent: u8) -> Self {
        if percent > 100 { Self(100) } else { Self(percent) }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Scales one channel, truncating toward zero (20 at 10% is 2, 9 at 10% is 0).
#[inline]
#[must_use]
#[expect(
    clippy::arithmetic_side_effects,
    clippy::integer_division_remainder_used,
    clippy::cast_possible_truncation,
    reason = "255 * 100 fits in u16 and the quotient fits in u8"
)]
pub const fn scale_brightness(value: u8, brightness: Percent) -> u8 {
    ((value as u16 * brightness.0 as u16) / 100) as u8
}

/// Applies [`scale_brightness`] to all three channels.
#[must_use]
pub const fn scale_color(color: Rgb, brightness: Percent) -> Rgb {
    Rgb::new(
        scale_brightness(color.r, brightness),
        scale_brightness(color.g, brightness),
        scale_brightness(color.b, brightness),
    )
}

/// Renders digits onto the matrix through a [`PixelBus`].
///
/// Every call to [`render`](Self::render) rewrites the whole [`PixelBuffer`] and sends all
/// [`LED_COUNT`] pixels; unlit LEDs are sent as [`OFF`] rather than skipped.
///
/// ```rust
/// use digit_panel::matrix_renderer::{MatrixRenderer, Percent};
/// use digit_panel::pixel_bus::{PixelBus, Rgb};
///
/// #[derive(Default)]
/// struct Count(usize);
/// impl PixelBus for Count {
///     fn send_pixel(&mut self, _pixel_grb: u32) {
///         self.0 += 1;
///     }
/// }
///
/// let mut renderer = MatrixRenderer::new(Count::default(), Percent::new(10));
/// assert!(renderer.render(7, Rgb::new(0, 0, 20)));
/// assert!(!renderer.render(12, Rgb::new(0, 0, 20)));
/// assert_eq!(renderer.bus().0, 25);
/// ```
pub struct MatrixRenderer<B: PixelBus> {
    bus: B,
    buffer: PixelBuffer,
    brightness: Percent,
}

impl<B: PixelBus> MatrixRenderer<B> {
    #[must_use]
    pub const fn new(bus: B, brightness: Percent) -> Self {
        Self {
            bus,
            buffer: [false; LED_COUNT],
            brightness,
        }
    }

    /// Draws `digit` in `color` (dimmed to the configured brightness).
    ///
    /// Returns `false` and leaves both the buffer and the LEDs untouched when `digit` is not in
    /// `0..=9`.
    pub fn render(&mut self, digit: u8, color: Rgb) -> bool {
        let Ok(pattern) = pattern_for(digit) else {
            return false;
        };

        for (led_index, lit) in self.buffer.iter_mut().enumerate() {
            *lit = DISPLAY_LAYOUT
                .cell_index(led_index)
                .and_then(|cell| pattern.get(cell))
                .copied()
                .unwrap_or(false);
        }

        let on = scale_color(color, self.brightness);
        let mut frame = Frame::<LED_COUNT>::new();
        for (pixel, lit) in frame.iter_mut().zip(self.buffer.iter()) {
            *pixel = if *lit { on } else { OFF };
        }
        self.bus.send_frame(&frame);
        true
    }

    /// The LEDs lit by the most recent successful render.
    #[must_use]
    pub const fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub const fn bus(&self) -> &B {
        &self.bus
    }
}
