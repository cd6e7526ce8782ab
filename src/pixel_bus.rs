//! The seam between the renderer and whatever shifts colors down the LED data line.
//!
//! See [`PixelBus`] for the contract and [`Frame`] for the unit the renderer hands over.

use smart_leds::RGB8;

/// RGB color representation re-exported from `smart_leds`.
pub type Rgb = RGB8;

/// The "off" color, sent explicitly for unlit LEDs.
pub const OFF: Rgb = Rgb::new(0, 0, 0);

/// Packs a color into the `0x00GGRRBB` word WS2812 LEDs expect.
///
/// ```rust
/// use digit_panel::pixel_bus::{pack_grb, Rgb};
///
/// assert_eq!(pack_grb(Rgb::new(0x12, 0x34, 0x56)), 0x0034_1256);
/// ```
#[must_use]
pub const fn pack_grb(color: Rgb) -> u32 {
    ((color.g as u32) << 16) | ((color.r as u32) << 8) | color.b as u32
}

/// Something that can transmit pixels to an addressable LED chain.
///
/// Implementations block until the pixel has been accepted (for example, until there is room
/// in a transmit FIFO). Pixels are never dropped.
pub trait PixelBus {
    /// Transmits one pixel, already packed by [`pack_grb`].
    fn send_pixel(&mut self, pixel_grb: u32);

    /// Transmits a whole frame, first pixel first.
    fn send_frame<const N: usize>(&mut self, frame: &Frame<N>) {
        for color in frame.iter() {
            self.send_pixel(pack_grb(*color));
        }
    }
}

/// Frame of `Rgb` values for an LED chain.
///
/// Start from [`Frame::new`] (all off). Frames deref to `[Rgb; N]`, so pixels are set directly
/// before the frame goes to [`PixelBus::send_frame`].
///
/// ```rust
/// use digit_panel::pixel_bus::{Frame, Rgb};
///
/// let mut frame = Frame::<25>::new();
/// frame[0] = Rgb::new(0, 0, 2);
/// assert_eq!(frame[1], Rgb::new(0, 0, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame<const N: usize>(pub [Rgb; N]);

impl<const N: usize> Frame<N> {
    /// Create a new blank (all off) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([OFF; N])
    }
}

impl<const N: usize> core::ops::Deref for Frame<N> {
    type Target = [Rgb; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> core::ops::DerefMut for Frame<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
