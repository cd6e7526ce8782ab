//! A fully const description of where each LED of the matrix sits.
//!
//! See [`LedLayout`] for the transforms the panel uses and [`DISPLAY_LAYOUT`] for the
//! orientation the renderer applies to every glyph.

use crate::digit_pattern::{LED_COUNT, SIDE};

/// The panel's wiring: LED `i` shows glyph cell `DISPLAY_LAYOUT.map()[i]`.
///
/// The matrix is mounted upside down relative to the glyph table, so output row `r` takes
/// glyph row `4 - r`; columns are unchanged.
pub const DISPLAY_LAYOUT: LedLayout<LED_COUNT, SIDE, SIDE> =
    LedLayout::<LED_COUNT, SIDE, SIDE>::row_major().flip_v();

/// A fully const struct that tells the (col,row) location of each LED.
///
/// # Examples
///
/// ```rust
/// use digit_panel::led_layout::LedLayout;
///
/// const FLIPPED: LedLayout<6, 3, 2> = LedLayout::row_major().flip_v();
/// const EXPECTED: LedLayout<6, 3, 2> =
///     LedLayout::new([(0, 1), (1, 1), (2, 1), (0, 0), (1, 0), (2, 0)]);
/// const _: () = assert!(FLIPPED.equals(&EXPECTED));
/// ```
///
/// ```text
/// Row-major 3×2 flipped vertically:
///   Before:            After:
///     LED0  LED1  LED2    LED3  LED4  LED5
///     LED3  LED4  LED5    LED0  LED1  LED2
/// ```
///
/// Compile-time validation catches configuration errors:
///
/// ```compile_fail
/// # use digit_panel::led_layout::LedLayout;
/// // Duplicate coordinate (0,0) - caught at compile time
/// const INVALID: LedLayout<3, 2, 2> = LedLayout::new([(0, 0), (0, 0), (1, 1)]);
/// let _ = INVALID;
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedLayout<const N: usize, const W: usize, const H: usize> {
    map: [(u16, u16); N],
}

#[expect(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    reason = "const fn loops over fixed-size maps; bounds are asserted in `new`"
)]
impl<const N: usize, const W: usize, const H: usize> LedLayout<N, W, H> {
    /// Access the checked (col,row) mapping.
    #[must_use]
    pub const fn map(&self) -> &[(u16, u16); N] {
        &self.map
    }

    /// Row-major index of the cell LED `led_index` shows, or `None` past the end.
    #[must_use]
    pub const fn cell_index(&self, led_index: usize) -> Option<usize> {
        if led_index >= N {
            return None;
        }
        let (col, row) = self.map[led_index];
        Some(row as usize * W + col as usize)
    }

    /// Const equality helper for doctests and const assertions.
    #[must_use]
    pub const fn equals(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < N {
            if self.map[i].0 != other.map[i].0 || self.map[i].1 != other.map[i].1 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Constructor: verifies mapping covers every cell exactly once across the W×H grid.
    ///
    /// ```rust
    /// use digit_panel::led_layout::LedLayout;
    ///
    /// const MAP: LedLayout<4, 2, 2> = LedLayout::new([(0, 0), (1, 0), (1, 1), (0, 1)]);
    /// assert_eq!(MAP.map()[2], (1, 1));
    /// ```
    #[must_use]
    pub const fn new(map: [(u16, u16); N]) -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut seen = [false; N];

        let mut i = 0;
        while i < N {
            let (c, r) = map[i];
            let c = c as usize;
            let r = r as usize;

            assert!(c < W, "column out of bounds");
            assert!(r < H, "row out of bounds");

            let cell = r * W + c;
            assert!(!seen[cell], "duplicate (col,row) in mapping");
            seen[cell] = true;

            i += 1;
        }

        let mut k = 0;
        while k < N {
            assert!(seen[k], "mapping does not cover every cell");
            k += 1;
        }

        Self { map }
    }

    /// Row-major mapping: LEDs run left-to-right across row 0, then row 1, and so on.
    ///
    /// ```text
    /// 3×2:
    ///   LED0  LED1  LED2
    ///   LED3  LED4  LED5
    /// ```
    #[must_use]
    pub const fn row_major() -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut mapping = [(0_u16, 0_u16); N];
        let mut led_index = 0;
        while led_index < N {
            mapping[led_index] = ((led_index % W) as u16, (led_index / W) as u16);
            led_index += 1;
        }
        Self::new(mapping)
    }

    /// Rotate 90° clockwise (dims swap).
    ///
    /// ```rust
    /// use digit_panel::led_layout::LedLayout;
    ///
    /// const ROTATED: LedLayout<6, 2, 3> = LedLayout::<6, 3, 2>::row_major().rotate_cw();
    /// const EXPECTED: LedLayout<6, 2, 3> =
    ///     LedLayout::new([(1, 0), (1, 1), (1, 2), (0, 0), (0, 1), (0, 2)]);
    /// const _: () = assert!(ROTATED.equals(&EXPECTED));
    /// ```
    #[must_use]
    pub const fn rotate_cw(self) -> LedLayout<N, H, W> {
        let mut out = [(0u16, 0u16); N];
        let mut i = 0;
        while i < N {
            let (c, r) = self.map[i];
            out[i] = ((H - 1 - r as usize) as u16, c);
            i += 1;
        }
        LedLayout::<N, H, W>::new(out)
    }

    /// Rotate 90° counter-clockwise derived from `rotate_cw`.
    #[must_use]
    pub const fn rotate_ccw(self) -> LedLayout<N, H, W> {
        self.rotate_cw().rotate_cw().rotate_cw()
    }

    /// Flip horizontally (mirror columns).
    #[must_use]
    pub const fn flip_h(self) -> Self {
        let mut out = [(0u16, 0u16); N];
        let mut i = 0;
        while i < N {
            let (c, r) = self.map[i];
            out[i] = ((W - 1 - c as usize) as u16, r);
            i += 1;
        }
        Self::new(out)
    }

    /// Flip vertically derived from rotation + horizontal flip.
    #[must_use]
    pub const fn flip_v(self) -> Self {
        self.rotate_cw().flip_h().rotate_ccw()
    }
}
