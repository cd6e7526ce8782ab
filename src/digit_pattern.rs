//! The fixed 5×5 glyphs for the digits 0 through 9.
//!
//! Glyphs are written as five rows of ASCII art (`#` is lit) and converted to
//! [`DigitPattern`]s at compile time.

use crate::{Error, Result};

/// Columns (and rows) of the matrix.
pub const SIDE: usize = 5;

/// LEDs on the matrix.
pub const LED_COUNT: usize = SIDE * SIDE;

/// Ten digits, 0 through 9.
pub const DIGIT_COUNT: u8 = 10;

/// One glyph: row-major, row 0 first, [`SIDE`] columns per row.
pub type DigitPattern = [bool; LED_COUNT];

/// Looks up the glyph for `digit`.
///
/// # Errors
///
/// Returns [`Error::DigitOutOfRange`] if `digit` is not in `0..=9`. Callers are expected to
/// validate first; the renderer treats this as "draw nothing".
///
/// ```rust
/// use digit_panel::digit_pattern::{pattern_for, SIDE};
///
/// let one = pattern_for(1).unwrap();
/// // Middle column of the top row is lit.
/// assert!(one[2]);
/// assert!(!one[0]);
/// assert_eq!(one.len(), SIDE * SIDE);
/// assert!(pattern_for(10).is_err());
/// ```
pub fn pattern_for(digit: u8) -> Result<&'static DigitPattern> {
    DIGIT_PATTERNS
        .get(usize::from(digit))
        .ok_or(Error::DigitOutOfRange(digit))
}

/// The full table, indexed by digit.
pub static DIGIT_PATTERNS: [DigitPattern; DIGIT_COUNT as usize] = [
    glyph([b".###.", b"#...#", b"#...#", b"#...#", b".###."]),
    glyph([b"..#..", b".##..", b"..#..", b"..#..", b".###."]),
    glyph([b".###.", b"#...#", b"...#.", b"..#..", b"#####"]),
    glyph([b"####.", b"....#", b".###.", b"....#", b"####."]),
    glyph([b"...#.", b"..##.", b".#.#.", b"#####", b"...#."]),
    glyph([b"#####", b"#....", b"####.", b"....#", b"####."]),
    glyph([b".###.", b"#....", b"####.", b"#...#", b".###."]),
    glyph([b"#####", b"...#.", b"..#..", b".#...", b".#..."]),
    glyph([b".###.", b"#...#", b".###.", b"#...#", b".###."]),
    glyph([b".###.", b"#...#", b".####", b"....#", b".###."]),
];

#[expect(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    reason = "const fn over fixed-size arrays; indexes are bounded by SIDE"
)]
const fn glyph(rows: [&[u8; SIDE]; SIDE]) -> DigitPattern {
    let mut pattern = [false; LED_COUNT];
    let mut row_index = 0;
    while row_index < SIDE {
        let mut column_index = 0;
        while column_index < SIDE {
            let cell = rows[row_index][column_index];
            assert!(cell == b'#' || cell == b'.', "glyph cells must be '#' or '.'");
            pattern[row_index * SIDE + column_index] = cell == b'#';
            column_index += 1;
        }
        row_index += 1;
    }
    pattern
}
