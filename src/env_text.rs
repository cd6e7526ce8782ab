//! Byte-level parsers for the textual build-time overrides.
//!
//! `build.rs` includes this file too, so a value it exports always parses here.

/// Status LED drive named by `PANEL_STATUS_DRIVE`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DriveKeyword {
    Pwm,
    Gpio,
}

/// Parses `"pwm"` or `"gpio"` (ASCII case-insensitive).
#[must_use]
pub const fn parse_drive_keyword(text: &str) -> Option<DriveKeyword> {
    if ascii_eq_ignore_case(text.as_bytes(), b"pwm") {
        Some(DriveKeyword::Pwm)
    } else if ascii_eq_ignore_case(text.as_bytes(), b"gpio") {
        Some(DriveKeyword::Gpio)
    } else {
        None
    }
}

#[expect(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    reason = "index is checked against both lengths"
)]
const fn ascii_eq_ignore_case(left: &[u8], right: &[u8]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let mut i = 0;
    while i < left.len() {
        if left[i].to_ascii_lowercase() != right[i].to_ascii_lowercase() {
            return false;
        }
        i += 1;
    }
    true
}

/// Parses `"r,g,b"` into three channels. Each channel is one or more ASCII digits with a value
/// in `0..=255`; spaces are ignored, signs are not accepted.
#[must_use]
#[expect(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    reason = "const byte scanner; index is checked against len and the channel accumulator \
              is checked against 255 after every digit"
)]
pub const fn parse_rgb_channels(text: &str) -> Option<[u8; 3]> {
    let bytes = text.as_bytes();
    let mut channels = [0_u16; 3];
    let mut channel_index = 0;
    let mut seen_digit = false;
    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        match byte {
            b'0'..=b'9' => {
                channels[channel_index] = channels[channel_index] * 10 + (byte - b'0') as u16;
                if channels[channel_index] > 255 {
                    return None;
                }
                seen_digit = true;
            }
            b',' => {
                if !seen_digit || channel_index == 2 {
                    return None;
                }
                channel_index += 1;
                seen_digit = false;
            }
            b' ' => {}
            _ => return None,
        }
        i += 1;
    }
    if channel_index != 2 || !seen_digit {
        return None;
    }
    Some([
        channels[0] as u8,
        channels[1] as u8,
        channels[2] as u8,
    ])
}
