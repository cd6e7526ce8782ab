//! Panel settings.
//!
//! [`PanelConfig::DEFAULT`] holds the stock values. `build.rs` exports two optional overrides
//! as compile-time environment variables, read by [`PanelConfig::from_build_env`]:
//!
//! - `PANEL_FOREGROUND`: digit color as `"r,g,b"` (each 0-255), for example `"0,0,20"`.
//! - `PANEL_STATUS_DRIVE`: `"pwm"` (dimmed, the default) or `"gpio"` (plain on/off).
//!
//! Both may also come from a `.env` file. Values that do not parse fall back to the defaults.

use crate::debounce::DEBOUNCE_WINDOW;
use crate::env_text::{DriveKeyword, parse_drive_keyword, parse_rgb_channels};
use crate::matrix_renderer::Percent;
use crate::millis::Milliseconds;
use crate::pixel_bus::Rgb;
use crate::status_blinker::StatusDrive;

/// How often the status LED toggles.
pub const BLINK_PERIOD: Milliseconds = Milliseconds::from_millis(100);

/// Matrix brightness applied to every color before it is sent.
pub const BRIGHTNESS: Percent = Percent::new(10);

/// Digit color before dimming: a faint blue.
pub const FOREGROUND: Rgb = Rgb::new(0, 0, 20);

const FOREGROUND_ENV: &str = env!("PANEL_FOREGROUND");
const STATUS_DRIVE_ENV: &str = env!("PANEL_STATUS_DRIVE");

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PanelConfig {
    /// Minimum time between two accepted presses of one button.
    pub debounce_window: Milliseconds,
    pub blink_period: Milliseconds,
    pub brightness: Percent,
    pub foreground: Rgb,
    pub status_drive: StatusDrive,
}

impl PanelConfig {
    pub const DEFAULT: Self = Self {
        debounce_window: DEBOUNCE_WINDOW,
        blink_period: BLINK_PERIOD,
        brightness: BRIGHTNESS,
        foreground: FOREGROUND,
        status_drive: StatusDrive::DIMMED,
    };

    /// [`DEFAULT`](Self::DEFAULT) with the build-time overrides applied.
    #[must_use]
    pub const fn from_build_env() -> Self {
        Self::DEFAULT.with_overrides(FOREGROUND_ENV, STATUS_DRIVE_ENV)
    }

    /// Applies textual overrides; an empty or malformed value keeps the current setting.
    ///
    /// ```rust
    /// use digit_panel::config::PanelConfig;
    /// use digit_panel::pixel_bus::Rgb;
    /// use digit_panel::status_blinker::StatusDrive;
    ///
    /// const CONFIG: PanelConfig = PanelConfig::DEFAULT.with_overrides("200,0,0", "gpio");
    /// assert_eq!(CONFIG.foreground, Rgb::new(200, 0, 0));
    /// assert_eq!(CONFIG.status_drive, StatusDrive::Digital);
    /// ```
    #[must_use]
    pub const fn with_overrides(self, foreground: &str, status_drive: &str) -> Self {
        let mut config = self;
        if let Some(color) = parse_rgb(foreground) {
            config.foreground = color;
        }
        if let Some(drive) = parse_status_drive(status_drive) {
            config.status_drive = drive;
        }
        config
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parses `"pwm"` or `"gpio"` (ASCII case-insensitive).
#[must_use]
pub const fn parse_status_drive(text: &str) -> Option<StatusDrive> {
    match parse_drive_keyword(text) {
        Some(DriveKeyword::Pwm) => Some(StatusDrive::DIMMED),
        Some(DriveKeyword::Gpio) => Some(StatusDrive::Digital),
        None => None,
    }
}

/// Parses `"r,g,b"` with decimal channels in `0..=255`. Spaces are ignored; signs are rejected.
#[must_use]
pub const fn parse_rgb(text: &str) -> Option<Rgb> {
    match parse_rgb_channels(text) {
        Some([r, g, b]) => Some(Rgb::new(r, g, b)),
        None => None,
    }
}
