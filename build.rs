use std::{
    env, fs,
    path::{Path, PathBuf},
};

// Same parsers the crate applies to the exported values.
#[path = "src/env_text.rs"]
mod env_text;

const DEFAULT_FOREGROUND: &str = "0,0,20";
const DEFAULT_STATUS_DRIVE: &str = "pwm";

fn main() {
    // 1) Handle memory.x based on target
    let target = env::var("TARGET").unwrap_or_default();
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo always sets OUT_DIR"));

    if target.starts_with("thumbv8m") {
        copy_memory_x("memory-pico2.x", &out_dir);
    } else if target.starts_with("thumbv6m") {
        copy_memory_x("memory-pico1.x", &out_dir);
    }

    // 2) Load optional env files
    let _ = dotenvy::from_filename(".env");
    load_home_env(".pico.env");

    // 3) Validate, falling back to the stock values
    let foreground = checked_or_default("PANEL_FOREGROUND", DEFAULT_FOREGROUND, |value| {
        env_text::parse_rgb_channels(value).is_some()
    });
    let status_drive = checked_or_default("PANEL_STATUS_DRIVE", DEFAULT_STATUS_DRIVE, |value| {
        env_text::parse_drive_keyword(value).is_some()
    });

    // 4) Expose as compile-time constants (src/config.rs reads both with `env!`)
    println!("cargo:rustc-env=PANEL_FOREGROUND={foreground}");
    println!("cargo:rustc-env=PANEL_STATUS_DRIVE={status_drive}");

    println!("cargo:rerun-if-env-changed=PANEL_FOREGROUND");
    println!("cargo:rerun-if-env-changed=PANEL_STATUS_DRIVE");
    println!("cargo:rerun-if-changed=.env");
}

fn copy_memory_x(file: &str, out_dir: &Path) {
    let memory_x =
        fs::read_to_string(file).unwrap_or_else(|err| panic!("Failed to read {file}: {err}"));
    fs::write(out_dir.join("memory.x"), memory_x).expect("Failed to write memory.x");
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed={file}");
}

fn load_home_env(file: &str) {
    let home = match env::var_os("USERPROFILE").or_else(|| env::var_os("HOME")) {
        Some(path) => PathBuf::from(path),
        None => return,
    };
    let _ = dotenvy::from_path(home.join(file));
}

fn checked_or_default(key: &str, default: &str, is_valid: impl Fn(&str) -> bool) -> String {
    match env::var(key) {
        Ok(value) if is_valid(value.trim()) => value.trim().to_string(),
        Ok(value) => {
            println!("cargo:warning={key}={value:?} is not valid; using {default:?}");
            default.to_string()
        }
        Err(_) => default.to_string(),
    }
}
