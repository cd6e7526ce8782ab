//! Build automation tasks for the digit panel.
//!
//! Run with: `cargo xtask <command>`

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::{Command, ExitCode};

const BIN_NAME: &str = "digit_panel";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for the digit panel", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: host tests, doc tests, firmware for both boards, docs
    CheckAll,
    /// Build the firmware for one board
    Build {
        #[arg(long, default_value = "pico1")]
        board: Board,
        #[arg(long)]
        release: bool,
    },
    /// Build a UF2 firmware file for drag-and-drop flashing
    Uf2 {
        #[arg(long, default_value = "pico1")]
        board: Board,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Board {
    Pico1,
    Pico2,
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Board::Pico1 => write!(f, "pico1"),
            Board::Pico2 => write!(f, "pico2"),
        }
    }
}

impl Board {
    fn target(self) -> &'static str {
        match self {
            Board::Pico1 => "thumbv6m-none-eabi",
            Board::Pico2 => "thumbv8m.main-none-eabihf",
        }
    }

    fn features(self) -> String {
        format!("{self},arm,defmt")
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::CheckAll => check_all(),
        Commands::Build { board, release } => build_firmware(board, release),
        Commands::Uf2 { board } => build_uf2(board),
    }
}

fn check_all() -> ExitCode {
    let workspace_root = workspace_root();

    println!("{}", "==> Running host tests (lib, integration, doc)...".cyan());
    let mut host_test_cmd = Command::new("cargo");
    host_test_cmd
        .current_dir(&workspace_root)
        .args(["test", "--package", "digit-panel"]);
    if let Some(target) = host_target() {
        println!(
            "  {}",
            format!("Using host target: {target}").bright_black()
        );
        host_test_cmd.arg("--target").arg(target);
    }
    if !run_command(&mut host_test_cmd) {
        return ExitCode::FAILURE;
    }

    for board in [Board::Pico1, Board::Pico2] {
        println!("\n{}", format!("==> Building firmware ({board})...").cyan());
        if !cargo_build_firmware(board, false) {
            return ExitCode::FAILURE;
        }
    }

    println!("\n{}", "==> Building documentation...".cyan());
    if !run_command(Command::new("cargo").current_dir(&workspace_root).args([
        "doc",
        "--lib",
        "--target",
        Board::Pico2.target(),
        "--no-deps",
        "--features",
        &Board::Pico2.features(),
    ])) {
        return ExitCode::FAILURE;
    }

    println!("\n{}", "==> All checks passed!".green().bold());
    ExitCode::SUCCESS
}

fn build_firmware(board: Board, release: bool) -> ExitCode {
    if cargo_build_firmware(board, release) {
        println!("{}", "Build successful!".green());
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cargo_build_firmware(board: Board, release: bool) -> bool {
    let features = board.features();
    println!(
        "{}",
        format!("Building firmware with features: {features}").cyan()
    );

    let mut cmd = Command::new("cargo");
    cmd.current_dir(workspace_root()).args([
        "build",
        "--bin",
        BIN_NAME,
        "--target",
        board.target(),
        "--features",
        &features,
    ]);
    if release {
        cmd.arg("--release");
    }
    run_command(&mut cmd)
}

fn build_uf2(board: Board) -> ExitCode {
    let workspace_root = workspace_root();
    let target = board.target();

    println!("{}", format!("Building UF2 for {board}").cyan());
    println!("  Features: {}", board.features().bright_black());
    println!("  Target: {}", target.bright_black());

    if !cargo_build_firmware(board, true) {
        return ExitCode::FAILURE;
    }

    let elf_path = format!("target/{target}/release/{BIN_NAME}");
    let uf2_path = format!("{BIN_NAME}-{board}.uf2");

    println!("\n{}", "Converting to UF2 format...".cyan());

    if run_command(
        Command::new("elf2uf2-rs")
            .current_dir(&workspace_root)
            .args([&elf_path, &uf2_path]),
    ) {
        println!("{}", format!("UF2 created: {uf2_path}").green().bold());
        println!("{}", "Ready to drag-and-drop to your Pico!".bright_black());
        ExitCode::SUCCESS
    } else {
        println!(
            "{}",
            "Note: Install elf2uf2-rs with: cargo install elf2uf2-rs".yellow()
        );
        ExitCode::FAILURE
    }
}

fn workspace_root() -> std::path::PathBuf {
    // `cargo xtask` runs from the workspace root
    std::env::current_dir().expect("Failed to get current directory")
}

fn host_target() -> Option<String> {
    let output = Command::new("rustc").arg("-vV").output().ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("host: "))
        .map(|host| host.trim().to_string())
}

fn run_command(cmd: &mut Command) -> bool {
    match cmd.status() {
        Ok(status) => status.success(),
        Err(e) => {
            eprintln!("{}", format!("Failed to execute command: {e}").red());
            false
        }
    }
}
