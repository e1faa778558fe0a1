//! Padboard - controller-driven on-screen keyboard
//!
//! Runs a name entry prompt in the terminal: arrows move the cursor around a
//! localized key grid, decide enters the selected key.

mod config;
mod core;
mod frontend;
mod keyboard;
mod sound;

use anyhow::Result;
use clap::{Parser as ClapParser, Subcommand};
use std::path::PathBuf;

use crate::core::{EntryOutcome, NameEntry};
use crate::frontend::{events::apply_events, Frontend, TuiFrontend};
use crate::keyboard::validate::validate_table;
use crate::keyboard::{CellWidth, Keyboard, LayoutRegistry, Metrics, Mode};

#[derive(ClapParser)]
#[command(name = "padboard")]
#[command(about = "Controller-driven on-screen keyboard", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Keyboard page to start on (see `padboard layouts`)
    #[arg(short, long)]
    mode: Option<Mode>,

    /// Page the page key flips to (defaults to the start page's partner)
    #[arg(short, long)]
    next_mode: Option<Mode>,

    /// Text shown on the confirm key
    #[arg(long)]
    done_text: Option<String>,

    /// Key already entered when the prompt opens (repeat for more)
    #[arg(long = "key", value_name = "KEY")]
    keys: Vec<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List keyboard modes with their labels
    Layouts,
    /// Check the built-in layouts and report problems
    Validate,
}

fn main() -> Result<()> {
    // Initialize logging to file (use RUST_LOG env var to control level, e.g. RUST_LOG=debug)
    // TUI apps can't log to stdout, so we write to a file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("padboard.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    let cli = Cli::parse();

    if let Some(command) = cli.command {
        match command {
            Commands::Layouts => list_layouts()?,
            Commands::Validate => {
                if !validate_layouts() {
                    std::process::exit(1);
                }
            }
        }
        return Ok(());
    }

    let mut config = config::Config::load(cli.config.as_deref())?;
    if let Some(mode) = cli.mode {
        config.keyboard.mode = mode;
        // An explicit start page picks its own partner unless told otherwise
        config.keyboard.next_mode = None;
    }
    if cli.next_mode.is_some() {
        config.keyboard.next_mode = cli.next_mode;
    }
    if cli.done_text.is_some() {
        config.keyboard.done_text = cli.done_text;
    }

    match run_tui(&config, cli.keys)? {
        Some(EntryOutcome::Confirmed(name)) => println!("{}", name),
        Some(EntryOutcome::Cancelled) => println!("(cancelled)"),
        None => {}
    }

    Ok(())
}

fn list_layouts() -> Result<()> {
    let registry = LayoutRegistry::global()?;
    println!("{:<14} {:<10} {:<14} confirm", "mode", "label", "next page");
    for mode in Mode::ALL {
        println!(
            "{:<14} {:<10} {:<14} {}",
            mode.name(),
            registry.of(mode).label,
            mode.partner().name(),
            mode.confirm_text().as_str()
        );
    }
    Ok(())
}

/// Print every layout issue; returns false when any is an error
fn validate_layouts() -> bool {
    let mut errors = 0;
    let mut warnings = 0;

    for (mode, issue) in validate_table(&keyboard::layouts::BUILTIN_LAYOUTS) {
        if issue.is_error() {
            eprintln!("✗ Error: {} ({}): {}", mode, issue.layout, issue.message);
            errors += 1;
        } else {
            println!("⚠ Warning: {} ({}): {}", mode, issue.layout, issue.message);
            warnings += 1;
        }
    }

    if errors == 0 && warnings == 0 {
        println!("✓ {} layouts are valid with no issues", Mode::COUNT);
    } else {
        if errors > 0 {
            eprintln!("\n✗ Found {} error(s)", errors);
        }
        if warnings > 0 {
            println!("⚠ Found {} warning(s)", warnings);
        }
    }

    errors == 0
}

/// Run the name prompt until it is confirmed, cancelled or quit
fn run_tui(config: &config::Config, keys: Vec<String>) -> Result<Option<EntryOutcome>> {
    let registry = LayoutRegistry::global()?;
    let sound = sound::sound_from_config(&config.sound);
    let mode = config.keyboard.mode;
    let next_mode = config.keyboard.resolved_next_mode();
    tracing::info!("Starting name entry on {} (next page {})", mode, next_mode);

    let mut frontend = TuiFrontend::new(&config.ui)?;
    let mut keyboard = Keyboard::new(
        registry,
        frontend.keyboard_area(),
        config.keyboard.resolved_done_text(),
        sound,
    )
    .with_metrics(Metrics::terminal())
    .with_measure(Box::new(CellWidth));
    keyboard.set_mode(mode, next_mode);

    let mut entry = NameEntry::new(keyboard, config.keyboard.max_chars).with_initial(keys);

    let outcome = loop {
        let events = frontend.poll_events()?;
        if apply_events(&mut entry, &events) {
            break None;
        }

        frontend.render(&mut entry)?;

        if let Some(outcome) = entry.outcome() {
            break Some(outcome.clone());
        }
    };

    frontend.cleanup()?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_modes() {
        let cli = Cli::try_parse_from(["padboard", "--mode", "hiragana", "--done-text", "<OK>"]).unwrap();
        assert_eq!(cli.mode, Some(Mode::Hiragana));
        assert_eq!(cli.next_mode, None);
        assert_eq!(cli.done_text.as_deref(), Some("<OK>"));

        assert!(cli.keys.is_empty());

        assert!(Cli::try_parse_from(["padboard", "--mode", "klingon"]).is_err());
    }

    #[test]
    fn test_cli_repeated_keys_stay_whole() {
        let cli = Cli::try_parse_from(["padboard", "--key", "$A", "--key", "b"]).unwrap();
        assert_eq!(cli.keys, vec!["$A".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_cli_subcommands() {
        let cli = Cli::try_parse_from(["padboard", "validate"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Validate)));
        let cli = Cli::try_parse_from(["padboard", "layouts"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Layouts)));
    }

    #[test]
    fn test_builtin_layouts_validate() {
        assert!(validate_layouts());
    }
}
