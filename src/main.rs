//! Listedit - An interactive terminal editor for a list of values.
//!
//! # Usage
//!
//! ```bash
//! listedit
//! listedit --items 1,2,3 --highlight cyan
//! listedit --type text --items apple,pear
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use listedit::app::{App, Outcome, wait_for_keypress};
use listedit::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use listedit::element::{Element, ElementKind, parse_items};
use listedit::report::format_report;
use listedit::ui::style::HighlightColor;

/// Exit status after Ctrl+C, matching a shell's SIGINT convention.
const INTERRUPTED_EXIT: u8 = 130;

/// An interactive terminal editor for a list of values
#[derive(Parser, Debug)]
#[command(name = "listedit", version, about, long_about = None)]
struct Cli {
    /// Comma-separated initial values [default: 26,10,-13,17,3]
    #[arg(long, value_name = "LIST", allow_hyphen_values = true)]
    items: Option<String>,

    /// Element type of the list
    #[arg(long = "type", value_enum, value_name = "TYPE")]
    element: Option<ElementKind>,

    /// Color of the item under the cursor
    #[arg(long, value_enum)]
    highlight: Option<HighlightColor>,

    /// Skip the key binding screen
    #[arg(long)]
    no_help: bool,

    /// Exit right after printing the report instead of waiting for a key
    #[arg(long)]
    no_pause: bool,

    /// Write log output to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

/// Edit a list of `T`, print the report and return the exit status.
fn run_session<T: Element>(flags: &ConfigFlags, kind: ElementKind) -> Result<ExitCode> {
    let list = flags.items.as_deref().unwrap_or_else(|| kind.default_items());
    let mut items = parse_items::<T>(list).context("Invalid --items")?;
    let snapshot = items.clone();

    let outcome = App::new()
        .with_highlight(flags.highlight.unwrap_or_default())
        .with_help(!flags.no_help)
        .run(&mut items)
        .context("Editor error")?;

    if outcome == Outcome::Interrupted {
        info!("session interrupted, skipping report");
        return Ok(ExitCode::from(INTERRUPTED_EXIT));
    }

    println!("{}", format_report(&snapshot, &items));
    if !flags.no_pause {
        wait_for_keypress()?;
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.log_file.as_deref())?;

    let kind = effective.element.unwrap_or_default();
    info!(%kind, "starting");
    match kind {
        ElementKind::Int => run_session::<i64>(&effective, kind),
        ElementKind::Float => run_session::<f64>(&effective, kind),
        ElementKind::Text => run_session::<String>(&effective, kind),
        ElementKind::Bool => run_session::<bool>(&effective, kind),
    }
}
