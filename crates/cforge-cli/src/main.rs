//! # cforge CLI
//!
//! C/C++ project scaffolding with modern CMake.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Pick a mode: `--name` present → non-interactive; absent → wizard.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! |  0   | Success                                   |
//! |  1   | Validation failure or I/O error           |
//! |  2   | Argument parse failure (clap convention)  |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod config;
mod error;
mod generate;
mod logging;
mod output;
#[cfg(feature = "interactive")]
mod prompts;

fn main() -> ExitCode {
    // Load .env before anything else — including tracing init.
    // Silently ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    // clap handles --help / --version and exits automatically; errors here
    // are argument-parse failures (exit 2).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // `Error::exit` honours clap's conventions: `--help` / `--version`
        // print to stdout and exit 0, genuine parse errors print to stderr
        // and exit 2.
        Err(e) => e.exit(),
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let app_config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, false),
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &app_config);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    let verbose = cli.global.verbose > 0;
    match run(cli, app_config, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => handle_error(e, verbose),
    }
}

/// Pick the mode and run one generation.
#[instrument(skip_all)]
fn run(cli: Cli, app_config: AppConfig, output: OutputManager) -> CliResult<()> {
    let config = if cli.project.name.is_some() {
        generate::build_config(&cli.project, &app_config)
    } else {
        interactive_config(&app_config, &output)?
    };

    generate::execute(config, &cli.global, &output)
}

#[cfg(feature = "interactive")]
fn interactive_config(
    app_config: &AppConfig,
    output: &OutputManager,
) -> CliResult<cforge_core::domain::ProjectConfig> {
    prompts::run_wizard(app_config, output)
}

#[cfg(not(feature = "interactive"))]
fn interactive_config(
    _app_config: &AppConfig,
    _output: &OutputManager,
) -> CliResult<cforge_core::domain::ProjectConfig> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    // 1. Emit a structured log event at the right severity.
    err.log();

    // 2. Print a user-friendly message. We write directly to stderr so the
    //    message appears even when stdout is redirected. Colour is disabled
    //    when stderr is not a TTY (same logic as logging.rs).
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        // Clap's internal consistency check — catches missing values, conflicts, etc.
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }
}
