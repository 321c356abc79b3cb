// src/main.rs
use clap::Parser;
use std::io::stdout;
use std::process::ExitCode;
use team_stats::app;
use team_stats::cli::{Args, is_config_update};
use team_stats::commands;
use team_stats::config::Config;
use team_stats::error::AppError;
use team_stats::logging::setup_logging;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("{}", commands::error_report(&e));
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), AppError> {
    let args = Args::parse();

    // Validate argument combinations
    commands::validate_args(&args)?;

    // Handle version flag first
    if args.version {
        commands::handle_version_command();
        return Ok(());
    }

    // Configuration updates must work even when the current file is invalid
    if is_config_update(&args) {
        return commands::handle_config_update_command(&args);
    }

    if args.list_config {
        return commands::handle_list_config_command();
    }

    let config = Config::load()?;

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = setup_logging(&args, &config)?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let registry = app::load_registry(&args, &config)?;

    if args.once {
        return commands::handle_once_command(&registry, &mut stdout());
    }

    app::run_interactive(&args, &config, &registry)
}
