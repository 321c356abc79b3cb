use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use crate::stats;
use crate::teams::TeamRegistry;
use std::io::Write;
use std::path::Path;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.new_roster_path.is_some() && args.clear_roster_path {
        return Err(AppError::config_error(
            "Cannot use both --set-roster and --clear-roster simultaneously",
        ));
    }
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use both --set-log-file and --clear-log-file simultaneously",
        ));
    }
    Ok(())
}

/// Handles the --version command.
pub fn handle_version_command() {
    println!("{} {}", crate::NAME, crate::VERSION);
}

/// Handles the --list-config command.
pub fn handle_list_config_command() -> Result<(), AppError> {
    Config::display()
}

/// Applies configuration changes requested on the command line.
///
/// Returns a message for each change made.
pub fn apply_config_update(config: &mut Config, args: &Args) -> Vec<String> {
    let mut messages = Vec::new();

    if let Some(new_roster) = &args.new_roster_path {
        config.roster_path = Some(new_roster.clone());
        messages.push(format!("Roster file set to {new_roster}."));
    } else if args.clear_roster_path {
        config.roster_path = None;
        messages.push("Roster file cleared. Using the built-in roster.".to_string());
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
        messages.push(format!("Log file set to {new_log_path}."));
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        messages.push("Custom log file path cleared. Using default location.".to_string());
    }

    messages
}

/// Updates the config file at `path` from the arguments and saves it.
///
/// Returns the saved config and a message for each change. Nothing is
/// reported when validation or saving fails.
pub fn update_config_at(path: &str, args: &Args) -> Result<(Config, Vec<String>), AppError> {
    // Start from what is on disk, not from environment overrides
    let mut config = if Path::new(path).exists() {
        Config::load_from_path(path)?
    } else {
        Config::default()
    };

    let messages = apply_config_update(&mut config, args);
    config.validate()?;
    config.save_to_path(path)?;
    Ok((config, messages))
}

/// Handles configuration update commands (--set-roster, --clear-roster,
/// --set-log-file, --clear-log-file).
pub fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let (_, messages) = update_config_at(&Config::get_config_path(), args)?;
    for message in messages {
        println!("{message}");
    }
    println!("Config updated successfully!");
    Ok(())
}

/// Every team's report in registry order, separated by blank lines.
pub fn render_all_reports(registry: &TeamRegistry) -> String {
    registry
        .iter()
        .map(stats::team_report)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Handles the --once command: print every team's stats and exit.
pub fn handle_once_command<W: Write>(registry: &TeamRegistry, out: &mut W) -> Result<(), AppError> {
    tracing::info!("Printing stats for {} teams", registry.len());
    write!(out, "{}", render_all_reports(registry))?;
    out.flush()?;
    Ok(())
}

/// User-facing text for a fatal error.
pub fn error_report(error: &AppError) -> String {
    match error {
        AppError::UnbalancedRoster { trained, untrained } => format!(
            "\nERROR: Number of players trained and untrained are not equal.\n \
             Experienced players: ({trained})\n \
             Inexperienced players: ({untrained})\n \
             Please check the data and try again.\n"
        ),
        other => format!("Error: {other}"),
    }
}
