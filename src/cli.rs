use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use std::path::PathBuf;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// True when the arguments ask to change the stored configuration.
pub fn is_config_update(args: &Args) -> bool {
    args.new_roster_path.is_some()
        || args.clear_roster_path
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Basketball Team Stats Tool
///
/// Splits a roster into experienced and inexperienced players, deals them evenly
/// across the teams and lets you browse each team's stats.
///
/// In interactive mode (default):
/// - Choose A to list the teams, then a team's letter to see its stats
/// - Choose B to quit
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Roster file (.json or .toml) with team names and players.
    /// Overrides the configured roster; the built-in roster is used when neither is set.
    #[arg(short = 'r', long = "roster", value_name = "PATH")]
    pub roster: Option<PathBuf>,

    /// Print every team's stats once and exit. Useful for scripts.
    #[arg(short, long)]
    pub once: bool,

    /// Never clear the terminal between menu screens.
    #[arg(long = "no-clear", help_heading = "Display Options")]
    pub no_clear: bool,

    /// Set the roster file stored in the config.
    #[arg(long = "set-roster", value_name = "PATH", help_heading = "Configuration")]
    pub new_roster_path: Option<String>,

    /// Clear the stored roster file. Reverts to the built-in roster.
    #[arg(long = "clear-roster", help_heading = "Configuration")]
    pub clear_roster_path: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", value_name = "PATH", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Enable debug mode: logs are also written to stdout and the screen is never cleared.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
