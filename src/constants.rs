//! Application-wide constants
//!
//! Keeps menu text, file names and environment variable names in one place.

/// Directory name used under the platform config directory
pub const APP_DIR_NAME: &str = "team_stats";

/// Default log file name
pub const LOG_FILE_NAME: &str = "team_stats.log";

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Terminal title shown while the menu is running
pub const TERMINAL_TITLE: &str = "BASKETBALL TEAM STATS";

/// Separator used when guardian names are joined in raw records
pub const GUARDIAN_SEPARATOR: &str = " and ";

/// Experience flag value that marks an experienced player
pub const EXPERIENCED_FLAG: &str = "YES";

/// Menu text
pub mod menu {
    pub const TITLE: &str = "BASKETBALL TEAM STATS TOOL";
    pub const HEADING: &str = "---- MENU----";
    pub const CHOICES: &str = "Here are your choices:";
    pub const LIST_TEAMS: &str = "List all teams";
    pub const QUIT: &str = "Quit the program";
    pub const PROMPT: &str = "Enter an option: ";
    pub const CONTINUE_PROMPT: &str = "Press ENTER to continue...";
    pub const FAREWELL: &str = "Bye :)";

    /// Letters used to label menu options, by position
    pub const OPTION_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for roster file override
    pub const ROSTER: &str = "TEAM_STATS_ROSTER";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "TEAM_STATS_LOG_FILE";

    /// Environment variable to turn screen clearing off (`0` or `false`)
    pub const CLEAR_SCREEN: &str = "TEAM_STATS_CLEAR_SCREEN";
}
