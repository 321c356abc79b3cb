use thiserror::Error;

/// Exit code for any failure other than an unbalanced roster.
pub const EXIT_FAILURE: u8 = 1;

/// Exit code for a roster whose experienced and inexperienced counts differ.
pub const EXIT_UNBALANCED_ROSTER: u8 = 2;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON roster: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Roster error: {0}")]
    Roster(String),

    // Data normalization errors
    #[error("Invalid height '{height}' for player {player}")]
    HeightParse { player: String, height: String },

    #[error(
        "Number of players trained and untrained are not equal \
         (experienced: {trained}, inexperienced: {untrained})"
    )]
    UnbalancedRoster { trained: usize, untrained: usize },

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a roster loading error with context
    pub fn roster_error(msg: impl Into<String>) -> Self {
        Self::Roster(msg.into())
    }

    /// Create a height parse error for the given player
    pub fn height_parse(player: impl Into<String>, height: impl Into<String>) -> Self {
        Self::HeightParse {
            player: player.into(),
            height: height.into(),
        }
    }

    /// Create an unbalanced roster error
    pub fn unbalanced_roster(trained: usize, untrained: usize) -> Self {
        Self::UnbalancedRoster { trained, untrained }
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a terminal error with context
    pub fn terminal_error(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Process exit code for this error.
    ///
    /// An unbalanced roster gets its own code so scripts can tell bad data
    /// apart from I/O or configuration failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::UnbalancedRoster { .. } => EXIT_UNBALANCED_ROSTER,
            _ => EXIT_FAILURE,
        }
    }

    /// Check if error comes from the roster data itself rather than the environment
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            AppError::HeightParse { .. } | AppError::UnbalancedRoster { .. } | AppError::Roster(_)
        )
    }
}
