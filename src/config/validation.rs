use crate::error::AppError;
use crate::roster::RosterFormat;
use std::path::Path;

/// Validates the configuration settings
///
/// # Arguments
/// * `roster_path` - Optional roster file path to validate
/// * `log_file_path` - Optional log file path to validate
///
/// # Validation Rules
/// - If a roster path is provided, it cannot be empty and must end in .json or .toml
/// - If a log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    roster_path: &Option<String>,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if let Some(roster) = roster_path {
        if roster.is_empty() {
            return Err(AppError::config_error("Roster path cannot be empty"));
        }
        RosterFormat::from_path(Path::new(roster))
            .map_err(|e| AppError::config_error(e.to_string()))?;
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
