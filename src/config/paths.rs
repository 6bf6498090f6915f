//! Path management for restdesk
//!
//! Resolves where settings, the optional transcript and the TUI log file live.
//!
//! ## Path Resolution Order
//!
//! 1. `RESTDESK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories::ProjectDirs`
//!    (`~/.config/restdesk` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::RestdeskError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "RESTDESK_DATA_DIR";

/// Manages all paths used by restdesk
#[derive(Debug, Clone)]
pub struct RestdeskPaths {
    /// Base directory for all restdesk files
    base_dir: PathBuf,
}

impl RestdeskPaths {
    /// Create a new RestdeskPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, RestdeskError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create RestdeskPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the JSONL activity transcript
    pub fn transcript_file(&self) -> PathBuf {
        self.base_dir.join("transcript.jsonl")
    }

    /// Get the path tracing output is redirected to while the TUI runs
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("restdesk.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), RestdeskError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RestdeskError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, RestdeskError> {
    ProjectDirs::from("", "", "restdesk")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| RestdeskError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RestdeskPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.transcript_file(),
            temp_dir.path().join("transcript.jsonl")
        );
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = RestdeskPaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("restdesk");
        let paths = RestdeskPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();

        assert!(nested.exists());
    }
}
