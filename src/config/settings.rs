//! User settings for restdesk
//!
//! Holds the API endpoint, request timeout and activity panel preferences.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::RestdeskPaths;
use crate::error::RestdeskError;

/// Public mock API used when nothing else is configured
pub const DEFAULT_API_BASE: &str = "https://jsonplaceholder.typicode.com";

/// User settings for restdesk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the REST API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum number of entries kept in each activity panel
    #[serde(default = "default_activity_limit")]
    pub activity_limit: usize,

    /// Mirror the activity panels to transcript.jsonl
    #[serde(default)]
    pub transcript_enabled: bool,

    /// User id preselected in the post form and the wizard
    #[serde(default = "default_user_id")]
    pub default_user_id: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_activity_limit() -> usize {
    200
}

fn default_user_id() -> u64 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            activity_limit: default_activity_limit(),
            transcript_enabled: false,
            default_user_id: default_user_id(),
        }
    }
}

impl Settings {
    /// Request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &RestdeskPaths) -> Result<Self, RestdeskError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                RestdeskError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                RestdeskError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Check values that serde defaults cannot guard
    pub fn validate(&self) -> Result<(), RestdeskError> {
        let base = self.api_base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(RestdeskError::Config(format!(
                "api_base_url must start with http:// or https://, got '{}'",
                self.api_base_url
            )));
        }
        if self.default_user_id == 0 {
            return Err(RestdeskError::Config(
                "default_user_id must be a positive number".into(),
            ));
        }
        Ok(())
    }

    /// Save settings to disk (write to a temp file, then rename)
    pub fn save(&self, paths: &RestdeskPaths) -> Result<(), RestdeskError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let temp_path = settings_path.with_extension("json.tmp");
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            RestdeskError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&temp_path, contents)
            .map_err(|e| RestdeskError::Io(format!("Failed to write settings file: {}", e)))?;
        std::fs::rename(&temp_path, &settings_path)
            .map_err(|e| RestdeskError::Io(format!("Failed to replace settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE);
        assert_eq!(settings.request_timeout(), Duration::from_secs(10));
        assert!(!settings.transcript_enabled);
        assert_eq!(settings.default_user_id, 1);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RestdeskPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            request_timeout_secs: 3,
            transcript_enabled: true,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.request_timeout_secs, 3);
        assert!(loaded.transcript_enabled);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"transcript_enabled": true}"#).unwrap();
        assert_eq!(loaded.api_base_url, DEFAULT_API_BASE);
        assert_eq!(loaded.activity_limit, 200);
        assert!(loaded.transcript_enabled);
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RestdeskPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"api_base_url": "ftp://example.com"}"#,
        )
        .unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, RestdeskError::Config(_)));
    }
}
