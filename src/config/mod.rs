//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the auth service URL, the request timeout and the last email
//! used to sign in.

mod error;

pub use error::ConfigError;

use crate::error::AppResult;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/auth-tui";
const DEFAULT_API_URL: &str = "http://localhost:7777";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: String,
    pub request_timeout: Duration,
    pub last_email: Option<String>,
    file_path: Option<PathBuf>,
    // URL kept on disk while the run uses an override
    saved_api_url: Option<String>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub last_email: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding default values.
    ///
    pub fn new() -> Config {
        Config {
            file_path: None,
            api_url: default_api_url(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            last_email: None,
            saved_api_url: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. If no file exists yet, write one holding the
    /// defaults so it can be edited.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.apply(data);
        } else {
            self.save()?;
        }

        self.validate()?;
        Ok(())
    }

    /// Replace the API URL for the current run, validating it first. Saving
    /// keeps the URL that was loaded from the file.
    ///
    pub fn set_api_url(&mut self, api_url: &str) -> AppResult<()> {
        let previous = std::mem::replace(&mut self.api_url, api_url.to_string());
        if let Err(e) = self.validate() {
            self.api_url = previous;
            return Err(e.into());
        }
        if self.saved_api_url.is_none() {
            self.saved_api_url = Some(previous);
        }
        Ok(())
    }

    /// Attempt to serialize the configuration data and write it to the disk,
    /// returning any unrecoverable errors.
    ///
    pub fn save(&self) -> AppResult<()> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let content = serde_yaml::to_string(&self.spec())
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    fn apply(&mut self, data: FileSpec) {
        self.api_url = data.api_url;
        self.saved_api_url = None;
        self.request_timeout = Duration::from_secs(data.request_timeout_secs);
        self.last_email = data.last_email.filter(|email| !email.is_empty());
    }

    fn spec(&self) -> FileSpec {
        FileSpec {
            api_url: self
                .saved_api_url
                .clone()
                .unwrap_or_else(|| self.api_url.clone()),
            request_timeout_secs: self.request_timeout.as_secs(),
            last_email: self.last_email.clone(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.api_url)
            .map_err(|e| ConfigError::InvalidApiUrl(format!("{}: {}", self.api_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidApiUrl(format!(
                "{}: unsupported scheme '{}'",
                self.api_url,
                url.scheme()
            )));
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("auth-tui-test-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = scratch_dir();
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();

        assert!(dir.join(FILE_NAME).exists());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.last_email, None);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_save_and_reload() {
        let dir = scratch_dir();
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        config.last_email = Some("ada@example.com".to_string());
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert_eq!(reloaded.api_url, DEFAULT_API_URL);
        assert_eq!(reloaded.last_email.as_deref(), Some("ada@example.com"));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_api_url_override_not_saved() {
        let dir = scratch_dir();
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        config.set_api_url("https://auth.example.com/v1").unwrap();
        config.set_api_url("https://auth.example.com/v2").unwrap();
        assert_eq!(config.api_url, "https://auth.example.com/v2");
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert_eq!(reloaded.api_url, DEFAULT_API_URL);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = scratch_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "last_email: ''\n").unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.last_email, None);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_invalid_url_rejected() {
        let mut config = Config::new();
        assert!(config.set_api_url("not a url").is_err());
        assert!(config.set_api_url("ftp://example.com").is_err());
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let dir = scratch_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "request_timeout_secs: 0\n").unwrap();

        let mut config = Config::new();
        let result = config.load(dir.to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::InvalidTimeout))
        ));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_save_without_path_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }
}
