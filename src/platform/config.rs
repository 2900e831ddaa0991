// UNRaf Academy - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::export::ExportFormat;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for UNRaf Academy configuration and data.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/unrafacademy/ or %APPDATA%\UNRafAcademy\config\)
    pub config_dir: PathBuf,

    /// Data directory, home of a user-supplied catalogue.
    pub data_dir: PathBuf,

    /// True when platform dirs could not be determined and the current
    /// directory is used instead.
    pub is_fallback: bool,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    /// Runs before logging is initialised, so nothing is logged here; the
    /// caller reports the result once tracing is up.
    pub fn resolve() -> Self {
        match ProjectDirs::from("", "", constants::APP_ID) {
            Some(proj_dirs) => Self {
                config_dir: proj_dirs.config_dir().to_path_buf(),
                data_dir: proj_dirs.data_dir().to_path_buf(),
                is_fallback: false,
            },
            None => Self {
                config_dir: PathBuf::from("."),
                data_dir: PathBuf::from("."),
                is_fallback: true,
            },
        }
    }

    /// Full path of `config.toml`.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[catalog]` section.
    pub catalog: CatalogSection,
    /// `[output]` section.
    pub output: OutputSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[catalog]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    /// JSON catalogue used instead of the built-in sample.
    pub path: Option<String>,
}

/// `[output]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// "text", "csv" or "json".
    pub format: Option<String>,
    /// Maximum records printed (0 = unlimited).
    pub max_results: Option<usize>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Catalogue file, if one is configured.
    pub catalog_path: Option<PathBuf>,
    /// Default output format.
    pub format: ExportFormat,
    /// Default result limit (0 = unlimited).
    pub max_results: usize,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Log file path.
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            format: ExportFormat::default(),
            max_results: constants::DEFAULT_MAX_RESULTS,
            log_level: None,
            log_file: None,
        }
    }
}

/// Load and validate `config.toml` from the given path.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with a warning.
///
/// Called before logging is initialised, so warnings are returned rather
/// than logged; the caller reports them once tracing is up.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            };
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            };
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let config = validate(raw, &mut warnings);
    (config, warnings)
}

/// Validate each field, accumulating all problems as warnings.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- Catalog: path --
    if let Some(path) = raw.catalog.path {
        if !path.trim().is_empty() {
            config.catalog_path = Some(PathBuf::from(path));
        }
    }

    // -- Output: format --
    if let Some(ref format) = raw.output.format {
        match ExportFormat::from_name(format) {
            Some(f) => config.format = f,
            None => warnings.push(format!(
                "{}. Using default ({}).",
                ConfigError::ValueOutOfRange {
                    field: "[output] format".to_string(),
                    value: format.clone(),
                    expected: "\"text\", \"csv\" or \"json\"".to_string(),
                },
                ExportFormat::default().name(),
            )),
        }
    }

    // -- Output: max_results --
    if let Some(max) = raw.output.max_results {
        if max <= constants::ABSOLUTE_MAX_RESULTS {
            config.max_results = max;
        } else {
            warnings.push(format!(
                "{}. Using default ({}).",
                ConfigError::ValueOutOfRange {
                    field: "[output] max_results".to_string(),
                    value: max.to_string(),
                    expected: format!("0-{}", constants::ABSOLUTE_MAX_RESULTS),
                },
                constants::DEFAULT_MAX_RESULTS,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "{}. Using default ({}).",
                ConfigError::ValueOutOfRange {
                    field: "[logging] level".to_string(),
                    value: level.clone(),
                    expected: constants::VALID_LOG_LEVELS.join(", "),
                },
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    // -- Logging: file --
    if let Some(file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(file);
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(constants::CONFIG_FILE_NAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_config_file_lives_in_config_dir() {
        let paths = PlatformPaths {
            config_dir: PathBuf::from("/etc/unraf"),
            data_dir: PathBuf::from("/var/lib/unraf"),
            is_fallback: false,
        };
        assert_eq!(paths.config_file(), PathBuf::from("/etc/unraf/config.toml"));
    }

    #[test]
    fn test_missing_config_is_defaults_without_warnings() {
        let dir = TempDir::new().unwrap();
        let (config, warnings) = load_config(&dir.path().join("config.toml"));
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_config_is_applied() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
                [catalog]
                path = "/srv/unraf/catalog.json"

                [output]
                format = "CSV"
                max_results = 25

                [logging]
                level = "Debug"

                [future_section]
                ignored = true
            "#,
        );
        let (config, warnings) = load_config(&path);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/srv/unraf/catalog.json"))
        );
        assert_eq!(config.format, ExportFormat::Csv);
        assert_eq!(config.max_results, 25);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_invalid_values_fall_back_with_warnings() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
                [output]
                format = "xml"
                max_results = 999999999

                [logging]
                level = "loud"
            "#,
        );
        let (config, warnings) = load_config(&path);
        assert_eq!(warnings.len(), 3, "warnings: {warnings:?}");
        assert_eq!(config.format, ExportFormat::Text);
        assert_eq!(config.max_results, constants::DEFAULT_MAX_RESULTS);
        assert!(config.log_level.is_none());
        assert!(warnings[0].contains("[output] format"));
    }

    #[test]
    fn test_unparseable_config_is_defaults_with_warning() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[output\nformat = ");
        let (config, warnings) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Config parse error"));
    }
}
