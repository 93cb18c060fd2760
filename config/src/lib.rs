//! Configuration for the `forte` command-line tool.
//!
//! Read from `~/.forte/config.toml`. Every section and field is optional; a
//! missing file means defaults throughout.
//!
//! ```toml
//! [classify]
//! mode = "tni"
//!
//! [output]
//! format = "text"
//! show_names = true
//!
//! [store]
//! strict = false
//!
//! [logging]
//! filter = "warn"
//! ```

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use forte_types::EquivalenceMode;

/// Overrides `[classify].mode` when set to `tn` or `tni`.
pub const MODE_ENV_VAR: &str = "FORTE_MODE";

const fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForteConfig {
    pub classify: Option<ClassifyConfig>,
    pub output: Option<OutputConfig>,
    pub store: Option<StoreConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifyConfig {
    /// Equivalence used when `--mode` is not given.
    pub mode: Option<EquivalenceMode>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Print conventional names ("major triad") alongside Forte names.
    #[serde(default = "default_true")]
    pub show_names: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_names: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Refuse to run when the dataset has construction findings.
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    pub filter: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl ForteConfig {
    /// Load from the default location. `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {}: {err}", path.display());
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        toml::from_str(&content).map_err(|err| {
            tracing::warn!("Failed to parse config at {}: {err}", path.display());
            ConfigError::Parse {
                path: path.to_path_buf(),
                source: err,
            }
        })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Default equivalence: `FORTE_MODE`, then `[classify].mode`, then TnI.
    #[must_use]
    pub fn mode(&self) -> EquivalenceMode {
        self.mode_with_override(env::var(MODE_ENV_VAR).ok().as_deref())
    }

    /// [`mode`](Self::mode) with the environment value passed in. An
    /// unrecognised override is logged and ignored.
    #[must_use]
    pub fn mode_with_override(&self, override_value: Option<&str>) -> EquivalenceMode {
        if let Some(value) = override_value {
            match EquivalenceMode::parse(value) {
                Some(mode) => return mode,
                None => tracing::warn!("Ignoring {MODE_ENV_VAR}={value:?}: expected tn or tni"),
            }
        }
        self.classify
            .as_ref()
            .and_then(|classify| classify.mode)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .map(|output| output.format)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn show_names(&self) -> bool {
        self.output.as_ref().is_none_or(|output| output.show_names)
    }

    #[must_use]
    pub fn strict(&self) -> bool {
        self.store.as_ref().is_some_and(|store| store.strict)
    }

    #[must_use]
    pub fn log_filter(&self) -> Option<&str> {
        self.logging.as_ref()?.filter.as_deref()
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".forte").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use forte_types::EquivalenceMode;

    use super::{ConfigError, ForteConfig, OutputFormat};

    #[test]
    fn parse_empty_config() {
        let config: ForteConfig = toml::from_str("").unwrap();
        assert!(config.classify.is_none());
        assert_eq!(config.mode_with_override(None), EquivalenceMode::Tni);
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(config.show_names());
        assert!(!config.strict());
        assert_eq!(config.log_filter(), None);
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[classify]
mode = "tn"

[output]
format = "json"
show_names = false

[store]
strict = true

[logging]
filter = "forte_store=debug"
"#;
        let config: ForteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.mode_with_override(None), EquivalenceMode::Tn);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(!config.show_names());
        assert!(config.strict());
        assert_eq!(config.log_filter(), Some("forte_store=debug"));
    }

    #[test]
    fn output_section_defaults_show_names() {
        let config: ForteConfig = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert!(config.show_names());
        assert_eq!(config.output_format().as_str(), "json");
    }

    #[test]
    fn env_override_wins_when_valid() {
        let config: ForteConfig = toml::from_str("[classify]\nmode = \"tn\"\n").unwrap();
        assert_eq!(config.mode_with_override(Some("TNI")), EquivalenceMode::Tni);
        assert_eq!(config.mode_with_override(Some("sideways")), EquivalenceMode::Tn);
    }

    #[test]
    fn unknown_mode_is_a_parse_error() {
        assert!(toml::from_str::<ForteConfig>("[classify]\nmode = \"tonal\"\n").is_err());
        assert!(toml::from_str::<ForteConfig>("[colors]\n").is_err());
    }

    #[test]
    fn misspelled_field_is_a_parse_error() {
        assert!(toml::from_str::<ForteConfig>("[output]\nshow_name = false\n").is_err());
        assert!(toml::from_str::<ForteConfig>("[store]\nstrikt = true\n").is_err());
        assert!(toml::from_str::<ForteConfig>("[classify]\nmodes = \"tn\"\n").is_err());
        assert!(toml::from_str::<ForteConfig>("[logging]\nlevel = \"info\"\n").is_err());
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[store]\nstrict = true\n").unwrap();
        let config = ForteConfig::load_from(&path).unwrap();
        assert!(config.strict());
    }

    #[test]
    fn load_from_reports_path() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.toml");
        let err = ForteConfig::load_from(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert_eq!(err.path(), &missing);

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "[store\n").unwrap();
        let err = ForteConfig::load_from(&broken).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), &PathBuf::from(&broken));
        assert!(err.to_string().contains("broken.toml"));
    }
}
