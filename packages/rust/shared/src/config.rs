//! Application configuration for specgloss.
//!
//! User config lives at `~/.specgloss/specgloss.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpecglossError};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "specgloss.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".specgloss";

// ---------------------------------------------------------------------------
// Config structs (matching specgloss.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Document selection and scheduling defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Annotation behaviour.
    #[serde(default)]
    pub annotate: AnnotateSection,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// File extension (without the dot) of documents picked up from directories.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Descend into subdirectories when a directory is given.
    #[serde(default)]
    pub recursive: bool,

    /// Maximum number of documents annotated at once.
    #[serde(default = "default_concurrency")]
    pub concurrency: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            recursive: false,
            concurrency: default_concurrency(),
        }
    }
}

fn default_extension() -> String {
    "md".into()
}
fn default_concurrency() -> u32 {
    4
}

/// `[annotate]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotateSection {
    /// Lines after a requirement header searched for an existing rationale.
    #[serde(default = "default_lookahead_lines")]
    pub lookahead_lines: usize,

    /// Optional TOML catalog replacing the built-in rationale catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<String>,
}

impl Default for AnnotateSection {
    fn default() -> Self {
        Self {
            lookahead_lines: default_lookahead_lines(),
            catalog_path: None,
        }
    }
}

fn default_lookahead_lines() -> usize {
    10
}

// ---------------------------------------------------------------------------
// Annotate config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime annotation configuration, merged from config file + CLI flags.
#[derive(Debug, Clone)]
pub struct AnnotateConfig {
    /// Extension of documents discovered in directories.
    pub extension: String,
    /// Whether directory discovery recurses.
    pub recursive: bool,
    /// Maximum concurrent documents.
    pub concurrency: u32,
    /// Rationale lookahead window after each header.
    pub lookahead_lines: usize,
    /// Custom catalog file, if any.
    pub catalog_path: Option<PathBuf>,
}

impl From<&AppConfig> for AnnotateConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            extension: config.defaults.extension.clone(),
            recursive: config.defaults.recursive,
            concurrency: config.defaults.concurrency,
            lookahead_lines: config.annotate.lookahead_lines,
            catalog_path: config.annotate.catalog_path.as_ref().map(PathBuf::from),
        }
    }
}

impl AnnotateConfig {
    /// Reject values that would make a run meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            return Err(SpecglossError::config("concurrency must be at least 1"));
        }
        if self.lookahead_lines == 0 {
            return Err(SpecglossError::config("lookahead_lines must be at least 1"));
        }
        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(SpecglossError::config(format!(
                "extension '{}' must be non-empty and given without a leading dot",
                self.extension
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.specgloss/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| SpecglossError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.specgloss/specgloss.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| SpecglossError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        SpecglossError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| SpecglossError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| SpecglossError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| SpecglossError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("lookahead_lines = 10"));
        assert!(toml_str.contains("extension = \"md\""));
        assert!(!toml_str.contains("catalog_path"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.defaults.concurrency, 4);
        assert_eq!(parsed.annotate.lookahead_lines, 10);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[annotate]
lookahead_lines = 25
catalog_path = "/etc/specgloss/catalog.toml"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.annotate.lookahead_lines, 25);
        assert_eq!(config.defaults.extension, "md");
        assert!(!config.defaults.recursive);

        let runtime = AnnotateConfig::from(&config);
        assert_eq!(
            runtime.catalog_path.as_deref(),
            Some(Path::new("/etc/specgloss/catalog.toml"))
        );
    }

    #[test]
    fn annotate_config_from_app_config() {
        let app = AppConfig::default();
        let runtime = AnnotateConfig::from(&app);
        assert_eq!(runtime.concurrency, 4);
        assert_eq!(runtime.lookahead_lines, 10);
        assert!(runtime.catalog_path.is_none());
        assert!(runtime.validate().is_ok());
    }

    #[test]
    fn annotate_config_validation() {
        let mut runtime = AnnotateConfig::from(&AppConfig::default());
        runtime.concurrency = 0;
        assert!(runtime.validate().unwrap_err().to_string().contains("concurrency"));

        let mut runtime = AnnotateConfig::from(&AppConfig::default());
        runtime.extension = ".md".into();
        assert!(runtime.validate().is_err());

        let mut runtime = AnnotateConfig::from(&AppConfig::default());
        runtime.lookahead_lines = 0;
        assert!(runtime.validate().is_err());
    }

    #[test]
    fn load_config_from_reports_parse_errors() {
        let dir = std::env::temp_dir().join(format!("sg-config-test-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[annotate]\nlookahead_lines = \"ten\"\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
