use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "arbor.config.json";

/// How element trees are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented outline, one node per line
    #[default]
    Outline,
    /// JSON with elements as `{component, kind, props}`
    Json,
}

/// Arbor configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Default output format for element trees
    #[serde(default)]
    pub format: OutputFormat,

    /// Spaces per indentation level
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_indent() -> usize {
    2
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            indent: default_indent(),
            log_filter: default_log_filter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "format": "json",
            "indent": 4,
            "logFilter": "arbor_core=trace"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.indent, 4);
        assert_eq!(config.log_filter, "arbor_core=trace");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "indent": 0 }"#).unwrap();
        assert_eq!(config.format, OutputFormat::Outline);
        assert_eq!(config.indent, 0);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.format, OutputFormat::Outline);
        assert_eq!(config.indent, 2);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_load_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{ "format": "json" }"#).unwrap();

        let config = Config::load(&dir.path().display().to_string()).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_without_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().display().to_string()).unwrap();
        assert_eq!(config.indent, 2);
    }
}
