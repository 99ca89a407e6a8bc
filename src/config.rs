// Configuration loading module

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use segment_components::{ConfigError, SegmentControlConfigYaml};

/// Errors loading the runtime configuration
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("no segment controls configured")]
    NoControls,
    #[error("segment control hwnd '{0}' is used more than once")]
    DuplicateHwnd(String),
    #[error(transparent)]
    Control(#[from] ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub application: ApplicationConfig,
    /// Controls keyed by name; shown in key order
    pub segment_controls: BTreeMap<String, SegmentControlConfigYaml>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    pub bindings: Vec<BindingConfigYaml>,
    pub status_bar: StatusBarConfigYaml,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BindingConfigYaml {
    pub key: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBarConfigYaml {
    pub default_text: String,
}

/// Default location of the runtime configuration
pub fn default_config_path() -> PathBuf {
    let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    default_path.push("src");
    default_path.push("segments.yaml");
    default_path
}

pub fn parse_config(contents: &str) -> Result<AppConfig, serde_yaml::Error> {
    serde_yaml::from_str(contents)
}

pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, ConfigLoadError> {
    let path = config_path.unwrap_or_else(default_config_path);

    let contents = fs::read_to_string(&path).map_err(|source| ConfigLoadError::Io {
        path: path.clone(),
        source,
    })?;
    parse_config(&contents).map_err(|source| ConfigLoadError::Parse { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = load_config(None).unwrap();
        assert_eq!(config.application.title, "SEGMENT BAR");
        assert_eq!(config.segment_controls.len(), 4);
        let names: Vec<&str> = config.segment_controls.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["periods", "sections", "stacked", "toolbar"]);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_config(Some(PathBuf::from("/nonexistent/segments.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/segments.yaml"));
    }
}
