use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::compose::FeatureTable;
use crate::model::MenuItem;
use crate::project::{ProjectConfig, ProjectLayout};

/// Failure to load a project file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid YAML in {}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Unsupported data file extension for {} (expected .json, .yaml or .yml)", path.display())]
    UnsupportedExtension { path: PathBuf },
}

/// Load the project config JSON from disk for a given layout.
pub fn load_project_config(layout: &ProjectLayout) -> Result<ProjectConfig> {
    let path = &layout.project_config_path;
    let config: ProjectConfig = read_json(path).context("Failed to load project config")?;
    Ok(config)
}

/// Load the static menu table (YAML or JSON by extension).
pub fn load_static_menu(path: &Path) -> Result<Vec<MenuItem>> {
    let items = load_data_file(path).context("Failed to load static menu")?;
    Ok(items)
}

/// Load the feature table. A missing file means every entry is enabled.
pub fn load_feature_table(path: &Path) -> Result<FeatureTable> {
    if !path.exists() {
        return Ok(FeatureTable::default());
    }
    let table = load_data_file(path).context("Failed to load feature table")?;
    Ok(table)
}

/// Parse a data file, picking the format from its extension.
pub fn load_data_file<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => read_json(path),
        Some("yaml") | Some("yml") => {
            let body = read_body(path)?;
            serde_yaml::from_str(&body)
                .map_err(|source| ConfigError::Yaml { path: path.to_path_buf(), source })
        }
        _ => Err(ConfigError::UnsupportedExtension { path: path.to_path_buf() }),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let body = read_body(path)?;
    serde_json::from_str(&body)
        .map_err(|source| ConfigError::Json { path: path.to_path_buf(), source })
}

fn read_body(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extension_is_rejected_before_reading() {
        let err = load_data_file::<Vec<MenuItem>>(Path::new("/nonexistent/menu.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedExtension { .. }));
        assert!(err.to_string().contains("menu.toml"));
    }

    #[test]
    fn read_and_parse_failures_are_distinguished() {
        let temp = tempfile::tempdir().unwrap();

        let missing = temp.path().join("static.yaml");
        let err = load_data_file::<Vec<MenuItem>>(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));

        let broken_json = temp.path().join("en.json");
        std::fs::write(&broken_json, "[{\"id\": ").unwrap();
        let err = load_data_file::<Vec<MenuItem>>(&broken_json).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));

        let broken_yaml = temp.path().join("features.yml");
        std::fs::write(&broken_yaml, "9001: [unclosed\n").unwrap();
        let err = load_data_file::<FeatureTable>(&broken_yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }
}
