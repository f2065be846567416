use serde::{Deserialize, Serialize};

use crate::model::MenuId;
use crate::project::ProjectLayout;

/// Serializable configuration describing a menu project.
///
/// This lives at `.menu/project.json` in the project root. Paths are stored
/// relative to the root when possible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Human-friendly project name.
    pub name: String,
    /// Optional description / notes.
    pub description: Option<String>,
    /// Schema/config version. This is about the config format, not the menu data.
    pub config_version: String,
    /// Item activated at session start and after every recomposition.
    pub default_root: MenuId,
    /// Language fetched when none is given explicitly.
    pub default_language: String,
    pub static_menu: String,
    pub features: String,
    pub dynamic_dir: String,
}

impl ProjectConfig {
    /// Create a configuration pointing at the default data files of `layout`.
    pub fn new(name: impl Into<String>, layout: &ProjectLayout) -> Self {
        Self {
            name: name.into(),
            description: None,
            config_version: "0.1.0".to_string(),
            default_root: MenuId(1),
            default_language: "en".to_string(),
            static_menu: layout.relative_string(&layout.static_menu_path),
            features: layout.relative_string(&layout.features_path),
            dynamic_dir: layout.relative_string(&layout.dynamic_dir),
        }
    }
}
