use std::path::Path;

use anyhow::{Context, Result};

use crate::compose::FeatureTable;
use crate::model::MenuItem;
use crate::project::{
    load_feature_table, load_project_config, load_static_menu, FileMenuSource, ProjectConfig,
    ProjectLayout,
};
use crate::session::MenuSession;

/// Convenience wrapper bundling layout, config and the loaded menu sources.
#[derive(Debug)]
pub struct ProjectContext {
    pub layout: ProjectLayout,
    pub config: ProjectConfig,
    pub static_items: Vec<MenuItem>,
    pub features: FeatureTable,
    pub source: FileMenuSource,
}

impl ProjectContext {
    /// Load project config, static table and feature table for a given root.
    pub fn from_root(root: impl AsRef<Path>) -> Result<Self> {
        let layout = ProjectLayout::new(root);
        let config = load_project_config(&layout)?;
        let static_items = load_static_menu(&layout.resolve(&config.static_menu))?;
        let features = load_feature_table(&layout.resolve(&config.features))?;
        let source = FileMenuSource::new(layout.resolve(&config.dynamic_dir));
        Ok(Self { layout, config, static_items, features, source })
    }

    /// Build a session and refresh it for `language` (or the configured
    /// default language).
    pub fn open_session(&self, language: Option<&str>) -> Result<MenuSession> {
        let language = language.unwrap_or(&self.config.default_language);
        let mut session = MenuSession::new(
            self.static_items.clone(),
            self.features.clone(),
            self.config.default_root,
        );
        session
            .refresh(&self.source, language)
            .with_context(|| format!("Unable to refresh menu for language '{language}'"))?;
        Ok(session)
    }
}
