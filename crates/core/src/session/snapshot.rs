use std::sync::OnceLock;

use chrono::Utc;

use crate::model::{MenuId, MenuItem};
use crate::routing::{build_paths, PathMap};
use crate::tree::{breadcrumb, build_forest, id_path, Crumb, Forest};

/// One composed flat list and everything derived from it.
///
/// The list never changes after construction. The forest and path map are
/// computed on first use and cached for the lifetime of the snapshot, so
/// every reader holding the same snapshot shares one computation.
#[derive(Debug)]
pub struct MenuSnapshot {
    generation: u64,
    language: Option<String>,
    composed_at: String,
    items: Vec<MenuItem>,
    forest: OnceLock<Forest>,
    paths: OnceLock<PathMap>,
}

impl MenuSnapshot {
    pub fn new(generation: u64, language: Option<String>, items: Vec<MenuItem>) -> Self {
        Self {
            generation,
            language,
            composed_at: Utc::now().to_rfc3339(),
            items,
            forest: OnceLock::new(),
            paths: OnceLock::new(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// RFC 3339 timestamp of composition.
    pub fn composed_at(&self) -> &str {
        &self.composed_at
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn item(&self, id: MenuId) -> Option<&MenuItem> {
        self.items.iter().rev().find(|item| item.id == id)
    }

    pub fn forest(&self) -> &Forest {
        self.forest.get_or_init(|| build_forest(&self.items))
    }

    pub fn paths(&self) -> &PathMap {
        self.paths.get_or_init(|| build_paths(&self.items))
    }

    pub fn id_path(&self, id: MenuId) -> Option<Vec<MenuId>> {
        id_path(&self.items, id)
    }

    pub fn breadcrumb(&self, id: MenuId) -> Option<Vec<Crumb>> {
        breadcrumb(&self.items, id)
    }
}
