use serde::{Deserialize, Serialize};

use crate::model::MenuId;

/// The currently active menu item.
///
/// Starts at the default root, follows explicit navigation, and returns to
/// the default root whenever the composed list is rebuilt. The id may refer
/// to an item that is not loaded yet while a fetch is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveMenu {
    default_root: MenuId,
    current: MenuId,
}

impl ActiveMenu {
    pub fn new(default_root: MenuId) -> Self {
        Self { default_root, current: default_root }
    }

    pub fn get(&self) -> MenuId {
        self.current
    }

    pub fn default_root(&self) -> MenuId {
        self.default_root
    }

    pub fn set(&mut self, id: MenuId) {
        self.current = id;
    }

    pub fn reset(&mut self) {
        self.current = self.default_root;
    }
}
