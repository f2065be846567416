use std::path::Path;

use anyhow::Result;
use menu_core::model::MenuNode;
use menu_core::project::ProjectContext;
use menu_core::tree::Forest;
use tracing::debug;

use crate::canonicalize_or_current;

/// Resolve `root` and load the project context (config, static table, features).
pub fn open_context(root: &str) -> Result<ProjectContext> {
    let root_path = canonicalize_or_current(root)?;
    debug!(root = %root_path.display(), "loading menu project");
    ProjectContext::from_root(&root_path)
}

/// Helper to print whether a directory exists.
pub fn print_dir_status(label: &str, path: &Path) {
    let exists = path.is_dir();
    println!("- {label}: {} ({})", if exists { "OK" } else { "MISSING" }, path.display());
}

/// Helper to print whether a file exists.
pub fn print_file_status(label: &str, path: &Path) {
    let exists = path.is_file();
    println!("- {label}: {} ({})", if exists { "OK" } else { "MISSING" }, path.display());
}

/// One line per node, indented two spaces per level:
/// `- Caption [id] (screen)`.
pub fn render_tree(forest: &Forest) -> String {
    let mut out = String::new();
    for (level, node) in forest.walk() {
        out.push_str(&"  ".repeat(level));
        out.push_str(&render_node(node));
        out.push('\n');
    }
    out
}

fn render_node(node: &MenuNode) -> String {
    match &node.value.screen {
        Some(screen) => format!("- {} [{}] ({})", node.value.caption, node.id(), screen.as_str()),
        None => format!("- {} [{}]", node.value.caption, node.id()),
    }
}
