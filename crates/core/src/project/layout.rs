use std::path::{Path, PathBuf};

/// Logical layout of a menu project on disk.
///
/// This is derived from a chosen root path. It does *not* perform any IO itself.
/// The CLI or other frontends are responsible for actually creating directories
/// and files based on this layout.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    /// Root directory of the project.
    pub root: PathBuf,
    /// Directory for internal metadata (.menu).
    pub meta_dir: PathBuf,
    /// Path to the project config file (JSON).
    pub project_config_path: PathBuf,
    /// Directory holding menu data files (menus).
    pub menus_dir: PathBuf,
    /// Hand-authored static menu table (menus/static.yaml).
    pub static_menu_path: PathBuf,
    /// Feature flag table for static entries (menus/features.yaml).
    pub features_path: PathBuf,
    /// Per-language server menu exports (menus/dynamic).
    pub dynamic_dir: PathBuf,
}

impl ProjectLayout {
    /// Compute the default layout for a project rooted at `root`.
    ///
    /// This does *not* touch the filesystem.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let meta_dir = root.join(".menu");
        let project_config_path = meta_dir.join("project.json");
        let menus_dir = root.join("menus");
        let static_menu_path = menus_dir.join("static.yaml");
        let features_path = menus_dir.join("features.yaml");
        let dynamic_dir = menus_dir.join("dynamic");

        Self {
            root,
            meta_dir,
            project_config_path,
            menus_dir,
            static_menu_path,
            features_path,
            dynamic_dir,
        }
    }

    /// Express `path` relative to `root` when possible, for storing in
    /// `ProjectConfig`.
    pub fn relative_string(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(rel) => rel.to_string_lossy().to_string(),
            Err(_) => path.to_string_lossy().to_string(),
        }
    }

    /// Resolve a path from the config against `root` unless already absolute.
    pub fn resolve(&self, configured: &str) -> PathBuf {
        let configured = Path::new(configured);
        if configured.is_absolute() {
            configured.to_path_buf()
        } else {
            self.root.join(configured)
        }
    }

    /// Dynamic menu export for one language (`menus/dynamic/<lang>.json`).
    pub fn dynamic_menu_path(&self, language: &str) -> PathBuf {
        self.dynamic_dir.join(format!("{language}.json"))
    }
}
