//! Project layout, configuration and file-backed menu sources.
//!
//! For now, we define:
//! - `ProjectLayout`: computed paths for project directories/files.
//! - `ProjectConfig`: serializable project metadata.
//! - Loaders for the static menu table and feature table.
//! - `FileMenuSource`: per-language exports of the server menu.
//! - `ProjectContext`: everything above bundled for one root.

pub mod config;
pub mod context;
pub mod layout;
pub mod source;
pub mod util;

pub use config::ProjectConfig;
pub use context::ProjectContext;
pub use layout::ProjectLayout;
pub use source::FileMenuSource;
pub use util::{
    load_data_file, load_feature_table, load_project_config, load_static_menu, ConfigError,
};
