use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use menu_core::model::MenuItem;
use menu_core::project::{load_project_config, FileMenuSource, ProjectConfig, ProjectLayout};
use serde::Serialize;

use crate::commands::{print_dir_status, print_file_status};
use crate::{canonicalize_or_current, infer_project_name};

#[derive(Serialize)]
pub struct ProjectInfoSnapshot {
    pub name: String,
    pub root: String,
    pub config_file: String,
    pub config_version: String,
    pub default_root: i64,
    pub default_language: String,
    pub languages: Vec<String>,
    pub layout: ProjectInfoLayout,
}

#[derive(Serialize)]
pub struct ProjectInfoLayout {
    pub meta_dir: String,
    pub static_menu: String,
    pub features: String,
    pub dynamic_dir: String,
}

/// Initialize a new project at `root`.
pub fn init_project_command(root: &str, name: Option<String>) -> Result<()> {
    let root_path = canonicalize_or_current(root)?;
    let layout = ProjectLayout::new(&root_path);

    // Derive project name if not provided.
    let project_name = match name {
        Some(n) => n,
        None => infer_project_name(&root_path),
    };

    // Ensure directories exist.
    fs::create_dir_all(&layout.meta_dir)
        .with_context(|| format!("Failed to create meta dir: {}", layout.meta_dir.display()))?;
    fs::create_dir_all(&layout.dynamic_dir).with_context(|| {
        format!("Failed to create dynamic menu dir: {}", layout.dynamic_dir.display())
    })?;

    // Never clobber files an operator already edited, the config included.
    let config = if layout.project_config_path.exists() {
        load_project_config(&layout)?
    } else {
        let config = ProjectConfig::new(&project_name, &layout);
        let json = serde_json::to_string_pretty(&config)?;
        fs::write(&layout.project_config_path, json).with_context(|| {
            format!("Failed to write project config: {}", layout.project_config_path.display())
        })?;
        config
    };

    let static_yaml = serde_yaml::to_string(&starter_static_menu())?;
    write_if_missing(&layout.static_menu_path, &static_yaml)?;
    write_if_missing(&layout.features_path, STARTER_FEATURES)?;
    let dynamic_json = serde_json::to_string_pretty(&starter_dynamic_menu())?;
    write_if_missing(&layout.dynamic_menu_path(&config.default_language), &dynamic_json)?;

    println!("Initialized menu project:");
    println!("  Name: {}", config.name);
    println!("  Root: {}", layout.root.display());
    println!("  Config: {}", layout.project_config_path.display());
    println!("  Static menu: {}", layout.static_menu_path.display());
    println!("  Features: {}", layout.features_path.display());
    println!("  Dynamic menus dir: {}", layout.dynamic_dir.display());

    Ok(())
}

/// Show basic information about an existing project.
pub fn project_info_command(root: &str, json: bool) -> Result<()> {
    let root_path = canonicalize_or_current(root)?;
    let layout = ProjectLayout::new(&root_path);
    let config = load_project_config(&layout)?;

    let static_menu = layout.resolve(&config.static_menu);
    let features = layout.resolve(&config.features);
    let dynamic_dir = layout.resolve(&config.dynamic_dir);
    let languages = FileMenuSource::new(&dynamic_dir).languages();

    if json {
        let snapshot = ProjectInfoSnapshot {
            name: config.name.clone(),
            root: layout.root.display().to_string(),
            config_file: layout.project_config_path.display().to_string(),
            config_version: config.config_version.clone(),
            default_root: config.default_root.0,
            default_language: config.default_language.clone(),
            languages,
            layout: ProjectInfoLayout {
                meta_dir: layout.meta_dir.display().to_string(),
                static_menu: static_menu.display().to_string(),
                features: features.display().to_string(),
                dynamic_dir: dynamic_dir.display().to_string(),
            },
        };
        let serialized = serde_json::to_string_pretty(&snapshot)?;
        println!("{}", serialized);
        return Ok(());
    }

    println!("Menu Project Info");
    println!("=================");
    println!("Name: {}", config.name);
    println!("Root: {}", layout.root.display());
    println!("Config file: {}", layout.project_config_path.display());
    println!("Config version: {}", config.config_version);
    println!("Default root id: {}", config.default_root);
    println!("Default language: {}", config.default_language);
    if languages.is_empty() {
        println!("Languages: (none)");
    } else {
        println!("Languages: {}", languages.join(", "));
    }
    println!();

    println!("Files:");
    print_dir_status("Meta dir (.menu)", &layout.meta_dir);
    print_file_status("Static menu", &static_menu);
    print_file_status("Features", &features);
    print_dir_status("Dynamic menus dir", &dynamic_dir);

    Ok(())
}

const STARTER_FEATURES: &str = "# Static menu entries switched off by id; absent ids are enabled.\n9001: false\n";

fn starter_static_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(9000, "menu.settings").with_parent(1).with_screen("SettingsScreen"),
        MenuItem::new(9001, "menu.devtools").with_parent(1).with_screen("DevToolsScreen"),
    ]
}

fn starter_dynamic_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(1, "Home").with_position(0),
        MenuItem::new(2, "Sales").with_parent(1).with_position(1),
        MenuItem::new(3, "Orders").with_parent(2).with_position(0),
        MenuItem::new(4, "Reports").with_parent(1).with_position(2),
    ]
}

fn write_if_missing(path: &Path, contents: &str) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}
