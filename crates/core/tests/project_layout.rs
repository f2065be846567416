use std::path::{PathBuf, MAIN_SEPARATOR};

use menu_core::project::{ProjectConfig, ProjectLayout};

#[test]
fn project_layout_uses_expected_paths() {
    let layout = ProjectLayout::new("/my/project");

    assert_eq!(layout.root, PathBuf::from("/my/project"));
    assert_eq!(layout.meta_dir, PathBuf::from("/my/project/.menu"));
    assert_eq!(layout.project_config_path, PathBuf::from("/my/project/.menu/project.json"));
    assert_eq!(layout.menus_dir, PathBuf::from("/my/project/menus"));
    assert_eq!(layout.static_menu_path, PathBuf::from("/my/project/menus/static.yaml"));
    assert_eq!(layout.features_path, PathBuf::from("/my/project/menus/features.yaml"));
    assert_eq!(layout.dynamic_dir, PathBuf::from("/my/project/menus/dynamic"));
    assert_eq!(
        layout.dynamic_menu_path("de"),
        PathBuf::from("/my/project/menus/dynamic/de.json")
    );
}

#[test]
fn config_stores_paths_relative_to_root() {
    let layout = ProjectLayout::new("/my/project");
    let config = ProjectConfig::new("Demo", &layout);

    let expected = format!("menus{}static.yaml", MAIN_SEPARATOR);
    assert_eq!(config.static_menu, expected);
    assert_eq!(layout.resolve(&config.static_menu), layout.static_menu_path);
    assert_eq!(layout.resolve("/abs/elsewhere.yaml"), PathBuf::from("/abs/elsewhere.yaml"));
}

#[test]
fn config_round_trips_json() {
    let layout = ProjectLayout::new("/my/project");
    let config = ProjectConfig::new("Demo", &layout);
    let json = serde_json::to_string(&config).unwrap();
    let parsed: ProjectConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.name, "Demo");
    assert_eq!(parsed.default_root, config.default_root);
    assert_eq!(parsed.default_language, "en");
}
