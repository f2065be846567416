use menu_core::model::{MenuId, MenuItem};
use menu_core::project::{ConfigError, ProjectConfig, ProjectContext, ProjectLayout};

fn write_project(root: &std::path::Path) -> ProjectLayout {
    let layout = ProjectLayout::new(root);
    std::fs::create_dir_all(&layout.meta_dir).unwrap();
    std::fs::create_dir_all(&layout.dynamic_dir).unwrap();

    let config = ProjectConfig::new("CtxProject", &layout);
    std::fs::write(&layout.project_config_path, serde_json::to_string_pretty(&config).unwrap())
        .unwrap();

    std::fs::write(
        &layout.static_menu_path,
        "- id: 9000\n  parentId: 1\n  caption: menu.settings\n  screen: SettingsScreen\n\
         - id: 9001\n  parentId: 1\n  caption: menu.devtools\n  screen: DevToolsScreen\n",
    )
    .unwrap();
    std::fs::write(&layout.features_path, "9001: false\n").unwrap();

    let dynamic = vec![MenuItem::new(1, "Home").with_position(0)];
    std::fs::write(layout.dynamic_menu_path("en"), serde_json::to_string(&dynamic).unwrap())
        .unwrap();
    layout
}

#[test]
fn project_context_loads_config_and_menus() {
    let temp = tempfile::tempdir().unwrap();
    write_project(temp.path());

    let ctx = ProjectContext::from_root(temp.path()).expect("context");
    assert_eq!(ctx.config.name, "CtxProject");
    assert_eq!(ctx.static_items.len(), 2);
    assert!(!ctx.features.is_enabled(MenuId(9001)));
    assert_eq!(ctx.source.languages(), vec!["en".to_string()]);

    let session = ctx.open_session(None).expect("session");
    assert_eq!(session.language(), Some("en"));
    assert_eq!(session.paths().path_of(MenuId(9000)), Some("/home/menusettings"));
    assert!(session.paths().path_of(MenuId(9001)).is_none());
}

#[test]
fn open_session_fails_for_missing_language() {
    let temp = tempfile::tempdir().unwrap();
    write_project(temp.path());

    let ctx = ProjectContext::from_root(temp.path()).expect("context");
    let err = ctx.open_session(Some("fr")).unwrap_err();
    assert!(err.to_string().contains("Unable to refresh menu"));
}

#[test]
fn missing_feature_table_enables_everything() {
    let temp = tempfile::tempdir().unwrap();
    let layout = write_project(temp.path());
    std::fs::remove_file(&layout.features_path).unwrap();

    let ctx = ProjectContext::from_root(temp.path()).expect("context");
    assert!(ctx.features.is_enabled(MenuId(9001)));
}

#[test]
fn from_root_fails_without_config() {
    let temp = tempfile::tempdir().unwrap();
    assert!(ProjectContext::from_root(temp.path()).is_err());
}

#[test]
fn broken_static_menu_reports_typed_parse_error() {
    let temp = tempfile::tempdir().unwrap();
    let layout = write_project(temp.path());
    std::fs::write(&layout.static_menu_path, "- id: [\n").unwrap();

    let err = ProjectContext::from_root(temp.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to load static menu"));
    assert!(matches!(err.downcast_ref::<ConfigError>(), Some(ConfigError::Yaml { .. })));
}
