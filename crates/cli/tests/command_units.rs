use menu_core::model::{MenuId, MenuItem, RenderKind};
use menu_core::session::Navigator;
use menu_core::tree::{build_forest, Crumb};
use menu_nav::commands::{
    format_breadcrumb, init_project_command, open_context, paths_command, project_info_command,
    render_tree, tree_command, PrintNavigator,
};
use tempfile::tempdir;

#[test]
fn render_tree_indents_by_level() {
    let items = vec![
        MenuItem::new(1, "Home"),
        MenuItem::new(2, "Sales").with_parent(1),
        MenuItem::new(9000, "menu.settings").with_parent(1).with_screen("SettingsScreen"),
    ];
    let rendered = render_tree(&build_forest(&items));
    assert_eq!(
        rendered,
        "- Home [1]\n  - Sales [2]\n  - menu.settings [9000] (SettingsScreen)\n"
    );
}

#[test]
fn format_breadcrumb_joins_captions() {
    let crumbs = vec![
        Crumb { id: MenuId(1), caption: "Home".into(), kind: RenderKind::Dynamic },
        Crumb { id: MenuId(9000), caption: "menu.settings".into(), kind: RenderKind::Static },
    ];
    assert_eq!(format_breadcrumb(&crumbs), "Home [1] > menu.settings [9000]");
    assert_eq!(format_breadcrumb(&[]), "");
}

#[test]
fn print_navigator_records_paths() {
    let mut navigator = PrintNavigator::default();
    navigator.navigate("/home");
    assert_eq!(navigator.visited, vec!["/home".to_string()]);
}

#[test]
fn init_project_is_idempotent_and_keeps_edited_files() {
    let temp = tempdir().unwrap();
    let root = temp.path().to_string_lossy().to_string();
    init_project_command(&root, Some("Units".into())).unwrap();

    let ctx = open_context(&root).unwrap();
    std::fs::write(&ctx.layout.features_path, "{}\n").unwrap();
    let mut config = ctx.config.clone();
    config.default_root = MenuId(4);
    std::fs::write(
        &ctx.layout.project_config_path,
        serde_json::to_string_pretty(&config).unwrap(),
    )
    .unwrap();

    init_project_command(&root, Some("Renamed".into())).unwrap();
    let body = std::fs::read_to_string(&ctx.layout.features_path).unwrap();
    assert_eq!(body, "{}\n");

    let ctx = open_context(&root).unwrap();
    assert!(ctx.features.is_enabled(MenuId(9001)));
    assert_eq!(ctx.config.default_root, MenuId(4));
    assert_eq!(ctx.config.name, "Units");
}

#[test]
fn inspection_commands_run_against_starter_project() {
    let temp = tempdir().unwrap();
    let root = temp.path().to_string_lossy().to_string();
    init_project_command(&root, None).unwrap();

    project_info_command(&root, false).unwrap();
    project_info_command(&root, true).unwrap();
    tree_command(&root, None, false).unwrap();
    tree_command(&root, Some("en"), true).unwrap();
    paths_command(&root, None, true).unwrap();
    assert!(tree_command(&root, Some("de"), false).is_err());
}
