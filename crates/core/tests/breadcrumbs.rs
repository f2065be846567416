use menu_core::model::{MenuId, MenuItem, RenderKind};
use menu_core::tree::{breadcrumb, id_path};

fn sample() -> Vec<MenuItem> {
    vec![
        MenuItem::new(1, "Home"),
        MenuItem::new(2, "Sales").with_parent(1),
        MenuItem::new(3, "Orders").with_parent(2),
        MenuItem::new(9001, "menu.settings").with_parent(1).with_screen("SettingsScreen"),
        MenuItem::new(5, "Orphan").with_parent(99),
    ]
}

#[test]
fn root_path_is_itself() {
    assert_eq!(id_path(&sample(), MenuId(1)), Some(vec![MenuId(1)]));
}

#[test]
fn child_path_extends_parent_path() {
    let items = sample();
    for item in items.iter().filter(|item| item.parent_id.is_some()) {
        let Some(child) = id_path(&items, item.id) else {
            continue;
        };
        let mut expected = id_path(&items, item.parent_id.unwrap()).expect("parent resolves");
        expected.push(item.id);
        assert_eq!(child, expected);
    }
}

#[test]
fn unresolvable_targets_yield_none() {
    let items = sample();
    assert_eq!(id_path(&items, MenuId(5)), None);
    assert_eq!(id_path(&items, MenuId(404)), None);
}

#[test]
fn cyclic_chain_yields_none() {
    let items = vec![MenuItem::new(1, "A").with_parent(2), MenuItem::new(2, "B").with_parent(1)];
    assert_eq!(id_path(&items, MenuId(1)), None);
}

#[test]
fn breadcrumb_maps_ids_to_captions() {
    let crumbs = breadcrumb(&sample(), MenuId(3)).expect("resolves");
    let captions: Vec<&str> = crumbs.iter().map(|c| c.caption.as_str()).collect();
    assert_eq!(captions, vec!["Home", "Sales", "Orders"]);

    let settings = breadcrumb(&sample(), MenuId(9001)).expect("resolves");
    assert_eq!(settings.last().map(|c| c.kind), Some(RenderKind::Static));
    assert_eq!(settings[0].kind, RenderKind::Dynamic);
}
