use anyhow::{anyhow, Result};
use menu_core::model::MenuId;
use menu_core::routing::slugify;
use menu_core::session::Navigator;
use menu_core::tree::Crumb;
use serde::Serialize;

use crate::commands::{open_context, render_tree};

#[derive(Serialize)]
pub struct TreeSnapshot<'a> {
    pub language: Option<&'a str>,
    pub generation: u64,
    pub composed_at: &'a str,
    pub forest: &'a menu_core::tree::Forest,
}

#[derive(Serialize)]
pub struct PathEntry {
    pub id: MenuId,
    pub path: String,
}

#[derive(Serialize)]
pub struct Resolution {
    pub url: String,
    pub id: MenuId,
    pub path: Option<String>,
    pub breadcrumb: Vec<Crumb>,
}

/// Navigator for the CLI: prints the path it is asked to open.
#[derive(Debug, Default)]
pub struct PrintNavigator {
    pub visited: Vec<String>,
}

impl Navigator for PrintNavigator {
    fn navigate(&mut self, path: &str) {
        println!("Navigate: {}", path);
        self.visited.push(path.to_string());
    }
}

/// Render the navigation forest for one language.
pub fn tree_command(root: &str, lang: Option<&str>, json: bool) -> Result<()> {
    let ctx = open_context(root)?;
    let session = ctx.open_session(lang)?;
    let snapshot = session.snapshot();
    let forest = snapshot.forest();

    if json {
        let tree = TreeSnapshot {
            language: snapshot.language(),
            generation: snapshot.generation(),
            composed_at: snapshot.composed_at(),
            forest,
        };
        println!("{}", serde_json::to_string_pretty(&tree)?);
        return Ok(());
    }

    println!("Menu ({}, {} nodes):", snapshot.language().unwrap_or("-"), forest.node_count());
    if forest.is_empty() {
        println!("(empty)");
    } else {
        print!("{}", render_tree(forest));
    }
    if !forest.dropped.is_empty() {
        let dropped: Vec<String> = forest.dropped.iter().map(MenuId::to_string).collect();
        println!("Dropped (unresolved parent): {}", dropped.join(", "));
    }

    Ok(())
}

/// List the path assigned to every reachable item.
pub fn paths_command(root: &str, lang: Option<&str>, json: bool) -> Result<()> {
    let ctx = open_context(root)?;
    let session = ctx.open_session(lang)?;
    let entries: Vec<PathEntry> = session
        .paths()
        .path_by_id
        .iter()
        .map(|(id, path)| PathEntry { id: *id, path: path.clone() })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Paths ({}):", entries.len());
    if entries.is_empty() {
        println!("(none)");
    }
    for entry in entries {
        println!("  {} -> {}", entry.id, entry.path);
    }

    Ok(())
}

/// Show the ancestor chain of one item.
pub fn breadcrumb_command(root: &str, lang: Option<&str>, id: i64, json: bool) -> Result<()> {
    let ctx = open_context(root)?;
    let session = ctx.open_session(lang)?;
    let id = MenuId(id);
    let crumbs = session
        .snapshot()
        .breadcrumb(id)
        .ok_or_else(|| anyhow!("Menu item {} does not resolve to a root", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&crumbs)?);
        return Ok(());
    }

    println!("{}", format_breadcrumb(&crumbs));
    Ok(())
}

/// Resolve a deep-link URL to the item it activates.
pub fn resolve_command(root: &str, lang: Option<&str>, url: &str, json: bool) -> Result<()> {
    let ctx = open_context(root)?;
    let mut session = ctx.open_session(lang)?;
    let id = session.resolve_url(url).ok_or_else(|| anyhow!("No menu item for path '{}'", url))?;
    session.seed_from_url(url);

    let resolution = Resolution {
        url: url.to_string(),
        id,
        path: session.paths().path_of(id).map(str::to_string),
        breadcrumb: session.breadcrumbs().unwrap_or_default(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
        return Ok(());
    }

    println!("Resolved {} -> {}", resolution.url, resolution.id);
    println!("  {}", format_breadcrumb(&resolution.breadcrumb));
    Ok(())
}

/// Navigate to an item by id, printing the path the router would open.
pub fn go_to_command(root: &str, lang: Option<&str>, id: i64) -> Result<()> {
    let ctx = open_context(root)?;
    let mut session = ctx.open_session(lang)?;
    let mut navigator = PrintNavigator::default();
    if !session.go_to(MenuId(id), &mut navigator) {
        return Err(anyhow!("Menu item {} has no path", id));
    }
    if let Some(crumbs) = session.breadcrumbs() {
        println!("  {}", format_breadcrumb(&crumbs));
    }
    Ok(())
}

pub fn slugify_command(caption: &str) -> Result<()> {
    println!("{}", slugify(caption));
    Ok(())
}

pub fn format_breadcrumb(crumbs: &[Crumb]) -> String {
    crumbs.iter().map(|c| format!("{} [{}]", c.caption, c.id)).collect::<Vec<_>>().join(" > ")
}
