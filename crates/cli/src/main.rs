use anyhow::Result;
use clap::{Parser, Subcommand};
use menu_nav::commands::{
    breadcrumb_command, go_to_command, init_project_command, paths_command, project_info_command,
    resolve_command, slugify_command, tree_command,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Dynamic menu inspection CLI.
///
/// This CLI is a thin wrapper around `menu-core` (exposed in code as `menu_core`).
/// All substantive logic lives in the library so it can be tested thoroughly
/// and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "menu-nav",
    version,
    about = "Inspect composed navigation menus, paths and breadcrumbs",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new menu project at the given root.
    ///
    /// This will:
    /// - Create a `.menu` metadata directory with `project.json`.
    /// - Create `menus/` with a starter static table, feature table and an
    ///   `en` server menu export (existing files are left alone).
    InitProject {
        /// Project root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Optional project name. If omitted, the name is derived from the root directory.
        #[arg(long)]
        name: Option<String>,
    },

    /// Show basic information about an existing menu project.
    ProjectInfo {
        /// Project root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the composed navigation tree.
    ///
    /// Items whose parent never resolves are listed as dropped.
    Tree {
        /// Project root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Menu language. Defaults to the project's default language.
        #[arg(long)]
        lang: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List the URL path of every reachable menu item.
    Paths {
        #[arg(long, default_value = ".")]
        root: String,

        #[arg(long)]
        lang: Option<String>,

        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show the breadcrumb trail of a menu item.
    Breadcrumb {
        #[arg(long, default_value = ".")]
        root: String,

        #[arg(long)]
        lang: Option<String>,

        /// Menu item id.
        #[arg(long)]
        id: i64,

        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Resolve a deep-link URL path to the menu item it activates.
    Resolve {
        #[arg(long, default_value = ".")]
        root: String,

        #[arg(long)]
        lang: Option<String>,

        /// URL path, e.g. `/home/sales`.
        #[arg(long)]
        url: String,

        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Navigate to a menu item by id and print the path that would open.
    GoTo {
        #[arg(long, default_value = ".")]
        root: String,

        #[arg(long)]
        lang: Option<String>,

        /// Menu item id.
        #[arg(long)]
        id: i64,
    },

    /// Print the path segment a caption turns into.
    Slugify {
        /// Caption text.
        caption: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::InitProject { root, name } => init_project_command(&root, name)?,
        Command::ProjectInfo { root, json } => project_info_command(&root, json)?,
        Command::Tree { root, lang, json } => tree_command(&root, lang.as_deref(), json)?,
        Command::Paths { root, lang, json } => paths_command(&root, lang.as_deref(), json)?,
        Command::Breadcrumb { root, lang, id, json } => {
            breadcrumb_command(&root, lang.as_deref(), id, json)?
        }
        Command::Resolve { root, lang, url, json } => {
            resolve_command(&root, lang.as_deref(), &url, json)?
        }
        Command::GoTo { root, lang, id } => go_to_command(&root, lang.as_deref(), id)?,
        Command::Slugify { caption } => slugify_command(&caption)?,
    }

    Ok(())
}
