//! Navigation session: composed menu state, active item and refresh flow.
//!
//! A [`MenuSession`] is the single writer of the composed list. Each rebuild
//! produces a fresh [`MenuSnapshot`] behind an `Arc`; readers clone the `Arc`
//! and never observe a half-built state. The backend fetch is the only step
//! that may be slow, so it is split into [`MenuSession::begin_refresh`] and
//! [`MenuSession::complete_refresh`]: the caller performs the fetch in
//! between, however it likes, and only the newest ticket may land.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::compose::{compose, order_by_position, FeatureTable};
use crate::model::{MenuId, MenuItem};
use crate::routing::PathMap;
use crate::tree::{Crumb, Forest};

pub mod snapshot;
pub mod tracker;

pub use snapshot::MenuSnapshot;
pub use tracker::ActiveMenu;

/// Failure to obtain the dynamic menu from the backend.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("No menu available for language '{0}'")]
    Unavailable(String),
    #[error("Failed to fetch menu: {0}")]
    Fetch(String),
    #[error("Malformed menu payload: {0}")]
    Malformed(String),
}

/// Backend collaborator supplying the server-side menu for a language.
pub trait MenuSource {
    fn fetch(&self, language: &str) -> Result<Vec<MenuItem>, SourceError>;
}

/// Router collaborator performing the navigation side effect.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// Handle for one in-flight refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshTicket {
    seq: u64,
    language: String,
}

impl RefreshTicket {
    pub fn language(&self) -> &str {
        &self.language
    }
}

/// What happened to a completed refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The result was composed into a new snapshot.
    Applied { generation: u64 },
    /// A newer refresh was started after this one; its result was discarded.
    Superseded,
}

#[derive(Debug)]
pub struct MenuSession {
    static_items: Vec<MenuItem>,
    features: FeatureTable,
    dynamic: Vec<MenuItem>,
    language: Option<String>,
    snapshot: Arc<MenuSnapshot>,
    active: ActiveMenu,
    issued: u64,
    generation: u64,
}

impl MenuSession {
    /// Start a session with only the static entries composed. The dynamic
    /// part stays empty until the first refresh lands.
    pub fn new(static_items: Vec<MenuItem>, features: FeatureTable, default_root: MenuId) -> Self {
        let items = compose(&[], &features.filter(&static_items));
        Self {
            static_items,
            features,
            dynamic: Vec::new(),
            language: None,
            snapshot: Arc::new(MenuSnapshot::new(0, None, items)),
            active: ActiveMenu::new(default_root),
            issued: 0,
            generation: 0,
        }
    }

    /// Issue a ticket for a fetch of `language`. Any older ticket becomes stale.
    pub fn begin_refresh(&mut self, language: impl Into<String>) -> RefreshTicket {
        self.issued += 1;
        RefreshTicket { seq: self.issued, language: language.into() }
    }

    /// Land the result of the fetch started with `ticket`.
    ///
    /// Stale tickets are discarded whatever their result. On success the
    /// list is recomposed and the active item reset in the same call. On
    /// failure the previous snapshot stays authoritative and the error is
    /// returned.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<MenuItem>, SourceError>,
    ) -> Result<RefreshOutcome, SourceError> {
        if ticket.seq != self.issued {
            warn!(
                language = %ticket.language,
                ticket = ticket.seq,
                newest = self.issued,
                "discarding superseded menu refresh"
            );
            return Ok(RefreshOutcome::Superseded);
        }

        let mut dynamic = match result {
            Ok(items) => items,
            Err(err) => {
                warn!(language = %ticket.language, error = %err, "unable to refresh menu");
                return Err(err);
            }
        };
        order_by_position(&mut dynamic);
        self.dynamic = dynamic;
        self.language = Some(ticket.language);
        self.rebuild();
        Ok(RefreshOutcome::Applied { generation: self.generation })
    }

    /// Fetch from `source` and land the result immediately.
    pub fn refresh<S: MenuSource + ?Sized>(
        &mut self,
        source: &S,
        language: &str,
    ) -> Result<RefreshOutcome, SourceError> {
        let ticket = self.begin_refresh(language);
        let result = source.fetch(language);
        self.complete_refresh(ticket, result)
    }

    /// Rebuild from the current dynamic and static lists.
    pub fn recompose(&mut self) {
        self.rebuild();
    }

    pub fn set_features(&mut self, features: FeatureTable) {
        self.features = features;
        self.rebuild();
    }

    pub fn set_static_items(&mut self, static_items: Vec<MenuItem>) {
        self.static_items = static_items;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.generation += 1;
        let items = compose(&self.dynamic, &self.features.filter(&self.static_items));
        info!(
            generation = self.generation,
            language = self.language.as_deref().unwrap_or("-"),
            items = items.len(),
            "menu composed"
        );
        self.snapshot = Arc::new(MenuSnapshot::new(self.generation, self.language.clone(), items));
        self.active.reset();
    }

    pub fn snapshot(&self) -> Arc<MenuSnapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn items(&self) -> &[MenuItem] {
        self.snapshot.items()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn features(&self) -> &FeatureTable {
        &self.features
    }

    pub fn forest(&self) -> &Forest {
        self.snapshot.forest()
    }

    pub fn paths(&self) -> &PathMap {
        self.snapshot.paths()
    }

    pub fn active(&self) -> MenuId {
        self.active.get()
    }

    pub fn set_active(&mut self, id: MenuId) {
        self.active.set(id);
    }

    /// Breadcrumb trail of the active item, `None` while it does not resolve.
    pub fn breadcrumbs(&self) -> Option<Vec<Crumb>> {
        self.snapshot.breadcrumb(self.active.get())
    }

    /// Navigate to `id` and make it active. Returns `false` without side
    /// effects when `id` has no path.
    pub fn go_to<N: Navigator + ?Sized>(&mut self, id: MenuId, navigator: &mut N) -> bool {
        let Some(path) = self.snapshot.paths().path_of(id) else {
            return false;
        };
        navigator.navigate(path);
        self.active.set(id);
        true
    }

    pub fn resolve_url(&self, url: &str) -> Option<MenuId> {
        self.snapshot.paths().id_of(url)
    }

    /// Activate the item an initial URL points at, or the default root.
    pub fn seed_from_url(&mut self, url: &str) -> MenuId {
        match self.resolve_url(url) {
            Some(id) => self.active.set(id),
            None => self.active.reset(),
        }
        self.active.get()
    }
}
