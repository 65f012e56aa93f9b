//! Holds the current catalog snapshot and applies load results in completion
//! order with a generation check.

use std::sync::Arc;

use crate::catalog::{Catalog, CategoryPriority};
use crate::error::CatalogError;
use crate::loader::{LoadedManifest, ManifestLoader};

/// Issued by [`CatalogSession::begin_load`]; hand it back with the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(self) -> u64 {
        self.generation
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied { records: usize },
    /// The previous catalog is kept; the caller surfaces the error once.
    Failed(CatalogError),
    /// Superseded by a newer load; dropped without touching state.
    Stale,
}

pub struct CatalogSession {
    priority: CategoryPriority,
    catalog: Arc<Catalog>,
    started: u64,
    /// Newest generation that has completed, with any result.
    settled: u64,
    /// Tickets issued and not yet completed.
    pending: usize,
}

impl CatalogSession {
    pub fn new(priority: CategoryPriority) -> Self {
        Self {
            priority,
            catalog: Arc::new(Catalog::empty()),
            started: 0,
            settled: 0,
            pending: 0,
        }
    }

    pub fn priority(&self) -> &CategoryPriority {
        &self.priority
    }

    /// Current snapshot. Cheap to clone; never mutated after creation.
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// True while any issued load, superseded or not, is still running.
    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.started += 1;
        self.pending += 1;
        LoadTicket {
            generation: self.started,
        }
    }

    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        result: Result<LoadedManifest, CatalogError>,
    ) -> LoadOutcome {
        let generation = ticket.generation;
        self.pending = self.pending.saturating_sub(1);
        let newest_settled = self.settled;
        self.settled = self.settled.max(generation);

        match result {
            // A newer load already finished, successfully or not.
            Ok(_) if generation < newest_settled => {
                tracing::debug!(generation, settled = newest_settled, "discarding stale load");
                LoadOutcome::Stale
            }
            Ok(loaded) => {
                let catalog = Catalog::from_loaded(loaded, &self.priority);
                let records = catalog.len();
                self.catalog = Arc::new(catalog);
                LoadOutcome::Applied { records }
            }
            Err(err) if generation < self.started => {
                tracing::debug!(generation, error = %err, "discarding superseded load failure");
                LoadOutcome::Stale
            }
            Err(err) => {
                tracing::warn!(generation, error = %err, "catalog load failed");
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Begin, run and complete one load on the calling thread.
    pub fn load_now(&mut self, loader: &ManifestLoader<'_>, url: &str) -> LoadOutcome {
        let ticket = self.begin_load();
        let result = loader.load(url);
        self.complete(ticket, result)
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
