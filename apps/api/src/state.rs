use std::sync::Arc;

use crate::catalog::{CourseCatalog, JobCatalog};
use crate::config::Config;
use crate::matching::matcher::Matcher;
use crate::matching::search::JobSearch;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Catalogs are read-only snapshots behind `Arc`; cloning the state clones
/// pointers, never catalog data.
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<JobCatalog>,
    pub courses: Arc<CourseCatalog>,
    /// Pluggable search backend. Default: KeywordJobSearch, the substring
    /// stand-in for a semantic index.
    pub search: Arc<dyn JobSearch>,
    /// Kept for handlers that will need runtime settings later; only the
    /// startup path reads it today.
    #[allow(dead_code)]
    pub config: Config,
}

impl AppState {
    /// A request-scoped Matcher over the shared snapshots.
    pub fn matcher(&self) -> Matcher {
        Matcher::new(self.jobs.clone(), self.courses.clone(), self.search.clone())
    }
}
