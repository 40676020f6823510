use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::JobRoleCatalog;
use crate::matching::RoleMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once from the configured vocabulary; stateless after that.
    pub matcher: Arc<RoleMatcher>,
    pub catalog: Arc<RwLock<JobRoleCatalog>>,
}

impl AppState {
    pub fn new(matcher: RoleMatcher, catalog: JobRoleCatalog) -> Self {
        Self {
            matcher: Arc::new(matcher),
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }
}
