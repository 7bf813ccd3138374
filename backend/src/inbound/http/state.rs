//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable with doubles.

use std::sync::Arc;

use crate::domain::ports::{CatalogueEmailFinder, EmailFinder};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub email_finder: Arc<dyn EmailFinder>,
}

impl HttpState {
    /// Construct state from an explicit port implementation.
    pub fn new(email_finder: Arc<dyn EmailFinder>) -> Self {
        Self { email_finder }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(Arc::new(CatalogueEmailFinder))
    }
}
