//! Driving port for candidate email generation.
//!
//! Production wires [`CatalogueEmailFinder`], which validates the request and
//! renders the built-in pattern catalogue. The work is pure and bounded, so
//! the port performs no I/O and never retries.

use async_trait::async_trait;
use email_patterns::{
    EmailCandidate, GenerationRequest, NamePattern, ValidationError, catalog, find_candidates,
};
use tracing::debug;

use crate::domain::Error;

/// Domain use-case port for suggesting email addresses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailFinder: Send + Sync {
    /// Validate `request` and return one candidate per catalogue pattern.
    ///
    /// Validation failures surface as [`crate::domain::ErrorCode::InvalidRequest`]
    /// and no candidates are returned alongside them.
    async fn find_candidates(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<EmailCandidate>, Error>;

    /// The patterns candidates are generated from, in output order.
    fn patterns(&self) -> Vec<NamePattern>;
}

/// Wire name of the field a validation failure blames, if any.
fn rejected_field(err: &ValidationError) -> Option<&'static str> {
    match err {
        ValidationError::MissingField { field } => Some(field.as_str()),
        ValidationError::InvalidDomain => Some("domain"),
    }
}

/// [`EmailFinder`] backed by the static pattern catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogueEmailFinder;

#[async_trait]
impl EmailFinder for CatalogueEmailFinder {
    async fn find_candidates(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<EmailCandidate>, Error> {
        let candidates = find_candidates(request).map_err(|err| {
            debug!(
                error = %err,
                field = rejected_field(&err),
                "email candidate request rejected"
            );
            Error::from(err)
        })?;
        debug!(
            domain = %request.domain,
            count = candidates.len(),
            "generated email candidates"
        );
        Ok(candidates)
    }

    fn patterns(&self) -> Vec<NamePattern> {
        catalog().to_vec()
    }
}
