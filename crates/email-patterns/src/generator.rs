//! Candidate generation from a pattern catalogue.
//!
//! Generation is a pure mapping: one candidate per pattern, in catalogue
//! order, with no deduplication. Two patterns that render the same address
//! both appear in the output with their own descriptions.

use serde::Serialize;

use crate::catalog::{ConfidenceTier, NamePattern, catalog};
use crate::error::ValidationError;
use crate::template::{Substitutions, render};
use crate::validation::validate;

/// A generated address annotated with the convention that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailCandidate {
    /// Fully substituted address.
    pub email: String,
    /// Description of the originating pattern.
    pub source: &'static str,
    /// Confidence tier of the originating pattern.
    pub confidence: ConfidenceTier,
}

/// Inputs for one generation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationRequest {
    /// First name in any case.
    pub first_name: String,
    /// Last name in any case.
    pub last_name: String,
    /// Organisation domain, used verbatim.
    pub domain: String,
}

impl GenerationRequest {
    /// Build a request from borrowed parts.
    #[must_use]
    pub fn new(first_name: &str, last_name: &str, domain: &str) -> Self {
        Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            domain: domain.to_owned(),
        }
    }
}

fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

/// Applies every pattern in `patterns` to the supplied names and domain.
///
/// Names are lowercased before substitution and the domain is used verbatim.
/// Validation is the caller's job; empty names simply yield empty
/// substitutions.
///
/// # Examples
///
/// ```
/// use email_patterns::{catalog, generate};
///
/// let candidates = generate("John", "Doe", "acme.com", catalog());
/// assert_eq!(candidates.len(), catalog().len());
/// assert_eq!(candidates[0].email, "john.doe@acme.com");
/// assert_eq!(candidates[4].email, "jdoe@acme.com");
/// ```
#[must_use]
pub fn generate(
    first_name: &str,
    last_name: &str,
    domain: &str,
    patterns: &[NamePattern],
) -> Vec<EmailCandidate> {
    let first = first_name.to_lowercase();
    let last = last_name.to_lowercase();
    let values = Substitutions {
        first_initial: initial(&first),
        last_initial: initial(&last),
        first,
        last,
        domain,
    };

    patterns
        .iter()
        .map(|pattern| EmailCandidate {
            email: render(pattern.template(), &values),
            source: pattern.description(),
            confidence: pattern.confidence_tier(),
        })
        .collect()
}

/// Validates `request` and generates candidates from the built-in catalogue.
///
/// # Errors
///
/// Returns [`ValidationError`] when the request fails [`validate`]; no
/// candidates are produced in that case.
///
/// # Examples
///
/// ```
/// use email_patterns::{GenerationRequest, find_candidates};
///
/// let request = GenerationRequest::new("Jane", "Smith", "example.org");
/// let candidates = find_candidates(&request).expect("valid request");
/// assert_eq!(candidates.len(), 12);
/// ```
pub fn find_candidates(request: &GenerationRequest) -> Result<Vec<EmailCandidate>, ValidationError> {
    validate(&request.first_name, &request.last_name, &request.domain)?;
    Ok(generate(
        &request.first_name,
        &request.last_name,
        &request.domain,
        catalog(),
    ))
}
