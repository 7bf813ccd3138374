//! Candidate email address generation from common corporate naming
//! conventions.
//!
//! Given a first name, last name and organisation domain, this crate renders
//! every entry of a fixed pattern catalogue into a candidate address and tags
//! it with the convention's description and a confidence tier. Nothing is
//! verified against the network; the output is a ranked guess list.
//!
//! # Overview
//!
//! - [`catalog`] enumerates the built-in [`NamePattern`] values in order.
//! - [`validate`] checks presence of all inputs and the domain syntax.
//! - [`generate`] renders a catalogue for already validated inputs.
//! - [`find_candidates`] runs validation followed by generation.
//!
//! # Example
//!
//! ```
//! use email_patterns::{ConfidenceTier, GenerationRequest, find_candidates};
//!
//! let request = GenerationRequest::new("Jane", "Smith", "example.org");
//! let candidates = find_candidates(&request).expect("valid request");
//!
//! let standard = candidates.first().expect("catalogue is never empty");
//! assert_eq!(standard.email, "jane.smith@example.org");
//! assert_eq!(standard.source, "Standard: firstname.lastname");
//! assert_eq!(standard.confidence, ConfidenceTier::High);
//! ```

mod catalog;
mod error;
mod generator;
mod template;
mod validation;

pub use catalog::{ConfidenceTier, NamePattern, catalog};
pub use error::{RequiredField, ValidationError};
pub use generator::{EmailCandidate, GenerationRequest, find_candidates, generate};
pub use validation::{is_valid_domain, validate};
