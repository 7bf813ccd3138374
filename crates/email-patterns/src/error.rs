//! Error types for the email-patterns crate.
//!
//! Validation failures are recoverable by the caller: resubmitting with
//! complete, well-formed input always succeeds.

use std::fmt;

use thiserror::Error;

/// Names the request field that failed the presence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    /// The person's first name.
    FirstName,
    /// The person's last name.
    LastName,
    /// The organisation's domain.
    Domain,
}

impl RequiredField {
    /// Wire name of the field as it appears in request bodies.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Domain => "domain",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned when a generation request fails validation.
///
/// Checks run in a fixed order and the first failure wins, so a missing
/// field is always reported ahead of a malformed domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required input is absent, empty, or whitespace-only.
    #[error("firstName, lastName, and domain are required")]
    MissingField {
        /// First field found missing, in request order.
        field: RequiredField,
    },

    /// The domain does not satisfy the single-label domain syntax.
    #[error("Invalid domain format")]
    InvalidDomain,
}
