//! OpenAPI schema definitions for `email-patterns` types.
//!
//! The generation crate stays free of framework dependencies and does not
//! derive `ToSchema`. These wrappers mirror the serialised shape of its types
//! so the OpenAPI document can describe them from the adapter layer.

use utoipa::ToSchema;

/// OpenAPI schema for [`email_patterns::ConfidenceTier`].
#[derive(ToSchema)]
#[schema(as = email_patterns::ConfidenceTier)]
pub enum ConfidenceTierSchema {
    /// Widely used convention.
    #[schema(rename = "high")]
    High,
    /// Plausible but less common convention.
    #[schema(rename = "medium")]
    Medium,
    /// Rarely used convention.
    #[schema(rename = "low")]
    Low,
}

/// OpenAPI schema for [`email_patterns::EmailCandidate`].
#[derive(ToSchema)]
#[schema(as = email_patterns::EmailCandidate)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmailCandidateSchema {
    /// Fully substituted address.
    #[schema(example = "jane.smith@example.org")]
    email: String,
    /// Description of the convention that produced the address.
    #[schema(example = "Standard: firstname.lastname")]
    source: String,
    /// Editorial confidence tier of the convention.
    confidence: ConfidenceTierSchema,
}

/// OpenAPI schema for [`email_patterns::NamePattern`].
#[derive(ToSchema)]
#[schema(as = email_patterns::NamePattern)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct NamePatternSchema {
    /// Template with `{first}`, `{last}`, `{firstInitial}`, `{lastInitial}`
    /// and `{domain}` placeholders.
    #[schema(example = "{first}.{last}@{domain}")]
    template: String,
    /// Human-readable label of the convention.
    #[schema(example = "Standard: firstname.lastname")]
    description: String,
    /// Editorial confidence tier of the convention.
    confidence: ConfidenceTierSchema,
}
