//! The fixed catalogue of corporate email naming conventions.
//!
//! Catalogue order is significant: it defines the order in which candidates
//! are emitted. The catalogue is a `static` slice and is never mutated, so it
//! can be read from any number of threads without coordination.

use std::fmt;

use serde::Serialize;

/// Editorial judgement of how common a naming convention is.
///
/// Tiers are assigned by hand; they are not computed from any signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    /// Widely used convention.
    High,
    /// Plausible but less common convention.
    Medium,
    /// Rarely used convention.
    Low,
}

impl ConfidenceTier {
    /// Wire representation of the tier.
    ///
    /// # Examples
    ///
    /// ```
    /// use email_patterns::ConfidenceTier;
    ///
    /// assert_eq!(ConfidenceTier::Medium.as_str(), "medium");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One naming convention: a template plus its description and tier.
///
/// ## Invariants
/// - `template` contains exactly one `@`, followed by the `{domain}`
///   placeholder.
/// - Placeholders are drawn from `{first}`, `{last}`, `{firstInitial}`,
///   `{lastInitial}` and `{domain}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamePattern {
    template: &'static str,
    description: &'static str,
    #[serde(rename = "confidence")]
    confidence_tier: ConfidenceTier,
}

impl NamePattern {
    const fn new(
        template: &'static str,
        description: &'static str,
        confidence_tier: ConfidenceTier,
    ) -> Self {
        Self {
            template,
            description,
            confidence_tier,
        }
    }

    /// Template string containing placeholder tokens.
    #[must_use]
    pub const fn template(&self) -> &'static str {
        self.template
    }

    /// Human-readable label of the convention.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Confidence tier assigned to the convention.
    #[must_use]
    pub const fn confidence_tier(&self) -> ConfidenceTier {
        self.confidence_tier
    }
}

static CATALOG: [NamePattern; 12] = [
    NamePattern::new(
        "{first}.{last}@{domain}",
        "Standard: firstname.lastname",
        ConfidenceTier::High,
    ),
    NamePattern::new(
        "{first}{last}@{domain}",
        "No separator: firstnamelastname",
        ConfidenceTier::High,
    ),
    NamePattern::new(
        "{first}_{last}@{domain}",
        "Underscore: firstname_lastname",
        ConfidenceTier::Medium,
    ),
    NamePattern::new(
        "{first}-{last}@{domain}",
        "Hyphen: firstname-lastname",
        ConfidenceTier::Medium,
    ),
    NamePattern::new(
        "{firstInitial}{last}@{domain}",
        "First initial + last: flastname",
        ConfidenceTier::High,
    ),
    NamePattern::new(
        "{firstInitial}.{last}@{domain}",
        "First initial dot last: f.lastname",
        ConfidenceTier::Medium,
    ),
    NamePattern::new(
        "{first}{lastInitial}@{domain}",
        "First + last initial: firstnamel",
        ConfidenceTier::Low,
    ),
    NamePattern::new("{first}@{domain}", "First name only", ConfidenceTier::Low),
    NamePattern::new("{last}@{domain}", "Last name only", ConfidenceTier::Low),
    NamePattern::new(
        "{last}.{first}@{domain}",
        "Reversed: lastname.firstname",
        ConfidenceTier::Medium,
    ),
    NamePattern::new(
        "{last}{first}@{domain}",
        "Reversed no separator: lastnamefirstname",
        ConfidenceTier::Low,
    ),
    NamePattern::new(
        "{first}+{last}@{domain}",
        "Plus sign: firstname+lastname",
        ConfidenceTier::Low,
    ),
];

/// Returns the built-in catalogue in its canonical order.
///
/// # Examples
///
/// ```
/// use email_patterns::catalog;
///
/// let first = catalog().first().expect("catalogue is never empty");
/// assert_eq!(first.template(), "{first}.{last}@{domain}");
/// assert_eq!(catalog().len(), 12);
/// ```
#[must_use]
pub const fn catalog() -> &'static [NamePattern] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    //! Checks the structural invariants of the shipped catalogue.

    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;
    use crate::template::{Placeholder, tokens};

    #[rstest]
    fn every_template_has_a_single_at_before_the_domain() {
        for pattern in catalog() {
            let template = pattern.template();
            assert_eq!(
                template.matches('@').count(),
                1,
                "template {template} must contain exactly one @"
            );
            assert!(
                template.ends_with("@{domain}"),
                "template {template} must end with @{{domain}}"
            );
        }
    }

    #[rstest]
    fn every_token_is_a_known_placeholder() {
        for pattern in catalog() {
            for token in tokens(pattern.template()) {
                assert!(
                    Placeholder::from_token(token).is_some(),
                    "unknown token {token} in {}",
                    pattern.template()
                );
            }
        }
    }

    #[rstest]
    fn templates_and_descriptions_are_unique() {
        let templates: HashSet<_> = catalog().iter().map(NamePattern::template).collect();
        let descriptions: HashSet<_> = catalog().iter().map(NamePattern::description).collect();
        assert_eq!(templates.len(), catalog().len());
        assert_eq!(descriptions.len(), catalog().len());
    }

    #[rstest]
    #[case(ConfidenceTier::High, "\"high\"")]
    #[case(ConfidenceTier::Medium, "\"medium\"")]
    #[case(ConfidenceTier::Low, "\"low\"")]
    fn tiers_serialise_in_lowercase(#[case] tier: ConfidenceTier, #[case] expected: &str) {
        let encoded = serde_json::to_string(&tier).unwrap_or_default();
        assert_eq!(encoded, expected);
        assert_eq!(format!("\"{tier}\""), expected);
    }

    #[rstest]
    fn patterns_serialise_with_confidence_key() {
        let value = serde_json::to_value(catalog().first()).unwrap_or_default();
        assert_eq!(
            value,
            serde_json::json!({
                "template": "{first}.{last}@{domain}",
                "description": "Standard: firstname.lastname",
                "confidence": "high",
            })
        );
    }
}
