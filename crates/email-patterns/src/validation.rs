//! Presence and domain-syntax checks run before generation.
//!
//! # Validation Rules
//!
//! 1. `firstName`, `lastName` and `domain` must be non-empty once trimmed.
//! 2. `domain` must be a single label of 1-63 alphanumeric or hyphen
//!    characters (starting with an alphanumeric), a dot, and an alphabetic
//!    suffix of at least two letters.
//!
//! Multi-label hosts such as `mail.acme.com` fail rule 2. Existing clients
//! depend on that boundary, so it is kept as is.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{RequiredField, ValidationError};

static DOMAIN_RE: OnceLock<Regex> = OnceLock::new();

fn domain_regex() -> &'static Regex {
    DOMAIN_RE.get_or_init(|| {
        let pattern = r"^[a-zA-Z0-9][a-zA-Z0-9-]{0,61}[a-zA-Z0-9]?\.[a-zA-Z]{2,}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("domain regex failed to compile: {error}"))
    })
}

/// Returns `true` if `domain` satisfies the domain-syntax rule.
///
/// The whole string must match; surrounding whitespace is not trimmed.
///
/// # Examples
///
/// ```
/// use email_patterns::is_valid_domain;
///
/// assert!(is_valid_domain("acme.com"));
/// assert!(!is_valid_domain("acme"));
/// assert!(!is_valid_domain("mail.acme.com"));
/// ```
#[must_use]
pub fn is_valid_domain(domain: &str) -> bool {
    domain_regex().is_match(domain)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates the inputs of a generation request.
///
/// # Errors
///
/// Returns [`ValidationError::MissingField`] when any input is blank, checked
/// in the order first name, last name, domain. Otherwise returns
/// [`ValidationError::InvalidDomain`] when the domain fails
/// [`is_valid_domain`].
///
/// # Examples
///
/// ```
/// use email_patterns::{ValidationError, validate};
///
/// assert_eq!(validate("Jane", "Smith", "example.org"), Ok(()));
/// assert_eq!(
///     validate("Jane", "Smith", "example"),
///     Err(ValidationError::InvalidDomain)
/// );
/// ```
pub fn validate(first_name: &str, last_name: &str, domain: &str) -> Result<(), ValidationError> {
    let fields = [
        (RequiredField::FirstName, first_name),
        (RequiredField::LastName, last_name),
        (RequiredField::Domain, domain),
    ];
    if let Some((field, _)) = fields.into_iter().find(|(_, value)| is_blank(value)) {
        return Err(ValidationError::MissingField { field });
    }
    if !is_valid_domain(domain) {
        return Err(ValidationError::InvalidDomain);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    //! Covers presence checks, domain syntax, and rule precedence.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("acme.com")]
    #[case("example.org")]
    #[case("a.io")]
    #[case("ACME.COM")]
    #[case("my-company.co")]
    #[case("123.museum")]
    #[case("acme-.com")]
    fn accepts_single_label_domains(#[case] domain: &str) {
        assert!(is_valid_domain(domain), "{domain} should be accepted");
    }

    #[rstest]
    #[case("acme")]
    #[case("mail.acme.com")]
    #[case("-acme.com")]
    #[case("acme.c")]
    #[case("acme.c0m")]
    #[case(" acme.com")]
    #[case("acme.com ")]
    #[case("acme..com")]
    #[case("ac_me.com")]
    #[case("ácme.com")]
    #[case(".com")]
    fn rejects_malformed_domains(#[case] domain: &str) {
        assert!(!is_valid_domain(domain), "{domain} should be rejected");
    }

    #[rstest]
    fn label_length_is_capped_at_sixty_three() {
        let longest = format!("{}.com", "a".repeat(63));
        let too_long = format!("{}.com", "a".repeat(64));
        assert!(is_valid_domain(&longest));
        assert!(!is_valid_domain(&too_long));
    }

    #[rstest]
    #[case("", "Doe", "acme.com", RequiredField::FirstName)]
    #[case("John", "", "acme.com", RequiredField::LastName)]
    #[case("John", "Doe", "", RequiredField::Domain)]
    #[case("   ", "Doe", "acme.com", RequiredField::FirstName)]
    #[case("John", "\t", "acme.com", RequiredField::LastName)]
    #[case("", "", "", RequiredField::FirstName)]
    fn blank_inputs_are_missing_fields(
        #[case] first: &str,
        #[case] last: &str,
        #[case] domain: &str,
        #[case] field: RequiredField,
    ) {
        assert_eq!(
            validate(first, last, domain),
            Err(ValidationError::MissingField { field })
        );
    }

    #[rstest]
    fn missing_field_wins_over_invalid_domain() {
        assert_eq!(
            validate("", "Doe", "-acme.com"),
            Err(ValidationError::MissingField {
                field: RequiredField::FirstName
            })
        );
    }

    #[rstest]
    #[case("acme")]
    #[case("mail.acme.com")]
    #[case("-acme.com")]
    fn malformed_domain_is_reported(#[case] domain: &str) {
        assert_eq!(
            validate("John", "Doe", domain),
            Err(ValidationError::InvalidDomain)
        );
    }

    #[rstest]
    fn names_are_not_charset_restricted() {
        assert_eq!(validate("Zoë", "O'Brien-Łukasz", "acme.com"), Ok(()));
    }
}
