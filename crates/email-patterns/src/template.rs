//! Placeholder tokens and single-pass template rendering.
//!
//! Rendering scans the template once, so substituted values are never
//! re-examined for placeholders and every occurrence of a token is replaced.

/// A placeholder token recognised inside a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Placeholder {
    First,
    Last,
    FirstInitial,
    LastInitial,
    Domain,
}

impl Placeholder {
    /// Parses the token name found between braces.
    pub(crate) fn from_token(token: &str) -> Option<Self> {
        match token {
            "first" => Some(Self::First),
            "last" => Some(Self::Last),
            "firstInitial" => Some(Self::FirstInitial),
            "lastInitial" => Some(Self::LastInitial),
            "domain" => Some(Self::Domain),
            _ => None,
        }
    }
}

/// Values substituted for each placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Substitutions<'a> {
    pub(crate) first: String,
    pub(crate) last: String,
    pub(crate) first_initial: String,
    pub(crate) last_initial: String,
    pub(crate) domain: &'a str,
}

impl Substitutions<'_> {
    fn value(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::First => &self.first,
            Placeholder::Last => &self.last,
            Placeholder::FirstInitial => &self.first_initial,
            Placeholder::LastInitial => &self.last_initial,
            Placeholder::Domain => self.domain,
        }
    }
}

/// Iterates over the raw token names (without braces) in a template.
#[cfg(test)]
pub(crate) fn tokens(template: &str) -> impl Iterator<Item = &str> {
    template
        .split('{')
        .skip(1)
        .filter_map(|segment| segment.split_once('}').map(|(token, _)| token))
}

/// Renders `template`, replacing every known placeholder.
///
/// Unknown tokens and unmatched braces are copied through unchanged.
pub(crate) fn render(template: &str, values: &Substitutions<'_>) -> String {
    let mut rendered = String::with_capacity(template.len() + values.first.len() * 2);
    let mut rest = template;
    while let Some((literal, tail)) = rest.split_once('{') {
        rendered.push_str(literal);
        let Some((token, remainder)) = tail.split_once('}') else {
            rendered.push('{');
            rendered.push_str(tail);
            return rendered;
        };
        let Some(placeholder) = Placeholder::from_token(token) else {
            // Rescan after the brace so a stray `{` cannot hide a placeholder.
            rendered.push('{');
            rest = tail;
            continue;
        };
        rendered.push_str(values.value(placeholder));
        rest = remainder;
    }
    rendered.push_str(rest);
    rendered
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn sample() -> Substitutions<'static> {
        Substitutions {
            first: "ada".to_owned(),
            last: "lovelace".to_owned(),
            first_initial: "a".to_owned(),
            last_initial: "l".to_owned(),
            domain: "acme.com",
        }
    }

    #[rstest]
    #[case("{first}.{last}@{domain}", "ada.lovelace@acme.com")]
    #[case("{firstInitial}{last}@{domain}", "alovelace@acme.com")]
    #[case("{first}{lastInitial}@{domain}", "adal@acme.com")]
    #[case("{first}.{first}@{domain}", "ada.ada@acme.com")]
    #[case("plain@{domain}", "plain@acme.com")]
    fn renders_every_placeholder(#[case] template: &str, #[case] expected: &str) {
        assert_eq!(render(template, &sample()), expected);
    }

    #[rstest]
    #[case("{unknown}@{domain}", "{unknown}@acme.com")]
    #[case("{first@{domain}", "{first@acme.com")]
    #[case("{first}@{domain", "ada@{domain")]
    fn copies_unknown_and_unbalanced_tokens(#[case] template: &str, #[case] expected: &str) {
        assert_eq!(render(template, &sample()), expected);
    }

    #[rstest]
    fn substituted_values_are_not_rescanned() {
        let tricky = Substitutions {
            first: "{last}".to_owned(),
            ..sample()
        };
        assert_eq!(render("{first}@{domain}", &tricky), "{last}@acme.com");
    }

    #[rstest]
    fn tokens_lists_names_in_order() {
        let found: Vec<_> = tokens("{firstInitial}.{last}@{domain}").collect();
        assert_eq!(found, ["firstInitial", "last", "domain"]);
    }
}
