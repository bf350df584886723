//! Classification of the free-form identity string an avatar is built from.
//!
//! The service labels an avatar from an email address, a first/last name
//! pair or literal initials. Callers hand over one string and this module
//! decides which of those it is.

/// The identity an avatar is labelled with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Email(String),
    /// Two-word input. `last` is `None` when the input holds several words
    /// but no space to split them on (e.g. `"foo.bar"`).
    Name { first: String, last: Option<String> },
    Initials(String),
    None,
}

/// Classifies `value` as an email, a name pair or initials.
///
/// - An `@` after the first byte makes it an email. The first `@` decides, so
///   a value starting with `@` is never an email.
/// - More than one word makes it a name, split on single spaces; the first
///   two pieces are kept.
/// - Anything else non-empty is taken verbatim as initials.
pub fn classify(value: &str) -> Identity {
    let identity = if value.find('@').is_some_and(|pos| pos > 0) {
        Identity::Email(value.to_string())
    } else if word_count(value) > 1 {
        let mut parts = value.split(' ');
        Identity::Name {
            first: parts.next().unwrap_or_default().to_string(),
            last: parts.next().map(str::to_string),
        }
    } else if value.is_empty() {
        Identity::None
    } else {
        Identity::Initials(value.to_string())
    };
    tracing::debug!(?identity, "classified identity input");
    identity
}

/// Counts words. A word is a run of ASCII letters, apostrophes and hyphens.
/// A leading apostrophe or hyphen and a trailing hyphen of the whole input
/// are ignored.
fn word_count(value: &str) -> usize {
    let mut bytes = value.as_bytes();
    if let [b'\'' | b'-', rest @ ..] = bytes {
        bytes = rest;
    }
    if let [rest @ .., b'-'] = bytes {
        bytes = rest;
    }

    let is_word_byte = |b: &u8| b.is_ascii_alphabetic() || *b == b'\'' || *b == b'-';
    bytes
        .split(|b| !is_word_byte(b))
        .filter(|run| !run.is_empty())
        .count()
}
