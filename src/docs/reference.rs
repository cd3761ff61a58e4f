//! Validated documentation reference values.

use regex::Regex;
use std::fmt;
use std::slice;
use std::sync::LazyLock;

use crate::error::ReferenceError;
use crate::util::is_external_url;

/// Permissive URL shape: optional scheme, optional `www.`, a dotted host
/// ending in a 2 to 6 letter label, then an optional path or query.
///
/// The label boundary is ASCII only, so a non-ASCII letter right after the
/// label (`example.comé`) does not block the match.
///
/// Used as a containment test, so decorated strings such as
/// `see: example.com/doc` are accepted. This also accepts any text that
/// merely embeds something host shaped; keep it lenient, since tightening
/// it would reject references that are accepted today.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(https?://.)?(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-z]{2,6}(?-u:\b)([-a-zA-Z0-9@:%_+.~#?&/=]*)",
    )
    .expect("URL pattern should compile")
});

/// Single documentation reference that passed URL shape validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference(String);

impl Reference {
    /// Validates candidate string as documentation reference.
    ///
    /// The candidate is kept verbatim; no trimming or normalization is
    /// applied.
    ///
    /// # Arguments
    ///
    /// * `candidate`: Raw reference text from the `docs` field
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::UndefinedReference`] for an empty string and
    /// [`ReferenceError::InvalidReference`] carrying the candidate when no part
    /// of it looks like a URL.
    pub fn parse(candidate: &str) -> Result<Self, ReferenceError> {
        if candidate.is_empty() {
            return Err(ReferenceError::UndefinedReference);
        }

        if !URL_PATTERN.is_match(candidate) {
            return Err(ReferenceError::InvalidReference(candidate.to_string()));
        }

        Ok(Self(candidate.to_string()))
    }

    /// Returns reference text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether reference points off-site (explicit HTTP or HTTPS scheme).
    pub fn is_external(&self) -> bool {
        is_external_url(&self.0)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Reference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Reference {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Reference {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Ordered, read only list of references in source order.
///
/// Duplicates are preserved. Lists are only produced by validation, so
/// every element is a [`Reference`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceList(Vec<Reference>);

impl ReferenceList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Reference> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Reference] {
        &self.0
    }

    /// Returns references as plain strings, in order.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|r| r.0.clone()).collect()
    }
}

impl FromIterator<Reference> for ReferenceList {
    fn from_iter<I: IntoIterator<Item = Reference>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ReferenceList {
    type Item = &'a Reference;
    type IntoIter = slice::Iter<'a, Reference>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_url() {
        // Arrange
        let candidate = "https://example.com/docs?page=1#intro";

        // Act
        let reference = Reference::parse(candidate).expect("Should accept full URL");

        // Assert
        assert_eq!(reference.as_str(), candidate);
    }

    #[test]
    fn test_parse_short_host() {
        let reference = Reference::parse("https://a.com").expect("Should accept short host");
        assert_eq!(reference, "https://a.com");
    }

    #[test]
    fn test_parse_without_scheme() {
        assert!(Reference::parse("www.example.org").is_ok());
        assert!(Reference::parse("docs.microsoft.com/en-us/windows").is_ok());
    }

    #[test]
    fn test_parse_decorated_string_is_accepted() {
        // Arrange
        let candidate = "see: example.com/doc";

        // Act
        let result = Reference::parse(candidate);

        // Assert
        assert!(
            result.is_ok(),
            "Containment match should accept decorated text: {:?}",
            result
        );
    }

    #[test]
    fn test_parse_non_ascii_after_label() {
        // Act
        let result = Reference::parse("example.comé");

        // Assert
        assert_eq!(result.map(|r| r.to_string()), Ok("example.comé".to_string()));
    }

    #[test]
    fn test_parse_empty_is_undefined() {
        assert_eq!(Reference::parse(""), Err(ReferenceError::UndefinedReference));
    }

    #[test]
    fn test_parse_rejects_non_url() {
        // Arrange
        let candidates = ["not a url", "http://", "https://", "localhost", "a.b"];

        for candidate in candidates {
            // Act
            let result = Reference::parse(candidate);

            // Assert
            assert_eq!(
                result,
                Err(ReferenceError::InvalidReference(candidate.to_string())),
                "Should reject {:?}",
                candidate
            );
        }
    }

    #[test]
    fn test_invalid_reference_message_names_value() {
        // Act
        let err = Reference::parse("not a url").expect_err("Should reject");

        // Assert
        assert!(
            err.to_string().contains("not a url"),
            "Error should name offending value: {}",
            err
        );
    }

    #[test]
    fn test_reference_is_external() {
        assert!(Reference::parse("https://example.com").unwrap().is_external());
        assert!(Reference::parse("HTTP://example.com").unwrap().is_external());
        assert!(!Reference::parse("example.com/page").unwrap().is_external());
    }

    #[test]
    fn test_reference_display() {
        let reference = Reference::parse("https://example.com").unwrap();
        assert_eq!(format!("{}", reference), "https://example.com");
    }

    #[test]
    fn test_list_preserves_order_and_duplicates() {
        // Arrange
        let references = ["https://b.com", "https://a.com", "https://b.com"]
            .into_iter()
            .map(|s| Reference::parse(s).unwrap());

        // Act
        let list: ReferenceList = references.collect();

        // Assert
        assert_eq!(list.len(), 3);
        assert_eq!(
            list.to_strings(),
            vec!["https://b.com", "https://a.com", "https://b.com"]
        );
    }

    #[test]
    fn test_empty_list() {
        let list = ReferenceList::default();
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
        assert!(list.as_slice().is_empty());
    }
}
