use std::fmt;

use unicode_normalization::UnicodeNormalization;

/// Case-normalized word, the identity of a record in every cache tier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupKey(String);

impl LookupKey {
    /// Trim, NFKC-normalize and lowercase `word`. `None` for blank input.
    pub fn new(word: &str) -> Option<Self> {
        let text = word.trim();

        if text.is_empty() {
            return None;
        }

        let normalized: String = text.nfkc().collect::<String>().to_lowercase();
        Some(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        let key = LookupKey::new("  Run \n").unwrap();
        assert_eq!(key.as_str(), "run");
        assert_eq!(key, LookupKey::new("RUN").unwrap());
    }

    #[test]
    fn folds_compatibility_forms() {
        // fullwidth latin letters
        let key = LookupKey::new("Ｒｕｎ").unwrap();
        assert_eq!(key.as_str(), "run");
    }

    #[test]
    fn blank_word_has_no_key() {
        assert!(LookupKey::new("").is_none());
        assert!(LookupKey::new("   ").is_none());
    }
}
