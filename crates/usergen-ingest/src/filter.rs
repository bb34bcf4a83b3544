//! Blank and placeholder row filtering.

/// Cell values treated as missing, compared case-insensitively.
pub const DEFAULT_PLACEHOLDERS: &[&str] = &["nan", "none"];

/// Decides which raw cell values are usable names.
///
/// A value is rejected when, after trimming, it is empty or equals one of
/// the placeholder tokens ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFilter {
    placeholders: Vec<String>,
}

impl Default for RowFilter {
    fn default() -> Self {
        Self {
            placeholders: DEFAULT_PLACEHOLDERS
                .iter()
                .map(|token| (*token).to_string())
                .collect(),
        }
    }
}

impl RowFilter {
    /// A filter that only rejects blank values.
    pub fn blank_only() -> Self {
        Self {
            placeholders: Vec::new(),
        }
    }

    /// Adds a placeholder token.
    #[must_use]
    pub fn with_placeholder(mut self, token: &str) -> Self {
        let token = token.trim().to_lowercase();
        if !token.is_empty() && !self.placeholders.contains(&token) {
            self.placeholders.push(token);
        }
        self
    }

    /// Adds several placeholder tokens.
    #[must_use]
    pub fn with_placeholders<I, S>(self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .fold(self, |filter, token| filter.with_placeholder(token.as_ref()))
    }

    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Returns the trimmed value if it is a usable name.
    pub fn accept<'a>(&self, raw: &'a str) -> Option<&'a str> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }
        let lowered = value.to_lowercase();
        if self.placeholders.iter().any(|token| *token == lowered) {
            return None;
        }
        Some(value)
    }
}
