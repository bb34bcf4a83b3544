//! Name normalization into ordered parts.

/// Lowercased, whitespace-delimited tokens of a full name in original order.
///
/// Parts are never empty: runs of whitespace do not produce zero-length
/// tokens, and an empty or whitespace-only name yields no parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameParts {
    parts: Vec<String>,
}

impl NameParts {
    /// Lowercases `full_name` and splits it on runs of separators.
    ///
    /// Separators are Unicode whitespace plus the ASCII information
    /// separators U+001C..=U+001F, which some exports use between fields.
    pub fn parse(full_name: &str) -> Self {
        let parts = full_name
            .to_lowercase()
            .split(is_separator)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect();
        Self { parts }
    }

    /// Returns the number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns true if the name had no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.parts
    }

    pub fn first(&self) -> Option<&str> {
        self.parts.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.parts.last().map(String::as_str)
    }

    /// Returns the first character of the part at `index`.
    ///
    /// Characters are Unicode scalar values, so `"ñúñez"` yields `'ñ'`.
    pub fn initial(&self, index: usize) -> Option<char> {
        self.parts.get(index).and_then(|part| part.chars().next())
    }

    /// Returns every part concatenated without separators.
    pub fn joined(&self) -> String {
        self.parts.concat()
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
