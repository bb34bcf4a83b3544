//! Name column selection.

use crate::error::{IngestError, Result};
use crate::table::{NameTable, normalize_header};

/// Header names recognised as holding full names, compared case-insensitively.
pub const DEFAULT_NAME_HEADERS: &[&str] = &[
    "name",
    "full name",
    "fullname",
    "full_name",
    "employee",
    "user",
];

/// How a [`ColumnChoice`] was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnDetection {
    /// The caller named the column.
    Explicit,
    /// A header matched one of the candidate names.
    AutoDetected,
    /// Nothing matched; the first column was used.
    Fallback,
}

/// The column names are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnChoice {
    /// Zero-based column index.
    pub index: usize,
    /// Header text of the column.
    pub name: String,
    pub detection: ColumnDetection,
}

/// Strategy for locating the name column in a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    /// Use the column whose header equals this name exactly, after the
    /// name gets the same whitespace normalization as headers.
    Explicit(String),
    /// Use the first header matching one of these names (case-insensitive),
    /// falling back to the first column.
    Auto(Vec<String>),
}

impl Default for ColumnSelector {
    fn default() -> Self {
        Self::Auto(
            DEFAULT_NAME_HEADERS
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
        )
    }
}

impl ColumnSelector {
    /// Auto-detection with a custom list of candidate headers.
    ///
    /// An empty list keeps the default candidates.
    pub fn auto_with<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let candidates: Vec<String> = candidates.into_iter().map(Into::into).collect();
        if candidates.is_empty() {
            Self::default()
        } else {
            Self::Auto(candidates)
        }
    }

    /// Picks the name column of `table`.
    pub fn select(&self, table: &NameTable) -> Result<ColumnChoice> {
        let headers = &table.headers;
        if headers.is_empty() {
            return Err(IngestError::NoHeaderDetected {
                path: table.path.clone(),
            });
        }

        match self {
            Self::Explicit(column) => {
                let wanted = normalize_header(column);
                headers
                    .iter()
                    .position(|header| *header == wanted)
                    .map(|index| ColumnChoice {
                        index,
                        name: headers[index].clone(),
                        detection: ColumnDetection::Explicit,
                    })
                    .ok_or_else(|| IngestError::ColumnNotFound {
                        column: column.clone(),
                        available: headers.clone(),
                    })
            }
            Self::Auto(candidates) => {
                let candidates: Vec<String> = candidates
                    .iter()
                    .map(|candidate| candidate.trim().to_lowercase())
                    .collect();
                let detected = headers
                    .iter()
                    .position(|header| candidates.contains(&header.to_lowercase()));
                let choice = match detected {
                    Some(index) => ColumnChoice {
                        index,
                        name: headers[index].clone(),
                        detection: ColumnDetection::AutoDetected,
                    },
                    None => {
                        tracing::warn!(
                            column = %headers[0],
                            "could not auto-detect name column, using first column"
                        );
                        ColumnChoice {
                            index: 0,
                            name: headers[0].clone(),
                            detection: ColumnDetection::Fallback,
                        }
                    }
                };
                Ok(choice)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn table(headers: &[&str]) -> NameTable {
        NameTable {
            path: PathBuf::from("people.csv"),
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    #[test]
    fn test_auto_detects_known_header() {
        let choice = ColumnSelector::default()
            .select(&table(&["Id", "Full Name", "Name"]))
            .unwrap();
        assert_eq!(choice.index, 1);
        assert_eq!(choice.name, "Full Name");
        assert_eq!(choice.detection, ColumnDetection::AutoDetected);
    }

    #[test]
    fn test_auto_falls_back_to_first_column() {
        let choice = ColumnSelector::default()
            .select(&table(&["Person", "Email"]))
            .unwrap();
        assert_eq!(choice.index, 0);
        assert_eq!(choice.detection, ColumnDetection::Fallback);
    }

    #[test]
    fn test_custom_candidates() {
        let selector = ColumnSelector::auto_with(["Staff Member"]);
        let choice = selector.select(&table(&["Id", "staff member"])).unwrap();
        assert_eq!(choice.index, 1);

        assert_eq!(
            ColumnSelector::auto_with(Vec::<String>::new()),
            ColumnSelector::default()
        );
    }

    #[test]
    fn test_explicit_is_exact() {
        let headers = table(&["name", "Name"]);
        let choice = ColumnSelector::Explicit("Name".to_string())
            .select(&headers)
            .unwrap();
        assert_eq!(choice.index, 1);
        assert_eq!(choice.detection, ColumnDetection::Explicit);

        let missing = ColumnSelector::Explicit("NAME".to_string()).select(&headers);
        assert!(matches!(
            missing,
            Err(IngestError::ColumnNotFound { ref available, .. }) if available.len() == 2
        ));
    }

    #[test]
    fn test_explicit_name_is_normalized_like_headers() {
        let headers = table(&["Id", "Full Name"]);
        for requested in ["Full  Name", " Full Name\t", "\u{feff}Full Name"] {
            let choice = ColumnSelector::Explicit(requested.to_string())
                .select(&headers)
                .unwrap();
            assert_eq!(choice.index, 1, "{requested:?}");
            assert_eq!(choice.name, "Full Name");
        }
    }
}
