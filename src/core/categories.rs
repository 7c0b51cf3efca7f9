//! Category text normalization: the trivial sibling of the hours
//! normalizer, sharing the same ingestion boundary.

/// Placeholder assigned to rows whose category cell is missing.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// A raw category cell, resolved to an explicit variant instead of a
/// "maybe string, maybe nothing" value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Categories {
    Missing,
    Listed(Vec<String>),
}

impl Categories {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(cell) if !cell.trim().is_empty() => Categories::Listed(
                cell.split(';')
                    .map(|category| category.trim().to_string())
                    .collect(),
            ),
            _ => Categories::Missing,
        }
    }

    /// Concrete list for persistence; missing cells get the placeholder.
    pub fn resolve(self, placeholder: &str) -> Vec<String> {
        match self {
            Categories::Missing => vec![placeholder.to_string()],
            Categories::Listed(categories) => categories,
        }
    }
}
