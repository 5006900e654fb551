//! Retrieval back ends and the options selecting which of them to emit for.

use crate::search::sort::SortClause;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// Object-relational mapper query language.
    Relational,
    /// Raw SQL handed straight to a database connection.
    Sql,
    /// Full-text/faceted search engine.
    Search,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Relational, Target::Sql, Target::Search];
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Relational => write!(f, "relational"),
            Target::Sql => write!(f, "sql"),
            Target::Search => write!(f, "search"),
        }
    }
}

/// Options for a single compilation.
///
/// Deserializable so callers can embed it in their own configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    pub targets: Vec<Target>,

    /// Ordering attached to the search-engine root. Empty means relevance.
    pub sort: Vec<SortClause>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            targets: Target::ALL.to_vec(),
            sort: Vec::new(),
        }
    }
}

impl CompileOptions {
    pub fn for_targets(targets: &[Target]) -> Self {
        Self {
            targets: targets.to_vec(),
            ..Default::default()
        }
    }

    pub fn with_sort(mut self, sort: Vec<SortClause>) -> Self {
        self.sort = sort;
        self
    }

    pub fn wants(&self, target: Target) -> bool {
        self.targets.contains(&target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::sort::SortDirection;

    #[test]
    fn test_default_options_request_every_target() {
        let options = CompileOptions::default();
        assert!(Target::ALL.iter().all(|t| options.wants(*t)));
        assert!(options.sort.is_empty());
    }

    #[test]
    fn test_options_from_json() {
        let options: CompileOptions = serde_json::from_str(
            r#"{"targets": ["sql", "search"], "sort": [{"field": "price", "direction": "descending"}]}"#,
        )
        .unwrap();

        assert!(!options.wants(Target::Relational));
        assert!(options.wants(Target::Sql));
        assert_eq!(options.sort.len(), 1);
        assert_eq!(options.sort[0].direction, SortDirection::Descending);
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let options: CompileOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, CompileOptions::default());
    }
}
