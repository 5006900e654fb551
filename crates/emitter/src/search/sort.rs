use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Orders search results by one field. Independent of the boolean query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortClause {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortClause {
    pub fn new(field: &str, direction: SortDirection) -> Self {
        Self {
            field: field.to_string(),
            direction,
        }
    }

    pub fn asc(field: &str) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub fn desc(field: &str) -> Self {
        Self::new(field, SortDirection::Descending)
    }
}

impl fmt::Display for SortClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.direction {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        };
        write!(f, "{} {}", self.field, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_clause_helpers() {
        assert_eq!(SortClause::asc("name").direction, SortDirection::Ascending);
        assert_eq!(SortClause::desc("price").to_string(), "price desc");
    }

    #[test]
    fn test_direction_defaults_to_ascending() {
        let clause: SortClause = serde_json::from_str(r#"{"field": "code"}"#).unwrap();
        assert_eq!(clause, SortClause::asc("code"));
    }
}
