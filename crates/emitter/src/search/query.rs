//! Defines the structured query handed to the search-engine client.

use crate::connective::Occur;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchQuery {
    /// Exact term match, e.g. `catalogCode:"Sports"`.
    Term { field: String, value: String },

    /// Range over a field. A missing bound is open.
    Range {
        field: String,
        lower: Option<String>,
        upper: Option<String>,
        include_lower: bool,
        include_upper: bool,
    },

    /// Matches every document, e.g. `*:*`.
    MatchAll,

    Boolean(BooleanQuery),
}

/// A single occurrence-qualified member of a boolean query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccurClause {
    pub occur: Occur,
    pub query: SearchQuery,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BooleanQuery {
    clauses: Vec<OccurClause>,
}

impl SearchQuery {
    pub fn term(field: &str, value: &str) -> Self {
        SearchQuery::Term {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn range(
        field: &str,
        lower: Option<&str>,
        upper: Option<&str>,
        include_lower: bool,
        include_upper: bool,
    ) -> Self {
        SearchQuery::Range {
            field: field.to_string(),
            lower: lower.map(String::from),
            upper: upper.map(String::from),
            include_lower,
            include_upper,
        }
    }
}

impl BooleanQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, occur: Occur, query: SearchQuery) -> &mut Self {
        self.clauses.push(OccurClause { occur, query });
        self
    }

    pub fn must(&mut self, query: SearchQuery) -> &mut Self {
        self.add(Occur::Must, query)
    }

    pub fn should(&mut self, query: SearchQuery) -> &mut Self {
        self.add(Occur::Should, query)
    }

    pub fn must_not(&mut self, query: SearchQuery) -> &mut Self {
        self.add(Occur::MustNot, query)
    }

    pub fn clauses(&self) -> &[OccurClause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl From<BooleanQuery> for SearchQuery {
    fn from(query: BooleanQuery) -> Self {
        SearchQuery::Boolean(query)
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchQuery::Term { field, value } => write!(f, "{field}:{value}"),
            SearchQuery::Range {
                field,
                lower,
                upper,
                include_lower,
                include_upper,
            } => {
                let open = if *include_lower { '[' } else { '{' };
                let close = if *include_upper { ']' } else { '}' };
                write!(
                    f,
                    "{field}:{open}{} TO {}{close}",
                    lower.as_deref().unwrap_or("*"),
                    upper.as_deref().unwrap_or("*"),
                )
            }
            SearchQuery::MatchAll => write!(f, "*:*"),
            SearchQuery::Boolean(query) => fmt::Display::fmt(query, f),
        }
    }
}

impl fmt::Display for BooleanQuery {
    /// Clauses separated by one space, each prefixed by its occurrence.
    /// Nested boolean queries are parenthesised.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(clause.occur.prefix())?;
            match &clause.query {
                SearchQuery::Boolean(nested) => write!(f, "({nested})")?,
                other => write!(f, "{other}")?,
            }
        }
        Ok(())
    }
}
