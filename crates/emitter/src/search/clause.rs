//! Bridges connective-based composition onto the search engine's occurrence
//! model. Result ordering travels alongside the boolean query rather than
//! inside it.

use crate::{
    connective::{Connective, Occur},
    error::Result,
    native::NativeQuery,
    search::{
        query::{BooleanQuery, SearchQuery},
        sort::SortClause,
    },
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// The native form consumed by the search-engine client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: SearchQuery,

    /// Empty means the engine's default relevance ranking.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<SortClause>,
}

impl SearchRequest {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for SearchRequest {
    /// Diagnostic text only. Clients consume the structured fields.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.query, f)
    }
}

/// A structured query plus the ordering to apply to its results.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchEngineQuery {
    query: SearchQuery,
    sort_clauses: Vec<SortClause>,
}

impl SearchEngineQuery {
    pub fn new(query: SearchQuery) -> Self {
        Self {
            query,
            sort_clauses: Vec::new(),
        }
    }

    /// Combines `clauses` into one boolean query, keeping their order.
    ///
    /// Only the root of a tree is ordered, so sort clauses on the children
    /// are dropped here.
    pub fn compose<I>(clauses: I) -> Self
    where
        I: IntoIterator<Item = SearchEngineClause>,
    {
        let mut boolean = BooleanQuery::new();
        for clause in clauses {
            if !clause.effective_sort().is_empty() {
                warn!(
                    "Discarding {} sort clause(s) attached to a nested search clause",
                    clause.effective_sort().len()
                );
            }
            boolean.add(clause.occur, clause.child.query);
        }
        Self::new(SearchQuery::Boolean(boolean))
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn sort_clauses(&self) -> &[SortClause] {
        &self.sort_clauses
    }

    pub fn set_sort_clauses(&mut self, sort_clauses: Vec<SortClause>) -> &mut Self {
        self.sort_clauses = sort_clauses;
        self
    }
}

impl NativeQuery for SearchEngineQuery {
    type Native = SearchRequest;

    fn render_native(&self) -> SearchRequest {
        SearchRequest {
            query: self.query.clone(),
            sort: self.sort_clauses.clone(),
        }
    }
}

impl fmt::Display for SearchEngineQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.query, f)
    }
}

/// A child query qualified by the occurrence its connective maps to.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchEngineClause {
    occur: Occur,
    child: SearchEngineQuery,
    sort_clauses: Vec<SortClause>,
}

impl SearchEngineClause {
    pub fn new(connective: Connective, child: SearchEngineQuery) -> Self {
        Self {
            occur: connective.occur(),
            child,
            sort_clauses: Vec::new(),
        }
    }

    /// Builds a clause from a connective token.
    ///
    /// Fails with [`EmitError::UnknownConnective`](crate::EmitError::UnknownConnective)
    /// for anything outside AND, OR and NOT.
    pub fn parse(connective: &str, child: SearchEngineQuery) -> Result<Self> {
        Ok(Self::new(connective.parse()?, child))
    }

    pub fn occur(&self) -> Occur {
        self.occur
    }

    pub fn child(&self) -> &SearchEngineQuery {
        &self.child
    }

    pub fn sort_clauses(&self) -> &[SortClause] {
        &self.sort_clauses
    }

    pub fn set_sort_clauses(&mut self, sort_clauses: Vec<SortClause>) -> &mut Self {
        self.sort_clauses = sort_clauses;
        self
    }

    /// Own ordering if set, otherwise the child's.
    fn effective_sort(&self) -> &[SortClause] {
        if self.sort_clauses.is_empty() {
            self.child.sort_clauses()
        } else {
            &self.sort_clauses
        }
    }
}

impl NativeQuery for SearchEngineClause {
    type Native = SearchRequest;

    fn render_native(&self) -> SearchRequest {
        SearchRequest {
            query: self.child.query.clone(),
            sort: self.effective_sort().to_vec(),
        }
    }
}

impl fmt::Display for SearchEngineClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.child, f)
    }
}
