//! Search-engine target: structured boolean queries, the clause adapter that
//! maps connectives onto occurrences, and result ordering.

pub mod clause;
pub mod query;
pub mod sort;

pub use clause::{SearchEngineClause, SearchEngineQuery, SearchRequest};
pub use query::{BooleanQuery, OccurClause, SearchQuery};
pub use sort::{SortClause, SortDirection};
