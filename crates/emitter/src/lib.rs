//! Emission stage of the EPQL query compiler.
//!
//! A parsed predicate tree is rendered into the native query form of one of
//! three retrieval back ends: a relational (object-relational mapper) query
//! string, a raw SQL string, or a structured search-engine query with an
//! optional sort specification.
//!
//! None of the emitters escape or quote their input. Field, operator and value
//! text must already be safe for the target when it reaches a leaf.

use crate::{
    composite::CompositeQuery,
    relational::{RelationalNode, RelationalPredicate},
    sql::{SqlNode, SqlPredicate},
};

pub mod clause;
pub mod compile;
pub mod composite;
pub mod connective;
pub mod error;
pub mod macros;
pub mod native;
pub mod relational;
pub mod search;
pub mod sql;
pub mod target;

pub use error::{EmitError, Result};
pub use native::NativeQuery;

/// A relational comparison rendered as `field + operator + value`.
pub fn relational_leaf(field: &str, operator: &str, value: &str) -> RelationalNode {
    RelationalNode::Predicate(RelationalPredicate::new(field, operator, value))
}

/// A raw SQL comparison rendered as `field + operator + value`.
pub fn sql_leaf(field: &str, operator: &str, value: &str) -> SqlNode {
    SqlNode::Predicate(SqlPredicate::new(field, operator, value))
}

/// A complete SQL sub-expression rendered verbatim.
pub fn sql_fragment(fragment: &str) -> SqlNode {
    SqlNode::Predicate(SqlPredicate::fragment(fragment))
}

/// Starts an empty composite wrapped in `prefix`/`postfix`.
pub fn composite<N: NativeQuery<Native = String>>(prefix: &str, postfix: &str) -> CompositeQuery<N> {
    let mut query = CompositeQuery::new();
    query.set_prefix(prefix);
    query.set_postfix(postfix);
    query
}
