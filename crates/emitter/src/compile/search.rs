//! Walks a predicate tree into a structured search-engine query.

use crate::{
    compile::predicate::Predicate,
    connective::Connective,
    error::{EmitError, Result},
    search::{
        clause::{SearchEngineClause, SearchEngineQuery},
        query::{BooleanQuery, SearchQuery},
    },
    target::Target,
};
use tracing::trace;

/// Emits the root query. Every level is a boolean query: each comparison sits
/// in its own MUST clause and the whole tree in one more, so
/// `a='x' AND b='y'` becomes `+(+(+a:'x') +(+b:'y'))`.
pub fn emit(predicate: &Predicate) -> Result<SearchEngineQuery> {
    let root = node(predicate)?;
    Ok(SearchEngineQuery::compose([SearchEngineClause::new(
        Connective::And,
        root,
    )]))
}

fn node(predicate: &Predicate) -> Result<SearchEngineQuery> {
    match predicate {
        Predicate::Comparison {
            field,
            operator,
            value,
        } => {
            if field.is_empty() {
                return Err(EmitError::EmptyField {
                    target: Target::Search,
                });
            }
            comparison(field, operator, value).map(SearchEngineQuery::new)
        }
        Predicate::Fragment { .. } => Err(EmitError::UnsupportedFragment {
            target: Target::Search,
        }),
        Predicate::Not { predicate } => Ok(SearchEngineQuery::compose([
            SearchEngineClause::new(Connective::And, SearchEngineQuery::new(SearchQuery::MatchAll)),
            SearchEngineClause::new(Connective::Not, node(predicate)?),
        ])),
        Predicate::Group { first, rest } => {
            // The first operand only matches optionally when it is OR-ed in.
            let first_connective = match rest.first().map(|operand| operand.connective) {
                Some(Connective::Or) => Connective::Or,
                Some(Connective::And | Connective::Not) | None => Connective::And,
            };

            let mut clauses = Vec::with_capacity(rest.len() + 1);
            clauses.push(SearchEngineClause::new(first_connective, node(first)?));
            for operand in rest {
                clauses.push(SearchEngineClause::new(
                    operand.connective,
                    node(&operand.predicate)?,
                ));
            }

            trace!(clauses = clauses.len(), "Emitted search boolean query");
            Ok(SearchEngineQuery::compose(clauses))
        }
    }
}

/// Maps a comparison operator onto the engine's query types. The result is
/// always a boolean query.
fn comparison(field: &str, operator: &str, value: &str) -> Result<SearchQuery> {
    let mut query = BooleanQuery::new();
    match operator.trim() {
        "=" | ":" => query.must(SearchQuery::term(field, value)),
        "<" => query.must(SearchQuery::range(field, None, Some(value), false, false)),
        "<=" => query.must(SearchQuery::range(field, None, Some(value), true, true)),
        ">" => query.must(SearchQuery::range(field, Some(value), None, false, false)),
        ">=" => query.must(SearchQuery::range(field, Some(value), None, true, true)),
        "!=" | "<>" => query
            .must(SearchQuery::MatchAll)
            .must_not(SearchQuery::term(field, value)),
        other => {
            return Err(EmitError::UnsupportedOperator {
                target: Target::Search,
                operator: other.to_string(),
            });
        }
    };
    Ok(SearchQuery::Boolean(query))
}
