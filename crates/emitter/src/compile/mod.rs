//! Compiles a predicate tree into the native query of every requested target.

use crate::{
    compile::predicate::Predicate,
    error::Result,
    native::NativeQuery,
    relational::RelationalNode,
    search::clause::{SearchEngineQuery, SearchRequest},
    sql::SqlNode,
    target::{CompileOptions, Target},
};
use tracing::debug;

pub mod predicate;
pub mod search;
pub mod text;

/// One root node per requested target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmittedQueries {
    pub relational: Option<RelationalNode>,
    pub sql: Option<SqlNode>,
    pub search: Option<SearchEngineQuery>,
}

impl EmittedQueries {
    pub fn relational_text(&self) -> Option<String> {
        self.relational.as_ref().map(NativeQuery::render_native)
    }

    pub fn sql_text(&self) -> Option<String> {
        self.sql.as_ref().map(NativeQuery::render_native)
    }

    pub fn search_request(&self) -> Option<SearchRequest> {
        self.search.as_ref().map(NativeQuery::render_native)
    }
}

/// Emits `predicate` for each target in `options`.
///
/// Fails on the first target that cannot express the tree; nothing is
/// returned for the others in that case.
pub fn compile(predicate: &Predicate, options: &CompileOptions) -> Result<EmittedQueries> {
    let mut emitted = EmittedQueries::default();

    for target in Target::ALL {
        if !options.wants(target) {
            continue;
        }
        debug!("Emitting {} query", target);

        match target {
            Target::Relational => {
                emitted.relational = Some(text::emit::<RelationalNode>(predicate)?);
            }
            Target::Sql => {
                emitted.sql = Some(text::emit::<SqlNode>(predicate)?);
            }
            Target::Search => {
                let mut root = search::emit(predicate)?;
                root.set_sort_clauses(options.sort.clone());
                emitted.search = Some(root);
            }
        }
    }

    Ok(emitted)
}
