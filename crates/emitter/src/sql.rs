//! Emitters for raw SQL.
//!
//! The output is handed to a database connection unparameterized, so callers
//! own the safety of every field, operator, value and fragment they supply.

use crate::{composite::CompositeQuery, native::NativeQuery};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlPredicate {
    /// `field + operator + value`, concatenated without separators.
    Comparison {
        field: String,
        operator: String,
        value: String,
    },

    /// A complete SQL sub-expression, rendered verbatim.
    Fragment(String),
}

impl SqlPredicate {
    pub fn new(field: &str, operator: &str, value: &str) -> Self {
        SqlPredicate::Comparison {
            field: field.to_string(),
            operator: operator.to_string(),
            value: value.to_string(),
        }
    }

    pub fn fragment(sql: &str) -> Self {
        SqlPredicate::Fragment(sql.to_string())
    }
}

impl NativeQuery for SqlPredicate {
    type Native = String;

    fn render_native(&self) -> String {
        match self {
            SqlPredicate::Comparison {
                field,
                operator,
                value,
            } => format!("{field}{operator}{value}"),
            SqlPredicate::Fragment(sql) => sql.clone(),
        }
    }
}

pub type SqlComposite = CompositeQuery<SqlNode>;

#[derive(Debug, Clone, PartialEq)]
pub enum SqlNode {
    Predicate(SqlPredicate),
    Composite(SqlComposite),
}

impl NativeQuery for SqlNode {
    type Native = String;

    fn render_native(&self) -> String {
        match self {
            SqlNode::Predicate(predicate) => predicate.render_native(),
            SqlNode::Composite(composite) => composite.render_native(),
        }
    }
}

impl From<SqlPredicate> for SqlNode {
    fn from(predicate: SqlPredicate) -> Self {
        SqlNode::Predicate(predicate)
    }
}

impl From<SqlComposite> for SqlNode {
    fn from(composite: SqlComposite) -> Self {
        SqlNode::Composite(composite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::BooleanClause;

    #[test]
    fn test_fragment_is_verbatim() {
        assert_eq!(SqlPredicate::fragment("SELECT 1").render_native(), "SELECT 1");
        assert_eq!(SqlPredicate::fragment("").render_native(), "");
    }

    #[test]
    fn test_comparison() {
        let predicate = SqlPredicate::new("TSETTINGVALUE.CONTEXT", "=", "'SNAPITUP'");
        assert_eq!(predicate.render_native(), "TSETTINGVALUE.CONTEXT='SNAPITUP'");
    }

    #[test]
    fn test_fragment_inside_composite() {
        let mut query = SqlComposite::new();
        query
            .set_prefix("SELECT * FROM TSETTINGDEFINITION WHERE (PATH='COMMERCE/STORE/theme')")
            .add_clause(BooleanClause::new(
                "AND",
                SqlNode::Predicate(SqlPredicate::fragment(
                    "UIDPK IN (SELECT SETTING_DEFINITION_UID FROM TSETTINGVALUE)",
                )),
            ))
            .set_postfix("ORDER BY PATH");

        assert_eq!(
            query.render_native(),
            "SELECT * FROM TSETTINGDEFINITION WHERE (PATH='COMMERCE/STORE/theme') \
             AND (UIDPK IN (SELECT SETTING_DEFINITION_UID FROM TSETTINGVALUE)) ORDER BY PATH"
        );
    }
}
