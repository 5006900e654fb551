//! Walks a predicate tree into one of the string targets.

use crate::{
    clause::BooleanClause,
    compile::predicate::Predicate,
    composite::CompositeQuery,
    error::{EmitError, Result},
    native::NativeQuery,
    relational::{RelationalNode, RelationalPredicate},
    sql::{SqlNode, SqlPredicate},
    target::Target,
};
use tracing::trace;

/// A node family whose native form is a string.
pub trait TextTarget: NativeQuery<Native = String> + From<CompositeQuery<Self>> + Sized {
    const TARGET: Target;

    fn comparison(field: &str, operator: &str, value: &str) -> Self;

    fn fragment(sql: &str) -> Result<Self>;
}

impl TextTarget for RelationalNode {
    const TARGET: Target = Target::Relational;

    fn comparison(field: &str, operator: &str, value: &str) -> Self {
        RelationalNode::Predicate(RelationalPredicate::new(field, operator, value))
    }

    fn fragment(_sql: &str) -> Result<Self> {
        Err(EmitError::UnsupportedFragment {
            target: Self::TARGET,
        })
    }
}

impl TextTarget for SqlNode {
    const TARGET: Target = Target::Sql;

    fn comparison(field: &str, operator: &str, value: &str) -> Self {
        SqlNode::Predicate(SqlPredicate::new(field, operator, value))
    }

    fn fragment(sql: &str) -> Result<Self> {
        Ok(SqlNode::Predicate(SqlPredicate::fragment(sql)))
    }
}

/// A group becomes a composite whose prefix is the parenthesised first
/// operand, followed by one clause per remaining operand. A group with a
/// single operand keeps its parentheses. A negation is a clause-less
/// composite prefixed with `NOT (...)`.
pub fn emit<N: TextTarget>(predicate: &Predicate) -> Result<N> {
    match predicate {
        Predicate::Comparison {
            field,
            operator,
            value,
        } => {
            if field.is_empty() {
                return Err(EmitError::EmptyField { target: N::TARGET });
            }
            Ok(N::comparison(field, operator, value))
        }
        Predicate::Fragment { sql } => N::fragment(sql),
        Predicate::Not { predicate } => {
            let negated = emit::<N>(predicate)?;

            let mut composite = CompositeQuery::new();
            composite.set_prefix(&format!("NOT ({})", negated.render_native()));
            Ok(N::from(composite))
        }
        Predicate::Group { first, rest } => {
            let first = emit::<N>(first)?;

            let mut composite = CompositeQuery::new();
            composite.set_prefix(&format!("({})", first.render_native()));
            for operand in rest {
                let child = emit::<N>(&operand.predicate)?;
                composite.add_clause(BooleanClause::new(operand.connective.text_token(), child));
            }

            trace!(emit_target = %N::TARGET, clauses = rest.len(), "Emitted composite");
            Ok(N::from(composite))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_comparison_is_a_leaf() {
        let node: RelationalNode = emit(&Predicate::comparison("status", "=", "'ACTIVE'")).unwrap();
        assert_eq!(node.render_native(), "status='ACTIVE'");
    }

    #[test]
    fn test_group_uses_first_operand_as_prefix() {
        let tree = Predicate::comparison("status", "=", "'ACTIVE'")
            .and(Predicate::comparison("brand", "=", "'ACME'"));

        let node: RelationalNode = emit(&tree).unwrap();
        assert_eq!(node.render_native(), "(status='ACTIVE') AND (brand='ACME') ");
    }

    #[test]
    fn test_trailing_negation_reads_and_not() {
        let tree = Predicate::comparison("status", "=", "'ACTIVE'")
            .and_not(Predicate::comparison("brand", "=", "'ACME'"));

        let relational: RelationalNode = emit(&tree).unwrap();
        let sql: SqlNode = emit(&tree).unwrap();
        assert_eq!(relational.render_native(), "(status='ACTIVE') AND NOT (brand='ACME') ");
        assert_eq!(sql.render_native(), "(status='ACTIVE') AND NOT (brand='ACME') ");
    }

    #[test]
    fn test_leading_negation() {
        let tree = Predicate::negate(Predicate::comparison("productCode", "=", "'1234'"));
        let node: RelationalNode = emit(&tree).unwrap();
        assert_eq!(node.render_native(), "NOT (productCode='1234') ");
    }

    #[test]
    fn test_double_negation_nests() {
        let tree = Predicate::negate(Predicate::negate(Predicate::comparison(
            "productCode",
            "!=",
            "'1234'",
        )));
        let node: SqlNode = emit(&tree).unwrap();
        assert_eq!(node.render_native(), "NOT (NOT (productCode!='1234') ) ");
    }

    #[test]
    fn test_single_operand_group_keeps_parentheses() {
        let tree = Predicate::group(Predicate::comparison("a", "=", "1"));
        let node: RelationalNode = emit(&tree).unwrap();
        assert_eq!(node.render_native(), "(a=1) ");
    }

    #[test]
    fn test_fragment_only_reaches_sql() {
        let tree = Predicate::comparison("a", "=", "1").or(Predicate::fragment("SELECT 1"));

        let sql: SqlNode = emit(&tree).unwrap();
        assert_eq!(sql.render_native(), "(a=1) OR (SELECT 1) ");

        let err = emit::<RelationalNode>(&tree).unwrap_err();
        assert_eq!(
            err,
            EmitError::UnsupportedFragment {
                target: Target::Relational
            }
        );
    }

    #[test]
    fn test_empty_field_is_rejected() {
        let err = emit::<SqlNode>(&Predicate::comparison("", "=", "1")).unwrap_err();
        assert_eq!(err, EmitError::EmptyField { target: Target::Sql });
    }
}
