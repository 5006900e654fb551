//! Ordered, connective-joined composition shared by the string targets.

use crate::{clause::BooleanClause, native::NativeQuery};

/// A sequence of boolean clauses wrapped in caller supplied prefix/postfix text.
///
/// Mutated through `&mut self` while the tree is being built, then rendered
/// any number of times through `&self`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeQuery<N> {
    prefix: String,
    postfix: String,
    clauses: Vec<BooleanClause<N>>,
}

impl<N> Default for CompositeQuery<N> {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            postfix: String::new(),
            clauses: Vec::new(),
        }
    }
}

impl<N: NativeQuery<Native = String>> CompositeQuery<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_clause(&mut self, clause: BooleanClause<N>) -> &mut Self {
        self.clauses.push(clause);
        self
    }

    pub fn add_clauses<I>(&mut self, clauses: I) -> &mut Self
    where
        I: IntoIterator<Item = BooleanClause<N>>,
    {
        self.clauses.extend(clauses);
        self
    }

    pub fn set_prefix(&mut self, prefix: &str) -> &mut Self {
        self.prefix = prefix.to_string();
        self
    }

    pub fn set_postfix(&mut self, postfix: &str) -> &mut Self {
        self.postfix = postfix.to_string();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn postfix(&self) -> &str {
        &self.postfix
    }

    pub fn clauses(&self) -> &[BooleanClause<N>] {
        &self.clauses
    }
}

impl<N: NativeQuery<Native = String>> NativeQuery for CompositeQuery<N> {
    type Native = String;

    /// `prefix`, then ` <connective> (<child>)` per clause, one space, `postfix`.
    ///
    /// Downstream consumers count parentheses, so the spacing is fixed: with
    /// no clauses this is `prefix + " " + postfix`.
    fn render_native(&self) -> String {
        let mut out = String::with_capacity(self.prefix.len() + self.postfix.len() + 1);
        out.push_str(&self.prefix);
        for clause in &self.clauses {
            clause.render_into(&mut out);
        }
        out.push(' ');
        out.push_str(&self.postfix);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relational::{RelationalNode, RelationalPredicate};

    fn leaf(field: &str, op: &str, value: &str) -> RelationalNode {
        RelationalNode::Predicate(RelationalPredicate::new(field, op, value))
    }

    #[test]
    fn test_empty_composite_renders_prefix_space_postfix() {
        let mut query = CompositeQuery::<RelationalNode>::new();
        query.set_prefix("WHERE").set_postfix("1=1");
        assert_eq!(query.render_native(), "WHERE 1=1");
    }

    #[test]
    fn test_default_composite_is_single_space() {
        let query = CompositeQuery::<RelationalNode>::new();
        assert_eq!(query.render_native(), " ");
    }

    #[test]
    fn test_single_clause_keeps_trailing_space() {
        let mut query = CompositeQuery::new();
        query
            .set_prefix("(status='ACTIVE')")
            .add_clause(BooleanClause::new("AND", leaf("brand", "=", "'ACME'")));

        assert_eq!(query.render_native(), "(status='ACTIVE') AND (brand='ACME') ");
    }

    #[test]
    fn test_clauses_render_in_insertion_order() {
        let mut query = CompositeQuery::new();
        query.add_clause(BooleanClause::new("OR", leaf("a", "=", "1")));
        query.add_clauses(vec![
            BooleanClause::new("AND", leaf("b", "=", "2")),
            BooleanClause::new("NOT", leaf("c", "=", "3")),
        ]);
        query.set_postfix("ORDER BY a");

        assert_eq!(
            query.render_native(),
            " OR (a=1) AND (b=2) NOT (c=3) ORDER BY a"
        );
        assert_eq!(query.clauses().len(), 3);
        assert_eq!(query.clauses()[2].connective(), "NOT");
    }

    #[test]
    fn test_connective_is_rendered_verbatim() {
        let mut query = CompositeQuery::new();
        query.add_clause(BooleanClause::new("and also", leaf("x", " LIKE ", "'%a%'")));
        assert_eq!(query.render_native(), " and also (x LIKE '%a%') ");
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut query = CompositeQuery::new();
        query
            .set_prefix("p")
            .add_clause(BooleanClause::new("AND", leaf("f", "=", "v")));

        assert_eq!(query.render_native(), query.render_native());
    }

    #[test]
    fn test_mutation_after_render_is_visible() {
        let mut query = CompositeQuery::new();
        query.set_prefix("first");
        assert_eq!(query.render_native(), "first ");

        query.set_prefix("second").set_postfix("end");
        assert_eq!(query.render_native(), "second end");

        query.add_clause(BooleanClause::new("OR", leaf("f", "<", "3")));
        assert_eq!(query.render_native(), "second OR (f<3) end");
    }

    #[test]
    fn test_nested_composite_is_parenthesised() {
        let mut inner = CompositeQuery::new();
        inner
            .set_prefix("(a=1)")
            .add_clause(BooleanClause::new("OR", leaf("b", "=", "2")));

        let mut outer = CompositeQuery::new();
        outer
            .set_prefix("(c=3)")
            .add_clause(BooleanClause::new("AND", RelationalNode::Composite(inner)));

        assert_eq!(outer.render_native(), "(c=3) AND ((a=1) OR (b=2) ) ");
    }
}
