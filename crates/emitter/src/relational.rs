//! Emitters for the object-relational mapper query language.

use crate::{composite::CompositeQuery, native::NativeQuery};

/// One `field`/`operator`/`value` comparison.
///
/// Rendered as plain concatenation: no separators are inserted and nothing is
/// escaped or quoted. The operator and value must already carry whatever
/// whitespace and quoting the query language expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationalPredicate {
    field: String,
    operator: String,
    value: String,
}

impl RelationalPredicate {
    pub fn new(field: &str, operator: &str, value: &str) -> Self {
        Self {
            field: field.to_string(),
            operator: operator.to_string(),
            value: value.to_string(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl NativeQuery for RelationalPredicate {
    type Native = String;

    fn render_native(&self) -> String {
        format!("{}{}{}", self.field, self.operator, self.value)
    }
}

pub type RelationalComposite = CompositeQuery<RelationalNode>;

/// Any node that may appear in a relational query tree.
#[derive(Debug, Clone, PartialEq)]
pub enum RelationalNode {
    Predicate(RelationalPredicate),
    Composite(RelationalComposite),
}

impl NativeQuery for RelationalNode {
    type Native = String;

    fn render_native(&self) -> String {
        match self {
            RelationalNode::Predicate(predicate) => predicate.render_native(),
            RelationalNode::Composite(composite) => composite.render_native(),
        }
    }
}

impl From<RelationalPredicate> for RelationalNode {
    fn from(predicate: RelationalPredicate) -> Self {
        RelationalNode::Predicate(predicate)
    }
}

impl From<RelationalComposite> for RelationalNode {
    fn from(composite: RelationalComposite) -> Self {
        RelationalNode::Composite(composite)
    }
}
