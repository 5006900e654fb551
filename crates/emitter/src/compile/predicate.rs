//! The precedence-resolved predicate tree produced by the EPQL parser.

use crate::connective::Connective;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Predicate {
    /// A single `field`/`operator`/`value` comparison. The text is used as is.
    Comparison {
        field: String,
        operator: String,
        value: String,
    },

    /// A complete SQL sub-expression. Only the raw SQL target accepts it.
    Fragment { sql: String },

    /// A leading negation, e.g. `NOT ProductCode='1234'`.
    Not { predicate: Box<Predicate> },

    /// `first`, followed by operands each introduced by a connective.
    Group {
        first: Box<Predicate>,
        #[serde(default)]
        rest: Vec<Operand>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operand {
    pub connective: Connective,
    pub predicate: Predicate,
}

impl Predicate {
    pub fn comparison(field: &str, operator: &str, value: &str) -> Self {
        Predicate::Comparison {
            field: field.to_string(),
            operator: operator.to_string(),
            value: value.to_string(),
        }
    }

    pub fn fragment(sql: &str) -> Self {
        Predicate::Fragment {
            sql: sql.to_string(),
        }
    }

    pub fn negate(predicate: Predicate) -> Self {
        Predicate::Not {
            predicate: Box::new(predicate),
        }
    }

    pub fn group(first: Predicate) -> Self {
        Predicate::Group {
            first: Box::new(first),
            rest: Vec::new(),
        }
    }

    /// Appends an operand when `self` is a group; otherwise wraps `self` in one first.
    pub fn then(self, connective: Connective, predicate: Predicate) -> Self {
        let (first, mut rest) = match self {
            Predicate::Group { first, rest } => (first, rest),
            other => (Box::new(other), Vec::new()),
        };
        rest.push(Operand {
            connective,
            predicate,
        });
        Predicate::Group { first, rest }
    }

    pub fn and(self, predicate: Predicate) -> Self {
        self.then(Connective::And, predicate)
    }

    pub fn or(self, predicate: Predicate) -> Self {
        self.then(Connective::Or, predicate)
    }

    pub fn and_not(self, predicate: Predicate) -> Self {
        self.then(Connective::Not, predicate)
    }
}
