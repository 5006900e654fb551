//! Boolean connectives and their search-engine occurrence counterparts.

use crate::error::EmitError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The closed set of connectives the EPQL parser may place between operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Connective {
    And,
    Or,
    Not,
}

/// How a clause participates in a search-engine boolean query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Occur {
    Must,
    Should,
    MustNot,
}

impl Connective {
    /// Canonical token used when the connective is rendered as text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Connective::And => "AND",
            Connective::Or => "OR",
            Connective::Not => "NOT",
        }
    }

    /// Token placed between two operands in relational and SQL text.
    /// A trailing negation reads as `AND NOT` there.
    pub fn text_token(&self) -> &'static str {
        match self {
            Connective::And => "AND",
            Connective::Or => "OR",
            Connective::Not => "AND NOT",
        }
    }

    pub fn occur(&self) -> Occur {
        match self {
            Connective::And => Occur::Must,
            Connective::Or => Occur::Should,
            Connective::Not => Occur::MustNot,
        }
    }
}

impl FromStr for Connective {
    type Err = EmitError;

    /// Accepts the keyword in any case, or its symbolic alias (`&&`, `||`, `!`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token.to_ascii_uppercase().as_str() {
            "AND" | "&&" => Ok(Connective::And),
            "OR" | "||" => Ok(Connective::Or),
            "NOT" | "!" => Ok(Connective::Not),
            _ => Err(EmitError::UnknownConnective(s.to_string())),
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Occur {
    /// Prefix used by the engine's query notation.
    pub fn prefix(&self) -> &'static str {
        match self {
            Occur::Must => "+",
            Occur::Should => "",
            Occur::MustNot => "-",
        }
    }
}

impl fmt::Display for Occur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occur::Must => write!(f, "MUST"),
            Occur::Should => write!(f, "SHOULD"),
            Occur::MustNot => write!(f, "MUST_NOT"),
        }
    }
}
