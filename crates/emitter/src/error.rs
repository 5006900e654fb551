use crate::target::Target;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmitError>;

/// Construction-time misuse of the emitters. Rendering itself never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmitError {
    #[error("Unknown connective '{0}': expected one of AND, OR, NOT")]
    UnknownConnective(String),

    #[error("Comparison with an empty field name cannot be emitted for {target}")]
    EmptyField { target: Target },

    #[error("Operator '{operator}' is not supported by the {target} target")]
    UnsupportedOperator { target: Target, operator: String },

    #[error("Raw SQL fragments cannot be emitted for {target}")]
    UnsupportedFragment { target: Target },
}
