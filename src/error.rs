use thiserror::Error;

use crate::value::ValueKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddError {
    #[error("invalid argument: expected two numeric values, argument {position} was {found}")]
    InvalidArgument { position: usize, found: ValueKind },
    #[error("unknown export: {0}")]
    UnknownExport(String),
    #[error("null pointer passed for {0}")]
    NullPointer(&'static str),
}

pub type Result<T> = std::result::Result<T, AddError>;
