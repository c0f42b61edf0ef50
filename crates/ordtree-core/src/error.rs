use thiserror::Error;

use crate::config::{MAX_DEGREE, MIN_DEGREE};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("value already exists in the tree")]
    DuplicateValue,
    #[error("value does not exist in the tree")]
    ValueNotFound,
    #[error("invalid degree '{}': expected an integer between {} and {}", .0, MIN_DEGREE, MAX_DEGREE)]
    InvalidDegree(String),
    #[error("no tree has been created")]
    NoTree,
    #[error("value must not be empty")]
    EmptyValue,
}
