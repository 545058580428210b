use thiserror::Error;

/// Boundary validation failures, raised before any graph statement is issued.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("entity is missing a uuid")]
    MissingUuid,
}
