use thiserror::Error;

/// Misuse of the [`TypeTable`](crate::TypeTable) while it is being populated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("type `{name}` is already declared")]
    DuplicateType { name: String },
}
