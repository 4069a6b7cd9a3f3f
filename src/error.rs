use crate::reference::Ref;

/// Errors reported by [`Bdd`][crate::bdd::Bdd] operations.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum BddError {
    /// The handle does not name a node of this manager.
    InvalidHandle { handle: Ref, size: usize },
    /// A variable with this label already exists.
    DuplicateLabel(String),
}

impl std::fmt::Display for BddError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BddError::InvalidHandle { handle, size } => {
                write!(f, "Invalid handle {} (store holds {} nodes)", handle, size)
            }
            BddError::DuplicateLabel(label) => write!(f, "Duplicate variable label '{}'", label),
        }
    }
}

impl std::error::Error for BddError {}

pub type Result<T> = std::result::Result<T, BddError>;
