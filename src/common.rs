// Common functionality for all modules.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("circuit has {expected} input gates but {actual} inputs were supplied")]
    InputArity { expected: usize, actual: usize },

    #[error("gate {position} reads index {index}, which is not an earlier position")]
    ForwardReference { position: usize, index: usize },

    #[error("gate {position} reads wire {index} of a {width}-wire register")]
    WireOutOfRange {
        position: usize,
        index: usize,
        width: usize,
    },

    #[error("input gate at position {position} follows a non-input gate")]
    LateInput { position: usize },

    #[error("gate {position} uses the same index for both controls")]
    DuplicateControl { position: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
