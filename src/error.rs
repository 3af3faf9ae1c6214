//! The error type shared by every fallible operation of this crate.

use crate::options::{OptionId, OptionKind};

/// Errors reported by the wrapper layer.
///
/// Failures are local: nothing is retried, and a failed call leaves the
/// handle usable (a failed solve simply produces no results).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The engine allocator returned no instance.
    #[error("the solver engine could not be created")]
    EngineCreate,
    /// A numeric option identifier matched no table entry.
    #[error("no option with numeric identifier {0}")]
    UnknownOption(i32),
    /// A typed option accessor was used against an entry of another kind.
    #[error("option {id:?} holds a value of kind {kind:?}")]
    OptionKindMismatch {
        /// The addressed option.
        id: OptionId,
        /// The kind the entry actually holds.
        kind: OptionKind,
    },
    /// The problem description failed validation.
    #[error("invalid problem description: {0}")]
    InvalidProblem(String),
    /// A branching-priority entry addressed a column outside the problem.
    #[error("priority index {index} outside the column range 0..{cols}")]
    PriorityIndexOutOfRange {
        /// The offending column index.
        index: i32,
        /// Number of columns in the loaded problem.
        cols: usize,
    },
    /// The engine's MPS reader rejected the file.
    #[error("could not read MPS file {path} (engine code {code})")]
    MpsRead {
        /// Path handed to the reader.
        path: String,
        /// The engine's return code.
        code: i32,
    },
    /// The constraint interface's MPS writer failed.
    #[error("could not write MPS file {path} (engine code {code})")]
    MpsWrite {
        /// Path handed to the writer.
        path: String,
        /// The engine's return code.
        code: i32,
    },
    /// A solve or extraction was requested with no problem loaded.
    #[error("no problem has been loaded into this handle")]
    NoProblem,
    /// Results were requested before any solve ran on the handle.
    #[error("no solve has been run on this handle")]
    NotSolved,
    /// A row or column name contained an interior NUL byte.
    #[error("name contains an interior NUL byte")]
    InvalidName(#[from] std::ffi::NulError),
}
