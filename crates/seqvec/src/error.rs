//! Container-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during container operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeqVecError {
    /// An index outside the valid range for the attempted operation.
    ///
    /// Access, `set`, and `remove` require `index < len`; `insert`
    /// permits `index == len` (append). On an empty container every
    /// index is out of range.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Logical length at the time of the call.
        len: usize,
    },
    /// A capacity change was requested that cannot hold the live elements.
    ///
    /// The growth and shrink policies size their targets so this is
    /// unreachable through normal mutation; the reallocation primitive
    /// validates regardless.
    CapacityBelowLen {
        /// The requested capacity.
        requested: usize,
        /// Logical length at the time of the call.
        len: usize,
    },
}

impl fmt::Display for SeqVecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::CapacityBelowLen { requested, len } => {
                write!(
                    f,
                    "requested capacity {requested} cannot hold {len} live elements"
                )
            }
        }
    }
}

impl Error for SeqVecError {}
