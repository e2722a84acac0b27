//! A capacity-managed resizable sequence container.
//!
//! [`SeqVec`] is an owning, contiguous, index-addressable sequence of a
//! single element type. Unlike `Vec`, its capacity transitions are part
//! of the contract: storage doubles when an insertion would overflow it
//! and halves when occupancy falls below a third, never dropping under
//! a fixed floor. Every indexed operation is bounds-checked and returns
//! a [`Result`] instead of panicking.
//!
//! # Quick start
//!
//! ```rust
//! use seqvec::SeqVec;
//!
//! let mut seq: SeqVec<u32> = SeqVec::new();
//! seq.push(10).unwrap();
//! seq.push(30).unwrap();
//! seq.insert(1, 20).unwrap();
//! assert_eq!(*seq.get(1).unwrap(), 20);
//! assert_eq!(seq.remove(0).unwrap(), 2);
//! assert_eq!(*seq.get(0).unwrap(), 20);
//! ```
//!
//! # Capacity policy
//!
//! - Construction clamps requested capacity to at least
//!   [`MINIMUM_CAPACITY`]; [`SeqVec::new`] uses [`DEFAULT_CAPACITY`].
//! - Growth: when `len + 1 > capacity`, capacity doubles.
//! - Shrink: after a removal, when `len < capacity / 3`, capacity
//!   halves (floored at [`MINIMUM_CAPACITY`]).
//! - [`SeqVec::reserve`] grows to exactly the requested capacity.
//!
//! References returned by the access methods are invalidated (in the
//! borrow-checker sense) by any subsequent mutating call; the container
//! is single-threaded and every operation completes synchronously.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod policy;
pub mod vec;

// Public re-exports for the primary API surface.
pub use error::SeqVecError;
pub use policy::{DEFAULT_CAPACITY, MINIMUM_CAPACITY};
pub use vec::SeqVec;
