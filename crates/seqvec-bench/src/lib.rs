//! Benchmark fixtures for the seqvec container.
//!
//! Provides pre-filled containers so the bench bodies measure only the
//! operation under test, not setup.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use seqvec::SeqVec;

/// Build a container holding `0..n`, grown through the normal doubling
/// path (no `reserve`), so its capacity matches what an append-heavy
/// workload would actually see.
pub fn filled(n: u32) -> SeqVec<u32> {
    let mut seq = SeqVec::with_capacity(0);
    for i in 0..n {
        seq.push(i).expect("append within growth policy cannot fail");
    }
    seq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_holds_expected_contents() {
        let seq = filled(100);
        assert_eq!(seq.len(), 100);
        assert_eq!(*seq.get(0).unwrap(), 0);
        assert_eq!(*seq.get(99).unwrap(), 99);
    }
}
