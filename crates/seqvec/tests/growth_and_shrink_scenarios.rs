use seqvec::{SeqVec, SeqVecError, MINIMUM_CAPACITY};

#[test]
fn push_sequence_grows_once_capacity_is_exhausted() {
    let mut seq = SeqVec::with_capacity(0);
    assert_eq!(seq.capacity(), MINIMUM_CAPACITY);

    for i in 0..8u32 {
        seq.push(i).unwrap();
        assert_eq!(seq.len(), i as usize + 1);
        for j in 0..=i {
            assert_eq!(*seq.get(j as usize).unwrap(), j);
        }
    }
    assert_eq!(seq.capacity(), MINIMUM_CAPACITY);

    seq.push(8).unwrap();
    assert_eq!(seq.capacity(), MINIMUM_CAPACITY * 2);
    assert_eq!(seq.len(), 9);
    for j in 0..9u32 {
        assert_eq!(*seq.get(j as usize).unwrap(), j);
    }
}

#[test]
fn remove_from_ten_elements_shifts_the_tail() {
    let mut seq = SeqVec::new();
    for i in 0..10u32 {
        seq.push(i * 100).unwrap();
    }

    let new_len = seq.remove(3).unwrap();
    assert_eq!(new_len, 9);

    // The old index-4 element is now at index 3; everything later
    // shifted down by one, and the old index-3 element is gone.
    assert_eq!(*seq.get(3).unwrap(), 400);
    for i in 3..9usize {
        assert_eq!(*seq.get(i).unwrap(), (i as u32 + 1) * 100);
    }
    assert!(!(0..seq.len()).any(|i| *seq.get(i).unwrap() == 300));
}

#[test]
fn shrink_staircase_descends_to_the_floor() {
    let mut seq = SeqVec::with_capacity(0);
    for i in 0..100u32 {
        seq.push(i).unwrap();
    }
    let grown = seq.capacity();
    assert!(grown >= 100);

    while seq.pop().unwrap_or(0) > 0 {}
    assert!(seq.is_empty());
    assert_eq!(seq.capacity(), MINIMUM_CAPACITY);
}

#[test]
fn capacity_invariants_hold_through_a_mixed_workout() {
    let mut seq = SeqVec::with_capacity(0);

    for i in 0..50u32 {
        if i % 3 == 0 {
            seq.insert(0, i).unwrap();
        } else {
            seq.push(i).unwrap();
        }
        assert!(seq.capacity() >= seq.len());
        assert!(seq.capacity() >= MINIMUM_CAPACITY);
    }
    for _ in 0..30 {
        seq.remove(seq.len() / 2).unwrap();
        assert!(seq.capacity() >= seq.len());
        assert!(seq.capacity() >= MINIMUM_CAPACITY);
    }
    assert_eq!(seq.len(), 20);
}

#[test]
fn clones_do_not_share_storage() {
    let mut original = SeqVec::new();
    for i in 0..6u32 {
        original.push(i).unwrap();
    }

    let mut copy = original.clone();
    copy.remove(0).unwrap();
    copy.set(0, 99).unwrap();

    assert_eq!(original.len(), 6);
    assert_eq!(*original.get(0).unwrap(), 0);
    assert_eq!(*original.get(1).unwrap(), 1);
    assert_eq!(*copy.get(0).unwrap(), 99);
}

#[test]
fn errors_carry_the_offending_index() {
    let mut seq: SeqVec<u32> = SeqVec::new();
    seq.push(1).unwrap();

    assert_eq!(
        seq.get(5).unwrap_err(),
        SeqVecError::OutOfRange { index: 5, len: 1 }
    );
    assert_eq!(
        seq.insert(3, 0).unwrap_err(),
        SeqVecError::OutOfRange { index: 3, len: 1 }
    );
}
