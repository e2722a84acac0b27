//! The sequence container itself.
//!
//! [`SeqVec`] owns exactly one contiguous storage block at any time, a
//! `Box<[Option<T>]>` whose length is the capacity. Slots below `len`
//! are occupied, slots at `len..` are vacant. Capacity transitions all
//! funnel through one validating reallocation primitive
//! (`change_capacity`), shared by growth, shrink, and
//! [`SeqVec::reserve`].

use std::fmt;

use crate::error::SeqVecError;
use crate::policy;

/// Allocate a block of `capacity` vacant slots.
fn vacant_block<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

/// An owning, contiguous, capacity-managed sequence of `T`.
///
/// Indexed operations are bounds-checked and return
/// [`SeqVecError::OutOfRange`] on violation, before any mutation takes
/// place. See the crate docs for the growth and shrink policies.
pub struct SeqVec<T> {
    /// Backing storage. Its length is the capacity; slots at `len..`
    /// are always `None`.
    slots: Box<[Option<T>]>,
    /// Number of live elements. Always `<= slots.len()`.
    len: usize,
}

impl<T> SeqVec<T> {
    /// Create an empty container with [`policy::DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(policy::DEFAULT_CAPACITY)
    }

    /// Create an empty container with the requested capacity.
    ///
    /// Requests below [`policy::MINIMUM_CAPACITY`] are clamped up.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vacant_block(policy::clamp_request(capacity)),
            len: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the container holds no elements, regardless of capacity.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Shared reference to the element at `index`.
    ///
    /// Fails with [`SeqVecError::OutOfRange`] when `index >= len()`;
    /// on an empty container every index fails.
    pub fn get(&self, index: usize) -> Result<&T, SeqVecError> {
        self.check_index(index)?;
        Ok(self.occupied(index))
    }

    /// Mutable reference to the element at `index`.
    ///
    /// Same bounds contract as [`SeqVec::get`].
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, SeqVecError> {
        self.check_index(index)?;
        Ok(self.occupied_mut(index))
    }

    /// Grow storage to exactly `capacity` if it exceeds the current
    /// capacity; no-op otherwise.
    ///
    /// Existing elements are preserved in order. Useful before adding a
    /// large number of elements, to avoid repeated doubling.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), SeqVecError> {
        if capacity > self.capacity() {
            self.change_capacity(capacity)?;
        }
        Ok(())
    }

    /// Replace the element at `index` with `value`.
    ///
    /// The old element is dropped before the slot holds `value`.
    /// Returns a reference to the newly stored element.
    pub fn set(&mut self, index: usize, value: T) -> Result<&mut T, SeqVecError> {
        self.check_index(index)?;
        self.slots[index] = Some(value);
        Ok(self.occupied_mut(index))
    }

    /// Append `value`, equivalent to `insert(len(), value)`.
    pub fn push(&mut self, value: T) -> Result<&mut T, SeqVecError> {
        self.insert(self.len, value)
    }

    /// Remove the last element, equivalent to `remove(len() - 1)`.
    ///
    /// Fails with [`SeqVecError::OutOfRange`] on an empty container.
    /// Returns the new length.
    pub fn pop(&mut self) -> Result<usize, SeqVecError> {
        if self.len == 0 {
            return Err(SeqVecError::OutOfRange { index: 0, len: 0 });
        }
        self.remove(self.len - 1)
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot
    /// toward higher indices.
    ///
    /// `index == len()` is legal and appends. Applies the growth policy
    /// when the container is full. Returns a reference to the inserted
    /// element.
    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut T, SeqVecError> {
        if index > self.len {
            return Err(SeqVecError::OutOfRange {
                index,
                len: self.len,
            });
        }
        if self.len + 1 > self.capacity() {
            self.change_capacity(policy::grow_target(self.capacity()))?;
        }
        for j in (index..self.len).rev() {
            self.slots[j + 1] = self.slots[j].take();
        }
        self.slots[index] = Some(value);
        self.len += 1;
        Ok(self.occupied_mut(index))
    }

    /// Remove the element at `index`, shifting `[index + 1, len)` one
    /// slot toward lower indices.
    ///
    /// The removed element is dropped during the shift, before the
    /// shrink policy runs. Returns the new length.
    pub fn remove(&mut self, index: usize) -> Result<usize, SeqVecError> {
        self.check_index(index)?;
        for j in index..self.len - 1 {
            self.slots[j] = self.slots[j + 1].take();
        }
        // Removing the tail element involves no shift, so vacate it
        // directly; after a shift this slot is already vacant.
        self.slots[self.len - 1] = None;
        // Shrink check runs against the pre-decrement length, so the
        // halved target is always large enough for the survivors.
        if policy::should_shrink(self.len, self.capacity()) {
            self.change_capacity(policy::shrink_target(self.capacity()))?;
        }
        self.len -= 1;
        Ok(self.len)
    }

    /// Remove every element, dropping each in back-to-front order, then
    /// reset storage to a fresh [`policy::MINIMUM_CAPACITY`] block.
    ///
    /// Each removal goes through [`SeqVec::pop`], so the shrink policy
    /// fires on the way down exactly as it would for caller-driven
    /// pops.
    pub fn clear(&mut self) {
        while self.pop().is_ok() {}
        self.slots = vacant_block(policy::MINIMUM_CAPACITY);
    }

    /// The shared reallocation primitive.
    ///
    /// Validates that `target` can hold the live elements, allocates a
    /// fresh vacant block, moves the first `len` slots across in order,
    /// and adopts the new block (dropping the old one). Growth, shrink,
    /// and `reserve` all size their targets to pass the validation;
    /// it stands regardless.
    fn change_capacity(&mut self, target: usize) -> Result<(), SeqVecError> {
        if target < self.len {
            return Err(SeqVecError::CapacityBelowLen {
                requested: target,
                len: self.len,
            });
        }
        let mut fresh = vacant_block(target);
        for (dst, src) in fresh.iter_mut().zip(self.slots.iter_mut().take(self.len)) {
            *dst = src.take();
        }
        self.slots = fresh;
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), SeqVecError> {
        if index >= self.len {
            return Err(SeqVecError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    fn occupied(&self, index: usize) -> &T {
        self.slots[index]
            .as_ref()
            .expect("slots below len are always occupied")
    }

    fn occupied_mut(&mut self, index: usize) -> &mut T {
        self.slots[index]
            .as_mut()
            .expect("slots below len are always occupied")
    }
}

impl<T: Clone> Clone for SeqVec<T> {
    /// Element-wise copy into an independent storage block of the same
    /// capacity.
    fn clone(&self) -> Self {
        let mut slots = vacant_block(self.capacity());
        for (dst, src) in slots.iter_mut().zip(self.slots.iter().take(self.len)) {
            *dst = src.clone();
        }
        Self {
            slots,
            len: self.len,
        }
    }

    /// Release the current storage (dropping every live element), then
    /// copy element-wise from `source` as [`SeqVec::clone`] does.
    fn clone_from(&mut self, source: &Self) {
        *self = source.clone();
    }
}

impl<T> Default for SeqVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SeqVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeqVec")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}
