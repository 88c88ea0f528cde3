use crate::error::{Result, TrieError};

/// Direct-indexed child slots of an inner node: slot `i` holds the child for digit `i`.
///
/// Valid indices are `[0, width)`. The number of occupied slots is tracked so that "has
/// children" is O(1).
#[derive(Clone, Debug)]
pub struct ChildSlots<N> {
    children: Box<[Option<N>]>,
    num_children: usize,
}

impl<N: Copy> ChildSlots<N> {
    pub fn new(width: usize) -> Self {
        Self {
            children: vec![None; width].into_boxed_slice(),
            num_children: 0,
        }
    }

    /// Fills an empty slot. Fails if `index` is not below the width or the slot is taken.
    pub fn add_child(&mut self, index: usize, node: N) -> Result<()> {
        let slot = self.slot_mut(index)?;
        if slot.is_some() {
            return Err(TrieError::SlotOccupied { index });
        }
        *slot = Some(node);
        self.num_children += 1;
        Ok(())
    }

    /// The child in slot `index`, if any. Fails if `index` is not below the width.
    #[inline]
    pub fn seek_child(&self, index: usize) -> Result<Option<N>> {
        self.children
            .get(index)
            .copied()
            .ok_or(TrieError::BoundsOutOfRange {
                index,
                len: self.children.len(),
            })
    }

    /// Empties slot `index`, returning what was there. Out of bounds indices are a no-op.
    pub fn delete_child(&mut self, index: usize) -> Option<N> {
        let n = self.children.get_mut(index)?.take();
        if n.is_some() {
            self.num_children -= 1;
        }
        n
    }

    #[inline]
    pub fn num_children(&self) -> usize {
        self.num_children
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.children.len()
    }

    /// The occupied slot with the highest index.
    pub fn last_child(&self) -> Option<(usize, N)> {
        self.children
            .iter()
            .enumerate()
            .rev()
            .find_map(|(i, c)| c.map(|c| (i, c)))
    }

    /// Occupied slots in ascending index order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, N)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|c| (i, c)))
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut Option<N>> {
        let len = self.children.len();
        self.children
            .get_mut(index)
            .ok_or(TrieError::BoundsOutOfRange { index, len })
    }
}
