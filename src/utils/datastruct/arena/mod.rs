use std::ops::{Index, IndexMut};

/// Append-only arena.
/// Values are never freed individually; the whole pool drops with the arena.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    pool: Vec<T>,
}

/// Handle to a value stored in an [`Arena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArenaSlot {
    idx: u32,
}

impl ArenaSlot {
    fn new(index: usize) -> Self {
        Self {
            idx: index as u32,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.idx as usize
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            pool: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pool: Vec::with_capacity(capacity),
        }
    }

    pub fn alloc(&mut self, value: T) -> ArenaSlot {
        self.pool.push(value);
        ArenaSlot::new(self.pool.len() - 1)
    }

    pub fn get(&self, slot: ArenaSlot) -> Option<&T> {
        self.pool.get(slot.index())
    }

    pub fn get_mut(&mut self, slot: ArenaSlot) -> Option<&mut T> {
        self.pool.get_mut(slot.index())
    }

    /// number of allocated values
    #[inline]
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

/// Panics on a slot from another arena, like slice indexing.
impl<T> Index<ArenaSlot> for Arena<T> {
    type Output = T;

    #[inline]
    fn index(&self, slot: ArenaSlot) -> &T {
        &self.pool[slot.index()]
    }
}

impl<T> IndexMut<ArenaSlot> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, slot: ArenaSlot) -> &mut T {
        &mut self.pool[slot.index()]
    }
}
