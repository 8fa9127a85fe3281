//! Fixed-capacity list of integers with hidden internals.
//!
//! The list owns a heap buffer sized once at construction. Callers only see
//! the valid prefix `0..size()` through [`BoundedList::get`], [`BoundedList::iter`]
//! and the printing helpers; stale slots left behind by [`BoundedList::clear`]
//! are never observable.

use crate::error::{DemoError, Result};
use log::{debug, warn};
use std::fmt;
use std::io::{self, Write};

/// Default capacity of a [`BoundedList`].
pub const MAX_SIZE: usize = 10;

/// Comparator passed around as a plain function pointer.
pub type LessThan = fn(i32, i32) -> bool;

/// Natural ordering.
pub fn less_than(a: i32, b: i32) -> bool {
    a < b
}

/// Orders by remainder modulo 5, so `7` sorts before `4`.
pub fn less_than_modular(a: i32, b: i32) -> bool {
    (a % 5) < (b % 5)
}

/// Ordered integer container that never grows past `N` elements.
#[derive(Clone, PartialEq, Eq)]
pub struct BoundedList<const N: usize = MAX_SIZE> {
    count: usize,
    items: Box<[i32]>,
}

impl<const N: usize> BoundedList<N> {
    /// Create an empty list and allocate its backing storage.
    pub fn new() -> Self {
        Self {
            count: 0,
            items: vec![0; N].into_boxed_slice(),
        }
    }

    /// Append `item`; fails with [`DemoError::Full`] without touching the list.
    pub fn add(&mut self, item: i32) -> Result<()> {
        if self.is_full() {
            warn!("add({}) rejected: list is at capacity {}", item, N);
            return Err(DemoError::Full { capacity: N });
        }
        self.items[self.count] = item;
        self.count += 1;
        Ok(())
    }

    /// Value at `index`; fails with [`DemoError::OutOfRange`] past `size()`.
    pub fn get(&self, index: usize) -> Result<i32> {
        if self.check_index(index) {
            Ok(self.items[index])
        } else {
            Err(DemoError::OutOfRange {
                index,
                size: self.count,
            })
        }
    }

    /// Forget all elements. Capacity is unchanged.
    pub fn clear(&mut self) {
        debug!("clearing list of {} elements", self.count);
        self.count = 0;
    }

    /// Number of stored values.
    pub fn size(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == N
    }

    /// Iterate over stored values in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = i32> + '_ {
        self.items[..self.count].iter().copied()
    }

    /// Write `[v1 v2 ... ]` followed by a newline.
    pub fn print(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self)
    }

    /// Stable insertion sort of the stored values using `less_than`.
    pub fn sort_by(&mut self, less_than: LessThan) {
        let items = &mut self.items[..self.count];
        for i in 1..items.len() {
            let mut j = i;
            while j > 0 && less_than(items[j], items[j - 1]) {
                items.swap(j, j - 1);
                j -= 1;
            }
        }
    }

    fn check_index(&self, index: usize) -> bool {
        index < self.count
    }
}

impl<const N: usize> Default for BoundedList<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Display for BoundedList<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for item in self.iter() {
            write!(f, "{} ", item)?;
        }
        write!(f, "]")
    }
}

impl<const N: usize> fmt::Debug for BoundedList<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedList")
            .field("capacity", &N)
            .field("items", &&self.items[..self.count])
            .finish()
    }
}

/// Fill `dest` with the elements of `source` in reverse order.
///
/// `dest` is cleared first. An empty `source` leaves `dest` empty without
/// reading any index. Errors from `get`/`add` abort the copy, so `dest` may be
/// partially filled when it is smaller than `source`.
pub fn reverse<const N: usize, const M: usize>(
    source: &BoundedList<N>,
    dest: &mut BoundedList<M>,
) -> Result<()> {
    dest.clear();
    if source.is_empty() {
        return Ok(());
    }
    for index in (0..source.size()).rev() {
        let item = source.get(index)?;
        dest.add(item)?;
    }
    Ok(())
}
