use std::cmp::Ordering;
use std::cmp::Ordering::*;
use std::fmt::{Debug, Formatter};

/// A bounded binary heap over an injected comparator.
///
/// The heap is stored as the usual implicit array tree: the children of slot
/// `i` live at `2i + 1` and `2i + 2`. `Heap::max` keeps the element the
/// comparator orders greatest at the top, `Heap::min` the least; the two
/// differ only in the direction the comparator is read, so all the percolate
/// logic is shared.
///
/// The capacity is fixed at construction and inserting into a full heap is a
/// caller error.
///
/// # Examples
/// ```
/// use classic_collections::Heap;
///
/// let mut h = Heap::min(8, |a: &i32, b: &i32| a.cmp(b));
/// for x in [4, 6, 2, 5, 3, 1, 7] {
///     h.insert(x);
/// }
/// assert_eq!(h.pop(), Some(1));
/// assert_eq!(h.pop(), Some(2));
/// assert_eq!(h.pop(), Some(3));
/// ```
pub struct Heap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    elems: Vec<T>,
    capacity: usize,
    cmp: C,
    // Less at the top when true, comparator reversed
    min: bool,
}

impl<T, C> Heap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty max-heap: `pop` returns the element `cmp` orders
    /// greatest.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn max(capacity: usize, cmp: C) -> Self {
        Self::with_polarity(capacity, cmp, false)
    }

    /// Creates an empty min-heap: `pop` returns the element `cmp` orders
    /// least.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn min(capacity: usize, cmp: C) -> Self {
        Self::with_polarity(capacity, cmp, true)
    }

    fn with_polarity(capacity: usize, cmp: C, min: bool) -> Self {
        assert!(capacity > 0, "heap capacity must be at least 1");
        Heap {
            elems: Vec::with_capacity(capacity),
            capacity,
            cmp,
            min,
        }
    }

    /// Returns true if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Returns the number of stored elements.
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Returns the fixed capacity the heap was created with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.elems.first()
    }

    /// Adds `item`, percolating it up until its parent outranks it.
    ///
    /// # Panics
    /// Panics if the heap is full.
    pub fn insert(&mut self, item: T) {
        assert!(self.elems.len() < self.capacity, "insert on a full heap");
        self.elems.push(item);
        self.percolate_up(self.elems.len() - 1);
    }

    /// Removes and returns the top element, or `None` if the heap is empty.
    /// The vacated root slot is refilled with the last element, which is
    /// then percolated down.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.elems.pop()?;
        if self.elems.is_empty() {
            return Some(last);
        }
        let top = std::mem::replace(&mut self.elems[0], last);
        self.percolate_down(0);
        Some(top)
    }

    // comparator read in heap order: Greater means "closer to the top"
    fn rank(&self, a: &T, b: &T) -> Ordering {
        let ord = (self.cmp)(a, b);
        if self.min {
            ord.reverse()
        } else {
            ord
        }
    }

    fn percolate_up(&mut self, mut at: usize) {
        while at > 0 {
            let parent = (at - 1) / 2;
            if self.rank(&self.elems[parent], &self.elems[at]) == Less {
                self.elems.swap(parent, at);
                at = parent;
            } else {
                break;
            }
        }
    }

    fn percolate_down(&mut self, mut at: usize) {
        loop {
            let left = 2 * at + 1;
            let right = 2 * at + 2;
            let mut best = at;

            if left < self.elems.len()
                && self.rank(&self.elems[left], &self.elems[best]) == Greater
            {
                best = left;
            }
            if right < self.elems.len()
                && self.rank(&self.elems[right], &self.elems[best]) == Greater
            {
                best = right;
            }
            if best == at {
                return;
            }

            self.elems.swap(at, best);
            at = best;
        }
    }
}

impl<T: Debug, C> Debug for Heap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.elems.iter()).finish()
    }
}
