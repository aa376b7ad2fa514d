use std::fmt::{Debug, Formatter};

/// A fixed-capacity FIFO queue over a circular buffer.
///
/// `head` and `tail` wrap modulo the capacity, so a long-lived queue reuses
/// its slots instead of sliding through memory. Enqueueing onto a full queue
/// is a caller error and panics; `dequeue` and `peek` report emptiness with
/// `None`.
///
/// # Examples
/// ```
/// use classic_collections::Queue;
///
/// let mut q = Queue::new(4);
/// q.enqueue_all([1, 2, 3]);
/// assert_eq!(q.dequeue(), Some(1));
/// q.enqueue(4);
/// assert_eq!(q.peek(), Some(&2));
/// assert_eq!(q.len(), 3);
/// ```
#[derive(Clone)]
pub struct Queue<T> {
    slots: Vec<Option<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> Queue<T> {
    /// Creates an empty queue that can hold up to `capacity` elements.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "queue capacity must be at least 1");
        Queue {
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Appends `item` at the tail of the queue.
    ///
    /// # Panics
    /// Panics if the queue is full.
    pub fn enqueue(&mut self, item: T) {
        assert!(self.len < self.slots.len(), "enqueue on a full queue");
        self.slots[self.tail] = Some(item);
        self.tail = (self.tail + 1) % self.slots.len();
        self.len += 1;
    }

    /// Appends every element of `items` in order.
    ///
    /// # Panics
    /// Panics if the queue fills up before `items` is exhausted.
    pub fn enqueue_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.enqueue(item);
        }
    }

    /// Removes and returns the element at the head of the queue, or `None`
    /// if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        item
    }

    /// Returns the element at the head of the queue without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.slots[self.head].as_ref()
    }

    /// Returns true if the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of queued elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the fixed capacity the queue was created with.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for i in 0..self.len {
            if let Some(x) = &self.slots[(self.head + i) % self.slots.len()] {
                list.entry(x);
            }
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    extern crate quickcheck;
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn fifo_order() {
        let mut q = Queue::new(8);
        q.enqueue_all(0..5);
        for i in 0..5 {
            assert_eq!(q.peek(), Some(&i));
            assert_eq!(q.dequeue(), Some(i));
        }
        assert_eq!(q.dequeue(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn wraps_around_the_buffer() {
        let mut q = Queue::new(3);
        q.enqueue_all([0, 1, 2]);
        // drain two, refill two; the slots are reused
        assert_eq!(q.dequeue(), Some(0));
        assert_eq!(q.dequeue(), Some(1));
        q.enqueue(3);
        q.enqueue(4);
        assert_eq!(q.len(), 3);
        assert_eq!(q.dequeue(), Some(2));
        assert_eq!(q.dequeue(), Some(3));
        assert_eq!(q.dequeue(), Some(4));
        assert!(q.is_empty());
    }

    #[test]
    #[should_panic(expected = "full queue")]
    fn enqueue_full_panics() {
        let mut q = Queue::new(2);
        q.enqueue_all([1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "capacity")]
    fn zero_capacity_panics() {
        let _ = Queue::<i32>::new(0);
    }

    quickcheck! {
        fn qc_cmp_with_vecdeque(ops: Vec<i32>) -> () {
            let mut q = Queue::new(ops.len().max(1));
            let mut oracle = std::collections::VecDeque::new();

            for &x in ops.iter() {
                if x < 0 {
                    assert_eq!(q.dequeue(), oracle.pop_front());
                } else {
                    q.enqueue(x);
                    oracle.push_back(x);
                }
                assert_eq!(q.len(), oracle.len());
                assert_eq!(q.peek(), oracle.front());
            }
        }
    }
}
