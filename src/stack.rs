use std::fmt::{Debug, Formatter};

/// A LIFO stack backed by a growable array.
///
/// `push` appends to the top, `pop` removes from the top, and `pop` on an
/// empty stack returns `None` rather than failing. The AVL tree uses a
/// `Stack` to retrace the path walked during an insertion, so the only
/// guarantees it needs are strict LIFO order and a truthful `is_empty`.
///
/// # Examples
/// ```
/// use classic_collections::Stack;
///
/// let mut s = Stack::new();
/// s.push(1);
/// s.push(2);
/// assert_eq!(s.peek(), Some(&2));
/// assert_eq!(s.pop(), Some(2));
/// assert_eq!(s.pop(), Some(1));
/// assert_eq!(s.pop(), None);
/// ```
#[derive(Clone)]
pub struct Stack<T> {
    elems: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Stack { elems: Vec::new() }
    }

    /// Places `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        self.elems.push(item);
    }

    /// Removes and returns the most recently pushed element, or `None` if the
    /// stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.elems.pop()
    }

    /// Returns the most recently pushed element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.elems.last()
    }

    /// Returns true if the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Returns the number of stacked elements.
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.elems.clear();
    }

    /// Iterates the elements top-down, most recently pushed first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elems.iter().rev()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elems == other.elems
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elems.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            elems: iter.into_iter().collect(),
        }
    }
}

#[cfg(feature = "serde")]
impl<T: serde::ser::Serialize> serde::ser::Serialize for Stack<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        // serialized bottom-up so deserializing re-pushes in the same order
        serializer.collect_seq(self.elems.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::de::Deserialize<'de>> serde::de::Deserialize<'de>
    for Stack<T>
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        struct SeqVisitor<T> {
            marker: std::marker::PhantomData<T>,
        }

        impl<'de, T: serde::de::Deserialize<'de>> serde::de::Visitor<'de>
            for SeqVisitor<T>
        {
            type Value = Stack<T>;

            fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str("a sequence of stack elements")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut stk = Stack::new();
                while let Some(x) = seq.next_element()? {
                    stk.push(x);
                }
                Ok(stk)
            }
        }

        deserializer.deserialize_seq(SeqVisitor {
            marker: std::marker::PhantomData,
        })
    }
}
