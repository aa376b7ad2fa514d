use std::cmp::Ordering;
use std::cmp::Ordering::*;
use std::fmt::{Debug, Formatter};

/// A node of a [`MultiwayTree`].
///
/// A settled node holds at most `2d` ordered keys; an internal node holds one
/// more child than it has keys, with child `i` covering the keys between
/// `keys[i-1]` (exclusive) and `keys[i]` (inclusive). Leaf versus internal is
/// a per-node flag rather than a separate type, so split logic is uniform.
pub struct MultiwayNode<T> {
    keys: Vec<T>,
    children: Vec<Box<MultiwayNode<T>>>,
    leaf: bool,
}

impl<T> MultiwayNode<T> {
    fn leaf() -> Box<Self> {
        Box::new(MultiwayNode {
            keys: Vec::new(),
            children: Vec::new(),
            leaf: true,
        })
    }

    // a new root above a split: one routing key, two children
    fn branch(
        key: T,
        first: Box<MultiwayNode<T>>,
        second: Box<MultiwayNode<T>>,
    ) -> Box<Self> {
        Box::new(MultiwayNode {
            keys: vec![key],
            children: vec![first, second],
            leaf: false,
        })
    }

    /// Returns the number of keys currently held.
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Returns the key at `index`.
    ///
    /// # Panics
    /// Panics if `index >= key_count()`.
    pub fn key(&self, index: usize) -> &T {
        &self.keys[index]
    }

    /// Returns the keys in comparator order.
    pub fn keys(&self) -> &[T] {
        &self.keys
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.leaf
    }

    /// Returns the child at `index`, or `None` if out of range (always for a
    /// leaf).
    pub fn child(&self, index: usize) -> Option<&MultiwayNode<T>> {
        self.children.get(index).map(|c| c.as_ref())
    }

    /// Returns the number of children (zero for a leaf).
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl<T: Debug> Debug for MultiwayNode<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.leaf {
            f.write_fmt(format_args!("{:?}", self.keys))
        } else {
            f.write_fmt(format_args!("({:?} {:?})", self.keys, self.children))
        }
    }
}

// First slot whose key is not less than `value`, or the key count when
// `value` follows every key. This is both the search child index and the
// ordered insertion point.
fn position<T, C>(cmp: &C, node: &MultiwayNode<T>, value: &T) -> usize
where
    C: Fn(&T, &T) -> Ordering,
{
    node.keys
        .iter()
        .position(|k| cmp(value, k) != Greater)
        .unwrap_or(node.keys.len())
}

/// A d-ary (multiway) search tree ordered by an injected comparator.
///
/// Every node stores up to `2d` keys; splitting an overflowing node promotes
/// its middle key to the parent and the tree only grows in height when the
/// root itself splits, so the fan-out keeps search depth logarithmic without
/// any rotation machinery. Routing keys in internal nodes are copies promoted
/// from leaf splits, which is why insertion requires `T: Clone`; this is a
/// search tree over values, not a B+-tree with a separated leaf chain.
///
/// Duplicates are kept. There is no deletion.
///
/// # Examples
/// ```
/// use classic_collections::MultiwayTree;
///
/// let mut tree = MultiwayTree::new(1, |a: &u32, b: &u32| a.cmp(b));
/// for x in 1..=31 {
///     tree.insert_data(x);
/// }
/// assert!(tree.search(&31).is_some());
/// assert!(tree.search(&32).is_none());
/// ```
pub struct MultiwayTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    root: Option<Box<MultiwayNode<T>>>,
    cmp: C,
    degree: usize,
    len: usize,
}

impl<T, C> MultiwayTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty tree of degree `d` ordered by `cmp`: non-root nodes
    /// will hold between `d` and `2d` keys.
    ///
    /// # Panics
    /// Panics if `d` is zero.
    pub fn new(d: usize, cmp: C) -> Self {
        assert!(d > 0, "tree degree must be at least 1");
        MultiwayTree {
            root: None,
            cmp,
            degree: d,
            len: 0,
        }
    }

    /// Returns the node holding a key the comparator considers equal to
    /// `value`, or `None` if there is none. The match may be a routing key,
    /// so the returned node can be internal.
    pub fn search(&self, value: &T) -> Option<&MultiwayNode<T>> {
        let mut b = self.root.as_deref()?;
        while !b.leaf {
            let at = position(&self.cmp, b, value);
            if at < b.keys.len() && (self.cmp)(value, &b.keys[at]) == Equal {
                return Some(b);
            }
            b = &b.children[at];
        }
        let at = position(&self.cmp, b, value);
        if at < b.keys.len() && (self.cmp)(value, &b.keys[at]) == Equal {
            Some(b)
        } else {
            None
        }
    }

    /// Returns true if the tree holds a key equal to `value` under the
    /// comparator.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Inserts `value` into the leaf it belongs in, splitting overflowing
    /// nodes on the way back up. When the root itself splits, leaf or
    /// internal, a new two-child root is synthesized and the tree grows one
    /// level.
    pub fn insert_data(&mut self, value: T)
    where
        T: Clone,
    {
        let mut root = match self.root.take() {
            Some(r) => r,
            None => MultiwayNode::leaf(),
        };

        let split = if root.leaf {
            Self::insert_leaf(&self.cmp, self.degree, &mut root, value)
        } else {
            Self::insert_node(&self.cmp, self.degree, &mut root, value)
        };

        self.root = Some(match split {
            Some((mid, sibling)) => MultiwayNode::branch(mid, root, sibling),
            None => root,
        });
        self.len += 1;
    }

    /// Returns the root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&MultiwayNode<T>> {
        self.root.as_deref()
    }

    /// Returns the degree `d` the tree was created with.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the number of inserted values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    // Inserts into a leaf at the ordered position. On overflow past 2d keys
    // the upper d keys move to a fresh sibling and a copy of the middle key
    // is handed up as the routing value; the middle itself stays in the
    // leaf, which settles at d+1 keys.
    fn insert_leaf(
        cmp: &C,
        d: usize,
        node: &mut MultiwayNode<T>,
        value: T,
    ) -> Option<(T, Box<MultiwayNode<T>>)>
    where
        T: Clone,
    {
        let at = position(cmp, node, &value);
        node.keys.insert(at, value);
        if node.keys.len() <= 2 * d {
            return None;
        }

        let upper = node.keys.split_off(d + 1);
        let mid = node.keys[d].clone();
        Some((
            mid,
            Box::new(MultiwayNode {
                keys: upper,
                children: Vec::new(),
                leaf: true,
            }),
        ))
    }

    // Recursive internal-node insertion. A split below hands back a routing
    // key and a sibling; both are linked in at the descent position. If that
    // overflows this node, the upper d keys and d+1 children move to a fresh
    // sibling and the middle key propagates further up.
    fn insert_node(
        cmp: &C,
        d: usize,
        node: &mut MultiwayNode<T>,
        value: T,
    ) -> Option<(T, Box<MultiwayNode<T>>)>
    where
        T: Clone,
    {
        let at = position(cmp, node, &value);
        let split = {
            let child = &mut node.children[at];
            if child.leaf {
                Self::insert_leaf(cmp, d, child, value)
            } else {
                Self::insert_node(cmp, d, child, value)
            }
        };

        let (mid, sibling) = split?;
        node.keys.insert(at, mid);
        node.children.insert(at + 1, sibling);
        if node.keys.len() <= 2 * d {
            return None;
        }

        let upper_keys = node.keys.split_off(d + 1);
        let upper_children = node.children.split_off(d + 1);
        let mid = match node.keys.pop() {
            Some(k) => k,
            None => panic!("split of an empty branch"),
        };
        Some((
            mid,
            Box::new(MultiwayNode {
                keys: upper_keys,
                children: upper_children,
                leaf: false,
            }),
        ))
    }
}

impl<T: Debug, C> Debug for MultiwayTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.root {
            None => f.write_str("MultiwayTree(EMPTY)"),
            Some(n) => f.write_fmt(format_args!(
                "MultiwayTree(d:{} #{}, {:?})",
                self.degree, self.len, n
            )),
        }
    }
}
