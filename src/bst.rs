use std::cmp::Ordering;
use std::cmp::Ordering::*;
use std::fmt::{Debug, Formatter};

type Link<T> = Option<Box<TreeNode<T>>>;

/// A node of a [`SearchTree`], owning its payload and both subtrees.
pub struct TreeNode<T> {
    data: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> TreeNode<T> {
    fn new(data: T) -> Box<Self> {
        Box::new(TreeNode {
            data,
            left: None,
            right: None,
        })
    }

    /// Returns the payload stored in this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Returns the root of the left subtree, if any.
    pub fn left(&self) -> Option<&TreeNode<T>> {
        self.left.as_deref()
    }

    /// Returns the root of the right subtree, if any.
    pub fn right(&self) -> Option<&TreeNode<T>> {
        self.right.as_deref()
    }
}

impl<T: Debug> Debug for TreeNode<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({:?} ", self.data))?;
        fmt_link(&self.left, f)?;
        f.write_str(" ")?;
        fmt_link(&self.right, f)?;
        f.write_str(")")
    }
}

fn fmt_link<T: Debug>(link: &Link<T>, f: &mut Formatter<'_>) -> std::fmt::Result {
    match link {
        None => f.write_str("."),
        Some(n) => n.fmt(f),
    }
}

/// An unbalanced binary search tree ordered by an injected comparator.
///
/// Every value compared `Less` than a node goes to its left subtree,
/// everything else (duplicates included) to its right, so insertion order
/// decides the shape: sorted input degenerates to a list. [`AvlTree`] is the
/// self-balancing alternative with the same interface.
///
/// There is no deletion; nodes live until the tree is dropped.
///
/// # Examples
/// ```
/// use classic_collections::SearchTree;
///
/// let mut tree = SearchTree::new(|a: &i32, b: &i32| a.cmp(b));
/// for x in [4, 6, 2, 5, 3, 1, 7] {
///     tree.insert_data(x);
/// }
/// assert!(tree.search(&3).is_some());
/// assert!(tree.search(&8).is_none());
/// ```
///
/// [`AvlTree`]: crate::AvlTree
pub struct SearchTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    root: Link<T>,
    cmp: C,
    len: usize,
}

impl<T, C> SearchTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty tree ordered by `cmp`.
    pub fn new(cmp: C) -> Self {
        SearchTree {
            root: None,
            cmp,
            len: 0,
        }
    }

    /// Returns the node holding a value the comparator considers equal to
    /// `value`, or `None` if there is none.
    pub fn search(&self, value: &T) -> Option<&TreeNode<T>> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match (self.cmp)(value, &node.data) {
                Equal => return Some(node),
                Less => node.left.as_deref(),
                Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Returns true if the tree holds a value equal to `value` under the
    /// comparator.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Inserts `data` at the frontier slot the comparator steers it to.
    /// Duplicates are kept, routed to the right subtree.
    pub fn insert_data(&mut self, data: T) {
        attach(&self.cmp, &mut self.root, TreeNode::new(data));
        self.len += 1;
    }

    /// Returns the root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    /// Returns the number of stored values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

// Descends to the empty slot `node` belongs in and takes ownership of it
// there. The slot passed by the caller is always vacant or the tree root,
// so nothing is ever overwritten.
fn attach<T, C>(cmp: &C, slot: &mut Link<T>, node: Box<TreeNode<T>>)
where
    C: Fn(&T, &T) -> Ordering,
{
    match slot {
        None => *slot = Some(node),
        Some(parent) => {
            let next = if cmp(&node.data, &parent.data) == Less {
                &mut parent.left
            } else {
                &mut parent.right
            };
            attach(cmp, next, node);
        }
    }
}

impl<T: Debug, C> Debug for SearchTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.root {
            None => f.write_str("SearchTree(EMPTY)"),
            Some(n) => {
                f.write_fmt(format_args!("SearchTree(#{}, {:?})", self.len, n))
            }
        }
    }
}
