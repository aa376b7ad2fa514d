use std::cmp::Ordering;
use std::cmp::Ordering::*;
use std::fmt::{Debug, Formatter};

use crate::Stack;

type Link<T> = Option<Box<AvlNode<T>>>;

/// A node of an [`AvlTree`]: a search-tree node extended with the height of
/// the subtree rooted at it (1 for a leaf).
pub struct AvlNode<T> {
    data: T,
    height: u32,
    left: Link<T>,
    right: Link<T>,
}

fn height<T>(link: &Link<T>) -> u32 {
    link.as_ref().map_or(0, |n| n.height)
}

impl<T> AvlNode<T> {
    fn new(data: T) -> Box<Self> {
        Box::new(AvlNode {
            data,
            height: 1,
            left: None,
            right: None,
        })
    }

    /// Returns the payload stored in this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Returns the height of the subtree rooted here: 1 for a leaf,
    /// `1 + max(child heights)` otherwise.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the root of the left subtree, if any.
    pub fn left(&self) -> Option<&AvlNode<T>> {
        self.left.as_deref()
    }

    /// Returns the root of the right subtree, if any.
    pub fn right(&self) -> Option<&AvlNode<T>> {
        self.right.as_deref()
    }

    // Recomputes the cached height from the children. Must run bottom-up:
    // both child heights have to be current before this is.
    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    // positive when the right subtree is deeper
    fn balance(&self) -> i32 {
        height(&self.right) as i32 - height(&self.left) as i32
    }
}

impl<T: Debug> Debug for AvlNode<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("(ht:{} {:?} ", self.height, self.data))?;
        match &self.left {
            None => f.write_str(".")?,
            Some(n) => n.fmt(f)?,
        }
        f.write_str(" ")?;
        match &self.right {
            None => f.write_str(".")?,
            Some(n) => n.fmt(f)?,
        }
        f.write_str(")")
    }
}

// The side of a node an insertion descended into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

/// Promotes `k2`'s left child `k1`: `k1`'s right subtree becomes `k2`'s new
/// left subtree and `k2` becomes `k1`'s right child. Restores balance when
/// the insertion went into the left subtree of the left child.
///
/// Returns the new subtree root so the caller can reseat the parent link;
/// the heights of the two moved nodes are recomputed here, bottom-up.
fn rotate_left<T>(mut k2: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    let mut k1 = match k2.left.take() {
        Some(n) => n,
        None => panic!("rotate_left on a node without a left child"),
    };
    k2.left = k1.right.take();
    k2.update_height();
    k1.right = Some(k2);
    k1.update_height();
    k1
}

/// Mirror of [`rotate_left`]: promotes `k1`'s right child. Restores balance
/// when the insertion went into the right subtree of the right child.
fn rotate_right<T>(mut k1: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    let mut k2 = match k1.right.take() {
        Some(n) => n,
        None => panic!("rotate_right on a node without a right child"),
    };
    k1.right = k2.left.take();
    k1.update_height();
    k2.left = Some(k1);
    k2.update_height();
    k2
}

/// Right-rotates `k3`'s left child, then left-rotates `k3`, promoting the
/// left child's right descendant two levels. Restores balance when the
/// insertion went into the right subtree of the left child.
fn double_rotate_left<T>(mut k3: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    let left = match k3.left.take() {
        Some(n) => n,
        None => panic!("double_rotate_left on a node without a left child"),
    };
    k3.left = Some(rotate_right(left));
    rotate_left(k3)
}

/// Mirror of [`double_rotate_left`]: left-rotates `k1`'s right child, then
/// right-rotates `k1`.
fn double_rotate_right<T>(mut k1: Box<AvlNode<T>>) -> Box<AvlNode<T>> {
    let right = match k1.right.take() {
        Some(n) => n,
        None => panic!("double_rotate_right on a node without a right child"),
    };
    k1.right = Some(rotate_left(right));
    rotate_right(k1)
}

/// A self-balancing binary search tree ordered by an injected comparator.
///
/// The tree maintains the AVL property: at every node, the heights of the two
/// subtrees differ by at most one, which keeps the depth, and with it every
/// search and insertion, within `O(log n)` regardless of insertion order.
///
/// Insertion descends like a plain [`SearchTree`] insert while recording the
/// visited nodes on a [`Stack`], attaches the new leaf, and then retraces the
/// recorded path bottom-up, refreshing each node's cached height. The first
/// node found with a subtree height difference of two is restructured with a
/// single or double rotation; one rotation always restores the invariant for
/// the whole tree, so the retrace stops adjusting heights there and only
/// reseats the remaining parent links.
///
/// Duplicates are kept, routed to the right subtree. There is no deletion.
///
/// # Examples
/// ```
/// use classic_collections::AvlTree;
///
/// let mut tree = AvlTree::new(|a: &u32, b: &u32| a.cmp(b));
/// for x in 1..=31 {
///     tree.insert_data(x);
/// }
/// // 31 ascending inserts balance into a perfect tree of height 5
/// assert_eq!(tree.height(), 5);
/// assert!(tree.search(&31).is_some());
/// ```
///
/// [`SearchTree`]: crate::SearchTree
pub struct AvlTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    root: Link<T>,
    cmp: C,
    len: usize,
}

impl<T, C> AvlTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty tree ordered by `cmp`.
    pub fn new(cmp: C) -> Self {
        AvlTree {
            root: None,
            cmp,
            len: 0,
        }
    }

    /// Returns the node holding a value the comparator considers equal to
    /// `value`, or `None` if there is none.
    pub fn search(&self, value: &T) -> Option<&AvlNode<T>> {
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

    /// Inserts `data`, then rebalances with at most one (possibly double)
    /// rotation.
    pub fn insert_data(&mut self, data: T) {
        // Descend to the frontier, taking each visited node off the tree and
        // onto the retrace stack together with the direction taken below it.
        // The detached nodes keep their off-path subtree; the on-path child
        // slot is vacated and refilled during the retrace.
        let mut path: Stack<(Box<AvlNode<T>>, Direction)> = Stack::new();
        let mut cur = self.root.take();
        while let Some(mut visited) = cur {
            let dir = if (self.cmp)(&data, &visited.data) == Less {
                cur = visited.left.take();
                Direction::Left
            } else {
                cur = visited.right.take();
                Direction::Right
            };
            path.push((visited, dir));
        }

        let mut subtree = AvlNode::new(data);

        // Retrace: pop the path deepest-first, relink, refresh heights, and
        // rotate at the first node whose subtrees now differ by two. The
        // rotation case is picked from the directions taken at that node and
        // at its on-path child, i.e. `dir` and the direction popped just
        // before it. A single rotation restores the subtree to its pre-insertion
        // height, so every ancestor's cached height is already correct and
        // the rest of the retrace only reseats parent links.
        let mut rebalanced = false;
        let mut below: Option<Direction> = None;
        while let Some((mut parent, dir)) = path.pop() {
            match dir {
                Direction::Left => parent.left = Some(subtree),
                Direction::Right => parent.right = Some(subtree),
            }

            if !rebalanced {
                parent.update_height();
                if parent.balance().abs() == 2 {
                    // a fresh leaf cannot unbalance its own parent, so the
                    // path below reaches at least two levels down
                    let deeper = match below {
                        Some(d) => d,
                        None => panic!("unbalanced parent of a fresh leaf"),
                    };
                    parent = match (dir, deeper) {
                        (Direction::Left, Direction::Left) => {
                            rotate_left(parent)
                        }
                        (Direction::Left, Direction::Right) => {
                            double_rotate_left(parent)
                        }
                        (Direction::Right, Direction::Left) => {
                            double_rotate_right(parent)
                        }
                        (Direction::Right, Direction::Right) => {
                            rotate_right(parent)
                        }
                    };
                    rebalanced = true;
                }
            }

            below = Some(dir);
            subtree = parent;
        }

        self.root = Some(subtree);
        self.len += 1;
    }

    /// Returns the root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&AvlNode<T>> {
        self.root.as_deref()
    }

    /// Returns the height of the tree: 0 when empty, the root's height
    /// otherwise.
    pub fn height(&self) -> u32 {
        height(&self.root)
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

impl<T: Debug, C> Debug for AvlTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.root {
            None => f.write_str("AvlTree(EMPTY)"),
            Some(n) => {
                f.write_fmt(format_args!("AvlTree(#{}, {:?})", self.len, n))
            }
        }
    }
}
