//! # Classic ordered and keyed containers
//!
//! `classic-collections` provides the textbook container repertoire: an
//! unbalanced binary search tree, an AVL tree, and a d-ary (multiway) search
//! tree, plus the simple companions they are usually taught with: a LIFO
//! stack, a fixed-capacity circular queue, a bounded binary heap, a counting
//! hash map, and an LRU cache.
//!
//! Every ordered structure is parameterized by a three-way comparator supplied
//! at construction, so the element type does not need an `Ord` impl and the
//! same type can be ordered differently by different trees:
//!
//! ```
//! use classic_collections::AvlTree;
//!
//! let mut tree = AvlTree::new(|a: &i32, b: &i32| a.cmp(b));
//! for i in 1..=31 {
//!     tree.insert_data(i);
//! }
//! assert!(tree.search(&17).is_some());
//! assert!(tree.search(&32).is_none());
//! assert!(tree.height() <= 6);
//! ```
//!
//! The trees expose their nodes read-only (`root`, child and key accessors) so
//! callers can inspect the shape a sequence of insertions produced. None of
//! the trees support deletion.

mod stack;
pub use stack::Stack;

mod queue;
pub use queue::Queue;

mod counter;
pub use counter::CounterHashMap;

mod lru;
pub use lru::LruCache;

mod heap;
pub use heap::Heap;

mod bst;
pub use bst::{SearchTree, TreeNode};

mod avl;
pub use avl::{AvlNode, AvlTree};

mod multiway;
pub use multiway::{MultiwayNode, MultiwayTree};
