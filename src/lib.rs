//! This crate exposes a link based Binary Search Tree (BST) along with the
//! usual diagnostics for checking how well its shape serves lookups.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the item that
//! was inserted and may have child `Node`s. The invariants of this BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    item less than its own item.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    item greater than or equal to its own item. Duplicates are kept and
//!    land to the right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for items in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). This tree does
//! not balance itself: inserting sorted input produces a tree as tall as it
//! is large. [`Tree::rebalance`] rebuilds it into a minimum height tree
//! on demand, and [`Tree::height`]/[`Tree::is_balanced`] tell you when that
//! is worth doing.
//!
//! # Examples
//!
//! ```
//! use linked_bst::Tree;
//!
//! let mut tree: Tree<_> = (1..=7).collect();
//! assert_eq!(tree.height(), 6);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), 2);
//! assert!(tree.is_balanced());
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6, 7]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
pub mod linked;
mod util;


pub use error::{Error, Result};
pub use linked::Tree;
