//! Iterators over a [`Tree`][crate::Tree].
//!
//! None of these recurse. Each keeps its own worklist of nodes so walking a
//! tree that is as tall as it is large costs heap, not call stack. Every call
//! to [`Tree::iter`][crate::Tree::iter] and friends starts a fresh walk.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::linked::{Link, Node};

/// Marker impls for the borrowing traversals. Each one's `size_hint` counts
/// down from the tree's size so it is exact, and an emptied worklist stays
/// empty.
macro_rules! marker_impls {
    ($iter:ident) => {
        impl<'a, T> ExactSizeIterator for $iter<'a, T> {}
        impl<'a, T> FusedIterator for $iter<'a, T> {}
    };
}

/// Preorder iterator: a node, then its left subtree, then its right subtree.
///
/// Created by [`Tree::iter`][crate::Tree::iter].
pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree comes off the stack first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

marker_impls!(Preorder);

/// Inorder iterator: the items in ascending order.
///
/// Created by [`Tree::inorder`][crate::Tree::inorder].
pub struct Inorder<'a, T> {
    /// The path of nodes whose left subtrees are being visited.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<T>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

marker_impls!(Inorder);

/// Postorder iterator: the left subtree, the right subtree, then the node.
///
/// Created by [`Tree::postorder`][crate::Tree::postorder].
pub struct Postorder<'a, T> {
    /// Nodes still to visit, flagged once their children have been pushed.
    stack: Vec<(&'a Node<T>, bool)>,
    remaining: usize,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            stack: root.map(|root| (root, false)).into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                self.remaining -= 1;
                return Some(&node.data);
            }
            self.stack.push((node, true));
            if let Some(right) = node.right.as_deref() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push((left, false));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

marker_impls!(Postorder);

/// Level order iterator: the root, then its children, then their children,
/// left to right.
///
/// Created by [`Tree::levelorder`][crate::Tree::levelorder].
pub struct Levelorder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Levelorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            queue: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Levelorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

marker_impls!(Levelorder);

/// Consuming iterator yielding the items of a tree in ascending order.
///
/// Created by calling `into_iter` on a [`Tree`][crate::Tree]. Nodes are
/// freed as their items are handed out.
pub struct IntoIter<T> {
    /// Nodes whose left subtree has already been detached and pushed above them.
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Link<T>) {
        while let Some(mut node) = current {
            current = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        Node::dismantle(self.stack.drain(..));
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { data, right, .. } = *node;
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
