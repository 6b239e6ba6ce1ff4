//! A link based BST. Every `Node` owns its children through a `Box`, so the
//! tree is a tree by construction. There are no parent pointers: walks that
//! need to modify the tree carry a mutable reference to the link they are
//! standing on instead.
//!
//! The tree does not balance itself. Its shape depends on the order items
//! were added in, and [`Tree::rebalance`] rebuilds it into a minimum height
//! tree when asked.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.add(1);
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Duplicates are kept.
//! tree.add(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Removing an item returns it.
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Err(Error::NotFound));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, log_enabled, trace, Level};

use crate::error::{self, Error};
use crate::iter::{Inorder, IntoIter, Levelorder, Postorder, Preorder};
use crate::util::Side;

/// An owning link to a subtree. `None` is the empty subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// An unbalanced Binary Search Tree of items. This can be used for adding,
/// finding, and removing items as well as asking for them in order.
pub struct Tree<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        Node::dismantle(self.root.take());
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    /// Copies the tree node for node, so the copy has the same shape.
    fn clone(&self) -> Self {
        let mut root: Link<T> = None;
        // Each source node is paired with the empty link its copy goes into.
        let mut stack = Vec::new();
        if let Some(node) = self.root.as_deref() {
            stack.push((node, &mut root));
        }
        while let Some((node, link)) = stack.pop() {
            let copy = link.insert(Node::new_boxed(node.data.clone()));
            let Node { left, right, .. } = &mut **copy;
            stack.extend(node.left.as_deref().map(|child| (child, left)));
            stack.extend(node.right.as_deref().map(|child| (child, right)));
        }

        Self {
            root,
            size: self.size,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inorder()).finish()
    }
}

/// Draws the tree rotated 90 degrees counterclockwise: the root is in the
/// left-most column and each level is indented by `"| "`.
///
/// ```
/// use linked_bst::Tree;
///
/// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
/// assert_eq!(tree.to_string(), "| 3\n2\n| 1\n");
/// ```
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Reverse inorder so the right subtree is drawn above its parent.
        let mut stack = Vec::new();
        let mut link = self.root.as_deref();
        let mut level = 0;
        loop {
            while let Some(node) = link {
                stack.push((node, level));
                link = node.right.as_deref();
                level += 1;
            }
            let Some((node, node_level)) = stack.pop() else {
                return Ok(());
            };
            writeln!(f, "{}{}", "| ".repeat(node_level), node.data)?;
            link = node.left.as_deref();
            level = node_level + 1;
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    /// Adds the items one at a time in the order they are yielded.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Preorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the tree, yielding its items in ascending order.
    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.root.take(), self.size)
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// The number of items stored in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every item from the tree.
    pub fn clear(&mut self) {
        Node::dismantle(self.root.take());
        self.size = 0;
    }

    /// Potentially finds the stored item equal to `item`. If no node holds
    /// an equal item, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match node.side_for(item) {
                None => return Some(&node.data),
                Some(side) => current = node.child(side),
            }
        }
        None
    }

    /// Whether an item equal to `item` is stored in the tree.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.find(item).is_some()
    }

    /// Adds the item to the tree. Items less than a node go to its left and
    /// everything else, including an equal item, goes to its right.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.add(2);
    /// tree.add(1);
    /// tree.add(2);
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), [&1, &2, &2]);
    /// ```
    pub fn add(&mut self, item: T)
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if item < node.data {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Node::new_boxed(item));
        self.size += 1;
    }

    /// Removes the node holding an item equal to `item` and returns the
    /// stored item. If the tree holds no such item it is left untouched and
    /// [`Error::NotFound`] is returned.
    ///
    /// When the node has two children, the largest item of its left subtree
    /// takes its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Error, Tree};
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Ok(5));
    /// assert_eq!(tree.remove(&5), Err(Error::NotFound));
    /// assert_eq!(tree.inorder().collect::<Vec<_>>(), [&3, &8]);
    /// ```
    pub fn remove(&mut self, item: &T) -> error::Result<T>
    where
        T: Ord,
    {
        let link = Node::seek(&mut self.root, item);
        let Some(node) = link.take() else {
            trace!("remove missed among {} items", self.size);
            return Err(Error::NotFound);
        };
        let removed = node.unlink(link);
        self.size -= 1;
        Ok(removed)
    }

    /// Overwrites the stored item equal to `item` with `new_item` and returns
    /// the old item, or `None` if there is no such item.
    ///
    /// The node is not moved, so `new_item` should order the same way `item`
    /// does. Otherwise later lookups may walk past it.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [(2, 'b'), (1, 'a')].into_iter().collect();
    ///
    /// assert_eq!(tree.replace(&(2, 'b'), (2, 'c')), Some((2, 'b')));
    /// assert_eq!(tree.replace(&(3, 'z'), (3, 'y')), None);
    /// assert_eq!(tree.find(&(2, 'c')), Some(&(2, 'c')));
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T>
    where
        T: Ord,
    {
        Node::seek(&mut self.root, item)
            .as_mut()
            .map(|node| mem::replace(&mut node.data, new_item))
    }

    /// Iterates over the items in preorder: a node, then its left subtree,
    /// then its right subtree. This is also what iterating over `&Tree`
    /// yields.
    pub fn iter(&self) -> Preorder<'_, T> {
        Preorder::new(self.root.as_deref(), self.size)
    }

    /// Iterates over the items in ascending order.
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self.root.as_deref(), self.size)
    }

    /// Iterates over the items in postorder: the left subtree, the right
    /// subtree, then the node.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(self.root.as_deref(), self.size)
    }

    /// Iterates over the items level by level, top to bottom and left to
    /// right within a level.
    pub fn levelorder(&self) -> Levelorder<'_, T> {
        Levelorder::new(self.root.as_deref(), self.size)
    }

    /// The number of links between the root and the deepest node. Both an
    /// empty tree and a tree with a single node have a height of 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = Vec::new();
        stack.extend(self.root.as_deref().map(|root| (root, 0)));
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }
        height
    }

    /// A rough check of whether lookups are still cheap: true when the
    /// height is below `2 * log2(len + 1) - 1`.
    pub fn is_balanced(&self) -> bool {
        let bound = 2.0 * ((self.size + 1) as f64).log2() - 1.0;
        (self.height() as f64) < bound
    }

    /// Rebuilds the tree into a minimum height tree holding the same items.
    /// The middle item of the sorted items becomes the root and each half
    /// is built the same way below it.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=7).collect();
    /// assert_eq!(tree.height(), 6);
    ///
    /// assert_eq!(tree.rebalance().height(), 2);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&4, &2, &1, &3, &6, &5, &7]);
    /// ```
    pub fn rebalance(&mut self) -> &mut Self {
        let height_before = log_enabled!(Level::Debug).then(|| self.height());

        let mut items = IntoIter::new(self.root.take(), self.size);
        self.root = Node::build_balanced(self.size, &mut items);
        debug_assert!(
            items.next().is_none(),
            "every item is placed back in the tree"
        );

        if let Some(height_before) = height_before {
            debug!(
                "rebalanced {} items: height {} -> {}",
                self.size,
                height_before,
                self.height()
            );
        }
        self
    }

    /// The items `x` with `low <= x <= high`, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// let found: Vec<_> = tree.range_find(&3, &8).copied().collect();
    /// assert_eq!(found, [3, 4, 5, 7, 8]);
    /// ```
    pub fn range_find<'a>(&'a self, low: &'a T, high: &'a T) -> impl Iterator<Item = &'a T> + 'a
    where
        T: Ord,
    {
        self.inorder().filter(move |x| low <= *x && *x <= high)
    }

    /// The smallest stored item strictly greater than `item`, if any. This
    /// scans every item.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&4), Some(&5));
    /// assert_eq!(tree.successor(&9), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.inorder().filter(|x| *x > item).min()
    }

    /// The largest stored item strictly less than `item`, if any. This scans
    /// every item.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, -1, 0, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.predecessor(&4), Some(&3));
    /// assert_eq!(tree.predecessor(&3), Some(&0));
    /// assert_eq!(tree.predecessor(&0), Some(&-1));
    /// assert_eq!(tree.predecessor(&-1), None);
    /// ```
    pub fn predecessor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.inorder().filter(|x| *x < item).max()
    }
}

pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(data: T) -> Box<Self> {
        Box::new(Self {
            data,
            left: None,
            right: None,
        })
    }

    /// Which child to look under for `item`, or `None` if this node holds it.
    fn side_for(&self, item: &T) -> Option<Side>
    where
        T: Ord,
    {
        match item.cmp(&self.data) {
            Ordering::Less => Some(Side::Left),
            Ordering::Equal => None,
            Ordering::Greater => Some(Side::Right),
        }
    }

    fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Walks down from `link` and returns the link holding the first node
    /// equal to `item`, or the empty link the search fell off at.
    ///
    /// Handing back the link rather than the node lets the caller rewrite
    /// the root and any child the same way.
    fn seek<'a>(mut link: &'a mut Link<T>, item: &T) -> &'a mut Link<T>
    where
        T: Ord,
    {
        while let Some(side) = link.as_deref().and_then(|node| node.side_for(item)) {
            if let Some(node) = link {
                link = node.child_mut(side);
            }
        }
        link
    }

    /// Splices this node out of the tree. `link` is the (now empty) link
    /// that used to hold it and receives whatever takes its place.
    fn unlink(mut self: Box<Self>, link: &mut Link<T>) -> T {
        if self.left.is_some() && self.right.is_some() {
            let removed = self.lift_max_of_left();
            *link = Some(self);
            return removed;
        }

        let Node { data, left, right } = *self;
        *link = left.or(right);
        data
    }

    /// Moves the largest item of the left subtree into this node, splicing
    /// its old node out, and returns the item this node held.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    fn lift_max_of_left(&mut self) -> T {
        let mut link = &mut self.left;
        while link.as_ref().is_some_and(|node| node.right.is_some()) {
            if let Some(node) = link {
                link = &mut node.right;
            }
        }

        let Some(max) = link.take() else {
            unreachable!("Lifting the maximum requires a left subtree.");
        };
        // The maximum has no right child so its left child takes its place.
        let Node { data, left, .. } = *max;
        *link = left;
        mem::replace(&mut self.data, data)
    }

    /// Builds a minimum height tree out of the next `len` items, which must
    /// be in ascending order. The middle item (rounding down) becomes the root.
    fn build_balanced(len: usize, items: &mut impl Iterator<Item = T>) -> Link<T> {
        if len == 0 {
            return None;
        }

        let left_len = (len - 1) / 2;
        let left = Self::build_balanced(left_len, items);
        let data = items.next()?;
        let right = Self::build_balanced(len - 1 - left_len, items);
        Some(Box::new(Self { data, left, right }))
    }

    /// Drops whole subtrees without recursing, so a tree as tall as it is
    /// large can't overflow the stack.
    pub(crate) fn dismantle(subtrees: impl IntoIterator<Item = Box<Self>>) {
        let mut stack: Vec<_> = subtrees.into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}
