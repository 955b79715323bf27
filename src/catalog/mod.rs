//! # Menu Catalog
//!
//! The ordered store of [`MenuItem`]s, keyed by [`MenuItemId`].
//!
//! ## Structure
//!
//! The catalog is a plain binary search tree of boxed nodes. Every node owns its
//! two children; the catalog owns the root. For every node, the ids in the left
//! subtree are smaller and the ids in the right subtree are larger.
//!
//! The tree is never rebalanced. Inserting ids in ascending order produces a
//! chain of depth `n`, and every operation is `O(height)`. Listings and the
//! menu file depend only on the in-order sequence, never on the shape.
//!
//! ## Usage
//!
//! ```rust
//! use restaurant_console::catalog::MenuCatalog;
//! use restaurant_console::model::{MenuItem, MenuItemId};
//!
//! let mut catalog = MenuCatalog::new();
//! catalog.insert(MenuItem::new(5, "Tea", 10.0));
//! catalog.insert(MenuItem::new(3, "Coffee", 15.0));
//! catalog.insert(MenuItem::new(8, "Juice", 20.0));
//!
//! let ids: Vec<i32> = catalog.iter().map(|item| item.id.0).collect();
//! assert_eq!(ids, vec![3, 5, 8]);
//!
//! catalog.delete(MenuItemId(5));
//! assert!(catalog.search(MenuItemId(5)).is_none());
//! ```

mod iter;

pub use iter::Iter;

use crate::model::{MenuItem, MenuItemId};
use std::cmp::Ordering;
use std::fmt;
use tracing::{debug, warn};

type Link = Option<Box<Node>>;

#[derive(Debug)]
struct Node {
    item: MenuItem,
    left: Link,
    right: Link,
}

impl Node {
    fn new(item: MenuItem) -> Self {
        Self {
            item,
            left: None,
            right: None,
        }
    }
}

/// Unbalanced binary search tree of menu items.
#[derive(Default)]
pub struct MenuCatalog {
    root: Link,
    len: usize,
}

impl MenuCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `item` at its BST position.
    ///
    /// If an item with the same id is already present, the catalog is left
    /// untouched (the existing name and price are kept) and `false` is returned.
    pub fn insert(&mut self, item: MenuItem) -> bool {
        let id = item.id;
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match id.cmp(&node.item.id) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => {
                    warn!(%id, "Duplicate id, insert ignored");
                    return false;
                }
            };
        }
        *link = Some(Box::new(Node::new(item)));
        self.len += 1;
        debug!(%id, size = self.len, "Inserted");
        true
    }

    /// Looks up an item by id.
    pub fn search(&self, id: MenuItemId) -> Option<&MenuItem> {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match id.cmp(&node.item.id) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.item),
            };
        }
        None
    }

    pub fn contains(&self, id: MenuItemId) -> bool {
        self.search(id).is_some()
    }

    /// Removes the item with `id` and returns it, or `None` if it was absent.
    ///
    /// A node with two children takes over the value of the smallest node in
    /// its right subtree, and that node is removed from the right subtree
    /// instead. Nodes with fewer children are spliced out.
    pub fn delete(&mut self, id: MenuItemId) -> Option<MenuItem> {
        let removed = remove(&mut self.root, id);
        if removed.is_some() {
            self.len -= 1;
            debug!(%id, size = self.len, "Deleted");
        }
        removed
    }

    /// In-order traversal: ascending by id.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref())
    }

    /// All items, ascending by id.
    pub fn list_in_order(&self) -> Vec<&MenuItem> {
        self.iter().collect()
    }

    /// All items, ascending by price.
    ///
    /// The sort is stable over the in-order sequence, so items with equal
    /// prices stay in ascending id order.
    pub fn list_by_price(&self) -> Vec<&MenuItem> {
        let mut items = self.list_in_order();
        items.sort_by(|a, b| a.price.total_cmp(&b.price));
        items
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Node, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            pending.push((root, 1));
        }
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            for child in [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .flatten()
            {
                pending.push((child, level + 1));
            }
        }
        deepest
    }
}

fn remove(mut link: &mut Link, id: MenuItemId) -> Option<MenuItem> {
    loop {
        link = match id.cmp(&link.as_ref()?.item.id) {
            Ordering::Less => &mut link.as_mut()?.left,
            Ordering::Greater => &mut link.as_mut()?.right,
            Ordering::Equal => break,
        };
    }
    let node = link.as_mut()?;
    if node.left.is_some() && node.right.is_some() {
        let successor = take_min(&mut node.right)?;
        return Some(std::mem::replace(&mut node.item, successor));
    }
    let Node { item, left, right } = *link.take()?;
    *link = left.or(right);
    Some(item)
}

/// Detaches the leftmost node of the subtree, promoting its right child.
fn take_min(mut link: &mut Link) -> Option<MenuItem> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }
    let Node { item, right, .. } = *link.take()?;
    *link = right;
    Some(item)
}

impl Drop for MenuCatalog {
    // Unlinks nodes one at a time, so chain-shaped trees do not recurse.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl fmt::Debug for MenuCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<MenuItem> for MenuCatalog {
    fn from_iter<I: IntoIterator<Item = MenuItem>>(iter: I) -> Self {
        let mut catalog = Self::new();
        catalog.extend(iter);
        catalog
    }
}

impl Extend<MenuItem> for MenuCatalog {
    fn extend<I: IntoIterator<Item = MenuItem>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a> IntoIterator for &'a MenuCatalog {
    type Item = &'a MenuItem;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(catalog: &MenuCatalog) -> Vec<i32> {
        catalog.iter().map(|item| item.id.0).collect()
    }

    /// Checks the ordering invariant on every node, not just the in-order output.
    fn assert_bst(link: &Link, low: Option<i32>, high: Option<i32>) {
        if let Some(node) = link {
            let id = node.item.id.0;
            assert!(low.map_or(true, |low| id > low), "{id} not above {low:?}");
            assert!(high.map_or(true, |high| id < high), "{id} not below {high:?}");
            assert_bst(&node.left, low, Some(id));
            assert_bst(&node.right, Some(id), high);
        }
    }

    #[test]
    fn delete_leaf_single_child_and_two_children() {
        let mut catalog: MenuCatalog = [50, 30, 70, 20, 40, 60, 80, 65]
            .into_iter()
            .map(|id| MenuItem::new(id, format!("item {id}"), id as f64))
            .collect();

        // leaf
        assert_eq!(catalog.delete(MenuItemId(20)).map(|i| i.id.0), Some(20));
        assert_bst(&catalog.root, None, None);
        // one child (60 -> 65)
        assert_eq!(catalog.delete(MenuItemId(60)).map(|i| i.id.0), Some(60));
        assert_bst(&catalog.root, None, None);
        // two children at the root: successor is 65
        assert_eq!(catalog.delete(MenuItemId(50)).map(|i| i.id.0), Some(50));
        assert_bst(&catalog.root, None, None);
        assert_eq!(catalog.root.as_ref().map(|n| n.item.id.0), Some(65));

        assert_eq!(ids(&catalog), vec![30, 40, 65, 70, 80]);
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn successor_with_right_child_is_spliced() {
        // 10 has two children; its successor 12 has a right child 13.
        let mut catalog: MenuCatalog = [10, 5, 15, 12, 13]
            .into_iter()
            .map(|id| MenuItem::new(id, "x", 1.0))
            .collect();

        catalog.delete(MenuItemId(10));

        assert_bst(&catalog.root, None, None);
        assert_eq!(ids(&catalog), vec![5, 12, 13, 15]);
        assert_eq!(catalog.search(MenuItemId(13)).map(|i| i.id.0), Some(13));
    }

    #[test]
    fn depth_of_empty_and_balanced_trees() {
        assert_eq!(MenuCatalog::new().depth(), 0);
        let catalog: MenuCatalog = [2, 1, 3]
            .into_iter()
            .map(|id| MenuItem::new(id, "x", 1.0))
            .collect();
        assert_eq!(catalog.depth(), 2);
    }

    #[test]
    fn deep_chain_deletes_and_drops_without_recursing() {
        // Same shape as inserting 0..200_000 in ascending order, built in linear time.
        let mut catalog = MenuCatalog::new();
        for id in (0..200_000).rev() {
            let mut node = Box::new(Node::new(MenuItem::new(id, "x", 1.0)));
            node.right = catalog.root.take();
            catalog.root = Some(node);
            catalog.len += 1;
        }
        assert_eq!(catalog.depth(), 200_000);

        assert_eq!(catalog.delete(MenuItemId(199_999)).map(|i| i.id.0), Some(199_999));
        assert_eq!(catalog.delete(MenuItemId(0)).map(|i| i.id.0), Some(0));
        assert!(catalog.delete(MenuItemId(200_000)).is_none());
        assert_eq!(catalog.len(), 199_998);
        assert_eq!(catalog.iter().last().map(|i| i.id.0), Some(199_998));

        drop(catalog);
    }
}
