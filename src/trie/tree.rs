use super::node::{Leaf, Node};
use super::{TreeResult, traversal};
use crate::options::TreeOptions;
use crate::types::Order;

/// Segment trie mapping slash-delimited patterns to values.
///
/// The tree is append-only. It has no internal synchronization: build it with
/// `add` from one thread, then share `&PathTree` for concurrent `find` calls.
/// See [`crate::SharedPathTree`] for a locked build/serve wrapper.
#[derive(Debug)]
pub struct PathTree<V> {
    pub(crate) root: Node<V>,
    pub(crate) options: TreeOptions,
    // last order handed out; consumed by every add that passes the slash check
    pub(crate) next_order: Order,
    pub(crate) len: usize,
}

impl<V> Default for PathTree<V> {
    fn default() -> Self {
        Self {
            root: Node::default(),
            options: TreeOptions::default(),
            next_order: 0,
            len: 0,
        }
    }
}

impl<V> PathTree<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TreeOptions) -> TreeResult<Self> {
        options.validate()?;
        Ok(Self {
            options,
            ..Self::default()
        })
    }

    #[inline]
    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    #[inline]
    pub fn root(&self) -> &Node<V> {
        &self.root
    }

    /// Number of registered patterns.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All leaves, in registration order.
    pub fn leaves(&self) -> Vec<&Leaf<V>> {
        let mut leaves = Vec::with_capacity(self.len);
        traversal::traverse(&self.root, |node| {
            if let Some(leaf) = node.leaf() {
                leaves.push(leaf);
            }
        });
        leaves.sort_unstable_by_key(|leaf| leaf.order());
        leaves
    }

    pub fn node_count(&self) -> usize {
        let mut count = 0usize;
        traversal::traverse(&self.root, |_| count += 1);
        count
    }
}
