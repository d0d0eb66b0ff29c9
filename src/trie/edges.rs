use smallvec::SmallVec;

use super::node::Node;

#[derive(Debug)]
pub(crate) struct Edge<V> {
    pub(crate) name: Box<str>,
    pub(crate) node: Box<Node<V>>,
}

/// Literal children of a node, kept sorted and unique by segment text.
#[derive(Debug)]
pub struct EdgeIndex<V> {
    // path fan-out is usually small; spill to the heap past four children
    edges: SmallVec<[Edge<V>; 4]>,
}

impl<V> Default for EdgeIndex<V> {
    fn default() -> Self {
        Self {
            edges: SmallVec::new(),
        }
    }
}

impl<V> EdgeIndex<V> {
    /// `Ok(index)` of the edge named `name`, or `Err(index)` where it would be
    /// inserted to keep the index sorted.
    #[inline]
    pub fn search(&self, name: &str) -> Result<usize, usize> {
        self.edges
            .binary_search_by(|edge| (*edge.name).cmp(name))
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Node<V>> {
        self.search(name)
            .ok()
            .map(|idx| self.edges[idx].node.as_ref())
    }

    pub(crate) fn get_or_insert(&mut self, name: &str) -> &mut Node<V> {
        let idx = match self.search(name) {
            Ok(idx) => idx,
            Err(idx) => {
                self.edges.insert(
                    idx,
                    Edge {
                        name: name.into(),
                        node: Box::new(Node::default()),
                    },
                );
                idx
            }
        };
        self.edges[idx].node.as_mut()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.edges.iter().map(|edge| &*edge.name)
    }

    pub(crate) fn nodes(&self) -> impl Iterator<Item = &Node<V>> {
        self.edges.iter().map(|edge| edge.node.as_ref())
    }
}
