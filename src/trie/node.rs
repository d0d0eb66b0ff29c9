use super::edges::EdgeIndex;
use crate::types::Order;

/// Terminal record for one registered pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf<V> {
    value: V,
    wildcards: Vec<String>,
    order: Order,
}

impl<V> Leaf<V> {
    pub(crate) fn new(value: V, wildcards: Vec<String>, order: Order) -> Self {
        Self {
            value,
            wildcards,
            order,
        }
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Wildcard names in the order their segments appear in the pattern.
    #[inline]
    pub fn wildcards(&self) -> &[String] {
        &self.wildcards
    }

    /// Registration order; smaller values win ties between a literal and a
    /// wildcard branch.
    #[inline]
    pub fn order(&self) -> Order {
        self.order
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

#[derive(Debug)]
pub struct Node<V> {
    pub(crate) edges: EdgeIndex<V>,
    pub(crate) wildcard: Option<Box<Node<V>>>,
    pub(crate) leaf: Option<Leaf<V>>,
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Self {
            edges: EdgeIndex::default(),
            wildcard: None,
            leaf: None,
        }
    }
}

impl<V> Node<V> {
    #[inline]
    pub fn edges(&self) -> &EdgeIndex<V> {
        &self.edges
    }

    #[inline]
    pub fn wildcard(&self) -> Option<&Node<V>> {
        self.wildcard.as_deref()
    }

    #[inline]
    pub fn leaf(&self) -> Option<&Leaf<V>> {
        self.leaf.as_ref()
    }

    pub(crate) fn wildcard_or_insert(&mut self) -> &mut Node<V> {
        self.wildcard
            .get_or_insert_with(|| Box::new(Node::default()))
            .as_mut()
    }
}
