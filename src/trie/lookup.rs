use hashbrown::HashMap as FastHashMap;

use super::node::{Leaf, Node};
use super::{FindError, FindResult, PathTree};
use crate::path::{has_leading_slash, split_path};
use crate::types::{Expansions, Segments};

/// A resolved lookup: the winning leaf and the segments its wildcards captured.
#[derive(Debug)]
pub struct Match<'t, 'k, V> {
    leaf: &'t Leaf<V>,
    expansions: Expansions<'k>,
}

impl<'t, 'k, V> Match<'t, 'k, V> {
    #[inline]
    pub fn leaf(&self) -> &'t Leaf<V> {
        self.leaf
    }

    #[inline]
    pub fn value(&self) -> &'t V {
        self.leaf.value()
    }

    /// Captured segments, positionally aligned with `leaf().wildcards()`.
    #[inline]
    pub fn expansions(&self) -> &[&'k str] {
        &self.expansions
    }

    /// Wildcard name to captured segment. A name repeated in one pattern keeps
    /// its last capture.
    pub fn params(&self) -> FastHashMap<&'t str, &'k str> {
        self.leaf
            .wildcards()
            .iter()
            .map(String::as_str)
            .zip(self.expansions.iter().copied())
            .collect()
    }

    pub fn into_parts(self) -> (&'t Leaf<V>, Expansions<'k>) {
        (self.leaf, self.expansions)
    }
}

impl<V> PathTree<V> {
    /// Resolves `key` to the registered pattern that wins for it.
    ///
    /// A malformed key (empty, or not starting with `/`) and a genuine miss
    /// both return `None`; use [`PathTree::try_find`] to tell them apart.
    ///
    /// When a literal and a wildcard branch both reach a leaf, the leaf that
    /// was registered first wins, whichever branch it sits on.
    #[tracing::instrument(level = "trace", skip(self, key), fields(path_len = key.len() as u64))]
    pub fn find<'k>(&self, key: &'k str) -> Option<Match<'_, 'k, V>> {
        if !has_leading_slash(key) {
            return None;
        }
        self.resolve(&split_path(key))
    }

    pub fn try_find<'k>(&self, key: &'k str) -> FindResult<Match<'_, 'k, V>> {
        if !has_leading_slash(key) {
            return Err(FindError::MalformedPath {
                path: key.to_string(),
            });
        }

        let segments = split_path(key);
        if let Some(limit) = self.options.exceeds_segment_limit(segments.len()) {
            return Err(FindError::TooManySegments {
                path: key.to_string(),
                segments: segments.len(),
                limit,
            });
        }

        self.resolve(&segments).ok_or_else(|| FindError::NotFound {
            path: key.to_string(),
        })
    }

    fn resolve<'k>(&self, segments: &Segments<'k>) -> Option<Match<'_, 'k, V>> {
        if self
            .options
            .exceeds_segment_limit(segments.len())
            .is_some()
        {
            return None;
        }

        let mut scratch = Expansions::new();
        find_from(&self.root, segments, &mut scratch)
            .map(|(leaf, expansions)| Match { leaf, expansions })
    }
}

fn find_from<'t, 'k, V>(
    node: &'t Node<V>,
    segments: &[&'k str],
    scratch: &mut Expansions<'k>,
) -> Option<(&'t Leaf<V>, Expansions<'k>)> {
    let Some((&segment, rest)) = segments.split_first() else {
        return node.leaf().map(|leaf| (leaf, scratch.clone()));
    };

    let literal = node
        .edges
        .get(segment)
        .and_then(|child| find_from(child, rest, scratch));

    let Some(wildcard) = node.wildcard() else {
        return literal;
    };

    scratch.push(segment);
    let captured = find_from(wildcard, rest, scratch);
    scratch.pop();

    match (literal, captured) {
        (Some(literal), Some(captured)) if literal.0.order() > captured.0.order() => Some(captured),
        (None, Some(captured)) => Some(captured),
        (literal, _) => literal,
    }
}
