use super::node::Leaf;
use super::{PathTree, TreeError, TreeResult};
use crate::path::{has_leading_slash, split_path, wildcard_name};
use crate::types::Segments;

impl<V> PathTree<V> {
    /// Registers `key` with `value`.
    ///
    /// `key` must begin with `/`. A segment starting with `:` is a wildcard
    /// named by the rest of the segment. Registering a pattern that ends on a
    /// node which already holds a leaf fails with [`TreeError::DuplicatePath`];
    /// the attempt still consumes an order value.
    #[tracing::instrument(level = "trace", skip(self, key, value), fields(path_len = key.len() as u64))]
    pub fn add(&mut self, key: &str, value: V) -> TreeResult<()> {
        if !has_leading_slash(key) {
            return Err(TreeError::InvalidPath {
                path: key.to_string(),
            });
        }

        let segments = split_path(key);
        self.check_segments(key, &segments)?;

        self.next_order += 1;
        let order = self.next_order;

        let mut wildcards: Vec<String> = Vec::new();
        let mut current = &mut self.root;
        for segment in segments.iter() {
            current = match wildcard_name(segment) {
                Some(name) => {
                    wildcards.push(name.to_string());
                    current.wildcard_or_insert()
                }
                None => current.edges.get_or_insert(segment),
            };
        }

        if current.leaf.is_some() {
            tracing::event!(tracing::Level::DEBUG, operation = "add", path = %key, order, "duplicate path");
            return Err(TreeError::DuplicatePath {
                path: key.to_string(),
            });
        }

        current.leaf = Some(Leaf::new(value, wildcards, order));
        self.len += 1;
        tracing::event!(tracing::Level::TRACE, operation = "add", path = %key, order, segments = segments.len() as u64);
        Ok(())
    }

    fn check_segments(&self, key: &str, segments: &Segments<'_>) -> TreeResult<()> {
        if let Some(limit) = self.options.exceeds_segment_limit(segments.len()) {
            return Err(TreeError::TooManySegments {
                path: key.to_string(),
                segments: segments.len(),
                limit,
            });
        }

        if !self.options.allow_empty_wildcard_name
            && let Some(index) = segments.iter().position(|s| *s == ":")
        {
            return Err(TreeError::EmptyWildcardName {
                path: key.to_string(),
                index,
            });
        }
        Ok(())
    }
}
