use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};

use super::{RegistryError, RegistryMetrics, RegistryResult};
use crate::options::TreeOptions;
use crate::trie::{PathTree, TreeError};

#[derive(Debug)]
struct RegistryState<V> {
    tree: PathTree<V>,
    metrics: RegistryMetrics,
}

/// A [`PathTree`] behind a reader/writer lock, for callers that keep
/// registering patterns while lookups are already being served.
///
/// `seal` moves the tree into a shared snapshot; later lookups read the
/// snapshot without taking the lock and later adds are rejected.
#[derive(Debug)]
pub struct SharedPathTree<V> {
    inner: RwLock<RegistryState<V>>,
    sealed: OnceLock<Arc<PathTree<V>>>,
}

impl<V> Default for SharedPathTree<V> {
    fn default() -> Self {
        Self::from_tree(PathTree::default())
    }
}

impl<V> SharedPathTree<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TreeOptions) -> RegistryResult<Self> {
        Ok(Self::from_tree(PathTree::with_options(options)?))
    }

    fn from_tree(tree: PathTree<V>) -> Self {
        Self {
            inner: RwLock::new(RegistryState {
                tree,
                metrics: RegistryMetrics::default(),
            }),
            sealed: OnceLock::new(),
        }
    }

    pub fn add(&self, key: &str, value: V) -> RegistryResult<()> {
        let mut guard = self.inner.write();

        if self.sealed.get().is_some() {
            return Err(RegistryError::Sealed {
                path: key.to_string(),
            });
        }

        record(&mut guard, key, value).map_err(RegistryError::from)
    }

    /// Adds `entries` in iteration order under one write lock.
    ///
    /// Stops at the first failure. Entries before it stay registered since the
    /// tree cannot drop a pattern once added.
    pub fn add_bulk<I>(&self, entries: I) -> RegistryResult<usize>
    where
        I: IntoIterator<Item = (String, V)>,
    {
        let mut guard = self.inner.write();

        if self.sealed.get().is_some() {
            let path = entries
                .into_iter()
                .next()
                .map(|(key, _)| key)
                .unwrap_or_default();
            return Err(RegistryError::Sealed { path });
        }

        let mut added = 0usize;
        for (index, (key, value)) in entries.into_iter().enumerate() {
            record(&mut guard, &key, value)
                .map_err(|source| RegistryError::Bulk { index, source })?;
            added += 1;
        }
        Ok(added)
    }

    /// Freezes the tree and returns the shared snapshot. Calling it again
    /// returns the same snapshot.
    pub fn seal(&self) -> Arc<PathTree<V>> {
        let mut guard = self.inner.write();

        if let Some(snapshot) = self.sealed.get() {
            return snapshot.clone();
        }

        let options = guard.tree.options().clone();
        let tree = std::mem::replace(
            &mut guard.tree,
            PathTree {
                options,
                ..PathTree::default()
            },
        );
        let snapshot = Arc::new(tree);
        let _ = self.sealed.set(snapshot.clone());

        tracing::event!(tracing::Level::DEBUG, operation = "seal", patterns = snapshot.len() as u64);
        snapshot
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed.get().is_some()
    }

    pub fn snapshot(&self) -> Option<Arc<PathTree<V>>> {
        self.sealed.get().cloned()
    }

    pub fn len(&self) -> usize {
        match self.sealed.get() {
            Some(snapshot) => snapshot.len(),
            None => self.inner.read().tree.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn metrics(&self) -> RegistryMetrics {
        self.inner.read().metrics.clone()
    }
}

impl<V: Clone> SharedPathTree<V> {
    /// Owned counterpart of [`PathTree::find`]: the winning value and its
    /// captured segments.
    pub fn find(&self, key: &str) -> Option<(V, Vec<String>)> {
        if let Some(snapshot) = self.sealed.get() {
            return resolve_owned(snapshot, key);
        }

        let guard = self.inner.read();
        // seal may have swapped the tree out while we waited on the lock
        match self.sealed.get() {
            Some(snapshot) => resolve_owned(snapshot, key),
            None => resolve_owned(&guard.tree, key),
        }
    }
}

fn record<V>(state: &mut RegistryState<V>, key: &str, value: V) -> Result<(), TreeError> {
    match state.tree.add(key, value) {
        Ok(()) => {
            state.metrics.record_insert();
            Ok(())
        }
        Err(err) => {
            state.metrics.record_reject();
            Err(err)
        }
    }
}

fn resolve_owned<V: Clone>(tree: &PathTree<V>, key: &str) -> Option<(V, Vec<String>)> {
    tree.find(key).map(|found| {
        let expansions = found
            .expansions()
            .iter()
            .map(|segment| segment.to_string())
            .collect();
        (found.value().clone(), expansions)
    })
}
