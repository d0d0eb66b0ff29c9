use pathtree_rs::{RegistryError, RegistryMetrics, SharedPathTree, TreeError};
use std::sync::Arc;
use std::thread;

#[test]
fn registry_when_patterns_added_then_find_returns_owned_results() {
    let registry = SharedPathTree::new();
    registry
        .add("/users/:id", 1u32)
        .expect("pattern should register");

    let (value, expansions) = registry.find("/users/42").expect("pattern should match");
    assert_eq!(value, 1);
    assert_eq!(expansions, vec!["42".to_string()]);
    assert!(registry.find("/posts").is_none());
}

#[test]
fn registry_when_add_called_after_seal_then_returns_error() {
    let registry = SharedPathTree::new();
    registry.add("/once", 1u32).expect("initial add should succeed");
    let snapshot = registry.seal();
    assert_eq!(snapshot.len(), 1);

    let err = registry.add("/twice", 2).expect_err("expected sealed error");
    match err {
        RegistryError::Sealed { path } => assert_eq!(path, "/twice"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(registry.find("/once").map(|(v, _)| v), Some(1));
}

#[test]
fn registry_when_sealed_twice_then_same_snapshot_returned() {
    let registry = SharedPathTree::new();
    registry.add("/a", 'a').expect("pattern should register");

    let first = registry.seal();
    let second = registry.seal();
    assert!(Arc::ptr_eq(&first, &second));
    assert!(registry.is_sealed());
    assert!(registry.snapshot().is_some_and(|s| Arc::ptr_eq(&s, &first)));
}

#[test]
fn registry_when_bulk_entry_fails_then_reports_index_and_keeps_prefix() {
    let registry = SharedPathTree::new();
    let err = registry
        .add_bulk(vec![
            ("/bulk/one".to_string(), 1u32),
            ("/bulk/two".to_string(), 2),
            ("/bulk/one".to_string(), 3),
            ("/bulk/four".to_string(), 4),
        ])
        .expect_err("expected bulk failure");

    match err {
        RegistryError::Bulk { index, source } => {
            assert_eq!(index, 2);
            assert!(matches!(source, TreeError::DuplicatePath { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(registry.len(), 2);
    assert!(registry.find("/bulk/four").is_none());
    assert_eq!(
        registry.metrics(),
        RegistryMetrics {
            registered: 2,
            rejected: 1
        }
    );
}

#[test]
fn registry_when_bulk_succeeds_then_returns_count() {
    let registry = SharedPathTree::new();
    let added = registry
        .add_bulk(vec![
            ("/a".to_string(), 1u32),
            ("/a/:x".to_string(), 2),
            ("/b".to_string(), 3),
        ])
        .expect("bulk insert should succeed");

    assert_eq!(added, 3);
    assert_eq!(registry.find("/a/z").map(|(v, _)| v), Some(2));
}

#[test]
fn registry_when_invalid_path_added_then_tree_error_is_wrapped() {
    let registry: SharedPathTree<u32> = SharedPathTree::new();
    let err = registry.add("nope", 1).expect_err("expected invalid path");

    assert!(matches!(
        err,
        RegistryError::Tree(TreeError::InvalidPath { .. })
    ));
    assert!(registry.is_empty());
    assert_eq!(registry.metrics().rejected, 1);
}

#[test]
fn registry_when_sealed_snapshot_shared_then_threads_resolve_concurrently() {
    let registry = SharedPathTree::new();
    for i in 0..64u32 {
        registry
            .add(&format!("/items/{i}"), i)
            .expect("pattern should register");
    }
    registry.add("/items/:id/detail", 1000).expect("pattern should register");
    let snapshot = registry.seal();

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let snapshot = Arc::clone(&snapshot);
            thread::spawn(move || {
                for i in (worker..64u32).step_by(4) {
                    let path = format!("/items/{i}");
                    let found = snapshot.find(&path).expect("item should match");
                    assert_eq!(*found.value(), i);
                }
                let detail = snapshot.find("/items/7/detail").expect("detail should match");
                assert_eq!(detail.expansions(), ["7"]);
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker should not panic");
    }
}

#[test]
fn registry_when_unsealed_then_concurrent_readers_and_writer_agree() {
    let registry = Arc::new(SharedPathTree::new());
    registry.add("/ready", 0u32).expect("pattern should register");

    let writer = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || {
            for i in 1..32u32 {
                registry
                    .add(&format!("/late/{i}"), i)
                    .expect("pattern should register");
            }
        })
    };
    let reader = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || {
            for _ in 0..32 {
                assert_eq!(registry.find("/ready").map(|(v, _)| v), Some(0));
            }
        })
    };

    writer.join().expect("writer should not panic");
    reader.join().expect("reader should not panic");
    assert_eq!(registry.len(), 32);
}
