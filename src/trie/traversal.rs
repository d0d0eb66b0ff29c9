use super::node::Node;

const TRAVERSAL_STACK_CAPACITY: usize = 64;

/// Depth-first traversal over the subtree rooted at `root`.
/// Uses an explicit stack so deep patterns cannot exhaust the call stack.
#[inline]
pub(super) fn traverse<'t, V, F>(root: &'t Node<V>, mut action: F)
where
    F: FnMut(&'t Node<V>),
{
    let mut stack: Vec<&'t Node<V>> = Vec::with_capacity(TRAVERSAL_STACK_CAPACITY);
    stack.push(root);

    while let Some(node) = stack.pop() {
        action(node);

        for child in node.edges.nodes() {
            stack.push(child);
        }
        if let Some(wildcard) = node.wildcard.as_deref() {
            stack.push(wildcard);
        }
    }
}
