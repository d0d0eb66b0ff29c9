//! Segment trie for slash-delimited path patterns.
//!
//! Patterns are registered with [`PathTree::add`]; a segment starting with `:`
//! is a named wildcard matching any single segment. [`PathTree::find`] resolves
//! a concrete path to the winning pattern and the segments its wildcards
//! captured.
//!
//! ```
//! use pathtree_rs::PathTree;
//!
//! let mut tree = PathTree::new();
//! tree.add("/users/:id", "user").unwrap();
//! tree.add("/users/me", "me").unwrap();
//!
//! // `/users/:id` was registered first, so it wins over the literal.
//! let found = tree.find("/users/me").unwrap();
//! assert_eq!(*found.value(), "user");
//! assert_eq!(found.expansions(), ["me"]);
//! ```

pub mod options;
pub mod path;
pub mod registry;
pub mod trie;
pub mod types;

pub use options::{OptionsError, TreeOptions, TreeOptionsBuilder};
pub use registry::{RegistryError, RegistryMetrics, RegistryResult, SharedPathTree};
pub use trie::{EdgeIndex, FindError, FindResult, Leaf, Match, Node, PathTree, TreeError, TreeResult};
