mod edges;
mod error;
mod insert;
mod lookup;
mod node;
mod traversal;
mod tree;

pub use edges::EdgeIndex;
pub use error::{FindError, FindResult, TreeError, TreeResult};
pub use lookup::Match;
pub use node::{Leaf, Node};
pub use tree::PathTree;
