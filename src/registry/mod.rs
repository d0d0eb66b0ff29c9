mod error;
mod stats;
mod store;

pub use error::{RegistryError, RegistryResult};
pub use stats::RegistryMetrics;
pub use store::SharedPathTree;
