mod split;

pub use split::{has_leading_slash, split_path, wildcard_name};
