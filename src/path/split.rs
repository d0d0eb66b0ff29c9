use crate::types::Segments;

/// Both `add` and `find` refuse keys that do not start at the root.
#[inline]
pub fn has_leading_slash(key: &str) -> bool {
    key.as_bytes().first() == Some(&b'/')
}

/// Splits `key` on `/`, dropping one empty leading and one empty trailing
/// element. Empty elements in between (`/a//b`) are kept as literal segments.
#[inline]
#[tracing::instrument(level = "trace", skip(key), fields(path_len = key.len() as u64))]
pub fn split_path(key: &str) -> Segments<'_> {
    let body = key.strip_prefix('/').unwrap_or(key);
    let mut segments = Segments::new();

    let mut start = 0usize;
    for idx in memchr::memchr_iter(b'/', body.as_bytes()) {
        segments.push(&body[start..idx]);
        start = idx + 1;
    }
    segments.push(&body[start..]);

    if segments.last() == Some(&"") {
        segments.pop();
    }
    segments
}

/// Returns the wildcard name when `segment` starts with `:`.
#[inline]
pub fn wildcard_name(segment: &str) -> Option<&str> {
    segment.strip_prefix(':')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(key: &str) -> Vec<&str> {
        split_path(key).into_iter().collect()
    }

    #[test]
    fn root_has_no_segments() {
        assert!(split("/").is_empty());
    }

    #[test]
    fn drops_single_trailing_slash() {
        assert_eq!(split("/a/b/"), vec!["a", "b"]);
        assert_eq!(split("/a/b"), vec!["a", "b"]);
    }

    #[test]
    fn keeps_inner_empty_segments() {
        assert_eq!(split("/a//b"), vec!["a", "", "b"]);
    }

    #[test]
    fn drops_only_one_trailing_empty_segment() {
        assert_eq!(split("/a//"), vec!["a", ""]);
        assert_eq!(split("//"), vec![""]);
    }

    #[test]
    fn keeps_wildcard_markers_verbatim() {
        assert_eq!(split("/users/:id/posts"), vec!["users", ":id", "posts"]);
    }

    #[test]
    fn splits_multibyte_segments() {
        assert_eq!(split("/こんにちは/世界"), vec!["こんにちは", "世界"]);
    }

    #[test]
    fn leading_slash_detection() {
        assert!(has_leading_slash("/"));
        assert!(!has_leading_slash(""));
        assert!(!has_leading_slash("a/b"));
    }

    #[test]
    fn wildcard_name_strips_colon() {
        assert_eq!(wildcard_name(":id"), Some("id"));
        assert_eq!(wildcard_name(":"), Some(""));
        assert_eq!(wildcard_name("id"), None);
        assert_eq!(wildcard_name(""), None);
    }
}
