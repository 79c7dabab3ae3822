//! Glob matching for cache keys.
//!
//! Only `*` is special; it matches any run of characters, including none.

/// Checks if a cache key matches a glob pattern.
///
/// # Examples
///
/// ```
/// use craftcatalog_core::cache::pattern_matches;
///
/// assert!(pattern_matches("product:7:*", "product:7:images:true:read_only:false"));
/// assert!(pattern_matches("products:*:images:true", "products:public:images:true"));
/// assert!(!pattern_matches("product:7:*", "product:70:images:true:read_only:false"));
/// ```
pub fn pattern_matches(pattern: &str, key: &str) -> bool {
    let mut segments = pattern.split('*');

    // The text before the first wildcard is anchored at the start.
    let head = segments.next().unwrap_or_default();
    let Some(mut rest) = key.strip_prefix(head) else {
        return false;
    };

    let tail: Vec<&str> = segments.collect();
    let Some((last, middle)) = tail.split_last() else {
        // No wildcard at all.
        return rest.is_empty();
    };

    for segment in middle {
        match rest.find(segment) {
            Some(pos) => rest = &rest[pos + segment.len()..],
            None => return false,
        }
    }

    // The text after the last wildcard is anchored at the end.
    rest.ends_with(last)
}
