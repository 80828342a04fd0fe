use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::DEFAULT_TAG_TYPE;

/// `namespace:key` prefix; only the start is anchored, so `addr:street:name` matches too
static LOWER_COLON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z]|_)+:([a-z]|_)+").expect("valid namespace pattern"));

/// Whether a raw tag key carries a namespace prefix such as `addr:`
pub fn is_namespaced(raw_key: &str) -> bool {
    LOWER_COLON.is_match(raw_key)
}

/// Split a raw tag key into `(namespace, key)`.
///
/// Keys without a lowercase `namespace:` prefix fall into the `regular` namespace
/// and keep their raw key. For keys with more than two segments everything after
/// the first colon is kept as the key, so `addr:street:name` becomes
/// `("addr", "street:name")`.
pub fn split_key(raw_key: &str) -> (String, String) {
    if !is_namespaced(raw_key) {
        return (DEFAULT_TAG_TYPE.to_string(), raw_key.to_string());
    }

    match raw_key.split_once(':') {
        Some((namespace, key)) => (namespace.to_string(), key.to_string()),
        None => (DEFAULT_TAG_TYPE.to_string(), raw_key.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_segment_key_is_split() {
        assert_eq!(
            split_key("addr:street"),
            ("addr".to_string(), "street".to_string())
        );
    }

    #[test]
    fn test_plain_key_is_regular() {
        assert_eq!(
            split_key("name"),
            ("regular".to_string(), "name".to_string())
        );
    }

    #[test]
    fn test_multi_segment_key_keeps_remaining_segments() {
        assert_eq!(
            split_key("addr:street:name"),
            ("addr".to_string(), "street:name".to_string())
        );
        assert_eq!(
            split_key("building:levels:underground"),
            ("building".to_string(), "levels:underground".to_string())
        );
    }

    #[test]
    fn test_underscores_are_allowed_in_both_segments() {
        assert_eq!(
            split_key("chicago:building_id"),
            ("chicago".to_string(), "building_id".to_string())
        );
        assert_eq!(
            split_key("_x:_y"),
            ("_x".to_string(), "_y".to_string())
        );
    }

    #[test]
    fn test_non_matching_colon_keys_stay_regular() {
        // uppercase namespace
        assert_eq!(
            split_key("Addr:street"),
            ("regular".to_string(), "Addr:street".to_string())
        );
        // digit right after the colon
        assert_eq!(
            split_key("name:1"),
            ("regular".to_string(), "name:1".to_string())
        );
        // empty namespace
        assert_eq!(
            split_key(":street"),
            ("regular".to_string(), ":street".to_string())
        );
        assert_eq!(split_key(""), ("regular".to_string(), String::new()));
    }

    #[test]
    fn test_trailing_content_does_not_block_match() {
        // Only the prefix has to match
        assert_eq!(
            split_key("name:en-US"),
            ("name".to_string(), "en-US".to_string())
        );
        assert_eq!(
            split_key("contact:phone2"),
            ("contact".to_string(), "phone2".to_string())
        );
    }

    #[test]
    fn test_namespace_detection() {
        assert!(is_namespaced("addr:city"));
        assert!(!is_namespaced("highway"));
        assert!(!is_namespaced("ISO3166-1:alpha2"));
    }
}
