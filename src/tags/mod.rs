use serde::{Deserialize, Serialize};

pub mod key;
pub mod normalize;

pub use key::{is_namespaced, split_key};
pub use normalize::{clean_value, CleanerRegistry};

use normalize::cleaners::is_problem_char;

/// A cleaned `k`/`v` pair attached to a node or way, in table column order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Id of the owning node or way, copied verbatim
    pub id: String,
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub tag_type: String,
    /// Whether cleaning changed the raw value; not a table column
    #[serde(skip)]
    pub rewritten: bool,
}

impl Tag {
    /// Build a tag from a raw key/value pair: split the key, then clean the value
    /// with the cleaner registered for the residual key.
    pub fn new(parent_id: &str, raw_key: &str, raw_value: &str, registry: &CleanerRegistry) -> Self {
        let (tag_type, key) = split_key(raw_key);
        let value = registry.clean(&key, raw_value);
        let rewritten = value != raw_value;

        Self {
            id: parent_id.to_string(),
            key,
            value,
            tag_type,
            rewritten,
        }
    }
}

/// Whether a raw key contains characters that make it unusable as a column value
pub fn has_problem_chars(raw_key: &str) -> bool {
    raw_key.chars().any(is_problem_char)
}
