//! Per-field value cleaning for address tags.
//!
//! Cleaners are selected by the residual tag key (`street`, `postcode`, `city`,
//! `phone`) through a [`CleanerRegistry`]; keys without a cleaner pass through.

use once_cell::sync::Lazy;

pub mod cleaners;
pub mod registry;

pub use cleaners::{
    clean_city, clean_phone, clean_postal_code, clean_street, ValueCleaner, PROBLEM_CHARS,
};
pub use registry::CleanerRegistry;

/// Process-wide registry with the built-in cleaners; built once, never mutated
static DEFAULT_REGISTRY: Lazy<CleanerRegistry> = Lazy::new(CleanerRegistry::new);

/// The shared built-in registry
pub fn default_registry() -> &'static CleanerRegistry {
    &DEFAULT_REGISTRY
}

/// Clean `value` with the built-in cleaner for `key`, or return it unchanged
pub fn clean_value(key: &str, value: &str) -> String {
    DEFAULT_REGISTRY.clean(key, value)
}
