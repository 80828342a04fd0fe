use std::collections::HashMap;

use super::cleaners::{
    CityCleaner, MetricsCleaner, PhoneCleaner, PostalCodeCleaner, StreetCleaner, ValueCleaner,
};

/// Registry mapping residual tag keys to value cleaners
pub struct CleanerRegistry {
    cleaners: HashMap<String, Box<dyn ValueCleaner>>,
}

impl CleanerRegistry {
    /// Create a new cleaner registry with the built-in address cleaners
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register(Box::new(MetricsCleaner::new(StreetCleaner::new())));
        registry.register(Box::new(MetricsCleaner::new(PostalCodeCleaner::new())));
        registry.register(Box::new(MetricsCleaner::new(CityCleaner::new())));
        registry.register(Box::new(MetricsCleaner::new(PhoneCleaner::new())));

        registry
    }

    /// A registry with no cleaners; every value passes through unchanged
    pub fn empty() -> Self {
        Self {
            cleaners: HashMap::new(),
        }
    }

    /// Register a cleaner under the key it reports, replacing any previous one
    pub fn register(&mut self, cleaner: Box<dyn ValueCleaner>) {
        self.cleaners.insert(cleaner.key().to_string(), cleaner);
    }

    /// Get the cleaner for a residual tag key
    pub fn get_cleaner(&self, key: &str) -> Option<&dyn ValueCleaner> {
        self.cleaners.get(key).map(|c| c.as_ref())
    }

    /// Clean a value with the cleaner registered for `key`; unknown keys are identity
    pub fn clean(&self, key: &str, value: &str) -> String {
        match self.get_cleaner(key) {
            Some(cleaner) => cleaner.clean(value),
            None => value.to_string(),
        }
    }

    /// List all registered keys
    pub fn list_keys(&self) -> Vec<&str> {
        self.cleaners.keys().map(|k| k.as_str()).collect()
    }
}

impl Default for CleanerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
