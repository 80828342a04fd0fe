//! Tag audit: a survey of keys and address values across a document.
//!
//! [`TagAudit`] is an accumulator owned by whoever drives the scan; nothing is
//! kept in process-wide state, so several audits can run side by side.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::BufRead;
use tracing::info;

use crate::error::Result;
use crate::osm::{OsmReader, RawElement};
use crate::tags::{split_key, CleanerRegistry};

/// Last whitespace-delimited word of a street name, with an optional trailing dot
static STREET_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\S+\.?$").expect("valid street type pattern"));

/// Street type of a raw street value, if it has one
pub fn street_type(street: &str) -> Option<&str> {
    STREET_TYPE.find(street).map(|m| m.as_str())
}

/// How often a cleaner saw and rewrote values
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CleanerChanges {
    pub seen: usize,
    pub changed: usize,
    /// First few `(raw, cleaned)` rewrites, for eyeballing
    pub examples: Vec<(String, String)>,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct TagAudit {
    pub elements: usize,
    pub tags: usize,
    /// namespace -> residual key -> occurrences
    pub keys: BTreeMap<String, BTreeMap<String, usize>>,
    /// Street type of raw street values -> occurrences
    pub street_types: BTreeMap<String, usize>,
    /// Length of raw postcode values -> occurrences
    pub postcode_lengths: BTreeMap<usize, usize>,
    /// Raw city values -> occurrences
    pub city_values: BTreeMap<String, usize>,
    /// Raw keys mentioning `phone` -> occurrences
    pub phone_keys: BTreeMap<String, usize>,
    /// Cleaner key -> change statistics
    pub cleaners: BTreeMap<String, CleanerChanges>,
}

impl TagAudit {
    pub const MAX_EXAMPLES: usize = 10;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe_element(&mut self, element: &RawElement, registry: &CleanerRegistry) {
        self.elements += 1;
        for (raw_key, raw_value) in &element.tags {
            self.observe(raw_key, raw_value, registry);
        }
    }

    /// Record one raw tag
    pub fn observe(&mut self, raw_key: &str, raw_value: &str, registry: &CleanerRegistry) {
        self.tags += 1;

        let (namespace, key) = split_key(raw_key);
        if raw_key.contains("phone") {
            *self.phone_keys.entry(raw_key.to_string()).or_default() += 1;
        }
        match key.as_str() {
            "street" => {
                if let Some(street_type) = street_type(raw_value) {
                    *self.street_types.entry(street_type.to_string()).or_default() += 1;
                }
            }
            "postcode" => {
                *self
                    .postcode_lengths
                    .entry(raw_value.chars().count())
                    .or_default() += 1;
            }
            "city" => {
                *self.city_values.entry(raw_value.to_string()).or_default() += 1;
            }
            _ => {}
        }

        if registry.get_cleaner(&key).is_some() {
            let cleaned = registry.clean(&key, raw_value);
            let changes = self.cleaners.entry(key.clone()).or_default();
            changes.seen += 1;
            if cleaned != raw_value {
                changes.changed += 1;
                if changes.examples.len() < Self::MAX_EXAMPLES {
                    changes.examples.push((raw_value.to_string(), cleaned));
                }
            }
        }

        *self
            .keys
            .entry(namespace)
            .or_default()
            .entry(key)
            .or_default() += 1;
    }

    /// Pretty JSON summary of everything observed so far
    pub fn report(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Audit every node and way a reader produces
pub fn audit_document<R: BufRead>(
    mut reader: OsmReader<R>,
    registry: &CleanerRegistry,
) -> Result<TagAudit> {
    let mut audit = TagAudit::new();
    while let Some(element) = reader.next_element()? {
        audit.observe_element(&element, registry);
    }
    info!(
        elements = audit.elements,
        tags = audit.tags,
        "Audit finished"
    );
    Ok(audit)
}
