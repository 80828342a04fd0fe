use once_cell::sync::Lazy;
use regex::Regex;

use super::base::ValueCleaner;
use crate::constants::POSTAL_CODE_SENTINEL;

static POSTAL_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{5}").expect("valid postal code pattern"));

/// Extract the leftmost five-digit run, or the `00000` sentinel when there is none.
/// No range check is made against real postal codes.
pub fn clean_postal_code(raw: &str) -> String {
    POSTAL_CODE
        .find(raw)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| POSTAL_CODE_SENTINEL.to_string())
}

/// Cleaner for `postcode` tags
pub struct PostalCodeCleaner;

impl PostalCodeCleaner {
    pub fn new() -> Self {
        Self
    }
}

impl ValueCleaner for PostalCodeCleaner {
    fn clean(&self, raw: &str) -> String {
        clean_postal_code(raw)
    }

    fn key(&self) -> &str {
        "postcode"
    }

    fn name(&self) -> &str {
        "Postal Code Cleaner"
    }
}

impl Default for PostalCodeCleaner {
    fn default() -> Self {
        Self::new()
    }
}
