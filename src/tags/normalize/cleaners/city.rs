use once_cell::sync::Lazy;
use regex::Regex;

use super::base::ValueCleaner;

/// City names recognised in the Jakarta metropolitan area
pub const CITY_TOKENS: [&str; 6] = ["Bekasi", "Jakarta", "Tangerang", "Bogor", "Depok", "Banten"];

/// English administrative names mapped to their Indonesian form
pub const CITY_TRANSLATION: [(&str, &str); 5] = [
    ("south jakarta", "Jakarta Selatan"),
    ("north jakarta", "Jakarta Utara"),
    ("west jakarta", "Jakarta Barat"),
    ("east jakarta", "Jakarta Timur"),
    ("central jakarta", "Jakarta Pusat"),
];

/// Whole-value match: `City`, `City Word` or `Word City`
static CITY: Lazy<Regex> = Lazy::new(|| {
    let token = format!("(?i:{})", CITY_TOKENS.join("|"));
    let pattern = format!(r"^(?:{token}|{token}\s[a-zA-Z]+|[a-zA-Z]+\s{token})$");
    Regex::new(&pattern).expect("valid city pattern")
});

/// Normalize a city value.
///
/// Only values that are entirely a recognised city name, optionally with one
/// extra word before or after it, are touched; English compass-direction names
/// for Jakarta's districts are translated. Anything else passes through.
pub fn clean_city(raw: &str) -> String {
    if !CITY.is_match(raw) {
        return raw.to_string();
    }

    let lowered = raw.to_lowercase();
    CITY_TRANSLATION
        .iter()
        .find(|(english, _)| *english == lowered)
        .map(|(_, indonesian)| indonesian.to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Cleaner for `city` tags
pub struct CityCleaner;

impl CityCleaner {
    pub fn new() -> Self {
        Self
    }
}

impl ValueCleaner for CityCleaner {
    fn clean(&self, raw: &str) -> String {
        clean_city(raw)
    }

    fn key(&self) -> &str {
        "city"
    }

    fn name(&self) -> &str {
        "City Name Cleaner"
    }
}

impl Default for CityCleaner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compass_names_are_translated() {
        assert_eq!(clean_city("South Jakarta"), "Jakarta Selatan");
        assert_eq!(clean_city("north jakarta"), "Jakarta Utara");
        assert_eq!(clean_city("West Jakarta"), "Jakarta Barat");
        assert_eq!(clean_city("East Jakarta"), "Jakarta Timur");
        assert_eq!(clean_city("Central Jakarta"), "Jakarta Pusat");
        assert_eq!(clean_city("SOUTH JAKARTA"), "Jakarta Selatan");
    }

    #[test]
    fn test_recognised_forms_are_kept() {
        assert_eq!(clean_city("Jakarta"), "Jakarta");
        assert_eq!(clean_city("bekasi"), "bekasi");
        assert_eq!(clean_city("Jakarta Selatan"), "Jakarta Selatan");
        assert_eq!(clean_city("Kota Bekasi"), "Kota Bekasi");
        assert_eq!(clean_city("Tangerang Selatan"), "Tangerang Selatan");
    }

    #[test]
    fn test_partial_matches_pass_through() {
        assert_eq!(clean_city("Random Place"), "Random Place");
        assert_eq!(clean_city("Jakarta Selatan, DKI"), "Jakarta Selatan, DKI");
        assert_eq!(clean_city("Kota Tangerang Selatan"), "Kota Tangerang Selatan");
        assert_eq!(clean_city("South  Jakarta"), "South  Jakarta");
        assert_eq!(clean_city(""), "");
    }

    #[test]
    fn test_clean_city_is_idempotent() {
        for raw in [
            "South Jakarta",
            "Central Jakarta",
            "Kota Bogor",
            "Depok",
            "Random Place",
        ] {
            let once = clean_city(raw);
            assert_eq!(clean_city(&once), once, "not idempotent for {raw}");
        }
    }
}
