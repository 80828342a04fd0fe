use once_cell::sync::Lazy;
use regex::Regex;

use super::base::ValueCleaner;

/// Canonical street prefix
pub const STREET_PREFIX: &str = "Jalan ";

/// `Jl.`, `jl `, `Jln.`, `JL.`, `JI.` and lowercase `jalan`
static ADDRESS_ABBRV: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(j|J)(l|ln|I|L|LN)(\s|\.)|jalan").expect("valid street prefix pattern")
});

static COMMA_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s|,").expect("valid comma pattern"));

/// Canonicalize an Indonesian street name.
///
/// Abbreviated prefixes are expanded to `Jalan `, one pass of double-space
/// collapsing runs, non-ASCII characters are dropped and the prefix is added when
/// missing. When the value holds a comma-separated address, the last part naming
/// a `Jalan` is kept.
pub fn clean_street(raw: &str) -> String {
    let expanded = ADDRESS_ABBRV.replace_all(raw, STREET_PREFIX);
    // Single pass: three spaces still leave two
    let collapsed = expanded.replace("  ", " ");
    let mut street: String = collapsed.chars().filter(char::is_ascii).collect();

    if !street.contains("Jalan") {
        street.insert_str(0, STREET_PREFIX);
    }

    let kept = COMMA_SEPARATOR
        .split(&street)
        .filter(|part| part.contains("Jalan"))
        .last()
        .map(str::to_string);

    kept.unwrap_or(street)
}

/// Cleaner for `street` tags
pub struct StreetCleaner;

impl StreetCleaner {
    pub fn new() -> Self {
        Self
    }
}

impl ValueCleaner for StreetCleaner {
    fn clean(&self, raw: &str) -> String {
        clean_street(raw)
    }

    fn key(&self) -> &str {
        "street"
    }

    fn name(&self) -> &str {
        "Street Name Cleaner"
    }
}

impl Default for StreetCleaner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviated_prefixes_are_expanded() {
        assert_eq!(clean_street("Jl. Sudirman No. 5"), "Jalan Sudirman No. 5");
        assert_eq!(clean_street("Jln. Thamrin"), "Jalan Thamrin");
        assert_eq!(clean_street("jl Kebon Sirih"), "Jalan Kebon Sirih");
        assert_eq!(clean_street("JL. Gatot Subroto"), "Jalan Gatot Subroto");
        assert_eq!(clean_street("JI. Merdeka"), "Jalan Merdeka");
        assert_eq!(clean_street("JLN Casablanca"), "Jalan Casablanca");
    }

    #[test]
    fn test_lowercase_jalan_is_capitalized() {
        assert_eq!(clean_street("jalan Melawai"), "Jalan Melawai");
    }

    #[test]
    fn test_missing_prefix_is_added() {
        assert_eq!(clean_street("Sudirman"), "Jalan Sudirman");
        assert_eq!(clean_street("Jalan Sudirman"), "Jalan Sudirman");
    }

    #[test]
    fn test_empty_input_yields_bare_prefix() {
        assert_eq!(clean_street(""), "Jalan ");
    }

    #[test]
    fn test_double_space_collapse_is_single_pass() {
        assert_eq!(clean_street("Jalan  Sudirman"), "Jalan Sudirman");
        // three spaces leave two behind
        assert_eq!(clean_street("Jalan   Sudirman"), "Jalan  Sudirman");
    }

    #[test]
    fn test_non_ascii_characters_are_dropped() {
        assert_eq!(clean_street("Jl. Café Raya"), "Jalan Caf Raya");
        assert_eq!(clean_street("Jalan Kemang\u{00a0}Raya"), "Jalan KemangRaya");
    }

    #[test]
    fn test_comma_separated_address_keeps_jalan_part() {
        assert_eq!(
            clean_street("Menteng, Jl. Cikini Raya, Jakarta"),
            "Jalan Cikini Raya"
        );
        assert_eq!(clean_street("Jl. Kramat Raya,Senen"), "Jalan Kramat Raya");
    }

    #[test]
    fn test_last_jalan_part_wins() {
        assert_eq!(clean_street("Jalan A, Jalan B"), "Jalan B");
        assert_eq!(clean_street("Jalan A,Jalan B, Blok C"), "Jalan B");
    }

    #[test]
    fn test_prefix_added_before_comma_split() {
        // "Jalan " is prepended to the whole string, so the first part keeps it
        assert_eq!(clean_street("Blok M, Kebayoran"), "Jalan Blok M");
    }

    #[test]
    fn test_cleaner_metadata() {
        let cleaner = StreetCleaner::new();
        assert_eq!(cleaner.key(), "street");
        assert_eq!(cleaner.clean("Jl. Sabang"), "Jalan Sabang");
    }
}
