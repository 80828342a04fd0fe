use super::base::ValueCleaner;

/// Punctuation and whitespace that never belong in a stored phone number
pub const PROBLEM_CHARS: [char; 23] = [
    '(', ')', '-', '=', '+', '/', '&', '<', '>', ';', '\'', '"', '?', '%', '#', '$', '@', ',',
    '.', ' ', '\t', '\r', '\n',
];

/// Whether a character belongs to the problem set
pub fn is_problem_char(c: char) -> bool {
    PROBLEM_CHARS.contains(&c)
}

/// Strip every problem character from a phone value, keeping the rest in order
pub fn clean_phone(raw: &str) -> String {
    raw.chars().filter(|c| !is_problem_char(*c)).collect()
}

/// Cleaner for `phone` tags
pub struct PhoneCleaner;

impl PhoneCleaner {
    pub fn new() -> Self {
        Self
    }
}

impl ValueCleaner for PhoneCleaner {
    fn clean(&self, raw: &str) -> String {
        clean_phone(raw)
    }

    fn key(&self) -> &str {
        "phone"
    }

    fn name(&self) -> &str {
        "Phone Number Cleaner"
    }
}

impl Default for PhoneCleaner {
    fn default() -> Self {
        Self::new()
    }
}
