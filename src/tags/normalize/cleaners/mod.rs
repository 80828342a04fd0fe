// Base trait and the metrics wrapper shared by all cleaners
pub mod base;

// Individual cleaner implementations
pub mod street;
pub mod postcode;
pub mod city;
pub mod phone;

// Re-export the main components
pub use base::{MetricsCleaner, ValueCleaner};
pub use city::{clean_city, CityCleaner};
pub use phone::{clean_phone, is_problem_char, PhoneCleaner, PROBLEM_CHARS};
pub use postcode::{clean_postal_code, PostalCodeCleaner};
pub use street::{clean_street, StreetCleaner};
