pub mod audit;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod osm;
pub mod output;
pub mod pipeline;
pub mod storage;
pub mod tags;

pub use error::{CleanerError, Result};
pub use tags::normalize::{clean_city, clean_phone, clean_postal_code, clean_street};
pub use tags::{clean_value, split_key, Tag};
