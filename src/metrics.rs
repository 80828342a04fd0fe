//! Metrics emitted while shaping and loading.
//!
//! Counters go through the `metrics` facade; without an installed recorder they
//! are no-ops, so library users and tests pay nothing for them.

/// Metric names used across the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricName {
    ElementsShaped,
    TagsShaped,
    TagsSkipped,
    ValuesRewritten,
    ValuesUnchanged,
    RowsLoaded,
}

impl MetricName {
    /// Get the metric name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::ElementsShaped => "osm_elements_shaped_total",
            MetricName::TagsShaped => "osm_tags_shaped_total",
            MetricName::TagsSkipped => "osm_tags_skipped_total",
            MetricName::ValuesRewritten => "osm_tag_values_cleaned_total",
            MetricName::ValuesUnchanged => "osm_tag_values_unchanged_total",
            MetricName::RowsLoaded => "osm_rows_loaded_total",
        }
    }
}

impl std::fmt::Display for MetricName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metrics for the value cleaners
pub struct CleanerMetrics;

impl CleanerMetrics {
    /// A cleaner produced a value different from its input
    pub fn record_value_rewritten(key: &str) {
        ::metrics::counter!(MetricName::ValuesRewritten.as_str(), "key" => key.to_string())
            .increment(1);
    }

    /// A cleaner left its input as it was
    pub fn record_value_unchanged(key: &str) {
        ::metrics::counter!(MetricName::ValuesUnchanged.as_str(), "key" => key.to_string())
            .increment(1);
    }
}

/// Metrics for the shaping pipeline
pub struct ShapeMetrics;

impl ShapeMetrics {
    pub fn record_element(kind: &'static str, tags: usize) {
        ::metrics::counter!(MetricName::ElementsShaped.as_str(), "kind" => kind).increment(1);
        ::metrics::counter!(MetricName::TagsShaped.as_str()).increment(tags as u64);
    }

    pub fn record_tag_skipped() {
        ::metrics::counter!(MetricName::TagsSkipped.as_str()).increment(1);
    }
}

/// Metrics for the SQLite loader
pub struct LoadMetrics;

impl LoadMetrics {
    pub fn record_rows_loaded(table: &str, rows: usize) {
        ::metrics::counter!(MetricName::RowsLoaded.as_str(), "table" => table.to_string())
            .increment(rows as u64);
    }
}
