use crate::metrics::CleanerMetrics;

/// Base trait for per-field value cleaners
pub trait ValueCleaner: Send + Sync {
    /// Clean a raw tag value. Cleaners are total: every input yields an output.
    fn clean(&self, raw: &str) -> String;

    /// The residual tag key this cleaner handles (`street`, `postcode`, ...)
    fn key(&self) -> &str;

    /// Get a human-readable name for this cleaner
    fn name(&self) -> &str;
}

/// A wrapper that counts rewritten values for any cleaner implementation
pub struct MetricsCleaner<C: ValueCleaner> {
    inner: C,
}

impl<C: ValueCleaner> MetricsCleaner<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: ValueCleaner> ValueCleaner for MetricsCleaner<C> {
    fn clean(&self, raw: &str) -> String {
        let cleaned = self.inner.clean(raw);
        if cleaned != raw {
            CleanerMetrics::record_value_rewritten(self.inner.key());
        } else {
            CleanerMetrics::record_value_unchanged(self.inner.key());
        }
        cleaned
    }

    fn key(&self) -> &str {
        self.inner.key()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
