use crate::error::Result;
use crate::osm::ShapedElement;

pub mod csv_sink;
pub mod in_memory;

pub use csv_sink::CsvSink;
pub use in_memory::InMemorySink;

/// Destination for shaped elements
pub trait ShapeSink {
    /// Write the rows of one shaped element
    fn write(&mut self, element: &ShapedElement) -> Result<()>;

    /// Flush buffered rows; called once after the last element
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
