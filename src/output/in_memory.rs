use super::ShapeSink;
use crate::error::Result;
use crate::osm::ShapedElement;

/// Collects shaped elements in memory, for tests and small extracts
#[derive(Debug, Default)]
pub struct InMemorySink {
    pub elements: Vec<ShapedElement>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShapeSink for InMemorySink {
    fn write(&mut self, element: &ShapedElement) -> Result<()> {
        self.elements.push(element.clone());
        Ok(())
    }
}
