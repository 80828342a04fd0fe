use csv::{Writer, WriterBuilder};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::ShapeSink;
use crate::constants::{
    NODES_FILE, NODE_FIELDS, NODE_TAGS_FILE, TAG_FIELDS, WAYS_FILE, WAY_FIELDS, WAY_NODES_FILE,
    WAY_NODE_FIELDS, WAY_TAGS_FILE,
};
use crate::error::Result;
use crate::osm::ShapedElement;

/// Writes shaped elements to the five table CSV files in one directory
pub struct CsvSink {
    dir: PathBuf,
    nodes: Writer<File>,
    node_tags: Writer<File>,
    ways: Writer<File>,
    way_nodes: Writer<File>,
    way_tags: Writer<File>,
}

impl CsvSink {
    /// Create (truncating) all five files and write their headers
    pub fn create<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        debug!("Writing CSV output to {}", dir.display());

        Ok(Self {
            nodes: open_writer(&dir, NODES_FILE, &NODE_FIELDS)?,
            node_tags: open_writer(&dir, NODE_TAGS_FILE, &TAG_FIELDS)?,
            ways: open_writer(&dir, WAYS_FILE, &WAY_FIELDS)?,
            way_nodes: open_writer(&dir, WAY_NODES_FILE, &WAY_NODE_FIELDS)?,
            way_tags: open_writer(&dir, WAY_TAGS_FILE, &TAG_FIELDS)?,
            dir,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

// Headers are written up front so empty tables still get one
fn open_writer(dir: &Path, file: &str, headers: &[&str]) -> Result<Writer<File>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(dir.join(file))?;
    writer.write_record(headers)?;
    Ok(writer)
}

impl ShapeSink for CsvSink {
    fn write(&mut self, element: &ShapedElement) -> Result<()> {
        match element {
            ShapedElement::Node { node, tags } => {
                self.nodes.serialize(node)?;
                for tag in tags {
                    self.node_tags.serialize(tag)?;
                }
            }
            ShapedElement::Way { way, nodes, tags } => {
                self.ways.serialize(way)?;
                for way_node in nodes {
                    self.way_nodes.serialize(way_node)?;
                }
                for tag in tags {
                    self.way_tags.serialize(tag)?;
                }
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.nodes.flush()?;
        self.node_tags.flush()?;
        self.ways.flush()?;
        self.way_nodes.flush()?;
        self.way_tags.flush()?;
        Ok(())
    }
}
