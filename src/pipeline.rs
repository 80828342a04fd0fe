use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::BufRead;
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::osm::{shape_element, validate_element, OsmReader, ShapeOptions, ShapedElement};
use crate::output::{CsvSink, ShapeSink};
use crate::tags::CleanerRegistry;

/// Options for one shaping run
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Check every row against the table schema before writing it
    pub validate: bool,
    /// Stop after this many elements
    pub limit: Option<usize>,
    pub shape: ShapeOptions,
}

/// Result of a complete shaping run
#[derive(Debug, Clone, Serialize)]
pub struct ShapeReport {
    pub nodes: usize,
    pub ways: usize,
    pub node_tags: usize,
    pub way_tags: usize,
    pub way_nodes: usize,
    /// Tags whose value a cleaner changed
    pub values_rewritten: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ShapeReport {
    fn start() -> Self {
        let now = Utc::now();
        Self {
            nodes: 0,
            ways: 0,
            node_tags: 0,
            way_tags: 0,
            way_nodes: 0,
            values_rewritten: 0,
            started_at: now,
            finished_at: now,
        }
    }

    fn count(&mut self, element: &ShapedElement) {
        self.values_rewritten += element.rewritten_tags();
        match element {
            ShapedElement::Node { tags, .. } => {
                self.nodes += 1;
                self.node_tags += tags.len();
            }
            ShapedElement::Way { nodes, tags, .. } => {
                self.ways += 1;
                self.way_nodes += nodes.len();
                self.way_tags += tags.len();
            }
        }
    }

    pub fn elements(&self) -> usize {
        self.nodes + self.ways
    }

    pub fn duration_secs(&self) -> f64 {
        (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0
    }
}

/// Read, shape, optionally validate and write every element of a document
#[instrument(skip_all, fields(validate = options.validate))]
pub fn process_map<R: BufRead, S: ShapeSink>(
    mut reader: OsmReader<R>,
    sink: &mut S,
    registry: &CleanerRegistry,
    options: &PipelineOptions,
) -> Result<ShapeReport> {
    let mut report = ShapeReport::start();

    while let Some(raw) = reader.next_element()? {
        let shaped = shape_element(&raw, registry, options.shape)?;
        if options.validate {
            validate_element(&shaped)?;
        }
        sink.write(&shaped)?;
        report.count(&shaped);

        if report.elements() % 100_000 == 0 {
            debug!("Shaped {} elements", report.elements());
        }
    }
    sink.flush()?;

    report.finished_at = Utc::now();
    info!(
        nodes = report.nodes,
        ways = report.ways,
        tags = report.node_tags + report.way_tags,
        rewritten = report.values_rewritten,
        "Shaping finished in {:.2}s",
        report.duration_secs()
    );
    Ok(report)
}

/// Shape an OSM file on disk into the five CSV files under `output_dir`
#[instrument(skip_all, fields(input = %input.display(), output_dir = %output_dir.display()))]
pub fn process_file(
    input: &Path,
    output_dir: &Path,
    registry: &CleanerRegistry,
    options: &PipelineOptions,
) -> Result<ShapeReport> {
    let reader = OsmReader::from_path(input)?.with_limit(options.limit);
    let mut sink = CsvSink::create(output_dir)?;
    process_map(reader, &mut sink, registry, options)
}
