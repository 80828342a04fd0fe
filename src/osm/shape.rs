use tracing::debug;

use super::model::{ElementKind, Node, RawElement, ShapedElement, Way, WayNode};
use crate::error::{CleanerError, Result};
use crate::metrics::ShapeMetrics;
use crate::tags::{has_problem_chars, CleanerRegistry, Tag};

/// Options controlling how tags are shaped
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeOptions {
    /// Drop tags whose raw key contains punctuation or whitespace
    pub skip_problem_keys: bool,
}

/// Shape a raw node or way into table rows, cleaning every tag value on the way
pub fn shape_element(
    element: &RawElement,
    registry: &CleanerRegistry,
    options: ShapeOptions,
) -> Result<ShapedElement> {
    let id = required(element, "id")?;
    let tags = shape_tags(element, id, registry, options);

    let shaped = match element.kind {
        ElementKind::Node => ShapedElement::Node {
            node: Node {
                id: id.to_string(),
                lat: required(element, "lat")?.to_string(),
                lon: required(element, "lon")?.to_string(),
                user: required(element, "user")?.to_string(),
                uid: required(element, "uid")?.to_string(),
                version: required(element, "version")?.to_string(),
                changeset: required(element, "changeset")?.to_string(),
                timestamp: required(element, "timestamp")?.to_string(),
            },
            tags,
        },
        ElementKind::Way => ShapedElement::Way {
            way: Way {
                id: id.to_string(),
                user: required(element, "user")?.to_string(),
                uid: required(element, "uid")?.to_string(),
                version: required(element, "version")?.to_string(),
                changeset: required(element, "changeset")?.to_string(),
                timestamp: required(element, "timestamp")?.to_string(),
            },
            nodes: element
                .node_refs
                .iter()
                .enumerate()
                .map(|(position, node_id)| WayNode {
                    id: id.to_string(),
                    node_id: node_id.clone(),
                    position,
                })
                .collect(),
            tags,
        },
    };

    ShapeMetrics::record_element(shaped.kind().as_str(), shaped.tags().len());
    Ok(shaped)
}

fn shape_tags(
    element: &RawElement,
    parent_id: &str,
    registry: &CleanerRegistry,
    options: ShapeOptions,
) -> Vec<Tag> {
    element
        .tags
        .iter()
        .filter(|(raw_key, _)| {
            if options.skip_problem_keys && has_problem_chars(raw_key) {
                debug!("Skipping tag with problem key '{}' on {}", raw_key, parent_id);
                ShapeMetrics::record_tag_skipped();
                return false;
            }
            true
        })
        .map(|(raw_key, raw_value)| Tag::new(parent_id, raw_key, raw_value, registry))
        .collect()
}

fn required<'a>(element: &'a RawElement, field: &str) -> Result<&'a str> {
    element
        .attribute(field)
        .ok_or_else(|| CleanerError::MissingField {
            element: element.kind.as_str().to_string(),
            field: field.to_string(),
        })
}
