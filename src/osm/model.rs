use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::tags::Tag;

/// Kind of top-level element the shaper understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Way,
}

impl ElementKind {
    pub fn from_tag_name(name: &[u8]) -> Option<Self> {
        match name {
            b"node" => Some(ElementKind::Node),
            b"way" => Some(ElementKind::Way),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Node => "node",
            ElementKind::Way => "way",
        }
    }
}

/// A node or way as read from the document, before shaping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawElement {
    pub kind: ElementKind,
    pub attributes: HashMap<String, String>,
    /// `tag` children as `(k, v)` in document order
    pub tags: Vec<(String, String)>,
    /// `nd/@ref` values in document order (ways only)
    pub node_refs: Vec<String>,
}

impl RawElement {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attributes: HashMap::new(),
            tags: Vec::new(),
            node_refs: Vec::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|v| v.as_str())
    }
}

/// Row for the `node` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub lat: String,
    pub lon: String,
    pub user: String,
    pub uid: String,
    pub version: String,
    pub changeset: String,
    pub timestamp: String,
}

/// Row for the `way` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Way {
    pub id: String,
    pub user: String,
    pub uid: String,
    pub version: String,
    pub changeset: String,
    pub timestamp: String,
}

/// Row for the `way_nodes` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WayNode {
    /// Id of the owning way
    pub id: String,
    pub node_id: String,
    /// 0-based order of the `nd` reference within the way
    pub position: usize,
}

/// A shaped element, ready to be written as table rows
#[derive(Debug, Clone, PartialEq)]
pub enum ShapedElement {
    Node {
        node: Node,
        tags: Vec<Tag>,
    },
    Way {
        way: Way,
        nodes: Vec<WayNode>,
        tags: Vec<Tag>,
    },
}

impl ShapedElement {
    pub fn kind(&self) -> ElementKind {
        match self {
            ShapedElement::Node { .. } => ElementKind::Node,
            ShapedElement::Way { .. } => ElementKind::Way,
        }
    }

    pub fn tags(&self) -> &[Tag] {
        match self {
            ShapedElement::Node { tags, .. } | ShapedElement::Way { tags, .. } => tags,
        }
    }

    /// Number of tags whose value a cleaner changed
    pub fn rewritten_tags(&self) -> usize {
        self.tags().iter().filter(|tag| tag.rewritten).count()
    }
}
