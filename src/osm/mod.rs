//! Reading OSM XML and shaping elements into table rows.

pub mod model;
pub mod reader;
pub mod shape;
pub mod validate;

pub use model::{ElementKind, Node, RawElement, ShapedElement, Way, WayNode};
pub use reader::OsmReader;
pub use shape::{shape_element, ShapeOptions};
pub use validate::validate_element;
