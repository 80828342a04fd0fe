use chrono::DateTime;

use super::model::ShapedElement;
use crate::constants::{
    NODE_TABLE, NODE_TAGS_TABLE, WAY_NODES_TABLE, WAY_TABLE, WAY_TAGS_TABLE,
};
use crate::error::{CleanerError, Result};
use crate::storage::schema::{table_schema, ColumnType};

/// Check every row of a shaped element against its table schema.
///
/// Integer and real columns must parse as numbers, `timestamp` must be RFC 3339
/// and required text columns must be non-empty.
pub fn validate_element(element: &ShapedElement) -> Result<()> {
    match element {
        ShapedElement::Node { node, tags } => {
            check_row(
                NODE_TABLE,
                &[
                    ("id", node.id.as_str()),
                    ("lat", node.lat.as_str()),
                    ("lon", node.lon.as_str()),
                    ("user", node.user.as_str()),
                    ("uid", node.uid.as_str()),
                    ("version", node.version.as_str()),
                    ("changeset", node.changeset.as_str()),
                    ("timestamp", node.timestamp.as_str()),
                ],
            )?;
            for tag in tags {
                check_tag(NODE_TAGS_TABLE, &tag.id, &tag.key, &tag.value, &tag.tag_type)?;
            }
        }
        ShapedElement::Way { way, nodes, tags } => {
            check_row(
                WAY_TABLE,
                &[
                    ("id", way.id.as_str()),
                    ("user", way.user.as_str()),
                    ("uid", way.uid.as_str()),
                    ("version", way.version.as_str()),
                    ("changeset", way.changeset.as_str()),
                    ("timestamp", way.timestamp.as_str()),
                ],
            )?;
            for way_node in nodes {
                let position = way_node.position.to_string();
                check_row(
                    WAY_NODES_TABLE,
                    &[
                        ("id", way_node.id.as_str()),
                        ("node_id", way_node.node_id.as_str()),
                        ("position", position.as_str()),
                    ],
                )?;
            }
            for tag in tags {
                check_tag(WAY_TAGS_TABLE, &tag.id, &tag.key, &tag.value, &tag.tag_type)?;
            }
        }
    }
    Ok(())
}

fn check_tag(table: &str, id: &str, key: &str, value: &str, tag_type: &str) -> Result<()> {
    check_row(
        table,
        &[("id", id), ("key", key), ("value", value), ("type", tag_type)],
    )
}

fn check_row(table: &str, fields: &[(&str, &str)]) -> Result<()> {
    let Some(schema) = table_schema(table) else {
        return Ok(());
    };

    for (field, value) in fields {
        let Some(column) = schema.column(field) else {
            continue;
        };
        let valid = match column.column_type {
            ColumnType::Integer => value.parse::<i64>().is_ok(),
            ColumnType::Float => value.parse::<f64>().is_ok(),
            ColumnType::Text if *field == "timestamp" => {
                DateTime::parse_from_rfc3339(value).is_ok()
            }
            // Tag values may legitimately be empty
            ColumnType::Text => *field == "value" || !(column.required && value.is_empty()),
        };
        if !valid {
            return Err(CleanerError::Validation {
                table: table.to_string(),
                field: field.to_string(),
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::osm::model::{Node, Way, WayNode};
    use crate::tags::Tag;

    fn node(lat: &str, timestamp: &str) -> ShapedElement {
        ShapedElement::Node {
            node: Node {
                id: "1".into(),
                lat: lat.into(),
                lon: "106.8".into(),
                user: "ana".into(),
                uid: "10".into(),
                version: "2".into(),
                changeset: "100".into(),
                timestamp: timestamp.into(),
            },
            tags: vec![Tag {
                id: "1".into(),
                key: "name".into(),
                value: String::new(),
                tag_type: "regular".into(),
                rewritten: false,
            }],
        }
    }

    #[test]
    fn test_valid_node_passes() {
        assert!(validate_element(&node("-6.2", "2017-01-01T00:00:00Z")).is_ok());
    }

    #[test]
    fn test_bad_float_is_rejected() {
        let err = validate_element(&node("south", "2017-01-01T00:00:00Z")).unwrap_err();
        match err {
            CleanerError::Validation { table, field, value } => {
                assert_eq!(table, "node");
                assert_eq!(field, "lat");
                assert_eq!(value, "south");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_bad_timestamp_is_rejected() {
        assert!(validate_element(&node("-6.2", "yesterday")).is_err());
    }

    #[test]
    fn test_way_node_ids_must_be_integers() {
        let way = ShapedElement::Way {
            way: Way {
                id: "50".into(),
                user: "ana".into(),
                uid: "10".into(),
                version: "1".into(),
                changeset: "102".into(),
                timestamp: "2017-01-03T00:00:00Z".into(),
            },
            nodes: vec![WayNode {
                id: "50".into(),
                node_id: "n1".into(),
                position: 0,
            }],
            tags: Vec::new(),
        };

        let err = validate_element(&way).unwrap_err();
        assert!(matches!(err, CleanerError::Validation { ref table, .. } if table == "way_nodes"));
    }
}
