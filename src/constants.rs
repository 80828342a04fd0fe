/// Table and file name constants shared by the CSV writer and the SQLite loader.
/// Column orders here must match the column order of the table schemas.

/// Namespace assigned to tag keys that carry no `namespace:` prefix
pub const DEFAULT_TAG_TYPE: &str = "regular";

/// Postal code emitted when no five-digit run can be found
pub const POSTAL_CODE_SENTINEL: &str = "00000";

// Table names (used by the loader and the schema)
pub const NODE_TABLE: &str = "node";
pub const NODE_TAGS_TABLE: &str = "node_tags";
pub const WAY_TABLE: &str = "way";
pub const WAY_TAGS_TABLE: &str = "way_tags";
pub const WAY_NODES_TABLE: &str = "way_nodes";

// CSV file names (relative to the output directory)
pub const NODES_FILE: &str = "nodes.csv";
pub const NODE_TAGS_FILE: &str = "nodes_tags.csv";
pub const WAYS_FILE: &str = "ways.csv";
pub const WAY_TAGS_FILE: &str = "ways_tags.csv";
pub const WAY_NODES_FILE: &str = "ways_nodes.csv";

// Column orders
pub const NODE_FIELDS: [&str; 8] = [
    "id", "lat", "lon", "user", "uid", "version", "changeset", "timestamp",
];
pub const WAY_FIELDS: [&str; 6] = ["id", "user", "uid", "version", "changeset", "timestamp"];
pub const TAG_FIELDS: [&str; 4] = ["id", "key", "value", "type"];
pub const WAY_NODE_FIELDS: [&str; 3] = ["id", "node_id", "position"];

/// Load order for the tables; parents before children
pub const LOAD_ORDER: [&str; 5] = [
    NODE_TABLE,
    NODE_TAGS_TABLE,
    WAY_TABLE,
    WAY_TAGS_TABLE,
    WAY_NODES_TABLE,
];

/// Map a table name to the CSV file that backs it
pub fn table_to_file(table: &str) -> Option<&'static str> {
    match table {
        NODE_TABLE => Some(NODES_FILE),
        NODE_TAGS_TABLE => Some(NODE_TAGS_FILE),
        WAY_TABLE => Some(WAYS_FILE),
        WAY_TAGS_TABLE => Some(WAY_TAGS_FILE),
        WAY_NODES_TABLE => Some(WAY_NODES_FILE),
        _ => None,
    }
}
