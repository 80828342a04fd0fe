use crate::constants::{NODE_TABLE, NODE_TAGS_TABLE, WAY_NODES_TABLE, WAY_TABLE, WAY_TAGS_TABLE};

/// SQL storage class of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    Text,
}

impl ColumnType {
    pub fn sql_type(&self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Float => "REAL",
            ColumnType::Text => "TEXT",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub required: bool,
}

const fn required(name: &'static str, column_type: ColumnType) -> Column {
    Column {
        name,
        column_type,
        required: true,
    }
}

/// Column layout of one output table
#[derive(Debug)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [Column],
}

impl TableSchema {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    /// `CREATE TABLE IF NOT EXISTS` statement for this table.
    ///
    /// Tag and way-node tables repeat the parent id, so no column is a primary key.
    pub fn create_table_sql(&self) -> String {
        let body = self
            .columns
            .iter()
            .map(|c| {
                let mut column = format!("{} {}", c.name, c.column_type.sql_type());
                if c.required {
                    column.push_str(" NOT NULL");
                }
                column
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("CREATE TABLE IF NOT EXISTS {} ({})", self.name, body)
    }

    /// Parameterized `INSERT` statement covering every column in order
    pub fn insert_sql(&self) -> String {
        let placeholders = (1..=self.columns.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.name,
            self.column_names().join(", "),
            placeholders
        )
    }
}

const TAG_COLUMNS: [Column; 4] = [
    required("id", ColumnType::Integer),
    required("key", ColumnType::Text),
    required("value", ColumnType::Text),
    required("type", ColumnType::Text),
];

pub static SCHEMAS: [TableSchema; 5] = [
    TableSchema {
        name: NODE_TABLE,
        columns: &[
            required("id", ColumnType::Integer),
            required("lat", ColumnType::Float),
            required("lon", ColumnType::Float),
            required("user", ColumnType::Text),
            required("uid", ColumnType::Integer),
            required("version", ColumnType::Text),
            required("changeset", ColumnType::Integer),
            required("timestamp", ColumnType::Text),
        ],
    },
    TableSchema {
        name: NODE_TAGS_TABLE,
        columns: &TAG_COLUMNS,
    },
    TableSchema {
        name: WAY_TABLE,
        columns: &[
            required("id", ColumnType::Integer),
            required("user", ColumnType::Text),
            required("uid", ColumnType::Integer),
            required("version", ColumnType::Text),
            required("changeset", ColumnType::Integer),
            required("timestamp", ColumnType::Text),
        ],
    },
    TableSchema {
        name: WAY_TAGS_TABLE,
        columns: &TAG_COLUMNS,
    },
    TableSchema {
        name: WAY_NODES_TABLE,
        columns: &[
            required("id", ColumnType::Integer),
            required("node_id", ColumnType::Integer),
            required("position", ColumnType::Integer),
        ],
    },
];

/// Look up a table schema by name
pub fn table_schema(name: &str) -> Option<&'static TableSchema> {
    SCHEMAS.iter().find(|s| s.name == name)
}
