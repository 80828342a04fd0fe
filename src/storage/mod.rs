//! Relational side of the dataset: table schemas and the SQLite loader.

pub mod loader;
pub mod schema;

pub use loader::SqliteLoader;
pub use schema::{table_schema, ColumnType, TableSchema, SCHEMAS};
