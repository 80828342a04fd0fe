use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};
use std::path::Path;
use tracing::{debug, info, instrument};

use super::schema::{table_schema, Column, ColumnType, TableSchema, SCHEMAS};
use crate::constants::{table_to_file, LOAD_ORDER};
use crate::error::{CleanerError, Result};
use crate::metrics::LoadMetrics;

/// Loads shaped CSV files into a SQLite database
pub struct SqliteLoader {
    conn: Connection,
}

impl SqliteLoader {
    /// Open (or create) a database file and make sure every table exists
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        if let Some(parent) = db_path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(db_path.as_ref())?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        for schema in SCHEMAS.iter() {
            conn.execute(&schema.create_table_sql(), [])?;
        }
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Insert every row of a CSV file into `table` in one transaction.
    ///
    /// Columns are matched to the CSV header by name; values are bound as
    /// integers or reals when the column type asks for it and they parse.
    #[instrument(skip(self, csv_path), fields(csv = %csv_path.as_ref().display()))]
    pub fn load_csv<P: AsRef<Path>>(&mut self, table: &str, csv_path: P) -> Result<usize> {
        let schema = table_schema(table)
            .ok_or_else(|| CleanerError::Config(format!("Unknown table '{}'", table)))?;

        let mut reader = csv::Reader::from_path(csv_path.as_ref())?;
        let indices = header_indices(schema, reader.headers()?)?;

        let tx = self.conn.transaction()?;
        let mut rows = 0;
        {
            let mut stmt = tx.prepare(&schema.insert_sql())?;
            for record in reader.records() {
                let record = record?;
                let values: Vec<Value> = schema
                    .columns
                    .iter()
                    .zip(&indices)
                    .map(|(column, &idx)| to_sql_value(column, record.get(idx).unwrap_or("")))
                    .collect();
                stmt.execute(params_from_iter(values))?;
                rows += 1;
            }
        }
        tx.commit()?;

        LoadMetrics::record_rows_loaded(table, rows);
        debug!("Loaded {} rows into {}", rows, table);
        Ok(rows)
    }

    /// Load all five table files from `dir`, parents before children
    #[instrument(skip(self, dir), fields(dir = %dir.as_ref().display()))]
    pub fn load_dir<P: AsRef<Path>>(&mut self, dir: P) -> Result<Vec<(String, usize)>> {
        let mut loaded = Vec::new();
        for table in LOAD_ORDER {
            let file = table_to_file(table)
                .ok_or_else(|| CleanerError::Config(format!("No file for table '{}'", table)))?;
            let rows = self.load_csv(table, dir.as_ref().join(file))?;
            loaded.push((table.to_string(), rows));
        }
        info!(
            "Loaded {} rows across {} tables",
            loaded.iter().map(|(_, rows)| rows).sum::<usize>(),
            loaded.len()
        );
        Ok(loaded)
    }

    pub fn row_count(&self, table: &str) -> Result<i64> {
        let schema = table_schema(table)
            .ok_or_else(|| CleanerError::Config(format!("Unknown table '{}'", table)))?;
        let count = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", schema.name),
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

fn header_indices(schema: &TableSchema, headers: &csv::StringRecord) -> Result<Vec<usize>> {
    schema
        .columns
        .iter()
        .map(|column| {
            headers
                .iter()
                .position(|h| h.trim() == column.name)
                .ok_or_else(|| CleanerError::MissingField {
                    element: schema.name.to_string(),
                    field: column.name.to_string(),
                })
        })
        .collect()
}

fn to_sql_value(column: &Column, raw: &str) -> Value {
    match column.column_type {
        ColumnType::Integer => raw
            .parse::<i64>()
            .map(Value::Integer)
            .unwrap_or_else(|_| Value::Text(raw.to_string())),
        ColumnType::Float => raw
            .parse::<f64>()
            .map(Value::Real)
            .unwrap_or_else(|_| Value::Text(raw.to_string())),
        ColumnType::Text => Value::Text(raw.to_string()),
    }
}
