//! CSV ingestion.
//!
//! Files are parsed against a declared [`TableSchema`]; nothing is inferred.
//! The header row must contain exactly the schema's columns (any order).
//! Empty fields are missing values: `f32::NAN` for numeric storage, `None`
//! for categorical.

use std::path::Path;

use crate::error::{PrepError, Result};

use super::schema::TableSchema;
use super::table::{Column, Table};

/// Read a CSV file into a [`Table`] against the given schema.
///
/// Column storage order follows schema declaration order, independent of
/// column order in the file.
pub fn read_csv(path: impl AsRef<Path>, schema: &TableSchema) -> Result<Table> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|source| PrepError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| PrepError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    // Map each schema column to its position in the file.
    let mut positions = Vec::with_capacity(schema.n_columns());
    for meta in schema.columns() {
        let pos = headers
            .iter()
            .position(|h| *h == meta.name)
            .ok_or_else(|| PrepError::MissingColumn {
                name: meta.name.clone(),
            })?;
        positions.push(pos);
    }
    if headers.len() != schema.n_columns() {
        return Err(PrepError::SchemaMismatch {
            expected: schema.names(),
            found: headers,
        });
    }

    let mut columns: Vec<Column> = schema
        .columns()
        .iter()
        .map(|meta| {
            if meta.role.is_numeric_storage() {
                Column::Numeric(Vec::new())
            } else {
                Column::Categorical(Vec::new())
            }
        })
        .collect();

    for (row_idx, record) in reader.records().enumerate() {
        let record = record.map_err(|source| PrepError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        for (col, (meta, &pos)) in schema.columns().iter().zip(&positions).enumerate() {
            let raw = record.get(pos).unwrap_or("").trim();
            match &mut columns[col] {
                Column::Numeric(values) => {
                    if raw.is_empty() {
                        values.push(f32::NAN);
                    } else {
                        let parsed =
                            raw.parse::<f32>()
                                .map_err(|_| PrepError::InvalidNumber {
                                    column: meta.name.clone(),
                                    row: row_idx + 1,
                                    value: raw.to_string(),
                                })?;
                        values.push(parsed);
                    }
                }
                Column::Categorical(values) => {
                    if raw.is_empty() {
                        values.push(None);
                    } else {
                        values.push(Some(raw.to_string()));
                    }
                }
            }
        }
    }

    Ok(Table::from_columns(schema.clone(), columns))
}
