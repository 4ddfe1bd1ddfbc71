//! Column-major table container.

use crate::error::{PrepError, Result};

use super::schema::{ColumnRole, TableSchema};

/// A single stored column.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Numeric values; missing = `f32::NAN`.
    Numeric(Vec<f32>),
    /// Categorical values; missing = `None`.
    Categorical(Vec<Option<String>>),
}

impl Column {
    /// Number of rows in this column.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Categorical(v) => v.len(),
        }
    }

    /// True if the column has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An ordered collection of rows, stored column-major against a declared
/// [`TableSchema`].
///
/// # Example
///
/// ```
/// use tabprep::{Column, ColumnMeta, Table, TableSchema};
///
/// let schema = TableSchema::from_columns(vec![
///     ColumnMeta::categorical("gender"),
///     ColumnMeta::numeric("reading_score"),
/// ]);
/// let table = Table::from_columns(
///     schema,
///     vec![
///         Column::Categorical(vec![Some("male".into()), Some("female".into())]),
///         Column::Numeric(vec![70.0, f32::NAN]),
///     ],
/// );
/// assert_eq!(table.n_rows(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    schema: TableSchema,
    columns: Vec<Column>,
}

impl Table {
    /// Build a table from a schema and matching columns.
    ///
    /// # Panics
    ///
    /// Debug-asserts that the column count matches the schema and that all
    /// columns have the same row count.
    pub fn from_columns(schema: TableSchema, columns: Vec<Column>) -> Self {
        debug_assert_eq!(
            schema.n_columns(),
            columns.len(),
            "schema and column count must match"
        );
        if let Some(first) = columns.first() {
            debug_assert!(
                columns.iter().all(|c| c.len() == first.len()),
                "all columns must have the same row count"
            );
        }
        Self { schema, columns }
    }

    /// Number of rows.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    /// Number of columns.
    #[inline]
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// The declared schema.
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Raw column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.schema.column_index(name).map(|i| &self.columns[i])
    }

    /// Numeric-storage column values (numeric feature or target) by name.
    pub fn numeric_column(&self, name: &str) -> Result<&[f32]> {
        match self.column(name) {
            Some(Column::Numeric(values)) => Ok(values),
            Some(Column::Categorical(_)) => Err(PrepError::WrongRole {
                column: name.to_string(),
                expected: ColumnRole::Numeric,
            }),
            None => Err(PrepError::MissingColumn {
                name: name.to_string(),
            }),
        }
    }

    /// Categorical column values by name.
    pub fn categorical_column(&self, name: &str) -> Result<&[Option<String>]> {
        match self.column(name) {
            Some(Column::Categorical(values)) => Ok(values),
            Some(Column::Numeric(_)) => Err(PrepError::WrongRole {
                column: name.to_string(),
                expected: ColumnRole::Categorical,
            }),
            None => Err(PrepError::MissingColumn {
                name: name.to_string(),
            }),
        }
    }

    /// Split off the target column.
    ///
    /// Returns the feature table (everything except `target`) and the target
    /// values, preserving row order. Errors if the target is absent or not
    /// numeric-storage.
    pub fn split_target(&self, target: &str) -> Result<(Table, Vec<f32>)> {
        let idx = self
            .schema
            .column_index(target)
            .ok_or_else(|| PrepError::MissingColumn {
                name: target.to_string(),
            })?;
        let values = match &self.columns[idx] {
            Column::Numeric(v) => v.clone(),
            Column::Categorical(_) => {
                return Err(PrepError::WrongRole {
                    column: target.to_string(),
                    expected: ColumnRole::Target,
                })
            }
        };
        let features = Table {
            schema: self.schema.without(target),
            columns: self
                .columns
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != idx)
                .map(|(_, c)| c.clone())
                .collect(),
        };
        Ok((features, values))
    }
}
