//! Column role definitions.
//!
//! A [`TableSchema`] declares, in order, each column's name and role. Roles
//! are fixed by the caller, never inferred from the data.

/// Logical column roles.
///
/// `Numeric` and `Target` columns are stored as `f32`; `Categorical` columns
/// as owned strings. The target is kept distinct so it can be split off before
/// fitting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColumnRole {
    /// Continuous numeric feature. Missing values: `f32::NAN`.
    #[default]
    Numeric,

    /// String-valued categorical feature. Missing values: `None`.
    Categorical,

    /// Numeric prediction target. Excluded from fitting.
    Target,
}

impl ColumnRole {
    /// Returns true for roles stored as `f32` (numeric features and target).
    #[inline]
    pub fn is_numeric_storage(&self) -> bool {
        matches!(self, ColumnRole::Numeric | ColumnRole::Target)
    }

    /// Returns true if this is a categorical column.
    #[inline]
    pub fn is_categorical(&self) -> bool {
        matches!(self, ColumnRole::Categorical)
    }
}

/// Metadata for a single column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnMeta {
    /// Column name, as it appears in the CSV header.
    pub name: String,

    /// Column role.
    pub role: ColumnRole,
}

impl ColumnMeta {
    /// Metadata for a numeric feature column.
    pub fn numeric(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: ColumnRole::Numeric,
        }
    }

    /// Metadata for a categorical feature column.
    pub fn categorical(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: ColumnRole::Categorical,
        }
    }

    /// Metadata for the target column.
    pub fn target(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: ColumnRole::Target,
        }
    }
}

/// Ordered column declaration for a [`Table`](super::Table).
///
/// Column order here defines storage order in the table; output block order is
/// decided by the preprocessor, not the schema.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TableSchema {
    columns: Vec<ColumnMeta>,
}

impl TableSchema {
    /// Schema with the given column metadata, in order.
    pub fn from_columns(columns: Vec<ColumnMeta>) -> Self {
        Self { columns }
    }

    /// Number of declared columns.
    #[inline]
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Per-column metadata, in declaration order.
    pub fn columns(&self) -> &[ColumnMeta] {
        &self.columns
    }

    /// Column names, in declaration order.
    pub fn names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Index of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Role of a column by name.
    pub fn role(&self, name: &str) -> Option<ColumnRole> {
        self.columns.iter().find(|c| c.name == name).map(|c| c.role)
    }

    /// Schema with one column removed. No-op if the name is absent.
    pub fn without(&self, name: &str) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .filter(|c| c.name != name)
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_storage_kinds() {
        assert!(ColumnRole::Numeric.is_numeric_storage());
        assert!(ColumnRole::Target.is_numeric_storage());
        assert!(!ColumnRole::Categorical.is_numeric_storage());
        assert!(ColumnRole::Categorical.is_categorical());
    }

    #[test]
    fn column_index_and_role() {
        let schema = TableSchema::from_columns(vec![
            ColumnMeta::categorical("gender"),
            ColumnMeta::numeric("reading_score"),
            ColumnMeta::target("math_score"),
        ]);
        assert_eq!(schema.n_columns(), 3);
        assert_eq!(schema.column_index("reading_score"), Some(1));
        assert_eq!(schema.column_index("absent"), None);
        assert_eq!(schema.role("math_score"), Some(ColumnRole::Target));
    }

    #[test]
    fn without_removes_column() {
        let schema = TableSchema::from_columns(vec![
            ColumnMeta::numeric("a"),
            ColumnMeta::target("y"),
        ]);
        let trimmed = schema.without("y");
        assert_eq!(trimmed.n_columns(), 1);
        assert_eq!(trimmed.column_index("y"), None);
        assert_eq!(trimmed.column_index("a"), Some(0));
    }
}
