//! Tabular data containers.
//!
//! The core type is [`Table`], a column-major container whose columns are
//! either numeric (`f32`, missing = `f32::NAN`) or categorical
//! (`Option<String>`, missing = `None`). Columns are declared up front through
//! a [`TableSchema`]; nothing is inferred from the data.
//!
//! # Missing Values
//!
//! Numeric missing values are `f32::NAN`, the convention shared with the rest
//! of the pipeline's matrix handling.

mod io;
mod schema;
mod table;

pub use io::read_csv;
pub use schema::{ColumnMeta, ColumnRole, TableSchema};
pub use table::{Column, Table};
