use super::{ColumnDescriptor, RecordKind};

use std::collections::HashMap;

/// Validated metadata for one record type.
#[derive(Debug)]
pub struct RecordDescriptor {
    /// Record type name
    pub name: &'static str,

    pub kind: RecordKind,

    /// True if loaded instances reject writes
    pub immutable: bool,

    pub table: Option<&'static str>,

    pub schema: Option<&'static str>,

    pub(super) columns: Vec<ColumnDescriptor>,

    /// Lowercased physical column name → column index
    pub(super) by_name: HashMap<String, usize>,

    /// Column indices ordered by key ordinal
    pub(super) primary_key: Vec<usize>,
}

impl RecordDescriptor {
    pub fn is_simple(&self) -> bool {
        self.kind == RecordKind::Simple
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> &ColumnDescriptor {
        &self.columns[index]
    }

    /// Looks up a column by physical name, ignoring case.
    pub fn column_by_name(&self, name: &str) -> Option<&ColumnDescriptor> {
        let index = match self.by_name.get(name) {
            Some(index) => *index,
            None => *self.by_name.get(&name.to_lowercase())?,
        };
        Some(&self.columns[index])
    }

    /// Primary key columns in key ordinal order.
    pub fn primary_key(&self) -> impl ExactSizeIterator<Item = &ColumnDescriptor> + '_ {
        self.primary_key.iter().map(|index| &self.columns[*index])
    }

    /// The table name qualified by its schema, e.g. `dbo.Users`.
    pub fn qualified_table_name(&self) -> Option<String> {
        let table = self.table?;
        Some(match self.schema {
            Some(schema) => format!("{schema}.{table}"),
            None => table.to_string(),
        })
    }

    pub fn version_column(&self) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|column| column.flags.version)
    }
}
