use crate::value::{Type, Value};
use crate::{err, Result};

use std::sync::Arc;

/// Positional access to one result row.
///
/// Implemented by the SQL execution layer over its native reader. Indices
/// are `0..field_count()`; callers never pass an index outside that range.
pub trait RowReader {
    fn field_count(&self) -> usize;

    fn field_name(&self, index: usize) -> &str;

    /// The native storage type of the column.
    fn field_type(&self, index: usize) -> Type;

    fn is_null(&self, index: usize) -> bool;

    fn value(&self, index: usize) -> Value;
}

/// Name and storage type of one result column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub name: String,
    pub ty: Type,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// An owned, in-memory row.
///
/// Rows of one result set share their column list.
#[derive(Debug, Clone)]
pub struct Row {
    columns: Arc<[ColumnInfo]>,
    values: Vec<Value>,
}

impl Row {
    pub fn new(columns: Arc<[ColumnInfo]>, values: Vec<Value>) -> Result<Self> {
        if columns.len() != values.len() {
            return Err(err!(
                "row has {} columns but {} values",
                columns.len(),
                values.len()
            ));
        }

        for (column, value) in columns.iter().zip(&values) {
            if !value.is_a(&column.ty) {
                return Err(err!(
                    "value {value:?} does not match column `{}` of type {}",
                    column.name,
                    column.ty
                ));
            }
        }

        Ok(Self { columns, values })
    }

    pub fn builder() -> RowBuilder {
        RowBuilder::default()
    }

    pub fn columns(&self) -> &Arc<[ColumnInfo]> {
        &self.columns
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl RowReader for Row {
    fn field_count(&self) -> usize {
        self.columns.len()
    }

    fn field_name(&self, index: usize) -> &str {
        &self.columns[index].name
    }

    fn field_type(&self, index: usize) -> Type {
        self.columns[index].ty
    }

    fn is_null(&self, index: usize) -> bool {
        self.values[index].is_null()
    }

    fn value(&self, index: usize) -> Value {
        self.values[index].clone()
    }
}

impl<R: RowReader + ?Sized> RowReader for &R {
    fn field_count(&self) -> usize {
        (**self).field_count()
    }

    fn field_name(&self, index: usize) -> &str {
        (**self).field_name(index)
    }

    fn field_type(&self, index: usize) -> Type {
        (**self).field_type(index)
    }

    fn is_null(&self, index: usize) -> bool {
        (**self).is_null(index)
    }

    fn value(&self, index: usize) -> Value {
        (**self).value(index)
    }
}

/// Builds a [`Row`] one column at a time.
#[derive(Debug, Default)]
pub struct RowBuilder {
    columns: Vec<ColumnInfo>,
    values: Vec<Value>,
}

impl RowBuilder {
    pub fn column(mut self, name: impl Into<String>, ty: Type, value: impl Into<Value>) -> Self {
        self.columns.push(ColumnInfo::new(name, ty));
        self.values.push(value.into());
        self
    }

    pub fn null(self, name: impl Into<String>, ty: Type) -> Self {
        self.column(name, ty, Value::Null)
    }

    pub fn build(self) -> Result<Row> {
        Row::new(self.columns.into(), self.values)
    }
}
