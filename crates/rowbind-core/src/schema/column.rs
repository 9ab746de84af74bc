use crate::convert::{SourceConverter, TargetConverter};
use crate::value::Type;

use std::sync::Arc;

/// A validated, mapped field.
#[derive(Clone)]
pub struct ColumnDescriptor {
    /// Position of the column within the record descriptor
    pub index: usize,

    /// Field index passed to `Record::field_value` / `Record::load_field`
    pub field: usize,

    /// Logical (field) name
    pub name: &'static str,

    /// Physical column name
    pub column_name: &'static str,

    /// Value type of the field
    pub ty: Type,

    pub nullable: bool,

    /// Primary key ordinal
    pub key: Option<u32>,

    pub flags: ColumnFlags,

    pub max_length: Option<usize>,

    /// True for large values (text/blob columns read separately by some engines)
    pub large: bool,

    /// Storage → field converters, in declaration order
    pub source_converters: Vec<Arc<dyn SourceConverter>>,

    /// Field → storage converter
    pub target_converter: Option<Arc<dyn TargetConverter>>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ColumnFlags {
    /// Value is generated by storage (identity, defaults)
    pub auto: bool,

    /// Value is computed by storage and never written
    pub calculated: bool,

    /// Optimistic concurrency column
    pub version: bool,

    /// The owning record type is immutable
    pub immutable: bool,
}

impl ColumnDescriptor {
    pub fn is_primary_key(&self) -> bool {
        self.key.is_some()
    }

    /// True if persistence should write this column.
    pub fn is_writable(&self) -> bool {
        !self.flags.calculated
    }

    /// The source converter declared for `storage_ty`, if any.
    pub fn source_converter_for(&self, storage_ty: &Type) -> Option<&Arc<dyn SourceConverter>> {
        self.source_converters
            .iter()
            .find(|converter| converter.storage_ty() == *storage_ty)
    }
}

impl core::fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("index", &self.index)
            .field("field", &self.field)
            .field("name", &self.name)
            .field("column_name", &self.column_name)
            .field("ty", &self.ty)
            .field("nullable", &self.nullable)
            .field("key", &self.key)
            .field("flags", &self.flags)
            .field("max_length", &self.max_length)
            .field("large", &self.large)
            .field("source_converters", &self.source_converters.len())
            .field("target_converter", &self.target_converter.is_some())
            .finish()
    }
}
