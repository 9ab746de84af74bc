use crate::convert::Converter;
use crate::value::Type;

use std::sync::Arc;

/// Distinguishes plain records from change-tracked ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Plain object; no tracking, keys and flags ignored
    Simple,

    /// Carries a tracker; requires a table name
    Tracked,
}

/// Declarative description of a record type, as written by its author.
///
/// Nothing here is validated; see [`Builder`](super::Builder).
#[derive(Debug, Clone)]
pub struct RecordDef {
    /// Record type name
    pub name: &'static str,

    pub kind: RecordKind,

    /// `#[table(..)]`
    pub table: Option<&'static str>,

    /// `#[schema(..)]`
    pub schema: Option<&'static str>,

    /// `#[immutable]`
    pub immutable: bool,

    /// Mapped fields; the position is the index passed to `Record::load_field`
    pub fields: Vec<FieldDef>,
}

#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field (property) name
    pub name: &'static str,

    /// Physical column name, when it differs from the field name
    pub column: Option<&'static str>,

    /// Value type of the field
    pub ty: Type,

    /// True if the field accepts null (`Option` in Rust)
    pub nullable: bool,

    /// Primary key ordinal
    pub key: Option<u32>,

    pub version: bool,

    pub auto: bool,

    pub calculated: bool,

    pub max_length: Option<usize>,

    pub large: bool,

    /// Converter declarations in declaration order
    pub converters: Vec<ConverterDecl>,
}

impl FieldDef {
    /// A field with no annotations.
    pub fn new(name: &'static str, ty: Type) -> Self {
        Self {
            name,
            column: None,
            ty,
            nullable: false,
            key: None,
            version: false,
            auto: false,
            calculated: false,
            max_length: None,
            large: false,
            converters: vec![],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `#[convert(source = ..)]`: storage to field
    Source,

    /// `#[convert(target = ..)]`: field to storage
    Target,
}

/// A `#[convert(..)]` declaration.
#[derive(Clone)]
pub struct ConverterDecl {
    pub direction: Direction,
    pub converter: Arc<dyn Converter>,
}

impl ConverterDecl {
    pub fn source(converter: impl Converter) -> Self {
        Self {
            direction: Direction::Source,
            converter: Arc::new(converter),
        }
    }

    pub fn target(converter: impl Converter) -> Self {
        Self {
            direction: Direction::Target,
            converter: Arc::new(converter),
        }
    }
}

impl core::fmt::Debug for ConverterDecl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConverterDecl")
            .field("direction", &self.direction)
            .field("converter", &self.converter.name())
            .finish()
    }
}
