pub mod mapper;
pub use mapper::{MapperCache, MapperFn, MapperKey};

pub mod pipeline;
pub use pipeline::{ConversionPipeline, EnumTextMatch};

pub mod registry;
pub use registry::SchemaRegistry;

mod runtime;
pub use runtime::{Builder, Runtime};

pub mod translate;
pub use translate::{Dialect, Translator};

pub use rowbind_core::{
    bail, convert, err, row, schema, value, ColumnInfo, ConstraintKind, ConstraintViolation,
    Error, Record, Result, Row, RowReader, TrackedRecord, Tracker,
};

pub use rowbind_macros::{Enum, Record};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Error, Record, Result, TrackedRecord, Tracker};
    pub use rowbind_core::{
        convert::Converter,
        schema::{ConverterDecl, FieldDef, RecordDef, RecordKind},
        value::{EnumDef, EnumVariant, Primitive, Type, Value},
    };
    pub use std::{convert::Into, default::Default, option::Option, vec::Vec};
}
