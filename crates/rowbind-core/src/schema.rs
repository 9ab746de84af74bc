//! Record metadata.
//!
//! [`RecordDef`] is the declarative table a record type supplies; the
//! [`Builder`] validates it into a [`RecordDescriptor`], the form the
//! mapper and persistence helpers consume.

mod builder;
pub use builder::Builder;

mod column;
pub use column::{ColumnDescriptor, ColumnFlags};

mod def;
pub use def::{ConverterDecl, Direction, FieldDef, RecordDef, RecordKind};

mod descriptor;
pub use descriptor::RecordDescriptor;
