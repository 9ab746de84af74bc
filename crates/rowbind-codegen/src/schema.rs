mod column;
pub(crate) use column::Column;

mod convert;
pub(crate) use convert::{ConvertAttr, Direction};

mod enum_def;
pub(crate) use enum_def::Enum;

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::{Field, FieldAttr};

mod record;
pub(crate) use record::Record;

mod record_attr;
pub(crate) use record_attr::RecordAttr;
