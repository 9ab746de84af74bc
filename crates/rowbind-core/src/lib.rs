pub mod convert;

mod error;
pub use error::{ConstraintKind, ConstraintViolation, Error, IntoError};

mod record;
pub use record::{Record, TrackedRecord};

pub mod row;
pub use row::{ColumnInfo, Row, RowReader};

pub mod schema;

mod tracker;
pub use tracker::Tracker;

pub mod value;

/// A Result type alias that uses rowbind's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
