use super::Error;

/// Error when a loaded immutable record is written to.
#[derive(Debug)]
pub(super) struct ImmutableRecordChangedError {
    pub(super) column: Box<str>,
}

impl std::error::Error for ImmutableRecordChangedError {}

impl core::fmt::Display for ImmutableRecordChangedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot change column `{}` of an immutable record",
            self.column
        )
    }
}

impl Error {
    pub fn immutable_record_changed(column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ImmutableRecordChanged(
            ImmutableRecordChangedError {
                column: column.into().into(),
            },
        ))
    }

    pub fn is_immutable_record_changed(&self) -> bool {
        self.immutable_column().is_some()
    }

    /// The column whose write was rejected.
    pub fn immutable_column(&self) -> Option<&str> {
        self.find(|kind| match kind {
            super::ErrorKind::ImmutableRecordChanged(err) => Some(&*err.column),
            _ => None,
        })
    }
}
