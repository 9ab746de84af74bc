use super::Error;

/// Error when a converter declaration does not fit the field it is attached to.
///
/// Raised while a record descriptor is built, never while mapping rows:
/// - the converter lacks the declared capability (source or target)
/// - its produced or accepted type does not match the field type
/// - two source converters claim the same storage type
/// - more than one target converter is declared
#[derive(Debug)]
pub(super) struct InvalidCastError {
    pub(super) record: Box<str>,
    pub(super) field: Box<str>,
    pub(super) message: Box<str>,
}

impl std::error::Error for InvalidCastError {}

impl core::fmt::Display for InvalidCastError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid converter on `{}::{}`: {}",
            self.record, self.field, self.message
        )
    }
}

impl Error {
    pub fn invalid_cast(
        record: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::InvalidCast(InvalidCastError {
            record: record.into().into(),
            field: field.into().into(),
            message: message.into().into(),
        }))
    }

    pub fn is_invalid_cast(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidCast(_))
    }
}
