use super::Error;

/// Error when a tracked record type is described without a table name.
#[derive(Debug)]
pub(super) struct MissingTableNameError {
    pub(super) record: Box<str>,
}

impl std::error::Error for MissingTableNameError {}

impl core::fmt::Display for MissingTableNameError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "tracked record `{}` does not declare a table name",
            self.record
        )
    }
}

impl Error {
    pub fn missing_table_name(record: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingTableName(MissingTableNameError {
            record: record.into().into(),
        }))
    }

    pub fn is_missing_table_name(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingTableName(_))
    }
}
