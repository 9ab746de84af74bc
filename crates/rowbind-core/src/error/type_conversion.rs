use super::Error;
use crate::value::{Type, Value};

/// Error when a value cannot be converted to the expected type.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    pub(super) value: Value,
    pub(super) to_type: Box<str>,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.value.ty() {
            Some(from) => write!(f, "cannot convert {} to {}", from, self.to_type),
            None => write!(f, "cannot convert Null to {}", self.to_type),
        }
    }
}

impl Error {
    /// Creates a data conversion error naming the source and destination types.
    pub fn type_conversion(value: Value, to_type: &Type) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            value,
            to_type: to_type.to_string().into(),
        }))
    }

    /// Returns `true` if a data conversion error is anywhere in the chain.
    pub fn is_type_conversion(&self) -> bool {
        self.find(|kind| matches!(kind, super::ErrorKind::TypeConversion(_)).then_some(()))
            .is_some()
    }
}
