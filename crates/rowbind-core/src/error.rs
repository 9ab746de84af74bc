mod adhoc;
mod constraint_violation;
mod enum_lookup;
mod immutable_record_changed;
mod invalid_cast;
mod missing_table_name;
mod storage;
mod type_conversion;

pub use constraint_violation::{ConstraintKind, ConstraintViolation};

use adhoc::AdhocError;
use enum_lookup::EnumLookupError;
use immutable_record_changed::ImmutableRecordChangedError;
use invalid_cast::InvalidCastError;
use missing_table_name::MissingTableNameError;
use std::sync::Arc;
use storage::StorageError;
use type_conversion::TypeConversionError;

/// Returns early with an ad-hoc error built from format arguments.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc error from format arguments.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while describing, mapping or persisting records.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner {
            Some(inner) => match Arc::try_unwrap(inner) {
                Ok(inner) => {
                    // A consequent that already carries a cause keeps it; the
                    // new cause is attached below it.
                    let cause = match inner.cause {
                        Some(existing) => self.context_impl(existing),
                        None => self,
                    };
                    return Error::with_cause(inner.kind, cause);
                }
                Err(shared) => ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
            },
            None => ErrorKind::Unknown,
        };

        Error::with_cause(kind, self)
    }

    fn with_cause(kind: ErrorKind, cause: Error) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(cause),
            })),
        }
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        let mut err = self;
        while let Some(cause) = err.cause() {
            err = cause;
        }
        err
    }

    /// Returns the error this one was added as context to, if any.
    pub fn cause(&self) -> Option<&Error> {
        self.inner.as_ref().and_then(|inner| inner.cause.as_ref())
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.cause()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    fn find<'a, T>(&'a self, f: impl Fn(&'a ErrorKind) -> Option<T>) -> Option<T> {
        self.chain().find_map(|err| f(err.kind()))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Storage(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => self
                .cause()
                .map(|cause| cause as &(dyn std::error::Error + 'static)),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    Storage(StorageError),
    TypeConversion(TypeConversionError),
    EnumLookup(EnumLookupError),
    MissingTableName(MissingTableNameError),
    InvalidCast(InvalidCastError),
    ImmutableRecordChanged(ImmutableRecordChangedError),
    ConstraintViolation(ConstraintViolation),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            ErrorKind::Anyhow(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::Adhoc(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::Storage(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::TypeConversion(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::EnumLookup(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::MissingTableName(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::InvalidCast(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::ImmutableRecordChanged(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::ConstraintViolation(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::Unknown => f.write_str("unknown rowbind error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
