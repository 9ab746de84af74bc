use super::Error;

/// A native storage error that could not be classified.
#[derive(Debug)]
pub(super) struct StorageError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        // Display the error and walk its source chain
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Wraps a native storage error unchanged.
    ///
    /// This is how errors raised by the SQL execution layer enter rowbind;
    /// the translator returns this form when no violation pattern matches.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Storage(StorageError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is an unclassified storage error.
    pub fn is_storage(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Storage(_))
    }

    /// Returns the native storage error carried anywhere in the chain.
    pub fn storage_source(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.find(|kind| match kind {
            super::ErrorKind::Storage(err) => Some(err.inner.as_ref()),
            _ => None,
        })
    }
}
