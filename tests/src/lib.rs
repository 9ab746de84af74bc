#[macro_use]
mod macros;


pub use rowbind;

use std::fmt;

/// A native error as raised by a storage driver.
#[derive(Debug)]
pub struct NativeError(pub String);

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for NativeError {}
