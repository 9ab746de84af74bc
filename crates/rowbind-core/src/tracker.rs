use crate::{Error, Result};

use indexmap::IndexSet;

/// Change tracking state embedded in every tracked record.
///
/// Writes are only recorded once the record has been loaded; values assigned
/// while constructing a record are not changes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tracker {
    modified: IndexSet<&'static str>,
    loaded: bool,
    immutable: bool,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes a property write through the tracker.
    ///
    /// Returns the value to store. Fails without recording anything when the
    /// record is loaded and immutable, so the caller leaves its field as is.
    pub fn modify<T>(&mut self, value: T, column: &'static str) -> Result<T> {
        if !self.loaded {
            return Ok(value);
        }

        if self.immutable {
            return Err(Error::immutable_record_changed(column));
        }

        self.modified.insert(column);
        Ok(value)
    }

    /// Signals that the record now mirrors stored state.
    pub fn mark_loaded(&mut self, immutable: bool) {
        self.loaded = true;
        self.immutable = immutable;
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_immutable(&self) -> bool {
        self.immutable
    }

    /// Modified column names, in the order they were first modified.
    pub fn modified_columns(&self) -> &IndexSet<&'static str> {
        &self.modified
    }

    pub fn is_modified(&self, column: &str) -> bool {
        self.modified.contains(column)
    }

    /// Forgets recorded modifications, e.g. after they were saved.
    pub fn accept_changes(&mut self) {
        self.modified.clear();
    }
}
