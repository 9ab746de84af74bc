use crate::Result;

use rowbind_core::schema::{self, RecordDescriptor};
use rowbind_core::Record;

use dashmap::DashMap;
use std::any::TypeId;
use std::sync::Arc;
use tracing::{debug, trace};

/// Process-lifetime cache of record descriptors, keyed by record type.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    descriptors: DashMap<TypeId, Arc<RecordDescriptor>>,
    builder: schema::Builder,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the descriptor for `T`, building it on first use.
    ///
    /// Concurrent first calls may each build a descriptor; only the first one
    /// inserted is kept and returned to every caller.
    pub fn get_metadata<T: Record>(&self) -> Result<Arc<RecordDescriptor>> {
        let id = TypeId::of::<T>();

        if let Some(descriptor) = self.descriptors.get(&id) {
            trace!(record = T::NAME, "record descriptor cache hit");
            return Ok(descriptor.value().clone());
        }

        let descriptor = Arc::new(self.builder.build(&T::definition())?);

        debug!(
            record = T::NAME,
            kind = ?descriptor.kind,
            columns = descriptor.columns().len(),
            primary_key = descriptor.primary_key().len(),
            "built record descriptor"
        );

        let entry = self.descriptors.entry(id).or_insert(descriptor);
        Ok(entry.value().clone())
    }

    /// Number of cached descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn reset(&self) {
        debug!(descriptors = self.descriptors.len(), "resetting schema registry");
        self.descriptors.clear();
    }
}
