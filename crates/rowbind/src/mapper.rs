use crate::pipeline::{Conversion, ConversionPipeline};
use crate::registry::SchemaRegistry;
use crate::Result;

use rowbind_core::{err, Record, RowReader};

use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::fmt::Write;
use std::sync::Arc;
use tracing::{debug, trace};

/// A compiled row → record function for one row shape.
///
/// Populates the given instance, or a default one when `None` is passed.
pub type MapperFn<T> = Arc<dyn Fn(&dyn RowReader, Option<T>) -> Result<T> + Send + Sync>;

/// Identifies a mapping function.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapperKey {
    pub record: TypeId,

    /// `len:name:TYPE;` for every row column, in order
    pub fingerprint: String,

    /// True when the function populates a caller-provided instance
    pub existing: bool,
}

impl MapperKey {
    pub fn new<T: Record>(reader: &dyn RowReader, existing: bool) -> Self {
        Self {
            record: TypeId::of::<T>(),
            fingerprint: fingerprint(reader),
            existing,
        }
    }
}

/// Builds the shape fingerprint of a row.
///
/// Names are prefixed with their byte length so a name containing `:` or
/// `;` cannot alias a different sequence of columns.
pub fn fingerprint(reader: &dyn RowReader) -> String {
    let mut fingerprint = String::new();

    for index in 0..reader.field_count() {
        let name = reader.field_name(index);

        // Writing to a String cannot fail
        let _ = write!(
            fingerprint,
            "{}:{}:{};",
            name.len(),
            name,
            reader.field_type(index)
        );
    }

    fingerprint
}

/// One matched column of the row shape
struct Step {
    ordinal: usize,
    field: usize,
    column: &'static str,
    conversion: Conversion,
}

/// Cache of mapping functions keyed by record type and row shape.
#[derive(Default)]
pub struct MapperCache {
    /// Values are `MapperFn<T>` for the key's record type
    mappers: DashMap<MapperKey, Arc<dyn Any + Send + Sync>>,
}

impl MapperCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mapping function for `reader`'s shape, building it on a
    /// miss. Racing builders for the same key all return the function that
    /// ended up in the cache.
    pub fn get_or_build<T: Record>(
        &self,
        registry: &SchemaRegistry,
        pipeline: &Arc<ConversionPipeline>,
        reader: &dyn RowReader,
        existing: bool,
    ) -> Result<MapperFn<T>> {
        let key = MapperKey::new::<T>(reader, existing);

        if let Some(mapper) = self.mappers.get(&key) {
            trace!(record = T::NAME, fingerprint = %key.fingerprint, "mapper cache hit");
            return downcast::<T>(mapper.value());
        }

        let mapper: MapperFn<T> = Arc::new(build::<T>(registry, pipeline, reader, &key)?);
        let erased: Arc<dyn Any + Send + Sync> = Arc::new(mapper);

        let entry = self.mappers.entry(key).or_insert(erased);
        downcast::<T>(entry.value())
    }

    /// Number of cached mapping functions.
    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }

    pub fn reset(&self) {
        debug!(mappers = self.mappers.len(), "resetting mapper cache");
        self.mappers.clear();
    }
}

impl core::fmt::Debug for MapperCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MapperCache")
            .field("mappers", &self.mappers.len())
            .finish()
    }
}

fn downcast<T: Record>(mapper: &Arc<dyn Any + Send + Sync>) -> Result<MapperFn<T>> {
    mapper
        .downcast_ref::<MapperFn<T>>()
        .cloned()
        .ok_or_else(|| err!("cached mapper for `{}` has an unexpected type", T::NAME))
}

fn build<T: Record>(
    registry: &SchemaRegistry,
    pipeline: &Arc<ConversionPipeline>,
    reader: &dyn RowReader,
    key: &MapperKey,
) -> Result<impl Fn(&dyn RowReader, Option<T>) -> Result<T> + Send + Sync + 'static> {
    let descriptor = registry.get_metadata::<T>()?;
    let width = reader.field_count();

    let mut steps = Vec::with_capacity(width);

    for ordinal in 0..width {
        // Unmapped columns are skipped
        let Some(column) = descriptor.column_by_name(reader.field_name(ordinal)) else {
            continue;
        };

        steps.push(Step {
            ordinal,
            field: column.field,
            column: column.column_name,
            conversion: pipeline.plan(column, reader.field_type(ordinal)),
        });
    }

    debug!(
        record = T::NAME,
        fingerprint = %key.fingerprint,
        existing = key.existing,
        matched = steps.len(),
        skipped = width - steps.len(),
        "built mapper"
    );

    let pipeline = pipeline.clone();
    let tracked = !descriptor.is_simple();

    Ok(move |reader: &dyn RowReader, existing: Option<T>| {
        if reader.field_count() != width {
            return Err(err!(
                "mapper for `{}` expects {} columns, row has {}",
                T::NAME,
                width,
                reader.field_count()
            ));
        }

        let mut record = existing.unwrap_or_default();

        for step in &steps {
            // Null leaves the field untouched
            if reader.is_null(step.ordinal) {
                continue;
            }

            let value = pipeline
                .apply(&step.conversion, reader.value(step.ordinal))
                .and_then(|value| record.load_field(step.field, value));

            if let Err(cause) = value {
                return Err(cause.context(err!(
                    "failed to map column `{}` of `{}`",
                    step.column,
                    T::NAME
                )));
            }
        }

        if tracked {
            if let Some(tracker) = record.change_tracker() {
                tracker.mark_loaded(T::IMMUTABLE);
            }
        }

        Ok(record)
    })
}
