mod builder;
pub use builder::Builder;

use crate::mapper::{MapperCache, MapperFn};
use crate::pipeline::ConversionPipeline;
use crate::registry::SchemaRegistry;
use crate::translate::Translator;
use crate::Result;

use rowbind_core::schema::{ColumnDescriptor, RecordDescriptor};
use rowbind_core::value::Value;
use rowbind_core::{Error, Record, RowReader, TrackedRecord};

use std::sync::Arc;

/// Entry point to the mapping engine.
///
/// Owns the descriptor, converter and mapper caches. Clones share them.
#[derive(Debug, Clone)]
pub struct Runtime {
    registry: Arc<SchemaRegistry>,
    pipeline: Arc<ConversionPipeline>,
    mappers: Arc<MapperCache>,
    translator: Arc<Translator>,
}

impl Runtime {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn pipeline(&self) -> &ConversionPipeline {
        &self.pipeline
    }

    pub fn get_metadata<T: Record>(&self) -> Result<Arc<RecordDescriptor>> {
        self.registry.get_metadata::<T>()
    }

    pub fn reset_metadata_cache(&self) {
        self.registry.reset();
    }

    /// Returns the cached mapping function for `reader`'s shape.
    pub fn get_or_build_mapper<T: Record>(
        &self,
        reader: &dyn RowReader,
        populate_existing: bool,
    ) -> Result<MapperFn<T>> {
        self.mappers
            .get_or_build::<T>(&self.registry, &self.pipeline, reader, populate_existing)
    }

    /// Clears the mapper cache along with the converter list and enum name
    /// cache it draws on.
    pub fn reset_mapper_cache(&self) {
        self.mappers.reset();
        self.pipeline.reset();
    }

    pub fn mapper_count(&self) -> usize {
        self.mappers.len()
    }

    pub fn converter_count(&self) -> usize {
        self.pipeline.converter_count()
    }

    /// Maps one row into a new record.
    pub fn map<T: Record>(&self, reader: &dyn RowReader) -> Result<T> {
        let mapper = self.get_or_build_mapper::<T>(reader, false)?;
        mapper(reader, None)
    }

    /// Maps one row onto an existing record. Null columns leave the record's
    /// fields untouched.
    pub fn map_into<T: Record>(&self, reader: &dyn RowReader, existing: T) -> Result<T> {
        let mapper = self.get_or_build_mapper::<T>(reader, true)?;
        mapper(reader, Some(existing))
    }

    /// Maps every row. Consecutive rows of the same shape reuse one mapper.
    pub fn map_all<T, R>(&self, readers: impl IntoIterator<Item = R>) -> Result<Vec<T>>
    where
        T: Record,
        R: RowReader,
    {
        let mut records = vec![];
        let mut current: Option<(String, MapperFn<T>)> = None;

        for reader in readers {
            let fingerprint = crate::mapper::fingerprint(&reader);

            let mapper = match &current {
                Some((shape, mapper)) if *shape == fingerprint => mapper.clone(),
                _ => {
                    let mapper = self.get_or_build_mapper::<T>(&reader, false)?;
                    current = Some((fingerprint, mapper.clone()));
                    mapper
                }
            };

            records.push(mapper(&reader, None)?);
        }

        Ok(records)
    }

    /// Values to write for every non-calculated column, in column order, with
    /// target converters applied.
    pub fn storage_values<T: Record>(&self, record: &T) -> Result<Vec<(&'static str, Value)>> {
        let descriptor = self.get_metadata::<T>()?;

        descriptor
            .columns()
            .iter()
            .filter(|column| column.is_writable())
            .map(|column| Ok((column.column_name, to_storage(column, record)?)))
            .collect()
    }

    /// Like [`storage_values`](Self::storage_values), restricted to modified
    /// columns in the order they were first modified.
    pub fn modified_values<T: TrackedRecord>(
        &self,
        record: &T,
    ) -> Result<Vec<(&'static str, Value)>> {
        let descriptor = self.get_metadata::<T>()?;

        record
            .modified_columns()
            .iter()
            .filter_map(|name| descriptor.column_by_name(name))
            .filter(|column| column.is_writable())
            .map(|column| Ok((column.column_name, to_storage(column, record)?)))
            .collect()
    }

    /// Primary key values in key ordinal order.
    pub fn key_values<T: Record>(&self, record: &T) -> Result<Vec<(&'static str, Value)>> {
        let descriptor = self.get_metadata::<T>()?;

        descriptor
            .primary_key()
            .map(|column| Ok((column.column_name, to_storage(column, record)?)))
            .collect()
    }

    /// Classifies a native storage error.
    pub fn translate<E>(&self, err: E) -> Error
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.translator.translate(err)
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Builder::default().build()
    }
}

fn to_storage<T: Record>(column: &ColumnDescriptor, record: &T) -> Result<Value> {
    let value = record.field_value(column.field);

    match &column.target_converter {
        Some(converter) if !value.is_null() => converter.to_storage(value),
        _ => Ok(value),
    }
}
