//! Value converters between a storage type and a field type.
//!
//! A converter is declared on a field with `#[convert(source = T)]` or
//! `#[convert(target = T)]`. Each direction is a separate capability; the
//! schema builder asks the declared converter for the capability it was
//! declared with and rejects the declaration when it is missing.

use crate::value::{Primitive, Type, Value};
use crate::Result;

use std::sync::Arc;

/// A converter declared on a record field.
pub trait Converter: Send + Sync + 'static {
    /// Name used in diagnostics.
    fn name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// The storage → field capability, if implemented.
    fn into_source(self: Arc<Self>) -> Option<Arc<dyn SourceConverter>> {
        None
    }

    /// The field → storage capability, if implemented.
    fn into_target(self: Arc<Self>) -> Option<Arc<dyn TargetConverter>> {
        None
    }
}

/// Converts values read from storage into a field's value type.
pub trait SourceConverter: Send + Sync + 'static {
    /// Storage type this converter applies to. The mapper only selects the
    /// converter when the row column reports exactly this type.
    fn storage_ty(&self) -> Type;

    /// Type of the values produced.
    fn field_ty(&self) -> Type;

    fn from_storage(&self, value: Value) -> Result<Value>;
}

/// Converts a field's value into its storage representation.
pub trait TargetConverter: Send + Sync + 'static {
    /// Type of the field values accepted.
    fn field_ty(&self) -> Type;

    /// Storage type produced.
    fn storage_ty(&self) -> Type;

    fn to_storage(&self, value: Value) -> Result<Value>;
}

/// A typed two-way conversion, adapted into both capabilities by [`Dual`].
pub trait Conversion: Send + Sync + 'static {
    type Storage: Primitive;
    type Field: Primitive;

    fn from_storage(&self, value: Self::Storage) -> Result<Self::Field>;

    fn to_storage(&self, value: Self::Field) -> Result<Self::Storage>;
}

/// Implements both converter capabilities by delegating to a [`Conversion`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Dual<C>(pub C);

impl<C: Conversion> Converter for Dual<C> {
    fn name(&self) -> &'static str {
        core::any::type_name::<C>()
    }

    fn into_source(self: Arc<Self>) -> Option<Arc<dyn SourceConverter>> {
        Some(self)
    }

    fn into_target(self: Arc<Self>) -> Option<Arc<dyn TargetConverter>> {
        Some(self)
    }
}

impl<C: Conversion> SourceConverter for Dual<C> {
    fn storage_ty(&self) -> Type {
        C::Storage::ty()
    }

    fn field_ty(&self) -> Type {
        C::Field::ty()
    }

    fn from_storage(&self, value: Value) -> Result<Value> {
        let storage = C::Storage::load(value)?;
        Ok(self.0.from_storage(storage)?.to_value())
    }
}

impl<C: Conversion> TargetConverter for Dual<C> {
    fn field_ty(&self) -> Type {
        C::Field::ty()
    }

    fn storage_ty(&self) -> Type {
        C::Storage::ty()
    }

    fn to_storage(&self, value: Value) -> Result<Value> {
        let field = C::Field::load(value)?;
        Ok(self.0.to_storage(field)?.to_value())
    }
}
