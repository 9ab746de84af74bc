use crate::Result;

use rowbind_core::convert::SourceConverter;
use rowbind_core::schema::ColumnDescriptor;
use rowbind_core::value::{EnumDef, Type, Value};
use rowbind_core::Error;

use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// How text is matched against enum member names.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EnumTextMatch {
    /// Member names must match exactly
    #[default]
    Exact,

    /// Fall back to an ASCII case-insensitive match when no member matches
    /// exactly
    CaseInsensitive,
}

/// How one row value reaches its field.
#[derive(Clone)]
pub enum Conversion {
    /// The storage value is already of the field type
    Identity,

    /// A declared source converter
    Source(Arc<dyn SourceConverter>),

    /// Text looked up by enum member name
    EnumName(&'static EnumDef),

    /// General value conversion into the given type
    Cast(Type),
}

/// Converter bookkeeping shared by every mapping function.
#[derive(Default)]
pub struct ConversionPipeline {
    /// Append-only; deduplicated by identity
    converters: RwLock<Vec<Arc<dyn SourceConverter>>>,

    /// Enum name → member names and discriminants
    enum_names: DashMap<&'static str, Arc<HashMap<&'static str, i64>>>,

    enum_text_match: EnumTextMatch,
}

impl ConversionPipeline {
    pub fn new(enum_text_match: EnumTextMatch) -> Self {
        Self {
            enum_text_match,
            ..Self::default()
        }
    }

    pub fn enum_text_match(&self) -> EnumTextMatch {
        self.enum_text_match
    }

    /// Selects how values of `storage_ty` are converted into `column`.
    ///
    /// A declared source converter for exactly `storage_ty` wins. Otherwise
    /// the default rules apply in order: enum fields read from a differently
    /// sized integer are cast, assignable values pass through, enum fields
    /// read from text are looked up by name, and anything else is cast.
    pub fn plan(&self, column: &ColumnDescriptor, storage_ty: Type) -> Conversion {
        if let Some(converter) = column.source_converter_for(&storage_ty) {
            return Conversion::Source(self.register(converter));
        }

        if let Type::Enum(def) = column.ty {
            if storage_ty.is_integral() {
                return if storage_ty == def.repr {
                    Conversion::Identity
                } else {
                    Conversion::Cast(def.repr)
                };
            }
        }

        if column.ty.is_assignable_from(&storage_ty) {
            return Conversion::Identity;
        }

        match column.ty {
            Type::Enum(def) if storage_ty.is_string() => Conversion::EnumName(def),
            ty => Conversion::Cast(ty),
        }
    }

    pub fn apply(&self, conversion: &Conversion, value: Value) -> Result<Value> {
        match conversion {
            Conversion::Identity => Ok(value),
            Conversion::Source(converter) => converter.from_storage(value),
            Conversion::EnumName(def) => match value {
                Value::String(text) => self.enum_from_name(def, &text),
                value => value.cast(&def.repr),
            },
            Conversion::Cast(ty) => value.cast(ty),
        }
    }

    /// Adds `converter` to the converter list unless it is already there,
    /// returning the registered instance.
    pub fn register(&self, converter: &Arc<dyn SourceConverter>) -> Arc<dyn SourceConverter> {
        {
            let converters = self.converters.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(existing) = converters.iter().find(|c| Arc::ptr_eq(c, converter)) {
                return existing.clone();
            }
        }

        let mut converters = self.converters.write().unwrap_or_else(PoisonError::into_inner);

        // Another thread may have registered it in between
        if let Some(existing) = converters.iter().find(|c| Arc::ptr_eq(c, converter)) {
            return existing.clone();
        }

        converters.push(converter.clone());
        converter.clone()
    }

    /// The converter at `index` in registration order.
    pub fn converter(&self, index: usize) -> Option<Arc<dyn SourceConverter>> {
        let converters = self.converters.read().unwrap_or_else(PoisonError::into_inner);
        converters.get(index).cloned()
    }

    pub fn converter_count(&self) -> usize {
        self.converters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Resolves an enum member by name, as a value of the enum's
    /// representation.
    pub fn enum_from_name(&self, def: &'static EnumDef, text: &str) -> Result<Value> {
        let names = self.enum_names(def);

        let discriminant = match names.get(text) {
            Some(discriminant) => *discriminant,
            None if self.enum_text_match == EnumTextMatch::CaseInsensitive => names
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(text))
                .map(|(_, discriminant)| *discriminant)
                .ok_or_else(|| Error::enum_lookup(def.ident, text))?,
            None => return Err(Error::enum_lookup(def.ident, text)),
        };

        Value::I64(discriminant).cast(&def.repr)
    }

    fn enum_names(&self, def: &'static EnumDef) -> Arc<HashMap<&'static str, i64>> {
        if let Some(names) = self.enum_names.get(def.name) {
            return names.value().clone();
        }

        let names: HashMap<_, _> = def
            .variants
            .iter()
            .map(|variant| (variant.name, variant.discriminant))
            .collect();

        debug!(enum_name = def.name, members = names.len(), "cached enum member names");

        self.enum_names
            .entry(def.name)
            .or_insert(Arc::new(names))
            .value()
            .clone()
    }

    /// Clears the converter list and the enum name cache.
    pub fn reset(&self) {
        self.converters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.enum_names.clear();
    }
}

impl core::fmt::Debug for ConversionPipeline {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConversionPipeline")
            .field("converters", &self.converter_count())
            .field("enum_names", &self.enum_names.len())
            .field("enum_text_match", &self.enum_text_match)
            .finish()
    }
}

impl core::fmt::Debug for Conversion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Identity => f.write_str("Identity"),
            Self::Source(converter) => write!(f, "Source({})", converter.storage_ty()),
            Self::EnumName(def) => write!(f, "EnumName({})", def.ident),
            Self::Cast(ty) => write!(f, "Cast({ty})"),
        }
    }
}
