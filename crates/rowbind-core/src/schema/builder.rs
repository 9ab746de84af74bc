use super::{
    ColumnDescriptor, ColumnFlags, ConverterDecl, Direction, FieldDef, RecordDef, RecordDescriptor,
    RecordKind,
};
use crate::convert::{SourceConverter, TargetConverter};
use crate::{Error, Result};

use std::collections::HashMap;
use std::sync::Arc;

/// Validates declarative record tables into descriptors.
#[derive(Debug, Default)]
pub struct Builder {
    _priv: (),
}

/// State for building a single descriptor
struct BuildDescriptor<'a> {
    def: &'a RecordDef,
    columns: Vec<ColumnDescriptor>,
    by_name: HashMap<String, usize>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(&self, def: &RecordDef) -> Result<RecordDescriptor> {
        if def.kind == RecordKind::Tracked && def.table.is_none() {
            return Err(Error::missing_table_name(def.name));
        }

        let mut builder = BuildDescriptor {
            def,
            columns: Vec::with_capacity(def.fields.len()),
            by_name: HashMap::with_capacity(def.fields.len()),
        };

        for (index, field) in def.fields.iter().enumerate() {
            builder.build_column(index, field)?;
        }

        let mut primary_key: Vec<_> = builder
            .columns
            .iter()
            .filter(|column| column.key.is_some())
            .map(|column| column.index)
            .collect();

        // Stable, so equal ordinals keep declaration order
        primary_key.sort_by_key(|index| builder.columns[*index].key);

        Ok(RecordDescriptor {
            name: def.name,
            kind: def.kind,
            immutable: def.kind == RecordKind::Tracked && def.immutable,
            table: def.table,
            schema: def.schema,
            columns: builder.columns,
            by_name: builder.by_name,
            primary_key,
        })
    }
}

impl BuildDescriptor<'_> {
    fn build_column(&mut self, field_index: usize, field: &FieldDef) -> Result<()> {
        let column_name = field.column.unwrap_or(field.name);
        let index = self.columns.len();

        if self
            .by_name
            .insert(column_name.to_lowercase(), index)
            .is_some()
        {
            return Err(self.invalid_cast(
                field,
                format!("column `{column_name}` is mapped more than once"),
            ));
        }

        let source_converters = self.source_converters(field)?;
        let target_converter = self.target_converter(field)?;

        let tracked = self.def.kind == RecordKind::Tracked;

        let flags = if tracked {
            ColumnFlags {
                auto: field.auto,
                calculated: field.calculated,
                version: field.version,
                immutable: self.def.immutable,
            }
        } else {
            ColumnFlags::default()
        };

        self.columns.push(ColumnDescriptor {
            index,
            field: field_index,
            name: field.name,
            column_name,
            ty: field.ty,
            nullable: field.nullable,
            key: if tracked { field.key } else { None },
            flags,
            max_length: field.max_length,
            large: field.large,
            source_converters,
            target_converter,
        });

        Ok(())
    }

    fn source_converters(&self, field: &FieldDef) -> Result<Vec<Arc<dyn SourceConverter>>> {
        let mut converters: Vec<Arc<dyn SourceConverter>> = vec![];

        for decl in declared(field, Direction::Source) {
            let Some(converter) = decl.converter.clone().into_source() else {
                return Err(self.invalid_cast(
                    field,
                    format!("`{}` cannot convert from storage", decl.converter.name()),
                ));
            };

            if !field.ty.is_assignable_from(&converter.field_ty()) {
                return Err(self.invalid_cast(
                    field,
                    format!(
                        "`{}` produces {}, field is {}",
                        decl.converter.name(),
                        converter.field_ty(),
                        field.ty
                    ),
                ));
            }

            let storage_ty = converter.storage_ty();
            if converters.iter().any(|c| c.storage_ty() == storage_ty) {
                return Err(self.invalid_cast(
                    field,
                    format!("more than one source converter reads {storage_ty}"),
                ));
            }

            converters.push(converter);
        }

        Ok(converters)
    }

    fn target_converter(&self, field: &FieldDef) -> Result<Option<Arc<dyn TargetConverter>>> {
        let mut decls = declared(field, Direction::Target);

        let Some(decl) = decls.next() else {
            return Ok(None);
        };

        if decls.next().is_some() {
            return Err(self.invalid_cast(field, "at most one target converter is allowed"));
        }

        let Some(converter) = decl.converter.clone().into_target() else {
            return Err(self.invalid_cast(
                field,
                format!("`{}` cannot convert to storage", decl.converter.name()),
            ));
        };

        if !converter.field_ty().is_assignable_from(&field.ty) {
            return Err(self.invalid_cast(
                field,
                format!(
                    "`{}` accepts {}, field is {}",
                    decl.converter.name(),
                    converter.field_ty(),
                    field.ty
                ),
            ));
        }

        Ok(Some(converter))
    }

    fn invalid_cast(&self, field: &FieldDef, message: impl Into<String>) -> Error {
        Error::invalid_cast(self.def.name, field.name, message)
    }
}

fn declared(field: &FieldDef, direction: Direction) -> impl Iterator<Item = &ConverterDecl> {
    field
        .converters
        .iter()
        .filter(move |decl| decl.direction == direction)
}
