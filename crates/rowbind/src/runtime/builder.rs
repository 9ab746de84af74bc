use super::Runtime;
use crate::mapper::MapperCache;
use crate::pipeline::{ConversionPipeline, EnumTextMatch};
use crate::registry::SchemaRegistry;
use crate::translate::{Dialect, Translator};

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    enum_text_match: EnumTextMatch,

    /// Error message patterns; SQL Server wording when unset
    dialect: Option<Dialect>,
}

impl Builder {
    /// How text columns are matched against enum member names.
    pub fn enum_text_match(&mut self, enum_text_match: EnumTextMatch) -> &mut Self {
        self.enum_text_match = enum_text_match;
        self
    }

    /// Message patterns used to classify storage errors.
    pub fn dialect(&mut self, dialect: Dialect) -> &mut Self {
        self.dialect = Some(dialect);
        self
    }

    pub fn build(&self) -> Runtime {
        let dialect = self.dialect.clone().unwrap_or_default();

        Runtime {
            registry: Arc::new(SchemaRegistry::new()),
            pipeline: Arc::new(ConversionPipeline::new(self.enum_text_match)),
            mappers: Arc::new(MapperCache::new()),
            translator: Arc::new(Translator::new(dialect)),
        }
    }
}
