//! Classification of native storage errors.
//!
//! A [`Dialect`] is an ordered list of message patterns for one storage
//! engine. The first pattern that matches decides the violation kind; named
//! capture groups `table`, `constraint`, `column` and `value` supply the
//! details. Messages no pattern matches stay unclassified.

use rowbind_core::{ConstraintKind, ConstraintViolation, Error};

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static PRIMARY_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)violation of primary key constraint '(?P<constraint>[^']*)'.*?in object '(?P<table>[^']*)'",
    )
    .expect("Invalid primary key regex")
});

static UNIQUE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)violation of unique key constraint '(?P<constraint>[^']*)'.*?in object '(?P<table>[^']*)'",
    )
    .expect("Invalid unique key regex")
});

static UNIQUE_INDEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)cannot insert duplicate key row in object '(?P<table>[^']*)' with unique index '(?P<constraint>[^']*)'",
    )
    .expect("Invalid unique index regex")
});

static FOREIGN_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)statement conflicted with the (?:foreign key|foreign key same table) constraint "(?P<constraint>[^"]*)".*?table "(?P<table>[^"]*)"(?:, column '(?P<column>[^']*)')?"#,
    )
    .expect("Invalid foreign key regex")
});

static REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)statement conflicted with the reference constraint "(?P<constraint>[^"]*)".*?table "(?P<table>[^"]*)"(?:, column '(?P<column>[^']*)')?"#,
    )
    .expect("Invalid reference constraint regex")
});

static NULL_NOT_ALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)cannot insert the value null into column '(?P<column>[^']*)', table '(?P<table>[^']*)'",
    )
    .expect("Invalid null insert regex")
});

static CHECK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)statement conflicted with the check constraint "(?P<constraint>[^"]*)".*?table "(?P<table>[^"]*)"(?:, column '(?P<column>[^']*)')?"#,
    )
    .expect("Invalid check constraint regex")
});

static DUPLICATE_KEY_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)duplicate key value is \((?P<value>.*?)\)\.?\s*$")
        .expect("Invalid duplicate key value regex")
});

/// An engine-specific set of error message patterns, tried in order.
#[derive(Debug, Clone)]
pub struct Dialect {
    name: &'static str,
    rules: Vec<Rule>,
}

#[derive(Debug, Clone)]
struct Rule {
    kind: ConstraintKind,
    pattern: Regex,
}

impl Dialect {
    /// An empty dialect; it classifies nothing until rules are added.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rules: vec![],
        }
    }

    /// Appends a rule. Rules added earlier take priority.
    pub fn rule(mut self, kind: ConstraintKind, pattern: Regex) -> Self {
        self.rules.push(Rule { kind, pattern });
        self
    }

    /// Microsoft SQL Server message wording.
    pub fn sql_server() -> Self {
        Self::new("sql_server")
            .rule(ConstraintKind::PrimaryKey, PRIMARY_KEY.clone())
            .rule(ConstraintKind::UniqueKey, UNIQUE_KEY.clone())
            .rule(ConstraintKind::UniqueIndex, UNIQUE_INDEX.clone())
            .rule(ConstraintKind::ForeignKey, FOREIGN_KEY.clone())
            .rule(ConstraintKind::ForeignKey, REFERENCE.clone())
            .rule(ConstraintKind::NullNotAllowed, NULL_NOT_ALLOWED.clone())
            .rule(ConstraintKind::CheckConstraint, CHECK.clone())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Classifies a native error message.
    pub fn classify(&self, message: &str) -> Option<ConstraintViolation> {
        self.rules.iter().find_map(|rule| {
            let captures = rule.pattern.captures(message)?;
            let group = |name| captures.name(name).map(|m| m.as_str().to_string());

            let duplicate_key = match rule.kind {
                ConstraintKind::PrimaryKey
                | ConstraintKind::UniqueKey
                | ConstraintKind::UniqueIndex => group("value").or_else(|| {
                    DUPLICATE_KEY_VALUE
                        .captures(message)
                        .and_then(|c| c.name("value"))
                        .map(|m| m.as_str().to_string())
                }),
                _ => group("value"),
            };

            Some(ConstraintViolation {
                kind: rule.kind,
                table: group("table"),
                constraint: group("constraint"),
                column: group("column"),
                duplicate_key,
            })
        })
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::sql_server()
    }
}

/// Turns native storage errors into rowbind errors.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    dialect: Dialect,
}

impl Translator {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Wraps `err` as a storage error, classified when its message matches one
    /// of the dialect's patterns. The native error stays reachable through
    /// [`Error::storage_source`] and `std::error::Error::source`.
    pub fn translate<E>(&self, err: E) -> Error
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let message = err.to_string();

        match self.dialect.classify(&message) {
            Some(violation) => {
                debug!(
                    dialect = self.dialect.name,
                    kind = ?violation.kind,
                    table = violation.table.as_deref(),
                    constraint = violation.constraint.as_deref(),
                    "classified storage error"
                );
                Error::storage(err).context(Error::classified(violation))
            }
            None => Error::storage(err),
        }
    }
}
