use super::Error;

/// The kind of storage constraint a native error reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    PrimaryKey,
    UniqueKey,
    UniqueIndex,
    ForeignKey,
    NullNotAllowed,
    CheckConstraint,
}

/// A classified storage constraint violation.
///
/// Whatever the storage engine's message named is captured here; parts the
/// message did not mention stay `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    pub kind: ConstraintKind,

    /// Table (or object) the violation occurred in
    pub table: Option<String>,

    /// Name of the violated constraint or index
    pub constraint: Option<String>,

    /// Offending column, when reported
    pub column: Option<String>,

    /// The duplicate key value, for key and index violations
    pub duplicate_key: Option<String>,
}

impl std::error::Error for ConstraintViolation {}

impl core::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(match self {
            ConstraintKind::PrimaryKey => "primary key violation",
            ConstraintKind::UniqueKey => "unique key violation",
            ConstraintKind::UniqueIndex => "unique index violation",
            ConstraintKind::ForeignKey => "foreign key violation",
            ConstraintKind::NullNotAllowed => "null not allowed",
            ConstraintKind::CheckConstraint => "check constraint violation",
        })
    }
}

impl core::fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.kind, f)?;

        let mut sep = ": ";
        if let Some(constraint) = &self.constraint {
            write!(f, "{sep}constraint `{constraint}`")?;
            sep = " ";
        }
        if let Some(column) = &self.column {
            write!(f, "{sep}column `{column}`")?;
            sep = " ";
        }
        if let Some(table) = &self.table {
            let prefix = if sep == ": " { sep } else { " on " };
            write!(f, "{prefix}table `{table}`")?;
        }
        if let Some(key) = &self.duplicate_key {
            write!(f, " (duplicate key {key})")?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates a classified constraint violation.
    ///
    /// The translator attaches it as context to the native storage error so
    /// the original stays reachable through [`Error::cause`].
    pub fn classified(violation: ConstraintViolation) -> Error {
        Error::from(super::ErrorKind::ConstraintViolation(violation))
    }

    /// Returns the classified violation, if this error is one.
    pub fn constraint_violation(&self) -> Option<&ConstraintViolation> {
        match self.kind() {
            super::ErrorKind::ConstraintViolation(violation) => Some(violation),
            _ => None,
        }
    }

    fn is_violation(&self, kind: ConstraintKind) -> bool {
        self.constraint_violation()
            .is_some_and(|violation| violation.kind == kind)
    }

    pub fn is_primary_key_violation(&self) -> bool {
        self.is_violation(ConstraintKind::PrimaryKey)
    }

    pub fn is_unique_key_violation(&self) -> bool {
        self.is_violation(ConstraintKind::UniqueKey)
    }

    pub fn is_unique_index_violation(&self) -> bool {
        self.is_violation(ConstraintKind::UniqueIndex)
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        self.is_violation(ConstraintKind::ForeignKey)
    }

    pub fn is_null_not_allowed(&self) -> bool {
        self.is_violation(ConstraintKind::NullNotAllowed)
    }

    pub fn is_check_constraint_violation(&self) -> bool {
        self.is_violation(ConstraintKind::CheckConstraint)
    }
}
