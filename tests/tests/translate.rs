use pretty_assertions::assert_eq;
use rowbind::{ConstraintKind, Dialect, Runtime};
use tests::NativeError;

use regex::Regex;
use std::error::Error as _;

#[test]
fn primary_key_violation_keeps_cause() {
    let rt = Runtime::default();
    let native = NativeError(
        "violation of PRIMARY KEY constraint 'PK_Users'. Cannot insert duplicate key in object 'dbo.Users'"
            .to_string(),
    );

    let err = rt.translate(native);
    assert!(err.is_primary_key_violation());

    let violation = err.constraint_violation().unwrap();
    assert_eq!(violation.kind, ConstraintKind::PrimaryKey);
    assert_eq!(violation.table.as_deref(), Some("dbo.Users"));
    assert_eq!(violation.constraint.as_deref(), Some("PK_Users"));

    let cause = err.storage_source().unwrap();
    assert!(cause.downcast_ref::<NativeError>().is_some());
    assert!(err.source().is_some());
}

#[test]
fn unique_key_is_checked_after_primary_key() {
    let rt = Runtime::default();
    let err = rt.translate(NativeError(
        "Violation of UNIQUE KEY constraint 'UQ_Users_Email'. Cannot insert duplicate key in object 'dbo.Users'. The duplicate key value is (ada@example.com)."
            .to_string(),
    ));

    assert!(err.is_unique_key_violation());
    assert!(!err.is_primary_key_violation());
    assert_eq!(
        err.constraint_violation().unwrap().duplicate_key.as_deref(),
        Some("ada@example.com")
    );
}

#[test]
fn null_insert_is_classified() {
    let rt = Runtime::default();
    let err = rt.translate(NativeError(
        "Cannot insert the value NULL into column 'Name', table 'Shop.dbo.Users'; column does not allow nulls. INSERT fails."
            .to_string(),
    ));

    assert!(err.is_null_not_allowed());
    assert_eq!(err.constraint_violation().unwrap().column.as_deref(), Some("Name"));
}

#[test]
fn unmatched_error_passes_through() {
    let rt = Runtime::default();
    let err = rt.translate(NativeError("Transaction was deadlocked".to_string()));

    assert!(err.is_storage());
    assert!(err.constraint_violation().is_none());
    assert_eq!(err.to_string(), "Transaction was deadlocked");
}

#[test]
fn custom_dialect() {
    let dialect = Dialect::new("postgres").rule(
        ConstraintKind::UniqueKey,
        Regex::new(r#"duplicate key value violates unique constraint "(?P<constraint>[^"]+)""#)
            .unwrap(),
    );
    let rt = Runtime::builder().dialect(dialect).build();

    let err = rt.translate(NativeError(
        "duplicate key value violates unique constraint \"users_email_key\"".to_string(),
    ));
    assert!(err.is_unique_key_violation());

    // SQL Server wording is no longer recognized
    let err = rt.translate(NativeError(
        "violation of PRIMARY KEY constraint 'PK_Users'. in object 'dbo.Users'".to_string(),
    ));
    assert!(err.is_storage());
}
