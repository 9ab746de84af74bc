use pretty_assertions::assert_eq;
use rowbind::schema::RecordKind;
use rowbind::Runtime;
use tests::models::{Counter, OrderLine, Orphan, User, UserSummary, WriteOnlyCounter};

use std::sync::Arc;

fn column_names(rt: &Runtime) -> Vec<&'static str> {
    rt.get_metadata::<User>()
        .unwrap()
        .columns()
        .iter()
        .map(|column| column.column_name)
        .collect()
}

#[test]
fn metadata_is_built_once() {
    let rt = Runtime::default();

    let first = rt.get_metadata::<User>().unwrap();
    let second = rt.get_metadata::<User>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(rt.registry().len(), 1);
}

#[test]
fn rebuild_after_reset_is_identical() {
    let rt = Runtime::default();
    let before = column_names(&rt);

    rt.reset_metadata_cache();
    assert!(rt.registry().is_empty());

    assert_eq!(column_names(&rt), before);
}

#[test]
fn tracked_record_descriptor() {
    let rt = Runtime::default();
    let user = rt.get_metadata::<User>().unwrap();

    assert_eq!(user.kind, RecordKind::Tracked);
    assert_eq!(user.qualified_table_name().as_deref(), Some("dbo.Users"));
    assert_eq!(
        column_names(&rt),
        ["Id", "Name", "Status", "Email", "Level", "RowVersion", "DisplayName"]
    );

    let id = user.column_by_name("id").unwrap();
    assert!(id.flags.auto);
    assert_eq!(id.key, Some(0));

    let name = user.column_by_name("Name").unwrap();
    assert_eq!(name.name, "name");
    assert_eq!(name.max_length, Some(100));

    assert!(user.column_by_name("Email").unwrap().nullable);
    assert!(user.column_by_name("DisplayName").unwrap().flags.calculated);
    assert_eq!(user.version_column().unwrap().column_name, "RowVersion");
    assert!(user.column_by_name("scratch").is_none());
}

#[test]
fn composite_key_orders_by_ordinal() {
    let rt = Runtime::default();
    let line = rt.get_metadata::<OrderLine>().unwrap();

    let key: Vec<_> = line.primary_key().map(|column| column.column_name).collect();
    assert_eq!(key, ["OrderId", "LineNo"]);
}

#[test]
fn simple_record_uses_field_names() {
    let rt = Runtime::default();
    let summary = rt.get_metadata::<UserSummary>().unwrap();

    assert!(summary.is_simple());
    assert_eq!(summary.table, None);
    assert_eq!(summary.primary_key().len(), 0);

    let names: Vec<_> = summary.columns().iter().map(|c| c.column_name).collect();
    assert_eq!(names, ["Id", "Name", "level", "priority"]);
}

#[test]
fn tracked_record_without_table_fails() {
    let rt = Runtime::default();

    let err = rt.get_metadata::<Orphan>().unwrap_err();
    assert!(err.is_missing_table_name());
    assert!(err.to_string().contains("Orphan"));
    assert!(rt.registry().is_empty());
}

#[test]
fn mistyped_converter_fails_at_registration() {
    let rt = Runtime::default();

    let err = rt.get_metadata::<Counter>().unwrap_err();
    assert!(err.is_invalid_cast());
    assert!(err.to_string().contains("Counter::count"));
}

#[test]
fn converter_without_capability_fails_at_registration() {
    let rt = Runtime::default();

    let err = rt.get_metadata::<WriteOnlyCounter>().unwrap_err();
    assert!(err.is_invalid_cast());
    assert!(err.to_string().contains("cannot convert from storage"));
}

#[test]
fn schema_errors_surface_from_mapping() {
    let rt = Runtime::default();
    let row = tests::row!("Id": I64 = 1i64);

    assert!(rt.map::<Orphan>(&row).unwrap_err().is_missing_table_name());
}
