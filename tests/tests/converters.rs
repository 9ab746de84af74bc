use pretty_assertions::assert_eq;
use rowbind::value::Value;
use rowbind::{Runtime, TrackedRecord};
use tests::models::{OrderLine, Setting, User};
use tests::row;

#[test]
fn source_converter_is_chosen_by_storage_type() {
    let rt = Runtime::default();

    let text: Setting = rt
        .map(&row!("Key": String = "dark_mode", "Enabled": String = "Y"))
        .unwrap();
    assert!(*text.enabled());

    let legacy: Setting = rt
        .map(&row!("Key": String = "beta", "Enabled": I32 = -1))
        .unwrap();
    assert!(*legacy.enabled());

    let legacy_off: Setting = rt
        .map(&row!("Key": String = "beta", "Enabled": I32 = 1))
        .unwrap();
    assert!(!*legacy_off.enabled());

    assert_eq!(rt.converter_count(), 2);
}

#[test]
fn default_rules_apply_without_matching_converter() {
    let rt = Runtime::default();

    // No converter reads I64; the general conversion treats non-zero as true
    let setting: Setting = rt
        .map(&row!("Key": String = "k", "Enabled": I64 = 1i64))
        .unwrap();
    assert!(*setting.enabled());
    assert_eq!(rt.converter_count(), 0);
}

#[test]
fn converter_errors_abort_the_row() {
    let rt = Runtime::default();

    let err = rt
        .map::<Setting>(&row!("Key": String = "k", "Enabled": String = "maybe"))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to map column `Enabled` of `Setting`: expected Y or N, got maybe"
    );
}

#[test]
fn converters_are_shared_across_mappers() {
    let rt = Runtime::default();

    rt.map::<Setting>(&row!("Enabled": String = "Y")).unwrap();
    rt.map::<Setting>(&row!("Key": String = "k", "Enabled": String = "N"))
        .unwrap();

    assert_eq!(rt.mapper_count(), 2);
    assert_eq!(rt.converter_count(), 1);

    rt.reset_mapper_cache();
    assert_eq!(rt.converter_count(), 0);
}

#[test]
fn storage_values_apply_target_converter() {
    let rt = Runtime::default();

    let mut setting = Setting::default();
    setting.set_key("dark_mode").unwrap();
    setting.set_enabled(true).unwrap();

    assert_eq!(
        rt.storage_values(&setting).unwrap(),
        [
            ("Key", Value::from("dark_mode")),
            ("Enabled", Value::from("Y")),
            ("Archived", Value::Null),
        ]
    );
}

#[test]
fn storage_values_skip_calculated_columns() {
    let rt = Runtime::default();
    let user: User = rt
        .map(&row!("Id": I64 = 1i64, "DisplayName": String = "shown"))
        .unwrap();

    let columns: Vec<_> = rt
        .storage_values(&user)
        .unwrap()
        .into_iter()
        .map(|(column, _)| column)
        .collect();
    assert_eq!(
        columns,
        ["Id", "Name", "Status", "Email", "Level", "RowVersion"]
    );
}

#[test]
fn modified_values_follow_modification_order() {
    let rt = Runtime::default();
    let mut setting: Setting = rt
        .map(&row!("Key": String = "k", "Enabled": String = "N"))
        .unwrap();

    setting.set_archived(Some(true)).unwrap();
    setting.set_enabled(true).unwrap();

    assert_eq!(
        rt.modified_values(&setting).unwrap(),
        [("Archived", Value::from("Y")), ("Enabled", Value::from("Y"))]
    );

    setting.accept_changes();
    assert!(rt.modified_values(&setting).unwrap().is_empty());
}

#[test]
fn key_values_in_ordinal_order() {
    let rt = Runtime::default();
    let line: OrderLine = rt
        .map(&row!("OrderId": I64 = 10i64, "LineNo": I32 = 2, "Quantity": I32 = 5))
        .unwrap();

    assert_eq!(
        rt.key_values(&line).unwrap(),
        [("OrderId", Value::I64(10)), ("LineNo", Value::I32(2))]
    );
}
