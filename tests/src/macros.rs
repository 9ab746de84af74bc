/// Builds a [`Row`](rowbind::Row) from `"name": Type = value` entries.
///
/// ```ignore
/// let row = row!("Id": I64 = 1i64, "Email": String = Value::Null);
/// ```
#[macro_export]
macro_rules! row {
    ( $( $name:literal : $ty:ident = $value:expr ),* $(,)? ) => {{
        $crate::rowbind::Row::builder()
            $( .column($name, $crate::rowbind::value::Type::$ty, $value) )*
            .build()
            .unwrap()
    }};
}
