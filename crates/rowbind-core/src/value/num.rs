use super::{Type, Value};

macro_rules! impl_num {
    (
        $(
            $variant:ident($ty:ty)
        )*
    ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            // Cross-type conversions go through `Value::cast`, which range
            // checks narrowing and parses text.
            impl TryFrom<Value> for $ty {
                type Error = crate::Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value.cast(&Type::$variant)? {
                        Value::$variant(val) => Ok(val),
                        value => Err(crate::Error::type_conversion(value, &Type::$variant)),
                    }
                }
            }
        )*
    };
}

impl_num! {
    Bool(bool)
    I8(i8)
    I16(i16)
    I32(i32)
    I64(i64)
    U8(u8)
    U16(u16)
    U32(u32)
    U64(u64)
    F32(f32)
    F64(f64)
}
