use super::{Type, Value};
use crate::{Error, Result};

use uuid::Uuid;

/// A field value type that records can declare.
///
/// `ty()` is the type the mapper converts storage values into before calling
/// `load`.
pub trait Primitive: Sized {
    const NULLABLE: bool = false;

    fn ty() -> Type;

    fn load(value: Value) -> Result<Self>;

    fn to_value(&self) -> Value;
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $variant:ident, )* ) => {
        $(
            impl Primitive for $ty {
                fn ty() -> Type {
                    Type::$variant
                }

                fn load(value: Value) -> Result<Self> {
                    value.try_into()
                }

                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

impl Primitive for String {
    fn ty() -> Type {
        Type::String
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            value => Err(Error::type_conversion(value, &Type::String)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Primitive for Vec<u8> {
    fn ty() -> Type {
        Type::Bytes
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            value => Err(Error::type_conversion(value, &Type::Bytes)),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }
}

impl Primitive for Uuid {
    fn ty() -> Type {
        Type::Uuid
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Uuid(v) => Ok(v),
            value => Err(Error::type_conversion(value, &Type::Uuid)),
        }
    }

    fn to_value(&self) -> Value {
        Value::Uuid(*self)
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const NULLABLE: bool = true;

    fn ty() -> Type {
        T::ty()
    }

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}
