use super::{Type, Value};
use crate::{Error, Result};

use uuid::Uuid;

impl Value {
    /// Converts the value to `ty` using the general conversion rules.
    ///
    /// Null passes through untouched. Integral conversions are range checked,
    /// floating point values round half to even before narrowing to an
    /// integer, and text is parsed. Enum targets convert to the enum's
    /// integral representation; member validation happens when the field
    /// loads the value.
    pub fn cast(self, ty: &Type) -> Result<Value> {
        if self.is_null() {
            return Ok(self);
        }

        if let Type::Enum(def) = ty {
            return self.cast(&def.repr);
        }

        if self.ty().as_ref() == Some(ty) {
            return Ok(self);
        }

        let converted = match ty {
            Type::Bool => self.to_bool_lossy().map(Value::Bool),
            Type::I8 | Type::I16 | Type::I32 | Type::I64 | Type::U8 | Type::U16 | Type::U32 | Type::U64 => {
                self.to_i128().and_then(|n| from_i128(n, ty))
            }
            Type::F32 => self
                .to_f64()
                .and_then(|v| {
                    let narrowed = v as f32;
                    (narrowed.is_finite() || !v.is_finite()).then_some(narrowed)
                })
                .map(Value::F32),
            Type::F64 => self.to_f64().map(Value::F64),
            Type::String => self.to_text(),
            Type::Bytes => match &self {
                Value::Uuid(v) => Some(Value::Bytes(v.as_bytes().to_vec())),
                _ => None,
            },
            Type::Uuid => match &self {
                Value::String(v) => Uuid::parse_str(v.trim()).ok().map(Value::Uuid),
                Value::Bytes(v) => Uuid::from_slice(v).ok().map(Value::Uuid),
                _ => None,
            },
            Type::Enum(_) => unreachable!(),
        };

        match converted {
            Some(value) => Ok(value),
            None => Err(Error::type_conversion(self, ty)),
        }
    }

    fn to_i128(&self) -> Option<i128> {
        match *self {
            Value::Bool(v) => Some(v as i128),
            Value::I8(v) => Some(v.into()),
            Value::I16(v) => Some(v.into()),
            Value::I32(v) => Some(v.into()),
            Value::I64(v) => Some(v.into()),
            Value::U8(v) => Some(v.into()),
            Value::U16(v) => Some(v.into()),
            Value::U32(v) => Some(v.into()),
            Value::U64(v) => Some(v.into()),
            Value::F32(v) => float_to_i128(v.into()),
            Value::F64(v) => float_to_i128(v),
            Value::String(ref v) => v.trim().parse().ok(),
            _ => None,
        }
    }

    fn to_f64(&self) -> Option<f64> {
        match *self {
            Value::Bool(v) => Some(if v { 1.0 } else { 0.0 }),
            Value::I8(v) => Some(v.into()),
            Value::I16(v) => Some(v.into()),
            Value::I32(v) => Some(v.into()),
            Value::I64(v) => Some(v as f64),
            Value::U8(v) => Some(v.into()),
            Value::U16(v) => Some(v.into()),
            Value::U32(v) => Some(v.into()),
            Value::U64(v) => Some(v as f64),
            Value::F32(v) => Some(v.into()),
            Value::F64(v) => Some(v),
            Value::String(ref v) => v.trim().parse().ok(),
            _ => None,
        }
    }

    fn to_bool_lossy(&self) -> Option<bool> {
        match self {
            Value::String(v) => {
                let v = v.trim();
                if v.eq_ignore_ascii_case("true") {
                    Some(true)
                } else if v.eq_ignore_ascii_case("false") {
                    Some(false)
                } else {
                    None
                }
            }
            Value::F32(v) => Some(*v != 0.0),
            Value::F64(v) => Some(*v != 0.0),
            value => value.to_i128().map(|n| n != 0),
        }
    }

    fn to_text(&self) -> Option<Value> {
        match self {
            Value::Bytes(v) => String::from_utf8(v.clone()).ok().map(Value::String),
            value => Some(Value::String(value.to_string())),
        }
    }
}

fn float_to_i128(v: f64) -> Option<i128> {
    if !v.is_finite() {
        return None;
    }

    let rounded = v.round_ties_even();
    (rounded >= i128::MIN as f64 && rounded < i128::MAX as f64).then_some(rounded as i128)
}

fn from_i128(n: i128, ty: &Type) -> Option<Value> {
    Some(match ty {
        Type::I8 => Value::I8(n.try_into().ok()?),
        Type::I16 => Value::I16(n.try_into().ok()?),
        Type::I32 => Value::I32(n.try_into().ok()?),
        Type::I64 => Value::I64(n.try_into().ok()?),
        Type::U8 => Value::U8(n.try_into().ok()?),
        Type::U16 => Value::U16(n.try_into().ok()?),
        Type::U32 => Value::U32(n.try_into().ok()?),
        Type::U64 => Value::U64(n.try_into().ok()?),
        _ => return None,
    })
}
