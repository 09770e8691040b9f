//! Scalar coercers and the [`Coerce`] trait implemented by every field type.

use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};

use crate::types::error::{ConstraintError, TypeError};

/// Shape of a declared field type, produced lazily by a field's resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    String,
    Integer,
    Float,
    Boolean,
    Unknown,
    List(Box<TypeKind>),
    Map(Box<TypeKind>),
    Enum(&'static str),
    Model(&'static str),
    Union(&'static str),
}

/// A scalar coercer operating on raw JSON values.
///
/// In non-strict mode a value that cannot be converted is returned unchanged;
/// in strict mode it is rejected with a [`TypeError`].
pub trait Primitive {
    const NAME: &'static str;

    fn coerce(value: Value, strict: bool) -> Result<Value, TypeError>;
}

fn reject(expected: &'static str, value: Value, strict: bool) -> Result<Value, TypeError> {
    if strict {
        Err(TypeError::new(expected, &value))
    } else {
        Ok(value)
    }
}

pub struct StringType;

impl Primitive for StringType {
    const NAME: &'static str = "string";

    fn coerce(value: Value, strict: bool) -> Result<Value, TypeError> {
        match value {
            Value::String(_) => Ok(value),
            Value::Number(number) => Ok(Value::String(number.to_string())),
            Value::Bool(flag) => Ok(Value::String(flag.to_string())),
            other => reject(Self::NAME, other, strict),
        }
    }
}

pub struct IntegerType;

impl Primitive for IntegerType {
    const NAME: &'static str = "integer";

    fn coerce(value: Value, strict: bool) -> Result<Value, TypeError> {
        match value {
            Value::Number(ref number) if number.is_i64() || number.is_u64() => Ok(value),
            Value::Number(ref number) => match number.as_f64().map(f64::trunc) {
                Some(truncated) if truncated.is_finite() => {
                    Ok(Value::Number(Number::from(truncated as i64)))
                }
                _ => reject(Self::NAME, value, strict),
            },
            Value::String(ref text) => match text.trim().parse::<i64>() {
                Ok(parsed) => Ok(Value::Number(Number::from(parsed))),
                Err(_) => reject(Self::NAME, value, strict),
            },
            other => reject(Self::NAME, other, strict),
        }
    }
}

pub struct FloatType;

impl Primitive for FloatType {
    const NAME: &'static str = "float";

    fn coerce(value: Value, strict: bool) -> Result<Value, TypeError> {
        match value {
            Value::Number(_) => Ok(value),
            Value::String(ref text) => match text.trim().parse::<f64>().ok().and_then(Number::from_f64)
            {
                Some(number) => Ok(Value::Number(number)),
                None => reject(Self::NAME, value, strict),
            },
            other => reject(Self::NAME, other, strict),
        }
    }
}

pub struct BooleanType;

impl Primitive for BooleanType {
    const NAME: &'static str = "boolean";

    fn coerce(value: Value, strict: bool) -> Result<Value, TypeError> {
        let parsed = match &value {
            Value::Bool(flag) => Some(*flag),
            Value::Number(number) => match number.as_i64() {
                Some(1) => Some(true),
                Some(0) => Some(false),
                _ => None,
            },
            Value::String(text) => match text.to_ascii_lowercase().as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        };
        match parsed {
            Some(flag) => Ok(Value::Bool(flag)),
            None => reject(Self::NAME, value, strict),
        }
    }
}

/// Identity coercion for freeform payload fields.
pub struct UnknownType;

impl Primitive for UnknownType {
    const NAME: &'static str = "unknown";

    fn coerce(value: Value, _strict: bool) -> Result<Value, TypeError> {
        Ok(value)
    }
}

/// Conversion between raw JSON values and a typed Rust field value.
pub trait Coerce: Sized {
    /// Declared type of this value; used as a field's lazy type resolver.
    fn kind() -> TypeKind;

    fn coerce(value: Value, strict: bool) -> Result<Self, ConstraintError>;

    fn dump(&self) -> Value;

    /// Value of an optional field whose key is missing, for types that can
    /// represent absence.
    fn absent() -> Option<Self> {
        None
    }

    /// True when the value stands for a missing key and should not be written.
    fn is_absent(&self) -> bool {
        false
    }

    /// Value of an explicit JSON `null`, for types that keep it apart from
    /// absence.
    fn null() -> Option<Self> {
        None
    }

    /// Parse a raw JSON body and coerce it in non-strict mode.
    fn load(raw: &str) -> Result<Self, ConstraintError> {
        Self::coerce(parse_json(raw)?, false)
    }

    /// Parse a raw JSON body and coerce it in strict mode.
    fn load_strict(raw: &str) -> Result<Self, ConstraintError> {
        Self::coerce(parse_json(raw)?, true)
    }

    fn to_json(&self) -> String {
        self.dump().to_string()
    }
}

pub(crate) fn parse_json(raw: &str) -> Result<Value, ConstraintError> {
    serde_json::from_str(raw).map_err(|err| ConstraintError::Json(err.to_string()))
}

fn mismatch<T>(expected: &'static str, value: &Value) -> Result<T, ConstraintError> {
    Err(TypeError::new(expected, value).into())
}

impl Coerce for String {
    fn kind() -> TypeKind {
        TypeKind::String
    }

    fn coerce(value: Value, strict: bool) -> Result<Self, ConstraintError> {
        match StringType::coerce(value, strict)? {
            Value::String(text) => Ok(text),
            other => mismatch(StringType::NAME, &other),
        }
    }

    fn dump(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Coerce for i64 {
    fn kind() -> TypeKind {
        TypeKind::Integer
    }

    fn coerce(value: Value, strict: bool) -> Result<Self, ConstraintError> {
        let coerced = IntegerType::coerce(value, strict)?;
        match coerced.as_i64() {
            Some(number) => Ok(number),
            None => mismatch(IntegerType::NAME, &coerced),
        }
    }

    fn dump(&self) -> Value {
        Value::Number(Number::from(*self))
    }
}

impl Coerce for f64 {
    fn kind() -> TypeKind {
        TypeKind::Float
    }

    fn coerce(value: Value, strict: bool) -> Result<Self, ConstraintError> {
        let coerced = FloatType::coerce(value, strict)?;
        match coerced.as_f64() {
            Some(number) => Ok(number),
            None => mismatch(FloatType::NAME, &coerced),
        }
    }

    fn dump(&self) -> Value {
        Number::from_f64(*self).map_or(Value::Null, Value::Number)
    }
}

impl Coerce for bool {
    fn kind() -> TypeKind {
        TypeKind::Boolean
    }

    fn coerce(value: Value, strict: bool) -> Result<Self, ConstraintError> {
        match BooleanType::coerce(value, strict)? {
            Value::Bool(flag) => Ok(flag),
            other => mismatch(BooleanType::NAME, &other),
        }
    }

    fn dump(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Coerce for Value {
    fn kind() -> TypeKind {
        TypeKind::Unknown
    }

    fn coerce(value: Value, strict: bool) -> Result<Self, ConstraintError> {
        Ok(UnknownType::coerce(value, strict)?)
    }

    fn dump(&self) -> Value {
        self.clone()
    }
}

/// `None` stands for both an absent key and an explicit `null`; whether
/// either is allowed is decided by the field's flags.
impl<T: Coerce> Coerce for Option<T> {
    fn kind() -> TypeKind {
        T::kind()
    }

    fn coerce(value: Value, strict: bool) -> Result<Self, ConstraintError> {
        match value {
            Value::Null => Ok(T::null()),
            other => T::coerce(other, strict).map(Some),
        }
    }

    fn dump(&self) -> Value {
        self.as_ref().map_or(Value::Null, Coerce::dump)
    }

    fn absent() -> Option<Self> {
        Some(None)
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

/// A field value that may be sent as an explicit `null`.
///
/// `Option<Nullable<T>>` on an optional, nullable field tells the three wire
/// states apart: `None` omits the key, `Some(Nullable::Null)` writes `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Nullable<T> {
    Null,
    Value(T),
}

impl<T> Nullable<T> {
    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Self::Null => Nullable::Null,
            Self::Value(value) => Nullable::Value(value),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Null => None,
            Self::Value(value) => Some(value),
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Coerce> Coerce for Nullable<T> {
    fn kind() -> TypeKind {
        T::kind()
    }

    fn coerce(value: Value, strict: bool) -> Result<Self, ConstraintError> {
        match value {
            Value::Null => Ok(Self::Null),
            other => T::coerce(other, strict).map(Self::Value),
        }
    }

    fn dump(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Value(value) => value.dump(),
        }
    }

    fn null() -> Option<Self> {
        Some(Self::Null)
    }
}

impl<T: Coerce> Coerce for Box<T> {
    fn kind() -> TypeKind {
        T::kind()
    }

    fn coerce(value: Value, strict: bool) -> Result<Self, ConstraintError> {
        T::coerce(value, strict).map(Box::new)
    }

    fn dump(&self) -> Value {
        self.as_ref().dump()
    }

    fn absent() -> Option<Self> {
        T::absent().map(Box::new)
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }

    fn null() -> Option<Self> {
        T::null().map(Box::new)
    }
}

impl<T: Coerce> Coerce for Vec<T> {
    fn kind() -> TypeKind {
        TypeKind::List(Box::new(T::kind()))
    }

    fn coerce(value: Value, strict: bool) -> Result<Self, ConstraintError> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| T::coerce(item, strict).map_err(|err| err.at_index(index)))
                .collect(),
            other => mismatch("array", &other),
        }
    }

    fn dump(&self) -> Value {
        Value::Array(self.iter().map(Coerce::dump).collect())
    }
}

impl<T: Coerce> Coerce for BTreeMap<String, T> {
    fn kind() -> TypeKind {
        TypeKind::Map(Box::new(T::kind()))
    }

    fn coerce(value: Value, strict: bool) -> Result<Self, ConstraintError> {
        match value {
            Value::Object(entries) => entries
                .into_iter()
                .map(|(key, item)| T::coerce(item, strict).map(|coerced| (key, coerced)))
                .collect(),
            other => mismatch("object", &other),
        }
    }

    fn dump(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(key, item)| (key.clone(), item.dump()))
                .collect::<Map<String, Value>>(),
        )
    }
}
