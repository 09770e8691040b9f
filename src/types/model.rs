//! Declarative models: field descriptors plus generic load/dump driven off them.

use serde_json::{Map, Value};

use crate::types::coerce::{Coerce, TypeKind};
use crate::types::error::{ConstraintError, json_kind};

/// Metadata for one declared model field.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    name: &'static str,
    api_name: &'static str,
    optional: bool,
    nullable: bool,
    resolve: fn() -> TypeKind,
}

impl Field {
    pub const fn new(name: &'static str, api_name: &'static str, resolve: fn() -> TypeKind) -> Self {
        Self {
            name,
            api_name,
            optional: false,
            nullable: false,
            resolve,
        }
    }

    /// The key may be absent from the payload.
    pub const fn optional(self) -> Self {
        Self {
            optional: true,
            ..self
        }
    }

    /// An explicit `null` is accepted.
    pub const fn nullable(self) -> Self {
        Self {
            nullable: true,
            ..self
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn wire_name(&self) -> &'static str {
        self.api_name
    }

    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Resolve the declared type. Resolution is deferred until this call.
    pub fn resolve_type(&self) -> TypeKind {
        (self.resolve)()
    }
}

/// A record type with a static field table, generated by [`model!`](crate::model).
pub trait Model: Coerce {
    const NAME: &'static str;

    fn fields() -> &'static [Field];

    /// Serialize to a map keyed by wire names.
    fn to_h(&self) -> Map<String, Value>;

    /// Build the model from a parameter map whose keys may be snake_case,
    /// camelCase or kebab-case. Only declared field names are matched this
    /// way; free-form values are kept as given.
    fn from_params(params: Map<String, Value>) -> Result<Self, ConstraintError> {
        Self::coerce(Value::Object(params), false)
    }

    /// Flatten [`Model::to_h`] into query pairs. Arrays repeat their key and
    /// nulls are skipped.
    fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in self.to_h() {
            push_query_value(&mut pairs, &key, value);
        }
        pairs
    }
}

fn push_query_value(pairs: &mut Vec<(String, String)>, key: &str, value: Value) {
    match value {
        Value::Null => {}
        Value::String(text) => pairs.push((key.to_owned(), text)),
        Value::Array(items) => {
            for item in items {
                push_query_value(pairs, key, item);
            }
        }
        other => pairs.push((key.to_owned(), other.to_string())),
    }
}

#[doc(hidden)]
pub fn expect_object(model: &'static str, value: Value) -> Result<Map<String, Value>, ConstraintError> {
    match value {
        Value::Object(object) => Ok(object),
        other => Err(ConstraintError::NotAnObject {
            model,
            found: json_kind(&other),
        }),
    }
}

/// Remove and coerce one field from a payload object.
#[doc(hidden)]
pub fn take_field<T: Coerce>(
    model: &'static str,
    field: &Field,
    object: &mut Map<String, Value>,
    strict: bool,
) -> Result<T, ConstraintError> {
    let raw = object
        .remove(field.wire_name())
        .or_else(|| object.remove(field.name()))
        .or_else(|| {
            let wire_snake = to_snake_case(field.wire_name());
            let key = object
                .keys()
                .find(|key| {
                    let key = to_snake_case(key);
                    key == field.name() || key == wire_snake
                })?
                .clone();
            object.remove(&key)
        });

    let value = match raw {
        None if field.is_optional() => match T::absent() {
            Some(absent) => return Ok(absent),
            None => Value::Null,
        },
        None => {
            return Err(ConstraintError::MissingField {
                model,
                field: field.wire_name(),
            });
        }
        Some(Value::Null) if !field.is_nullable() => {
            return Err(ConstraintError::NullField {
                model,
                field: field.wire_name(),
            });
        }
        Some(value) => value,
    };

    T::coerce(value, strict).map_err(|err| err.in_field(model, field.wire_name()))
}

/// Write one field into a wire map; an absent optional field is omitted.
#[doc(hidden)]
pub fn put_field<T: Coerce>(object: &mut Map<String, Value>, field: &Field, value: &T) {
    if field.is_optional() && value.is_absent() {
        return;
    }
    object.insert(field.wire_name().to_owned(), value.dump());
}

pub fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;
    for ch in key.chars() {
        if ch == '-' || ch == ' ' {
            out.push('_');
            prev_lower = false;
        } else if ch.is_ascii_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
            prev_lower = false;
        } else {
            out.push(ch);
            prev_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        }
    }
    out
}

/// Declare a model struct together with its field table.
///
/// ```rust
/// pinnacle::model! {
///     /// When to send a message.
///     pub struct Schedule {
///         send_at: String => "sendAt",
///         timezone: Option<String> => "timezone" (optional),
///     }
/// }
///
/// use pinnacle::types::{Coerce, Model};
///
/// let schedule = Schedule::load(r#"{"sendAt": "2025-01-01T00:00:00Z"}"#).unwrap();
/// assert_eq!(schedule.timezone, None);
/// assert_eq!(Schedule::fields()[0].wire_name(), "sendAt");
/// ```
#[macro_export]
macro_rules! model {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty => $wire:literal $( ( $($flag:ident),+ ) )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl $crate::types::Model for $name {
            const NAME: &'static str = stringify!($name);

            fn fields() -> &'static [$crate::types::Field] {
                const FIELDS: &[$crate::types::Field] = &[
                    $( $crate::__model_field!($field, $ty, $wire $(, $($flag),+)?) ),*
                ];
                FIELDS
            }

            #[allow(unused_mut)]
            fn to_h(&self) -> $crate::__private::serde_json::Map<::std::string::String, $crate::__private::serde_json::Value> {
                let mut object = $crate::__private::serde_json::Map::new();
                $(
                    $crate::types::model::put_field(
                        &mut object,
                        &$crate::__model_field!($field, $ty, $wire $(, $($flag),+)?),
                        &self.$field,
                    );
                )*
                object
            }
        }

        impl $crate::types::Coerce for $name {
            fn kind() -> $crate::types::TypeKind {
                $crate::types::TypeKind::Model(stringify!($name))
            }

            #[allow(unused_mut, unused_variables)]
            fn coerce(
                value: $crate::__private::serde_json::Value,
                strict: bool,
            ) -> ::std::result::Result<Self, $crate::types::ConstraintError> {
                let mut object = $crate::types::model::expect_object(stringify!($name), value)?;
                Ok(Self {
                    $(
                        $field: $crate::types::model::take_field::<$ty>(
                            stringify!($name),
                            &$crate::__model_field!($field, $ty, $wire $(, $($flag),+)?),
                            &mut object,
                            strict,
                        )?,
                    )*
                })
            }

            fn dump(&self) -> $crate::__private::serde_json::Value {
                $crate::__private::serde_json::Value::Object($crate::types::Model::to_h(self))
            }
        }

        $crate::__serde_via_coerce!($name);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __model_field {
    ($field:ident, $ty:ty, $wire:literal $(, $flag:ident)*) => {
        $crate::types::Field::new(
            stringify!($field),
            $wire,
            <$ty as $crate::types::Coerce>::kind,
        )
        $( .$flag() )*
    };
}

/// Route serde through [`Coerce`] so generated types embed in any serde
/// structure with their wire names.
#[doc(hidden)]
#[macro_export]
macro_rules! __serde_via_coerce {
    ($name:ident) => {
        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(&$crate::types::Coerce::dump(self), serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let value: $crate::__private::serde_json::Value = $crate::__private::serde::Deserialize::deserialize(deserializer)?;
                <Self as $crate::types::Coerce>::coerce(value, false)
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}
