//! Sum types over models: ordered first-match unions and tag-dispatched unions.

/// Declare an enum whose variants are alternative payload shapes.
///
/// Without a tag, members are tried in declaration order with strict
/// coercion and the first one that loads wins. With `tagged "key"`, the value
/// under `key` picks the member and is written back on dump.
///
/// ```rust
/// pinnacle::model! {
///     pub struct Sent { message_id: i64 => "messageId" }
/// }
/// pinnacle::model! {
///     pub struct Scheduled { schedule_id: String => "scheduleId" }
/// }
/// pinnacle::union! {
///     pub enum SendResult {
///         Sent(Sent),
///         Scheduled(Scheduled),
///     }
/// }
///
/// use pinnacle::types::Coerce;
///
/// let result = SendResult::load(r#"{"scheduleId": "sch_1"}"#).unwrap();
/// assert!(matches!(result, SendResult::Scheduled(_)));
/// ```
#[macro_export]
macro_rules! union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident tagged $tag:literal {
            $(
                $(#[$variant_meta:meta])*
                $value:literal => $variant:ident($ty:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant($ty),
            )+
        }

        impl $name {
            pub const TAG: &'static str = $tag;

            /// Discriminant value written under [`Self::TAG`].
            pub fn tag(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $value, )+
                }
            }
        }

        impl $crate::types::Coerce for $name {
            fn kind() -> $crate::types::TypeKind {
                $crate::types::TypeKind::Union(stringify!($name))
            }

            fn coerce(
                value: $crate::__private::serde_json::Value,
                strict: bool,
            ) -> ::std::result::Result<Self, $crate::types::ConstraintError> {
                let tag = match value.get($tag) {
                    Some($crate::__private::serde_json::Value::String(tag)) => tag.clone(),
                    Some(_) | None => {
                        return Err($crate::types::ConstraintError::MissingField {
                            model: stringify!($name),
                            field: $tag,
                        });
                    }
                };
                match tag.as_str() {
                    $(
                        $value => <$ty as $crate::types::Coerce>::coerce(value, strict)
                            .map(Self::$variant)
                            .map_err(|err| err.in_field(stringify!($name), stringify!($variant))),
                    )+
                    _ => Err($crate::types::ConstraintError::UnknownVariant {
                        name: stringify!($name),
                        value: tag,
                    }),
                }
            }

            fn dump(&self) -> $crate::__private::serde_json::Value {
                let mut dumped = match self {
                    $( Self::$variant(member) => $crate::types::Coerce::dump(member), )+
                };
                if let $crate::__private::serde_json::Value::Object(object) = &mut dumped {
                    object.insert(
                        $tag.to_owned(),
                        $crate::__private::serde_json::Value::String(self.tag().to_owned()),
                    );
                }
                dumped
            }
        }

        $crate::__serde_via_coerce!($name);
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident($ty:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant($ty),
            )+
        }

        impl $crate::types::Coerce for $name {
            fn kind() -> $crate::types::TypeKind {
                $crate::types::TypeKind::Union(stringify!($name))
            }

            fn coerce(
                value: $crate::__private::serde_json::Value,
                _strict: bool,
            ) -> ::std::result::Result<Self, $crate::types::ConstraintError> {
                let mut attempts = ::std::vec::Vec::new();
                $(
                    match <$ty as $crate::types::Coerce>::coerce(value.clone(), true) {
                        Ok(member) => {
                            $crate::__private::tracing::debug!(
                                union = stringify!($name),
                                member = stringify!($variant),
                                "resolved union member"
                            );
                            return Ok(Self::$variant(member));
                        }
                        Err(err) => attempts.push((stringify!($variant), err)),
                    }
                )+
                Err($crate::types::ConstraintError::NoUnionMember {
                    union: stringify!($name),
                    attempts,
                })
            }

            fn dump(&self) -> $crate::__private::serde_json::Value {
                match self {
                    $( Self::$variant(member) => $crate::types::Coerce::dump(member), )+
                }
            }
        }

        $crate::__serde_via_coerce!($name);
    };
}
