//! String enumerations that tolerate values added to the API later.

/// Declare a string enum with an `Other(String)` catch-all.
///
/// Lenient loads keep unrecognized values in `Other`; strict loads reject
/// them with [`ConstraintError::UnknownVariant`](crate::types::ConstraintError).
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
            /// A value this version of the crate does not know about.
            Other(::std::string::String),
        }

        impl $name {
            /// Every known wire value, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Other(value) => value.as_str(),
                }
            }

            /// Look up a known wire value.
            pub fn from_known(value: &str) -> ::std::option::Option<Self> {
                match value {
                    $( $value => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::types::Coerce for $name {
            fn kind() -> $crate::types::TypeKind {
                $crate::types::TypeKind::Enum(stringify!($name))
            }

            fn coerce(
                value: $crate::__private::serde_json::Value,
                strict: bool,
            ) -> ::std::result::Result<Self, $crate::types::ConstraintError> {
                let value = <::std::string::String as $crate::types::Coerce>::coerce(value, strict)?;
                match Self::from_known(&value) {
                    Some(known) => Ok(known),
                    None if strict => Err($crate::types::ConstraintError::UnknownVariant {
                        name: stringify!($name),
                        value,
                    }),
                    None => Ok(Self::Other(value)),
                }
            }

            fn dump(&self) -> $crate::__private::serde_json::Value {
                $crate::__private::serde_json::Value::String(self.as_str().to_owned())
            }
        }

        $crate::__serde_via_coerce!($name);
    };
}
