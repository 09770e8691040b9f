//! Type layer: coercion of raw JSON into declared field types and the
//! [`model!`](crate::model), [`union!`](crate::union) and
//! [`enumeration!`](crate::enumeration) macros built on it.
//!
//! Models are loaded leniently by default: scalars are converted where a
//! sensible conversion exists (`"12"` into an integer field, `1` into a
//! boolean field). [`Coerce::load_strict`] turns every mismatch into an error.

pub mod coerce;
pub mod enumeration;
pub mod error;
pub mod model;
pub mod union;

pub use coerce::{
    BooleanType, Coerce, FloatType, IntegerType, Nullable, Primitive, StringType, TypeKind,
    UnknownType,
};
pub use error::{ConstraintError, TypeError};
pub use model::{Field, Model};
