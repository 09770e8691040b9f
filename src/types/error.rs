use serde_json::Value;

/// Scalar coercion failure raised in strict mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, found {found}")]
pub struct TypeError {
    expected: &'static str,
    found: &'static str,
}

impl TypeError {
    pub fn new(expected: &'static str, value: &Value) -> Self {
        Self {
            expected,
            found: json_kind(value),
        }
    }

    pub fn expected(&self) -> &'static str {
        self.expected
    }

    pub fn found(&self) -> &'static str {
        self.found
    }
}

/// Local validation failure while building or loading a model.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConstraintError {
    #[error("invalid JSON: {0}")]
    Json(String),

    #[error("{model}: expected a JSON object, found {found}")]
    NotAnObject {
        model: &'static str,
        found: &'static str,
    },

    #[error("{model}.{field} is required")]
    MissingField {
        model: &'static str,
        field: &'static str,
    },

    #[error("{model}.{field} must not be null")]
    NullField {
        model: &'static str,
        field: &'static str,
    },

    #[error(transparent)]
    Type(#[from] TypeError),

    #[error("{model}.{field}: {source}")]
    InField {
        model: &'static str,
        field: &'static str,
        #[source]
        source: Box<ConstraintError>,
    },

    #[error("[{index}]: {source}")]
    AtIndex {
        index: usize,
        #[source]
        source: Box<ConstraintError>,
    },

    #[error("{union}: no member matched ({})", format_attempts(.attempts))]
    NoUnionMember {
        union: &'static str,
        attempts: Vec<(&'static str, ConstraintError)>,
    },

    #[error("{name}: unknown variant `{value}`")]
    UnknownVariant { name: &'static str, value: String },
}

impl ConstraintError {
    #[doc(hidden)]
    pub fn in_field(self, model: &'static str, field: &'static str) -> Self {
        Self::InField {
            model,
            field,
            source: Box::new(self),
        }
    }

    #[doc(hidden)]
    pub fn at_index(self, index: usize) -> Self {
        Self::AtIndex {
            index,
            source: Box::new(self),
        }
    }

    /// Innermost error once field/index context is stripped.
    pub fn root_cause(&self) -> &ConstraintError {
        match self {
            Self::InField { source, .. } | Self::AtIndex { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

fn format_attempts(attempts: &[(&'static str, ConstraintError)]) -> String {
    attempts
        .iter()
        .map(|(member, err)| format!("{member}: {err}"))
        .collect::<Vec<_>>()
        .join("; ")
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
