/// Errors raised while decoding or compiling a query request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    UnsupportedClauseKind(String),
    MalformedClause {
        kind: String,
        field: String,
    },
    InvalidClauseField {
        kind: String,
        field: String,
        expected: &'static str,
    },
    UnknownClauseField {
        kind: String,
        field: String,
    },
    InvalidRequest(String),
}

impl QueryError {
    pub(crate) fn malformed(kind: impl Into<String>, field: impl Into<String>) -> Self {
        QueryError::MalformedClause {
            kind: kind.into(),
            field: field.into(),
        }
    }

    pub(crate) fn invalid_field(
        kind: impl Into<String>,
        field: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        QueryError::InvalidClauseField {
            kind: kind.into(),
            field: field.into(),
            expected,
        }
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(err: serde_json::Error) -> Self {
        QueryError::InvalidRequest(err.to_string())
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::UnsupportedClauseKind(kind) => {
                write!(f, "Unsupported filter clause kind: {}", kind)
            }
            QueryError::MalformedClause { kind, field } => {
                write!(f, "Malformed {} clause: missing field `{}`", kind, field)
            }
            QueryError::InvalidClauseField {
                kind,
                field,
                expected,
            } => write!(
                f,
                "Malformed {} clause: field `{}` must be {}",
                kind, field, expected
            ),
            QueryError::UnknownClauseField { kind, field } => {
                write!(f, "Unknown field `{}` in {} clause", field, kind)
            }
            QueryError::InvalidRequest(msg) => write!(f, "Invalid query request: {}", msg),
        }
    }
}

impl std::error::Error for QueryError {}
