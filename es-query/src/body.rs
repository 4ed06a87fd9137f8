use crate::compiler::{compile, CompiledQuery};
use crate::errors::QueryError;
use crate::request::QueryRequest;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Request body for a document-search endpoint: the compiled query plus the
/// pagination fields, which are passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchBody {
    pub query: CompiledQuery,
    pub size: Option<u64>,
    pub from: Option<u64>,
}

impl SearchBody {
    pub fn new(request: &QueryRequest) -> Self {
        SearchBody {
            query: compile(request),
            size: request.size,
            from: request.from,
        }
    }

    pub fn to_value(&self) -> Value {
        let mut body = Map::new();
        body.insert("query".to_string(), self.query.to_value());
        if let Some(size) = self.size {
            body.insert("size".to_string(), Value::from(size));
        }
        if let Some(from) = self.from {
            body.insert("from".to_string(), Value::from(from));
        }
        Value::Object(body)
    }
}

impl Serialize for SearchBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

pub fn search_body_json(value: &Value) -> Result<SearchBody, QueryError> {
    Ok(SearchBody::new(&QueryRequest::from_json(value)?))
}
