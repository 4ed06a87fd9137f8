use crate::clause::FilterClause;
use crate::errors::QueryError;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

/// A backend-agnostic tabular query: free text, structured filters, an
/// optional identifier lookup and the pagination pass-through fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryRequest {
    pub free_text: String,
    pub filters: Vec<FilterClause>,
    pub ids: Vec<Value>,
    pub size: Option<u64>,
    pub from: Option<u64>,
}

// Wire form of the request; clauses are decoded separately so that their
// errors carry the clause kind.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRequest {
    #[serde(default, alias = "freeText")]
    q: Option<String>,
    #[serde(default)]
    filters: Option<Vec<Value>>,
    #[serde(default)]
    ids: Option<Vec<Value>>,
    #[serde(default)]
    size: Option<u64>,
    #[serde(default)]
    from: Option<u64>,
}

impl QueryRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free text for a `query_string` query; empty means none.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.free_text = text.into();
        self
    }

    /// Append a clause; clauses compile in the order they were added.
    pub fn with_filter(mut self, filter: FilterClause) -> Self {
        self.filters.push(filter);
        self
    }

    /// Replace the identifier list. A non-empty list overrides text and filters.
    pub fn with_ids<I, V>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Page size, passed through to the search body.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Page offset, passed through to the search body.
    pub fn with_from(mut self, from: u64) -> Self {
        self.from = Some(from);
        self
    }

    /// Decode the loose JSON request form:
    /// `{"q": "...", "filters": [...], "ids": [...], "size": 100, "from": 0}`.
    pub fn from_json(value: &Value) -> Result<Self, QueryError> {
        let raw = RawRequest::deserialize(value)?;
        let ids = raw.ids.unwrap_or_default();

        if let Some(bad) = ids.iter().find(|id| !(id.is_string() || id.is_number())) {
            return Err(QueryError::InvalidRequest(format!(
                "ids must be strings or numbers, found {}",
                bad
            )));
        }

        let filters = raw
            .filters
            .unwrap_or_default()
            .iter()
            .map(FilterClause::from_json)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(QueryRequest {
            free_text: raw.q.unwrap_or_default(),
            filters,
            ids,
            size: raw.size,
            from: raw.from,
        })
    }
}

impl FromStr for QueryRequest {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s)?;
        QueryRequest::from_json(&value)
    }
}
