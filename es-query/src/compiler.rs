use crate::clause::{Clause, FilterClause};
use crate::errors::QueryError;
use crate::request::QueryRequest;
use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};

/// The DSL document produced for a request. Exactly one shape per request.
#[derive(Debug, Clone, PartialEq)]
pub enum CompiledQuery {
    /// `{constant_score: {query: {match_all: {}}}}`
    MatchAll,
    /// `{constant_score: {query: {ids: {values: [...]}}}}`
    Ids(Vec<Value>),
    /// `{constant_score: {query: {query_string: {query}}}}`
    QueryString(String),
    /// `{filtered: {filter: {and: [...]}, query?: {query_string: {query}}}}`
    Filtered {
        filters: Vec<Value>,
        query: Option<String>,
    },
}

impl CompiledQuery {
    pub fn shape_name(&self) -> &'static str {
        match self {
            CompiledQuery::MatchAll => "match_all",
            CompiledQuery::Ids(_) => "ids",
            CompiledQuery::QueryString(_) => "query_string",
            CompiledQuery::Filtered { .. } => "filtered",
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            CompiledQuery::MatchAll => constant_score(json!({"match_all": {}})),
            CompiledQuery::Ids(ids) => constant_score(json!({"ids": {"values": ids}})),
            CompiledQuery::QueryString(text) => constant_score(query_string(text)),
            CompiledQuery::Filtered { filters, query } => {
                let mut filtered = Map::new();
                filtered.insert("filter".to_string(), json!({ "and": filters }));
                if let Some(text) = query {
                    filtered.insert("query".to_string(), query_string(text));
                }
                keyed("filtered", Value::Object(filtered))
            }
        }
    }
}

impl Serialize for CompiledQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl std::fmt::Display for CompiledQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

/// Compile a typed request. Identifier lookup takes precedence over
/// everything else; text and filters are only consulted when `ids` is empty.
pub fn compile(request: &QueryRequest) -> CompiledQuery {
    if !request.ids.is_empty() {
        return CompiledQuery::Ids(request.ids.clone());
    }
    if request.filters.is_empty() {
        if request.free_text.is_empty() {
            CompiledQuery::MatchAll
        } else {
            CompiledQuery::QueryString(request.free_text.clone())
        }
    } else {
        CompiledQuery::Filtered {
            filters: request.filters.iter().map(compile_clause).collect(),
            query: Some(request.free_text.clone()).filter(|text| !text.is_empty()),
        }
    }
}

/// Decode a loose JSON request and compile it.
pub fn compile_json(value: &Value) -> Result<CompiledQuery, QueryError> {
    Ok(compile(&QueryRequest::from_json(value)?))
}

/// Compile one clause to its DSL fragment, applying the `not` wrap if set.
pub fn compile_clause(filter: &FilterClause) -> Value {
    let fragment = clause_fragment(&filter.clause);
    if filter.negate {
        negate_fragment(fragment)
    } else {
        fragment
    }
}

/// Wrap any clause fragment as `{not: <fragment>}`.
pub fn negate_fragment(fragment: Value) -> Value {
    keyed("not", fragment)
}

fn clause_fragment(clause: &Clause) -> Value {
    match clause {
        Clause::Term { field, term } => keyed("term", keyed(field, term.clone())),
        Clause::Terms { field, terms } => keyed("terms", keyed(field, Value::from(terms.clone()))),
        Clause::Range {
            field,
            from,
            to,
            include_lower,
            include_upper,
        } => keyed(
            "range",
            keyed(
                field,
                json!({
                    "from": from,
                    "to": to,
                    "include_lower": include_lower,
                    "include_upper": include_upper,
                }),
            ),
        ),
        Clause::GeoDistance {
            field,
            distance,
            unit,
            point,
        } => {
            let mut body = Map::new();
            body.insert("distance".to_string(), Value::Number(distance.clone()));
            body.insert("unit".to_string(), Value::String(unit.clone()));
            body.insert(field.clone(), json!({"lat": point.lat, "lon": point.lon}));
            keyed("geo_distance", Value::Object(body))
        }
        Clause::Type { value } => json!({"type": {"value": value}}),
        Clause::Exists { field } => json!({"exists": {"field": field}}),
        Clause::Missing { field } => json!({"missing": {"field": field}}),
    }
}

fn constant_score(query: Value) -> Value {
    json!({"constant_score": {"query": query}})
}

fn query_string(text: &str) -> Value {
    json!({"query_string": {"query": text}})
}

/// A single-key object. Used wherever the key is a caller-supplied field name.
fn keyed(key: &str, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    Value::Object(map)
}
