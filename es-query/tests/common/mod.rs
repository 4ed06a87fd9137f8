//! Shared request fixtures for the es-query integration tests

#![allow(dead_code)]

use serde_json::{json, Value};

/// The request a data grid issues before the user types or filters anything
pub fn empty_request() -> Value {
    json!({
        "size": 100,
        "from": 0,
        "q": ""
    })
}

/// `empty_request` with the given keys merged over it
pub fn request_with(overrides: Value) -> Value {
    let mut request = empty_request();
    if let (Some(base), Some(extra)) = (request.as_object_mut(), overrides.as_object()) {
        for (key, value) in extra {
            base.insert(key.clone(), value.clone());
        }
    }
    request
}

pub fn term_clause(field: &str, term: &str) -> Value {
    json!({"type": "term", "field": field, "term": term})
}

/// One clause of every supported kind, paired with the fragment it compiles to
pub fn clause_cases() -> Vec<(Value, Value)> {
    vec![
        (
            term_clause("xyz", "XXX"),
            json!({"term": {"xyz": "XXX"}}),
        ),
        (
            json!({"type": "terms", "field": "xyz", "terms": ["one", "two", "three"]}),
            json!({"terms": {"xyz": ["one", "two", "three"]}}),
        ),
        (
            json!({
                "type": "range",
                "field": "dt",
                "from": "2013-08-19T00:00:00-07:00",
                "to": "2013-08-19T08:00:00-07:00",
                "include_lower": true,
                "include_upper": false
            }),
            json!({
                "range": {
                    "dt": {
                        "from": "2013-08-19T00:00:00-07:00",
                        "to": "2013-08-19T08:00:00-07:00",
                        "include_lower": true,
                        "include_upper": false
                    }
                }
            }),
        ),
        (
            json!({
                "type": "geo_distance",
                "field": "xyz",
                "distance": 10,
                "unit": "km",
                "point": {"lon": 0, "lat": 0}
            }),
            json!({"geo_distance": {"distance": 10, "unit": "km", "xyz": {"lat": 0, "lon": 0}}}),
        ),
        (
            json!({"type": "type", "value": "message"}),
            json!({"type": {"value": "message"}}),
        ),
        (
            json!({"type": "exists", "field": "xyz"}),
            json!({"exists": {"field": "xyz"}}),
        ),
        (
            json!({"type": "missing", "field": "xyz"}),
            json!({"missing": {"field": "xyz"}}),
        ),
    ]
}
