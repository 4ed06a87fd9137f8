mod common;

use common::{clause_cases, empty_request, request_with, term_clause};
use es_query::{compile, compile_json, CompiledQuery, FilterClause, QueryRequest};
use serde_json::{json, Value};

fn compiled(request: Value) -> Value {
    compile_json(&request).unwrap().to_value()
}

#[test]
fn test_empty_request_is_match_all() {
    assert_eq!(
        compiled(empty_request()),
        json!({"constant_score": {"query": {"match_all": {}}}})
    );
    assert_eq!(
        compiled(json!({})),
        json!({"constant_score": {"query": {"match_all": {}}}})
    );
}

#[test]
fn test_free_text_only() {
    let out = compiled(request_with(json!({"q": "abc"})));
    assert_eq!(
        out,
        json!({"constant_score": {"query": {"query_string": {"query": "abc"}}}})
    );
}

#[test]
fn test_single_term_filter() {
    let out = compiled(request_with(json!({"filters": [term_clause("xyz", "XXX")]})));
    assert_eq!(
        out,
        json!({"filtered": {"filter": {"and": [{"term": {"xyz": "XXX"}}]}}})
    );
}

#[test]
fn test_term_filter_and_free_text() {
    let out = compiled(request_with(json!({
        "q": "abc",
        "filters": [term_clause("xyz", "XXX")]
    })));
    assert_eq!(
        out,
        json!({
            "filtered": {
                "filter": {"and": [{"term": {"xyz": "XXX"}}]},
                "query": {"query_string": {"query": "abc"}}
            }
        })
    );
    assert_eq!(out["filtered"]["filter"]["and"].as_array().unwrap().len(), 1);
}

#[test]
fn test_every_clause_kind() {
    for (clause, fragment) in clause_cases() {
        let out = compiled(request_with(json!({"filters": [clause]})));
        assert_eq!(out, json!({"filtered": {"filter": {"and": [fragment]}}}));
    }
}

#[test]
fn test_every_clause_kind_negated() {
    for (mut clause, fragment) in clause_cases() {
        clause["not"] = json!(true);
        let out = compiled(request_with(json!({"filters": [clause]})));
        assert_eq!(
            out,
            json!({"filtered": {"filter": {"and": [{"not": fragment}]}}})
        );
    }
}

#[test]
fn test_negated_term() {
    let out = compiled(request_with(json!({
        "filters": [{"not": true, "type": "term", "field": "xyz", "term": "one"}]
    })));
    assert_eq!(
        out,
        json!({"filtered": {"filter": {"and": [{"not": {"term": {"xyz": "one"}}}]}}})
    );
}

#[test]
fn test_ids_query() {
    let out = compiled(request_with(json!({"ids": [1, 2, 3, 4]})));
    assert_eq!(
        out,
        json!({"constant_score": {"query": {"ids": {"values": [1, 2, 3, 4]}}}})
    );
}

#[test]
fn test_ids_ignore_text_and_filters() {
    let expected = compiled(request_with(json!({"ids": ["b", "a"]})));
    for overrides in [
        json!({"ids": ["b", "a"], "q": "abc"}),
        json!({"ids": ["b", "a"], "filters": [term_clause("xyz", "XXX")]}),
        json!({"ids": ["b", "a"], "q": "abc", "filters": [{"type": "exists", "field": "f"}]}),
    ] {
        assert_eq!(compiled(request_with(overrides)), expected);
    }
    assert_eq!(
        expected["constant_score"]["query"]["ids"]["values"],
        json!(["b", "a"])
    );
}

#[test]
fn test_filter_order_preserved() {
    let fields = ["zeta", "alpha", "mid", "beta", "omega"];
    let request = fields
        .iter()
        .fold(QueryRequest::new(), |request, field| {
            request.with_filter(FilterClause::exists(*field))
        });
    let out = compile(&request).to_value();
    let and = out["filtered"]["filter"]["and"].as_array().unwrap();
    assert_eq!(and.len(), fields.len());
    for (fragment, field) in and.iter().zip(fields) {
        assert_eq!(fragment["exists"]["field"], json!(field));
    }
}

#[test]
fn test_mixed_negation_order_preserved() {
    let request = QueryRequest::new()
        .with_filter(FilterClause::term("a", 1))
        .with_filter(FilterClause::missing("b").negated())
        .with_filter(FilterClause::terms("c", vec![1, 2]));
    assert_eq!(
        compile(&request).to_value(),
        json!({
            "filtered": {
                "filter": {
                    "and": [
                        {"term": {"a": 1}},
                        {"not": {"missing": {"field": "b"}}},
                        {"terms": {"c": [1, 2]}}
                    ]
                }
            }
        })
    );
}

#[test]
fn test_compile_does_not_mutate_request() {
    let request = QueryRequest::new()
        .with_text("abc")
        .with_filter(FilterClause::term("xyz", "XXX").negated());
    let before = request.clone();
    let first = compile(&request);
    let second = compile(&request);
    assert_eq!(request, before);
    assert_eq!(first, second);
}

#[test]
fn test_typed_and_json_requests_agree() {
    let typed = QueryRequest::new()
        .with_text("abc")
        .with_filter(FilterClause::range("dt", "2013-08-19", "2013-08-20", true, false));
    let from_json = compile_json(&json!({
        "q": "abc",
        "filters": [{
            "type": "range", "field": "dt", "from": "2013-08-19", "to": "2013-08-20",
            "include_lower": true, "include_upper": false
        }]
    }))
    .unwrap();
    assert_eq!(compile(&typed), from_json);
    assert!(matches!(from_json, CompiledQuery::Filtered { query: Some(_), .. }));
}

#[test]
fn test_compile_from_many_threads() {
    let request = QueryRequest::new().with_filter(FilterClause::doc_type("note"));
    let expected = compile(&request);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| compile(&request))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
