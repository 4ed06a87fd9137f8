//! Compiles a backend-agnostic tabular query (free text, filter clauses,
//! identifier lookup) into an Elasticsearch-style query DSL document.
//!
//! ```
//! use es_query::{compile, FilterClause, QueryRequest};
//! use serde_json::json;
//!
//! let request = QueryRequest::new()
//!     .with_text("abc")
//!     .with_filter(FilterClause::term("xyz", "XXX"));
//! assert_eq!(
//!     compile(&request).to_value(),
//!     json!({
//!         "filtered": {
//!             "filter": {"and": [{"term": {"xyz": "XXX"}}]},
//!             "query": {"query_string": {"query": "abc"}}
//!         }
//!     })
//! );
//! ```

mod body;
mod clause;
mod compiler;
mod errors;
mod request;

pub use body::{search_body_json, SearchBody};
pub use clause::{Clause, ClauseKind, FilterClause, GeoPoint};
pub use compiler::{compile, compile_clause, compile_json, negate_fragment, CompiledQuery};
pub use errors::QueryError;
pub use request::QueryRequest;
