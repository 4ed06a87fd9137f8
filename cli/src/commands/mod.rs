use crate::argparse::Commands;
use crate::input::read_request;
use es_query::{compile, QueryRequest, SearchBody};
use serde_json::Value;

/// Run one subcommand and return the text to print.
pub fn handle_command(command: Commands, compact: bool) -> anyhow::Result<String> {
    let (args, render): (_, fn(&QueryRequest, bool) -> anyhow::Result<String>) = match command {
        Commands::Compile(args) => (args, render_compiled),
        Commands::Body(args) => (args, render_body),
        Commands::Check(args) => (args, render_check),
    };
    let value = read_request(args.file.as_deref())?;
    let request = QueryRequest::from_json(&value)?;
    log::debug!(
        "Decoded request: {} filter clause(s), {} id(s), free text {}",
        request.filters.len(),
        request.ids.len(),
        if request.free_text.is_empty() { "absent" } else { "present" }
    );
    render(&request, compact)
}

pub fn render_compiled(request: &QueryRequest, compact: bool) -> anyhow::Result<String> {
    let compiled = compile(request);
    log::debug!("Compiled to {} query", compiled.shape_name());
    to_json(&compiled.to_value(), compact)
}

pub fn render_body(request: &QueryRequest, compact: bool) -> anyhow::Result<String> {
    let body = SearchBody::new(request);
    log::debug!("Compiled to {} query", body.query.shape_name());
    to_json(&body.to_value(), compact)
}

pub fn render_check(request: &QueryRequest, _compact: bool) -> anyhow::Result<String> {
    let compiled = compile(request);
    Ok(format!(
        "valid request: {} filter clause(s), shape: {}",
        request.filters.len(),
        compiled.shape_name()
    ))
}

fn to_json(value: &Value, compact: bool) -> anyhow::Result<String> {
    if compact {
        Ok(serde_json::to_string(value)?)
    } else {
        Ok(serde_json::to_string_pretty(value)?)
    }
}
