use anyhow::Context;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Read request JSON from `path`, or from stdin when no path (or "-") is given.
pub fn read_request(path: Option<&Path>) -> anyhow::Result<Value> {
    let (text, source) = match path.filter(|p| *p != Path::new("-")) {
        Some(path) => (
            fs_err::read_to_string(path)?,
            path.display().to_string(),
        ),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read request from stdin")?;
            (text, "stdin".to_string())
        }
    };
    log::debug!("Read {} bytes of request JSON from {}", text.len(), source);
    parse_request(&text).with_context(|| format!("Request in {} is not valid JSON", source))
}

pub fn parse_request(text: &str) -> anyhow::Result<Value> {
    // An empty input is the empty request.
    if text.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    Ok(serde_json::from_str(text)?)
}
