/// `RUST_LOG` wins when set; otherwise `--verbose` lowers this tool's level to debug.
pub fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filters = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| format!("esq={level},es_query_cli={level}"));
    pretty_env_logger::formatted_builder()
        .parse_filters(&filters)
        .init();
}
