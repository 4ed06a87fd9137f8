mod utils;

use es_query_cli::argparse::parse_args;
use es_query_cli::commands::handle_command;

fn main() -> anyhow::Result<()> {
    let cli = parse_args();
    utils::init_logger(cli.verbose);

    let output = handle_command(cli.command, cli.compact)?;
    println!("{}", output);

    Ok(())
}
