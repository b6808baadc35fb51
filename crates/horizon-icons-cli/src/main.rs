mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::CliParams;

fn main() -> Result<()> {
    let params = CliParams::parse();

    tracing_subscriber::fmt()
        .with_max_level(params.log_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("Given command: {:?}", params.command);

    let config = commands::load_config(params.config.as_deref())?;
    let mut stdout = std::io::stdout().lock();
    commands::run(params.command, &config, &mut stdout)
}
