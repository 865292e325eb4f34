use anyhow::Context;
use shop_cli_lib::cli::CommandLine;
use shop_cli_lib::{init_tracing, run, ConfigState};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let config = commands.apply(ConfigState::from_env());

    init_tracing(&config.log_filter);

    match commands.input.as_deref() {
        Some(path) => run(&config, Some(path))
            .with_context(|| format!("failed to run commands from {}", path.display())),
        None => run(&config, None).context("failed to run session on stdin"),
    }
}
