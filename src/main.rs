use anyhow::Result;
use clap::Parser;
use packlist::cli::RootArgs;
use packlist::workflow;
use tracing_subscriber::EnvFilter;

/// Log filter variable; falls back to `warn`, or `debug` with `--verbose`.
const LOG_ENV: &str = "PACKLIST_LOG";

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_tracing(args.global.verbose);
    workflow::run(args)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
