use env_logger::{Builder, Env};
use log::LevelFilter;

/// Sets up env_logger. `--debug` wins; otherwise `RUST_LOG` is honoured and
/// the fallback level is `info` so status messages reach the operator.
pub fn initialize_logging(cli_matches: &clap::ArgMatches) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));

    if cli_matches.get_flag("debug") {
        builder.filter_level(LevelFilter::Debug);
    }

    builder.format_target(false);

    builder.try_init().unwrap_or_else(|e| {
        eprintln!("Failed to initialize logger: {}. Logging might not work as expected.", e);
    });
}
