use crate::camera_config::StreamName;
use crate::config_loader::DEFAULT_CONFIG_PATH;
use crate::core::effective_settings::CliOverrides;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::debug;
use std::path::PathBuf;
use std::time::Instant;

pub fn build_cli() -> Command {
    let start_time = Instant::now();
    let cmd = Command::new("tapocap")
        .version("0.1.0")
        .about("Take a screenshot from a Tapo camera's RTSP stream.")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value(DEFAULT_CONFIG_PATH)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set)
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output filename (default: <default_output_dir>/<timestamp>.jpg)")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set)
        )
        .arg(
            Arg::new("create-config")
                .long("create-config")
                .help("Create a default configuration file and exit")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue)
        )
        // Overrides for values in the config file
        .arg(Arg::new("ip").long("ip").value_name("IP").help("Camera IP address (overrides config)").action(ArgAction::Set))
        .arg(Arg::new("username").long("username").value_name("USER").help("Camera username (overrides config)").action(ArgAction::Set))
        .arg(Arg::new("password").long("password").value_name("PASSWORD").help("Camera password (overrides config)").action(ArgAction::Set))
        .arg(Arg::new("port").long("port").value_name("PORT").help("RTSP port (overrides config)").value_parser(clap::value_parser!(u16)).action(ArgAction::Set))
        .arg(Arg::new("stream").long("stream").value_name("STREAM").help("Stream quality (overrides config)").value_parser(StreamName::ALL).action(ArgAction::Set))
        .arg(Arg::new("timeout").long("timeout").value_name("SECONDS").help("Connection timeout in seconds (overrides config)").value_parser(clap::value_parser!(u64)).action(ArgAction::Set));
    debug!("✅ CLI interface built in {:?}", start_time.elapsed());
    cmd
}

/// Collects the config overrides given on the command line.
pub fn overrides_from_matches(matches: &ArgMatches) -> CliOverrides {
    CliOverrides {
        ip: matches.get_one::<String>("ip").cloned(),
        username: matches.get_one::<String>("username").cloned(),
        password: matches.get_one::<String>("password").cloned(),
        port: matches.get_one::<u16>("port").copied(),
        // clap has already restricted the value to StreamName::ALL
        stream: matches
            .get_one::<String>("stream")
            .and_then(|s| s.parse::<StreamName>().ok()),
        timeout_secs: matches.get_one::<u64>("timeout").copied(),
    }
}
