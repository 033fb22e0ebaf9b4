use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, Command};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use todo_commands::run_session;
use todo_scanner::config::ScannerConfig;
use todo_scanner::load_todos;

fn main() -> Result<()> {
    let matches = Command::new("todo_scanner")
        .version("0.1.0")
        .about("Lists TODO comments from source files and lets you filter and sort them")
        .arg(
            Arg::new("root")
                .long("root")
                .num_args(1)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Directory to scan (defaults to the current directory)"),
        )
        .arg(
            Arg::new("extension")
                .long("extension")
                .num_args(1)
                .default_value("js")
                .help("Only scan files ending in .<EXTENSION>"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging on stderr")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .get_matches();

    let root = match matches.get_one::<PathBuf>("root") {
        Some(root) => root.clone(),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let extension = matches
        .get_one::<String>("extension")
        .map(String::as_str)
        .unwrap_or("js");
    let config = ScannerConfig::new(root, extension, matches.get_flag("verbose"));

    TermLogger::init(config.log_level(), Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .context("Failed to initialise logging")?;
    log::debug!("{:?}", config);

    let todos = load_todos(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_session(&todos, stdin.lock(), &mut out)
}
