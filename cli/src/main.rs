mod likes;
mod login;
mod prompts;
mod publish;

mod util;

use clap::{Arg, Command};
use quill::{config, Config};

pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config file is optional. Without it the defaults apply, and a path can
    // still be provided through the `--config` argument.
    let mut config: Config = config::load().unwrap_or_default();

    let matches = cmd().get_matches();

    // Load the proper config if proper argument is provided.
    if let Some(config_path) = matches.get_one::<String>("config") {
        config = config::load_from(config_path)?;
    }
    if let Some(level) = matches.get_one::<String>("verbosity") {
        config.tracing.level = level.parse()?;
    }
    quill::tracing::init(&config)?;

    match matches.subcommand() {
        Some(("publish", m)) => publish::run(m, &config)?,
        Some(("likes", m)) => likes::run(m, &config).await?,
        Some(("prompts", m)) => prompts::run(m, &config)?,
        Some(("login", m)) => login::run(m).await?,
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}

pub fn cmd() -> Command {
    Command::new("quill")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .infer_subcommands(true)
        .version(VERSION)
        .about("Publishing and likes tools for a blogging client")
        .subcommand(publish::cmd())
        .subcommand(likes::cmd())
        .subcommand(prompts::cmd())
        .subcommand(login::cmd())
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .global(true)
                .help("Path to the config file"),
        )
        .arg(
            Arg::new("verbosity")
                .long("verbosity")
                .short('v')
                .display_order(100)
                .value_name("level")
                .value_parser(["trace", "debug", "info", "warn", "error", "none"])
                .global(true)
                .help("Set the verbosity of the log output"),
        )
}
