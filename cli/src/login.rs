use anyhow::{Error, Result};
use clap::ArgMatches;

use crate::util::{remove_token, store_token};

pub fn cmd() -> clap::Command {
    use clap::{Arg, ArgAction, Command};
    Command::new("login")
        .about("Store an API token")
        .long_about(
            "Stores an application token used to authenticate requests to the\n\
            REST API. The token in the config file takes precedence.",
        )
        .display_order(40)
        .arg(
            Arg::new("token")
                .display_order(11)
                .long("token")
                .short('t')
                .help("Provide a valid application token")
                .required_unless_present("logout"),
        )
        .arg(
            Arg::new("logout")
                .long("logout")
                .action(ArgAction::SetTrue)
                .help("Remove the stored token"),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    if matches.get_flag("logout") {
        remove_token().await?;
        println!("token removed");
        return Ok(());
    }

    let token = matches
        .get_one::<String>("token")
        .ok_or_else(|| Error::msg("missing token"))?;
    store_token(token).await?;
    println!("token stored");
    Ok(())
}
