use anyhow::{Error, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches};

use quill::api::ApiClient;
use quill::likes::{ContentIdentifier, LikesContentFetcher, LikesListController, LikesRow};
use quill::Config;

use crate::util::retrieve_token;

pub fn cmd() -> clap::Command {
    clap::Command::new("likes")
        .about("List users who liked a post or a comment")
        .display_order(20)
        .arg(
            Arg::new("post")
                .long("post")
                .short('p')
                .value_parser(value_parser!(u64))
                .conflicts_with("comment")
                .help("Remote post id"),
        )
        .arg(
            Arg::new("comment")
                .long("comment")
                .value_parser(value_parser!(u64))
                .help("Remote comment id"),
        )
        .arg(
            Arg::new("site")
                .long("site")
                .short('s')
                .required(true)
                .value_parser(value_parser!(u64))
                .help("Site id"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print users as json"),
        )
}

pub async fn run(matches: &ArgMatches, config: &Config) -> Result<()> {
    let content = match (
        matches.get_one::<u64>("post"),
        matches.get_one::<u64>("comment"),
    ) {
        (Some(id), _) => ContentIdentifier::Post(*id),
        (None, Some(id)) => ContentIdentifier::Comment(*id),
        (None, None) => return Err(Error::msg("provide either --post or --comment")),
    };
    let site_id = *matches
        .get_one::<u64>("site")
        .ok_or_else(|| Error::msg("missing --site"))?;

    // Fall back on the token stored by `quill login`.
    let mut config = config.clone();
    if config.api.token.is_none() {
        config.api.token = retrieve_token().await.ok();
    }
    let fetcher = LikesContentFetcher::rest(ApiClient::from_config(&config)?);

    let mut controller = LikesListController::new(content, site_id, fetcher);
    controller.refresh();
    controller.next_update().await;

    if matches.get_flag("json") {
        println!(
            "{}",
            serde_json::to_string_pretty(controller.liking_users())?
        );
        return Ok(());
    }

    for row in controller.rows() {
        match row {
            LikesRow::Header(text) => println!("{}", text),
            LikesRow::Loading => println!("  ..."),
            LikesRow::Error(text) => println!("  {}", text),
            LikesRow::User(user) => println!("  {} (@{})", user.display_name, user.username),
        }
    }
    controller.dismiss();

    Ok(())
}
