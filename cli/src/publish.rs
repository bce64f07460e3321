use anyhow::{Error, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use clap::{Arg, ArgAction, ArgMatches};

use quill::post::{Post, Status};
use quill::publish::{self, PublishSettingsViewModel};
use quill::Config;

pub fn cmd() -> clap::Command {
    clap::Command::new("publish")
        .about("Show publish settings rows for a post")
        .long_about(
            "Derives the publish state of a post from its date and status and\n\
            prints the rows and footer of the publish settings screen.\n\n\
            Dates are read as RFC 3339 or as `YYYY-MM-DD HH:MM` in the site\n\
            time zone.",
        )
        .display_order(10)
        .arg(
            Arg::new("date")
                .long("date")
                .short('d')
                .help("Stored post date"),
        )
        .arg(
            Arg::new("status")
                .long("status")
                .short('s')
                .default_value("draft")
                .value_parser(["draft", "pending", "private", "publish", "future", "trash"])
                .help("Stored post status"),
        )
        .arg(
            Arg::new("tz")
                .long("tz")
                .help("Site time zone, e.g. Europe/Warsaw"),
        )
        .arg(
            Arg::new("set")
                .long("set")
                .help("Pick a new publish date before showing the rows")
                .conflicts_with("immediately"),
        )
        .arg(
            Arg::new("immediately")
                .long("immediately")
                .action(ArgAction::SetTrue)
                .help("Clear the publish date before showing the rows"),
        )
}

pub fn run(matches: &ArgMatches, config: &Config) -> Result<()> {
    let tz = match matches.get_one::<String>("tz") {
        Some(name) => name
            .parse::<Tz>()
            .map_err(|e| Error::msg(format!("unknown time zone {}: {}", name, e)))?,
        None => config.site.default_time_zone,
    };

    let status = match matches.get_one::<String>("status").map(String::as_str) {
        Some("pending") => Status::Pending,
        Some("private") => Status::Private,
        Some("publish") => Status::Publish,
        Some("future") => Status::Scheduled,
        Some("trash") => Status::Trash,
        _ => Status::Draft,
    };

    let post = Post {
        date_created: matches
            .get_one::<String>("date")
            .map(|d| parse_date(d, tz))
            .transpose()?,
        status,
        ..Default::default()
    };

    let mut vm = PublishSettingsViewModel::new(post, tz);
    if let Some(date) = matches.get_one::<String>("set") {
        vm.set_date(Some(parse_date(date, tz)?));
    } else if matches.get_flag("immediately") {
        vm.set_date(None);
    }

    let projection = publish::project(&vm);
    println!("state: {:?}", vm.state());
    for row in &projection.rows {
        println!("{}: {}", row.title, row.detail);
    }
    if let Some(footer) = projection.footer {
        println!();
        println!("{}", footer);
    }

    Ok(())
}

fn parse_date(input: &str, tz: Tz) -> Result<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Ok(date.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M")
        .map_err(|e| Error::msg(format!("failed parsing date {}: {}", input, e)))?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|date| date.with_timezone(&Utc))
        .ok_or_else(|| Error::msg(format!("{} doesn't exist in {}", input, tz)))
}
