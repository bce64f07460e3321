use anyhow::{Error, Result};
use chrono::{NaiveTime, Weekday};
use clap::{arg, value_parser, Arg, ArgAction, ArgMatches};

use quill::prompts::{self, BloggingPromptSettings};
use quill::{Config, Database};

pub fn cmd() -> clap::Command {
    clap::Command::new("prompts")
        .subcommand_required(true)
        .display_order(30)
        .about("Inspect and change blogging prompt settings")
        .subcommand(
            clap::Command::new("get")
                .about("Shows stored settings for a site")
                .arg(arg!(<site> "Site id").value_parser(value_parser!(u64))),
        )
        .subcommand(
            clap::Command::new("set")
                .about("Changes stored settings for a site")
                .arg(arg!(<site> "Site id").value_parser(value_parser!(u64)))
                .arg(arg!(--time [time] "Reminder time as HH.mm"))
                .arg(
                    Arg::new("reminders")
                        .long("reminders")
                        .value_parser(value_parser!(bool))
                        .help("Enable or disable prompt reminders"),
                )
                .arg(
                    Arg::new("card")
                        .long("card")
                        .value_parser(value_parser!(bool))
                        .help("Show or hide the prompt card"),
                )
                .arg(
                    Arg::new("day")
                        .long("day")
                        .action(ArgAction::Append)
                        .help("Reminder day, e.g. mon; repeat for more days"),
                ),
        )
}

pub fn run(matches: &ArgMatches, config: &Config) -> Result<()> {
    let db = Database::open(&config.db.path)?;
    match matches.subcommand() {
        Some(("get", m)) => get(m, &db),
        Some(("set", m)) => set(m, &db),
        _ => unreachable!("subcommand is required"),
    }
}

fn site(matches: &ArgMatches) -> Result<u64> {
    matches
        .get_one::<u64>("site")
        .copied()
        .ok_or_else(|| Error::msg("missing site id"))
}

fn get(matches: &ArgMatches, db: &Database) -> Result<()> {
    let site_id = site(matches)?;
    match prompts::settings_for_site(db, site_id)? {
        Some(settings) => print(&settings),
        None => println!("no settings stored for site {}", site_id),
    }
    Ok(())
}

fn set(matches: &ArgMatches, db: &Database) -> Result<()> {
    let site_id = site(matches)?;
    let mut settings = prompts::settings_for_site(db, site_id)?
        .unwrap_or_else(|| BloggingPromptSettings::new(site_id));

    if let Some(time) = matches.get_one::<String>("time") {
        let time = NaiveTime::parse_from_str(time, prompts::REMINDER_TIME_FORMAT)
            .map_err(|e| Error::msg(format!("reminder time must be HH.mm: {}", e)))?;
        settings.set_reminder_time(time);
    }
    if let Some(enabled) = matches.get_one::<bool>("reminders") {
        settings.prompt_reminders_enabled = *enabled;
    }
    if let Some(enabled) = matches.get_one::<bool>("card") {
        settings.prompt_card_enabled = *enabled;
    }
    if let Some(days) = matches.get_many::<String>("day") {
        settings.reminder_days = Default::default();
        for day in days {
            let day = day
                .parse::<Weekday>()
                .map_err(|_| Error::msg(format!("unknown weekday: {}", day)))?;
            settings.reminder_days.set(day, true);
        }
    }

    prompts::store_settings(db, &settings)?;
    db.flush()?;
    print(&settings);
    Ok(())
}

fn print(settings: &BloggingPromptSettings) {
    println!("site: {}", settings.site_id);
    println!("prompt card: {}", settings.prompt_card_enabled);
    println!("reminders: {}", settings.prompt_reminders_enabled);
    match settings.reminder_time_date() {
        Some(time) => println!("reminder time: {}", time.format("%H:%M")),
        None => println!("reminder time: not set"),
    }
    let days = settings
        .reminder_days
        .enabled_weekdays()
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>();
    println!("reminder days: {}", days.join(", "));
}
