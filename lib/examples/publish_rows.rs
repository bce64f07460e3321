//! Prints the publish settings rows for a scheduled post, then publishes it
//! immediately and prints them again.

use chrono::{Duration, Utc};
use quill::post::{Post, Status};
use quill::publish::{self, PublishSettingsViewModel};

fn main() -> anyhow::Result<()> {
    let post = Post {
        title: "Spring update".to_string(),
        date_created: Some(Utc::now() + Duration::days(3)),
        status: Status::Scheduled,
        ..Default::default()
    };

    let mut vm = PublishSettingsViewModel::new(post, chrono_tz::America::Sao_Paulo);
    show(&vm);

    vm.set_date(None);
    show(&vm);

    Ok(())
}

fn show(vm: &PublishSettingsViewModel) {
    let projection = publish::project(vm);
    println!("{:?}", vm.state());
    for row in projection.rows {
        println!("  {}: {}", row.title, row.detail);
    }
    if let Some(footer) = projection.footer {
        println!("  {}", footer);
    }
}
