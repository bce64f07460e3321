//! Fetches likes for a post using the REST API.
//!
//! ```text
//! cargo run --example likes -- <site_id> <post_id>
//! ```

use quill::api::ApiClient;
use quill::likes::{ContentIdentifier, LikesContentFetcher, LikesListController};
use quill::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let site_id: u64 = args.next().unwrap_or_default().parse()?;
    let post_id: u64 = args.next().unwrap_or_default().parse()?;

    let config = Config::default();
    quill::tracing::init(&config)?;

    let fetcher = LikesContentFetcher::rest(ApiClient::from_config(&config)?);
    let content = ContentIdentifier::Post(post_id);
    let mut controller = LikesListController::new(content, site_id, fetcher);
    controller.refresh();
    controller.next_update().await;

    for row in controller.rows() {
        println!("{:?}", row);
    }

    Ok(())
}
