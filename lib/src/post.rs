use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::SiteId;

/// Publishing status of a post, as named by the platform.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Status {
    #[default]
    Draft,
    Pending,
    Private,
    Publish,
    /// Platform calls this one `future`.
    #[serde(rename = "future")]
    #[strum(serialize = "future")]
    Scheduled,
    Trash,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Remote id, absent until the post is first uploaded.
    pub post_id: Option<u64>,
    pub site_id: SiteId,

    pub title: String,

    /// Publish date. Absent means "publish immediately".
    pub date_created: Option<DateTime<Utc>>,
    pub date_modified: Option<DateTime<Utc>>,

    pub status: Status,
}

impl Default for Post {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id: None,
            site_id: 0,
            title: String::new(),
            date_created: None,
            date_modified: None,
            status: Status::Draft,
        }
    }
}

impl Post {
    pub fn is_draft(&self) -> bool {
        self.status == Status::Draft
    }

    pub fn has_future_publish_date(&self) -> bool {
        self.has_future_publish_date_at(Utc::now())
    }

    pub fn has_future_publish_date_at(&self, now: DateTime<Utc>) -> bool {
        self.date_created.map(|date| date > now).unwrap_or(false)
    }

    /// Clears any scheduling so the next save publishes right away.
    pub fn publish_immediately(&mut self) {
        self.date_created = None;
        self.status = Status::Publish;
        self.date_modified = Some(Utc::now());
    }
}
