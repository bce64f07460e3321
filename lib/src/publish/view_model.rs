use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::i18n::Language;
use crate::post::{Post, Status};

use super::format::SiteDateFormatter;
use super::state::PublishState;

/// Publish settings for one post.
///
/// Owns the post while the settings are being edited. The derived state and
/// the post's date and status only ever change together, through
/// [`set_date`](Self::set_date).
#[derive(Clone, Debug)]
pub struct PublishSettingsViewModel {
    state: PublishState,
    post: Post,
    time_zone: Tz,
    language: Language,
    date_formatter: SiteDateFormatter,
    date_time_formatter: SiteDateFormatter,
}

impl PublishSettingsViewModel {
    pub fn new(post: Post, time_zone: Tz) -> Self {
        Self::new_at(post, time_zone, Utc::now())
    }

    /// Builds the view-model deriving the state relative to `now`.
    pub fn new_at(post: Post, time_zone: Tz, now: DateTime<Utc>) -> Self {
        let state = PublishState::derive(
            post.date_created,
            post.is_draft(),
            post.has_future_publish_date_at(now),
        );
        let language = Language::default();
        Self {
            state,
            post,
            time_zone,
            language,
            date_formatter: SiteDateFormatter::date(time_zone, language),
            date_time_formatter: SiteDateFormatter::date_time(time_zone, language),
        }
    }

    pub fn state(&self) -> PublishState {
        self.state
    }

    /// Post title, if it has one.
    pub fn title(&self) -> Option<&str> {
        let title = self.post.title.trim();
        if title.is_empty() {
            None
        } else {
            Some(title)
        }
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn date_formatter(&self) -> &SiteDateFormatter {
        &self.date_formatter
    }

    pub fn date_time_formatter(&self) -> &SiteDateFormatter {
        &self.date_time_formatter
    }

    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.state.date()
    }

    /// Private posts must carry a publish date.
    pub fn is_required(&self) -> bool {
        self.post.status == Status::Private
    }

    /// Detail text for the date row.
    pub fn detail_string(&self) -> String {
        match self.date() {
            Some(date) => self.date_time_formatter.format(&date),
            None => self.language.immediately().to_string(),
        }
    }

    /// Assigns a new publish date, or clears it with `None`.
    ///
    /// Never produces `Published`; that state only comes from re-deriving
    /// after the platform confirms the post went live.
    pub fn set_date(&mut self, date: Option<DateTime<Utc>>) {
        match date {
            Some(date) => {
                self.post.date_created = Some(date);
                self.post.status = Status::Scheduled;
                self.post.date_modified = Some(Utc::now());
                self.state = PublishState::Scheduled(date);
            }
            None => {
                self.post.publish_immediately();
                self.state = PublishState::Immediate;
            }
        }
        tracing::debug!(post = %self.post.id, state = ?self.state, "publish date changed");
    }

    pub fn post(&self) -> &Post {
        &self.post
    }

    /// Hands the post back once editing is done.
    pub fn into_post(self) -> Post {
        self.post
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn derives_state_from_post() {
        let future = now() + Duration::days(3);
        let post = Post {
            date_created: Some(future),
            status: Status::Draft,
            ..Default::default()
        };
        let vm = PublishSettingsViewModel::new_at(post, chrono_tz::UTC, now());
        assert_eq!(vm.state(), PublishState::Scheduled(future));
        assert_eq!(vm.date(), Some(future));

        let past = now() - Duration::days(3);
        let post = Post {
            date_created: Some(past),
            status: Status::Publish,
            ..Default::default()
        };
        let vm = PublishSettingsViewModel::new_at(post, chrono_tz::UTC, now());
        assert_eq!(vm.state(), PublishState::Published(past));
    }

    #[test]
    fn set_date_schedules_post() {
        let mut vm = PublishSettingsViewModel::new_at(Post::default(), chrono_tz::UTC, now());
        assert_eq!(vm.state(), PublishState::Immediate);

        let date = now() + Duration::hours(6);
        vm.set_date(Some(date));
        assert_eq!(vm.state(), PublishState::Scheduled(date));
        assert_eq!(vm.post().date_created, Some(date));
        assert_eq!(vm.post().status, Status::Scheduled);
    }

    #[test]
    fn set_date_in_the_past_still_schedules() {
        let mut vm = PublishSettingsViewModel::new_at(Post::default(), chrono_tz::UTC, now());
        let date = now() - Duration::days(30);
        vm.set_date(Some(date));
        assert_eq!(vm.state(), PublishState::Scheduled(date));
    }

    #[test]
    fn clearing_date_publishes_immediately() {
        let post = Post {
            date_created: Some(now() + Duration::days(1)),
            status: Status::Scheduled,
            ..Default::default()
        };
        let mut vm = PublishSettingsViewModel::new_at(post, chrono_tz::UTC, now());
        vm.set_date(None);
        assert_eq!(vm.state(), PublishState::Immediate);
        assert_eq!(vm.date(), None);

        let post = vm.into_post();
        assert_eq!(post.date_created, None);
        assert_eq!(post.status, Status::Publish);
    }

    #[test]
    fn detail_string_and_title() {
        let post = Post {
            title: "  Hello world ".to_string(),
            ..Default::default()
        };
        let mut vm = PublishSettingsViewModel::new_at(post, chrono_tz::UTC, now());
        assert_eq!(vm.title(), Some("Hello world"));
        assert_eq!(vm.detail_string(), "Immediately");

        vm.set_date(Some(Utc.with_ymd_and_hms(2024, 5, 2, 14, 5, 0).unwrap()));
        assert_eq!(vm.detail_string(), "May 2, 2024, 2:05 PM");

        let vm = PublishSettingsViewModel::new_at(Post::default(), chrono_tz::UTC, now());
        assert_eq!(vm.title(), None);
    }

    #[test]
    fn private_posts_require_date() {
        let post = Post {
            status: Status::Private,
            ..Default::default()
        };
        let vm = PublishSettingsViewModel::new_at(post, chrono_tz::UTC, now());
        assert!(vm.is_required());
        let vm = PublishSettingsViewModel::new_at(Post::default(), chrono_tz::UTC, now());
        assert!(!vm.is_required());
    }
}
