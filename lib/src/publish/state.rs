use chrono::{DateTime, Utc};

/// Temporal publishing status of a post.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublishState {
    /// Will go live at the given date.
    Scheduled(DateTime<Utc>),
    /// Went live at the given date.
    Published(DateTime<Utc>),
    /// No date assigned, publishes on next save.
    Immediate,
}

impl PublishState {
    /// Derives the state from the stored post fields.
    ///
    /// A draft without a future date counts as `Immediate` even if it carries
    /// a date, since the date on a draft is only its creation time.
    pub fn derive(
        date_created: Option<DateTime<Utc>>,
        is_draft: bool,
        has_future_publish_date: bool,
    ) -> Self {
        match date_created {
            Some(date) if !is_draft || has_future_publish_date => {
                if has_future_publish_date {
                    Self::Scheduled(date)
                } else {
                    Self::Published(date)
                }
            }
            _ => Self::Immediate,
        }
    }

    pub fn date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Scheduled(date) | Self::Published(date) => Some(*date),
            Self::Immediate => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 14, 15, 9, 26).unwrap()
    }

    #[test]
    fn absent_date_is_immediate() {
        for is_draft in [false, true] {
            for future in [false, true] {
                assert_eq!(
                    PublishState::derive(None, is_draft, future),
                    PublishState::Immediate
                );
            }
        }
    }

    #[test]
    fn past_date_on_non_draft_is_published() {
        assert_eq!(
            PublishState::derive(Some(date()), false, false),
            PublishState::Published(date())
        );
    }

    #[test]
    fn future_date_is_scheduled_even_for_drafts() {
        for is_draft in [false, true] {
            assert_eq!(
                PublishState::derive(Some(date()), is_draft, true),
                PublishState::Scheduled(date())
            );
        }
    }

    #[test]
    fn dated_draft_without_future_date_is_immediate() {
        assert_eq!(
            PublishState::derive(Some(date()), true, false),
            PublishState::Immediate
        );
    }

    #[test]
    fn date_accessor() {
        assert_eq!(PublishState::Scheduled(date()).date(), Some(date()));
        assert_eq!(PublishState::Published(date()).date(), Some(date()));
        assert_eq!(PublishState::Immediate.date(), None);
    }
}
