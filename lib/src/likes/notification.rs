use crate::SiteId;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Like,
    CommentLike,
    Comment,
    Follow,
    Matcher,
    #[serde(other)]
    Other,
}

/// The parts of a notification needed to find liked content.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Notification {
    pub kind: Option<NotificationKind>,
    pub meta_site_id: Option<SiteId>,
    pub meta_post_id: Option<u64>,
    pub meta_comment_id: Option<u64>,
}

/// Content that can be liked.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContentIdentifier {
    Post(u64),
    Comment(u64),
}

impl ContentIdentifier {
    /// Picks the liked content out of a notification, together with the
    /// site it lives on.
    ///
    /// Only like and comment-like notifications qualify, and each needs its
    /// own id plus the site id.
    pub fn from_notification(notification: &Notification) -> Option<(Self, SiteId)> {
        let content = match notification.kind? {
            NotificationKind::Like => Self::Post(notification.meta_post_id?),
            NotificationKind::CommentLike => Self::Comment(notification.meta_comment_id?),
            NotificationKind::Comment
            | NotificationKind::Follow
            | NotificationKind::Matcher
            | NotificationKind::Other => return None,
        };
        let site_id = notification.meta_site_id?;
        Some((content, site_id))
    }

    pub fn id(&self) -> u64 {
        match self {
            Self::Post(id) | Self::Comment(id) => *id,
        }
    }
}
