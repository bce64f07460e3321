//! Users who liked a post or a comment.
//!
//! A like notification is turned into a [`ContentIdentifier`]; the
//! [`LikesContentFetcher`] asks the matching remote for the liking users and
//! the [`LikesListController`] keeps the screen state built from the result.

pub mod controller;
pub mod fetcher;
pub mod notification;
pub mod remote;
pub mod user;

pub use controller::{LikesListController, LikesRow};
pub use fetcher::LikesContentFetcher;
pub use notification::{ContentIdentifier, Notification, NotificationKind};
pub use remote::{LikesRemote, LikesTarget, RestLikesRemote};
pub use user::LikeUser;
