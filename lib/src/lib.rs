//! Publishing and likes core for a blogging client.
//!
//! The library covers the pieces of the client that carry actual logic:
//! deriving a post's publish state and projecting it into displayable rows,
//! fetching the users who liked a post or a comment, talking to the remote
//! comment service, and keeping per-site blogging prompt settings.
//!
//! Rendering is left to the caller. Everything here produces plain values
//! (rows, footers, user lists) that any front-end can draw.

#[macro_use]
extern crate serde_derive;

pub mod api;
pub mod blog;
pub mod comment;
pub mod config;
pub mod db;
pub mod error;
pub mod i18n;
pub mod likes;
pub mod post;
pub mod prompts;
pub mod publish;
pub mod tracing;

pub use blog::Blog;
pub use comment::{CommentServiceRemote, RemoteComment};
pub use config::Config;
pub use db::Database;
pub use error::{Error, ErrorKind, Result};
pub use likes::{ContentIdentifier, LikeUser, LikesContentFetcher, LikesListController};
pub use post::Post;
pub use prompts::BloggingPromptSettings;
pub use publish::{PublishSettingsViewModel, PublishState};

pub type SiteId = u64;
