//! Publish settings for a single post.
//!
//! A post's stored date and status are turned into a [`PublishState`], which
//! the [`PublishSettingsViewModel`] keeps in sync with the post as the user
//! picks a new date. [`rows::project`] turns the view-model into the rows and
//! footer a settings screen displays.

pub mod format;
pub mod rows;
pub mod state;
pub mod view_model;

pub use format::{offset_label, seconds_from_gmt, SiteDateFormatter};
pub use rows::{project, Projection, RowAction, RowKind, RowSpec};
pub use state::PublishState;
pub use view_model::PublishSettingsViewModel;
