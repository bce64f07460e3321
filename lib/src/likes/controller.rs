use tokio::sync::oneshot;

use crate::i18n::Language;
use crate::{Result, SiteId};

use super::fetcher::LikesContentFetcher;
use super::notification::{ContentIdentifier, Notification};
use super::user::LikeUser;

/// Row of a likes list, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LikesRow {
    Header(String),
    Loading,
    Error(String),
    User(LikeUser),
}

type FetchOutcome = Result<Vec<LikeUser>>;

/// State of a likes list screen.
///
/// At most one fetch runs at a time. Each fetch runs on the tokio runtime
/// and reports back through its own channel; state changes only when the
/// controller applies that report. A fetch task that dies without reporting
/// closes its channel and counts as a failure. Once the controller is
/// dropped (or dismissed) any late report is discarded.
pub struct LikesListController {
    content: ContentIdentifier,
    site_id: SiteId,
    fetcher: LikesContentFetcher,
    language: Language,

    is_loading_content: bool,
    liking_users: Vec<LikeUser>,
    is_showing_error: bool,

    pending: Option<oneshot::Receiver<FetchOutcome>>,
}

impl LikesListController {
    pub fn new(content: ContentIdentifier, site_id: SiteId, fetcher: LikesContentFetcher) -> Self {
        Self {
            content,
            site_id,
            fetcher,
            language: Language::default(),
            is_loading_content: false,
            liking_users: Vec::new(),
            is_showing_error: false,
            pending: None,
        }
    }

    /// Returns `None` for notifications that don't point at liked content.
    pub fn from_notification(
        notification: &Notification,
        fetcher: LikesContentFetcher,
    ) -> Option<Self> {
        let (content, site_id) = ContentIdentifier::from_notification(notification)?;
        Some(Self::new(content, site_id, fetcher))
    }

    pub fn content(&self) -> ContentIdentifier {
        self.content
    }

    pub fn site_id(&self) -> SiteId {
        self.site_id
    }

    pub fn is_loading_content(&self) -> bool {
        self.is_loading_content
    }

    pub fn liking_users(&self) -> &[LikeUser] {
        &self.liking_users
    }

    pub fn is_showing_error(&self) -> bool {
        self.is_showing_error
    }

    /// Starts fetching the liking users. Returns `false` without doing
    /// anything if a fetch is already in flight.
    ///
    /// Must be called from within a tokio runtime.
    pub fn refresh(&mut self) -> bool {
        if self.is_loading_content {
            return false;
        }
        self.is_loading_content = true;
        self.is_showing_error = false;

        let (tx, rx) = oneshot::channel();
        self.pending = Some(rx);

        let fetcher = self.fetcher.clone();
        let content = self.content;
        let site_id = self.site_id;
        tokio::spawn(async move {
            let outcome = fetcher.fetch(content, site_id).await;
            if !deliver(tx, outcome) {
                tracing::trace!(?content, "likes screen gone, dropping result");
            }
        });

        true
    }

    /// Waits for the in-flight fetch and applies its result. Returns `false`
    /// right away if nothing is in flight.
    pub async fn next_update(&mut self) -> bool {
        let received = match self.pending.as_mut() {
            Some(rx) => rx.await,
            None => return false,
        };
        self.pending = None;
        self.finish(received.ok());
        true
    }

    /// Applies a finished fetch if one is waiting, without blocking.
    pub fn try_update(&mut self) -> bool {
        let received = match self.pending.as_mut().map(|rx| rx.try_recv()) {
            None | Some(Err(oneshot::error::TryRecvError::Empty)) => return false,
            Some(Ok(outcome)) => Some(outcome),
            Some(Err(oneshot::error::TryRecvError::Closed)) => None,
        };
        self.pending = None;
        self.finish(received);
        true
    }

    /// `None` means the fetch task ended without reporting.
    fn finish(&mut self, received: Option<FetchOutcome>) {
        match received {
            Some(outcome) => self.apply(outcome),
            None => {
                tracing::warn!(content = ?self.content, "likes fetch ended without a result");
                self.is_loading_content = false;
                self.is_showing_error = true;
            }
        }
    }

    fn apply(&mut self, outcome: FetchOutcome) {
        self.is_loading_content = false;
        match outcome {
            Ok(users) => {
                tracing::debug!(content = ?self.content, count = users.len(), "likes loaded");
                self.liking_users = users;
                self.is_showing_error = false;
            }
            Err(e) => {
                tracing::warn!(
                    content = ?self.content,
                    site = self.site_id,
                    "failed fetching likes: {}",
                    e
                );
                self.is_showing_error = true;
            }
        }
    }

    /// Header first, then either the loading row, the error row or one row
    /// per user.
    pub fn rows(&self) -> Vec<LikesRow> {
        let header = if self.is_loading_content || self.is_showing_error {
            self.language.likes_title().to_string()
        } else {
            self.language.likes_header(self.liking_users.len())
        };
        let mut rows = vec![LikesRow::Header(header)];
        if self.is_loading_content {
            rows.push(LikesRow::Loading);
        } else if self.is_showing_error {
            rows.push(LikesRow::Error(self.language.likes_error().to_string()));
        } else {
            rows.extend(self.liking_users.iter().cloned().map(LikesRow::User));
        }
        rows
    }

    /// User shown at the given row index, if that row is a user row.
    pub fn user_at(&self, row: usize) -> Option<&LikeUser> {
        if self.is_loading_content || self.is_showing_error {
            return None;
        }
        row.checked_sub(1).and_then(|i| self.liking_users.get(i))
    }

    /// Tears the screen down. Results of a fetch still in flight are
    /// discarded.
    pub fn dismiss(self) {
        tracing::trace!(content = ?self.content, "likes screen dismissed");
    }
}

/// Hands a finished fetch to its controller. Returns `false` if the
/// controller is gone.
fn deliver(tx: oneshot::Sender<FetchOutcome>, outcome: FetchOutcome) -> bool {
    tx.send(outcome).is_ok()
}
