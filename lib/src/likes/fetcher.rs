use std::sync::Arc;

use crate::api::ApiClient;
use crate::{Result, SiteId};

use super::notification::ContentIdentifier;
use super::remote::{LikesRemote, RestLikesRemote};
use super::user::LikeUser;

/// Fetches liking users, dispatching on the kind of content.
#[derive(Clone)]
pub struct LikesContentFetcher {
    posts: Arc<dyn LikesRemote>,
    comments: Arc<dyn LikesRemote>,
}

impl LikesContentFetcher {
    pub fn new(posts: Arc<dyn LikesRemote>, comments: Arc<dyn LikesRemote>) -> Self {
        Self { posts, comments }
    }

    /// Fetcher talking to the REST API for both kinds of content.
    pub fn rest(client: ApiClient) -> Self {
        Self::new(
            Arc::new(RestLikesRemote::posts(client.clone())),
            Arc::new(RestLikesRemote::comments(client)),
        )
    }

    /// A missing payload is returned as an empty list.
    pub async fn fetch(
        &self,
        content: ContentIdentifier,
        site_id: SiteId,
    ) -> Result<Vec<LikeUser>> {
        let users = match content {
            ContentIdentifier::Post(id) => self.posts.get_likes(id, site_id).await?,
            ContentIdentifier::Comment(id) => self.comments.get_likes(id, site_id).await?,
        };
        Ok(users.unwrap_or_default())
    }
}

impl std::fmt::Debug for LikesContentFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LikesContentFetcher").finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::error::ErrorKind;

    pub(crate) fn user(id: u64, name: &str) -> LikeUser {
        LikeUser {
            id,
            username: name.to_lowercase(),
            display_name: name.to_string(),
            avatar_url: None,
            date_liked: None,
        }
    }

    /// Remote answering every call with the same canned result.
    pub(crate) struct FakeRemote {
        pub answer: Option<Option<Vec<LikeUser>>>,
        pub calls: AtomicUsize,
    }

    impl FakeRemote {
        pub fn users(users: Vec<LikeUser>) -> Arc<Self> {
            Arc::new(Self {
                answer: Some(Some(users)),
                calls: AtomicUsize::new(0),
            })
        }

        pub fn empty() -> Arc<Self> {
            Arc::new(Self {
                answer: Some(None),
                calls: AtomicUsize::new(0),
            })
        }

        pub fn failing() -> Arc<Self> {
            Arc::new(Self {
                answer: None,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl LikesRemote for FakeRemote {
        async fn get_likes(&self, _id: u64, _site: SiteId) -> Result<Option<Vec<LikeUser>>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.answer {
                Some(answer) => Ok(answer.clone()),
                None => Err(ErrorKind::RemoteError {
                    status: 500,
                    message: "boom".to_string(),
                }
                .into()),
            }
        }
    }

    #[tokio::test]
    async fn dispatches_by_content_kind() {
        let posts = FakeRemote::users(vec![user(1, "Ann")]);
        let comments = FakeRemote::users(vec![user(2, "Ben"), user(3, "Cy")]);
        let fetcher = LikesContentFetcher::new(posts.clone(), comments.clone());

        let users = fetcher.fetch(ContentIdentifier::Post(42), 7).await.unwrap();
        assert_eq!(users, vec![user(1, "Ann")]);
        assert_eq!(posts.calls.load(Ordering::SeqCst), 1);
        assert_eq!(comments.calls.load(Ordering::SeqCst), 0);

        let users = fetcher.fetch(ContentIdentifier::Comment(9), 7).await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(comments.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_payload_is_empty_list() {
        let fetcher = LikesContentFetcher::new(FakeRemote::empty(), FakeRemote::empty());
        let users = fetcher.fetch(ContentIdentifier::Post(1), 1).await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn failure_propagates() {
        let fetcher = LikesContentFetcher::new(FakeRemote::failing(), FakeRemote::empty());
        assert!(fetcher.fetch(ContentIdentifier::Post(1), 1).await.is_err());
    }
}
