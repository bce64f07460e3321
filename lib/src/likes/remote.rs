use async_trait::async_trait;
use reqwest::Method;

use crate::api::ApiClient;
use crate::{Result, SiteId};

use super::user::LikeUser;

/// Remote source of likes for one kind of content.
///
/// `Ok(None)` means the remote answered without a payload, which callers
/// treat the same as an empty list.
#[async_trait]
pub trait LikesRemote: Send + Sync {
    async fn get_likes(&self, content_id: u64, site_id: SiteId) -> Result<Option<Vec<LikeUser>>>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LikesTarget {
    Post,
    Comment,
}

impl LikesTarget {
    pub fn path(&self, content_id: u64, site_id: SiteId) -> String {
        match self {
            Self::Post => format!("sites/{}/posts/{}/likes", site_id, content_id),
            Self::Comment => format!("sites/{}/comments/{}/likes", site_id, content_id),
        }
    }
}

/// Body of the likes endpoints.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LikesResponse {
    #[serde(default)]
    pub found: Option<u64>,
    #[serde(default)]
    pub likes: Option<Vec<LikeUser>>,
}

/// Likes remote backed by the REST API.
#[derive(Clone, Debug)]
pub struct RestLikesRemote {
    client: ApiClient,
    target: LikesTarget,
}

impl RestLikesRemote {
    pub fn new(client: ApiClient, target: LikesTarget) -> Self {
        Self { client, target }
    }

    pub fn posts(client: ApiClient) -> Self {
        Self::new(client, LikesTarget::Post)
    }

    pub fn comments(client: ApiClient) -> Self {
        Self::new(client, LikesTarget::Comment)
    }
}

#[async_trait]
impl LikesRemote for RestLikesRemote {
    async fn get_likes(&self, content_id: u64, site_id: SiteId) -> Result<Option<Vec<LikeUser>>> {
        let path = self.target.path(content_id, site_id);
        tracing::trace!(%path, "requesting likes");
        let builder = self.client.request(Method::GET, &path)?;
        let response: LikesResponse = self.client.send_json(builder).await?;
        Ok(response.likes)
    }
}
