//! Remote comment service.
//!
//! [`CommentServiceRemote`] lists, creates, edits and moderates comments on
//! a blog. [`RestCommentService`] implements it on top of the REST API.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde_json::{json, Value};
use url::Url;

use crate::api::ApiClient;
use crate::blog::Blog;
use crate::error::{ErrorKind, Result};

/// Moderation status of a comment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CommentStatus {
    Approved,
    /// Platform calls this one `unapproved`.
    #[serde(rename = "unapproved")]
    #[strum(serialize = "unapproved")]
    #[default]
    Pending,
    Spam,
    Trash,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteComment {
    /// Absent for comments not yet published.
    pub comment_id: Option<u64>,
    pub post_id: u64,
    /// Comment this one replies to, if any.
    pub parent_id: Option<u64>,

    pub author: String,
    pub author_email: String,
    pub author_url: Option<Url>,

    /// Content is html as returned by the platform.
    pub content: String,
    pub date: Option<DateTime<Utc>>,
    pub link: Option<Url>,
    pub status: CommentStatus,
    pub post_title: String,
}

#[async_trait]
pub trait CommentServiceRemote: Send + Sync {
    async fn get_comments(&self, blog: &Blog) -> Result<Vec<RemoteComment>>;

    /// Publishes a new comment
    async fn create_comment(&self, comment: &RemoteComment, blog: &Blog) -> Result<RemoteComment>;

    /// Updates the content of an existing comment
    async fn update_comment(&self, comment: &RemoteComment, blog: &Blog) -> Result<RemoteComment>;

    /// Updates the status of an existing comment
    async fn moderate_comment(&self, comment: &RemoteComment, blog: &Blog)
        -> Result<RemoteComment>;
}

/// Number of comments requested per listing.
pub const PAGE_SIZE: usize = 100;

#[derive(Clone, Debug)]
pub struct RestCommentService {
    client: ApiClient,
}

impl RestCommentService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn post_comment(&self, path: &str, body: Value) -> Result<RemoteComment> {
        let builder = self.client.request(Method::POST, path)?.json(&body);
        let json: CommentJson = self.client.send_json(builder).await?;
        Ok(json.into())
    }
}

fn existing_id(comment: &RemoteComment) -> Result<u64> {
    comment
        .comment_id
        .ok_or_else(|| ErrorKind::BadInput("comment has no remote id".to_string()).into())
}

#[async_trait]
impl CommentServiceRemote for RestCommentService {
    async fn get_comments(&self, blog: &Blog) -> Result<Vec<RemoteComment>> {
        let path = format!("sites/{}/comments", blog.site_id);
        let builder = self.client.request(Method::GET, &path)?.query(&[
            ("status", "all".to_string()),
            ("number", PAGE_SIZE.to_string()),
        ]);
        let response: CommentsResponse = self.client.send_json(builder).await?;
        tracing::debug!(site = blog.site_id, count = response.comments.len(), "comments listed");
        Ok(response.comments.into_iter().map(Into::into).collect())
    }

    async fn create_comment(&self, comment: &RemoteComment, blog: &Blog) -> Result<RemoteComment> {
        let path = match comment.parent_id {
            Some(parent) => format!("sites/{}/comments/{}/replies/new", blog.site_id, parent),
            None => format!("sites/{}/posts/{}/replies/new", blog.site_id, comment.post_id),
        };
        self.post_comment(&path, json!({ "content": comment.content }))
            .await
    }

    async fn update_comment(&self, comment: &RemoteComment, blog: &Blog) -> Result<RemoteComment> {
        let path = format!("sites/{}/comments/{}", blog.site_id, existing_id(comment)?);
        self.post_comment(&path, json!({ "content": comment.content }))
            .await
    }

    async fn moderate_comment(
        &self,
        comment: &RemoteComment,
        blog: &Blog,
    ) -> Result<RemoteComment> {
        if comment.status == CommentStatus::Unknown {
            return Err(ErrorKind::BadInput("unknown comment status".to_string()).into());
        }
        let path = format!("sites/{}/comments/{}", blog.site_id, existing_id(comment)?);
        self.post_comment(&path, json!({ "status": comment.status.to_string() }))
            .await
    }
}

#[derive(Clone, Debug, Deserialize)]
struct CommentsResponse {
    #[serde(default)]
    comments: Vec<CommentJson>,
}

/// Comment as sent by the REST API.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct CommentJson {
    #[serde(rename = "ID")]
    id: Option<u64>,
    post: Option<PostRefJson>,
    /// Either `false` or `{"ID": ..}`.
    parent: Value,
    author: Option<AuthorJson>,
    content: String,
    date: Option<DateTime<Utc>>,
    #[serde(rename = "URL")]
    url: Option<String>,
    status: Option<CommentStatus>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct PostRefJson {
    #[serde(rename = "ID")]
    id: u64,
    title: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct AuthorJson {
    name: String,
    email: Value,
    #[serde(rename = "URL")]
    url: String,
}

impl From<CommentJson> for RemoteComment {
    fn from(json: CommentJson) -> Self {
        let post = json.post.unwrap_or_default();
        let author = json.author.unwrap_or_default();
        Self {
            comment_id: json.id,
            post_id: post.id,
            parent_id: json.parent.get("ID").and_then(Value::as_u64),
            author: author.name,
            // email comes back as `false` when hidden
            author_email: author.email.as_str().unwrap_or_default().to_string(),
            author_url: Url::parse(&author.url).ok(),
            content: json.content,
            date: json.date,
            link: json.url.and_then(|u| Url::parse(&u).ok()),
            status: json.status.unwrap_or_default(),
            post_title: post.title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_comment_json() {
        let json: CommentJson = serde_json::from_str(
            r#"{
                "ID": 31,
                "post": {"ID": 42, "title": "Hello", "type": "post"},
                "author": {"name": "Ann", "email": "ann@example.com", "URL": "https://ann.blog"},
                "date": "2024-02-03T04:05:06+00:00",
                "URL": "https://example.blog/hello#comment-31",
                "content": "<p>Nice</p>",
                "status": "approved",
                "parent": {"ID": 30, "type": "comment"}
            }"#,
        )
        .unwrap();
        let comment = RemoteComment::from(json);
        assert_eq!(comment.comment_id, Some(31));
        assert_eq!(comment.post_id, 42);
        assert_eq!(comment.parent_id, Some(30));
        assert_eq!(comment.post_title, "Hello");
        assert_eq!(comment.author_email, "ann@example.com");
        assert_eq!(comment.status, CommentStatus::Approved);
        assert!(comment.link.is_some());
    }

    #[test]
    fn top_level_comment_with_hidden_email() {
        let json: CommentJson = serde_json::from_str(
            r#"{"ID": 5, "parent": false, "author": {"name": "Bo", "email": false, "URL": ""},
                "status": "unapproved"}"#,
        )
        .unwrap();
        let comment = RemoteComment::from(json);
        assert_eq!(comment.parent_id, None);
        assert_eq!(comment.author_email, "");
        assert_eq!(comment.author_url, None);
        assert_eq!(comment.status, CommentStatus::Pending);
    }

    #[test]
    fn unknown_status_is_kept_as_unknown() {
        let status: CommentStatus = serde_json::from_str("\"held\"").unwrap();
        assert_eq!(status, CommentStatus::Unknown);
        assert_eq!(CommentStatus::Pending.to_string(), "unapproved");
    }

    #[tokio::test]
    async fn editing_requires_remote_id() {
        let service = RestCommentService::new(ApiClient::new(
            Url::parse("http://127.0.0.1:9/").unwrap(),
            None,
        ));
        let blog = Blog::new(1, Url::parse("https://example.blog").unwrap());
        let comment = RemoteComment::default();

        let err = service.update_comment(&comment, &blog).await.unwrap_err();
        assert!(matches!(err.kind, ErrorKind::BadInput(_)));
        let err = service.moderate_comment(&comment, &blog).await.unwrap_err();
        assert!(matches!(err.kind, ErrorKind::BadInput(_)));
    }
}
