use chrono::{DateTime, Utc};
use url::Url;

/// A user who liked some content. Snapshot of the remote answer, never
/// stored locally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeUser {
    #[serde(rename = "ID")]
    pub id: u64,
    #[serde(rename = "login", default)]
    pub username: String,
    #[serde(rename = "name", default)]
    pub display_name: String,
    #[serde(rename = "avatar_URL", default, deserialize_with = "lenient_url")]
    pub avatar_url: Option<Url>,
    #[serde(default)]
    pub date_liked: Option<DateTime<Utc>>,
}

/// The platform sends an empty string instead of omitting missing avatars.
fn lenient_url<'de, D>(deserializer: D) -> std::result::Result<Option<Url>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = serde::Deserialize::deserialize(deserializer)?;
    Ok(raw.and_then(|s| Url::parse(&s).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_platform_json() {
        let user: LikeUser = serde_json::from_str(
            r#"{
                "ID": 1234,
                "login": "ada",
                "name": "Ada Lovelace",
                "avatar_URL": "https://gravatar.com/avatar/abc",
                "date_liked": "2024-04-01T10:00:00+00:00"
            }"#,
        )
        .unwrap();
        assert_eq!(user.id, 1234);
        assert_eq!(user.display_name, "Ada Lovelace");
        assert_eq!(
            user.avatar_url.unwrap().as_str(),
            "https://gravatar.com/avatar/abc"
        );
        assert!(user.date_liked.is_some());
    }

    #[test]
    fn empty_avatar_is_none() {
        let user: LikeUser =
            serde_json::from_str(r#"{"ID": 1, "login": "x", "avatar_URL": ""}"#).unwrap();
        assert_eq!(user.avatar_url, None);
        assert_eq!(user.display_name, "");
    }
}
