use chrono_tz::Tz;
use url::Url;

use crate::SiteId;

/// Site a post or comment belongs to.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Blog {
    pub site_id: SiteId,
    pub url: Url,
    /// Site time zone as reported by the platform, if any.
    pub time_zone: Option<Tz>,
}

impl Blog {
    pub fn new(site_id: SiteId, url: Url) -> Self {
        Self {
            site_id,
            url,
            time_zone: None,
        }
    }
}
