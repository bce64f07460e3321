// Internationalization support

/// List of available languages.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Language {
    #[default]
    English,
}

impl Language {
    /// Detail shown for a post without a publish date.
    pub fn immediately(&self) -> &'static str {
        match self {
            Self::English => "Immediately",
        }
    }

    pub fn publish_date(&self) -> &'static str {
        match self {
            Self::English => "Publish Date",
        }
    }

    pub fn time_zone(&self) -> &'static str {
        match self {
            Self::English => "Time Zone",
        }
    }

    pub fn will_publish_footer(&self, date: &str, offset: &str) -> String {
        match self {
            Self::English => format!(
                "Post will be published on {} in your site timezone ({}).",
                date, offset
            ),
        }
    }

    pub fn was_published_footer(&self, date: &str, offset: &str) -> String {
        match self {
            Self::English => format!(
                "Post was published on {} in your site timezone ({}).",
                date, offset
            ),
        }
    }

    /// Header shown while the like count isn't known.
    pub fn likes_title(&self) -> &'static str {
        match self {
            Self::English => "Likes",
        }
    }

    pub fn likes_header(&self, count: usize) -> String {
        match self {
            Self::English => match count {
                0 => "No likes yet".to_string(),
                1 => "1 Like".to_string(),
                n => format!("{} Likes", n),
            },
        }
    }

    pub fn likes_error(&self) -> &'static str {
        match self {
            Self::English => "Unable to load likes",
        }
    }

    /// Date format used for footers.
    pub fn date_format(&self) -> &'static str {
        match self {
            Self::English => "%b %-d, %Y",
        }
    }

    /// Date and time format used for row details.
    pub fn date_time_format(&self) -> &'static str {
        match self {
            Self::English => "%b %-d, %Y, %-I:%M %p",
        }
    }
}
