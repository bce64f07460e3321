use chrono_tz::Tz;
use serde::de::DeserializeOwned;
use url::Url;

use crate::Result;

pub static CONFIG_FILE: &'static str = "quill.toml";

/// Client configuration.
///
/// # Sensible defaults
///
/// `Config::default()` talks to the public REST API without a token, logs
/// formatted output at the normal level and keeps its local database in
/// `./db`.
///
/// Using the *struct update syntax* one can initialize a new `Config`, making
/// a few changes right in the definition.
///
/// ```ignore
/// let cfg = Config {
///     site: Site {
///         default_time_zone: chrono_tz::Europe::Warsaw,
///     },
///     ..Default::default()
/// }
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub name: String,
    pub version: String,

    pub tracing: Tracing,
    pub api: Api,
    pub site: Site,
    pub db: Db,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            tracing: Tracing::default(),
            api: Api::default(),
            site: Site::default(),
            db: Db::default(),
        }
    }
}

/// Loads client config from toml file at default location.
pub fn load<T: DeserializeOwned>() -> Result<T> {
    load_from(CONFIG_FILE)
}

/// Loads client config from toml file at standard path using provided
/// name.
///
/// For example for `name` == `quill.toml` we will load both `quill.toml`
/// and `secret.quill.toml` from the current directory.
pub fn load_from<T: DeserializeOwned>(name: impl AsRef<str>) -> Result<T> {
    let config = config::Config::builder()
        .add_source(config::File::with_name(name.as_ref()))
        .add_source(config::File::with_name(&format!("secret.{}", name.as_ref())).required(false))
        .add_source(
            config::Environment::default()
                .separator("__")
                .prefix_separator("__"),
        )
        .build()?;

    let config: T = config.try_deserialize()?;

    Ok(config)
}

/// Loads client config from multiple toml files at given paths.
pub fn load_from_many<T: DeserializeOwned>(paths: &[impl AsRef<str>]) -> Result<T> {
    let mut builder = config::Config::builder().add_source(
        config::Environment::default()
            .separator("__")
            .prefix_separator("__"),
    );

    for path in paths {
        builder = builder.add_source(config::File::with_name(path.as_ref()));
    }
    let config = builder.build()?;

    let config: T = config.try_deserialize()?;

    Ok(config)
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Tracing {
    pub enabled: bool,

    pub mode: crate::tracing::Mode,
    pub level: crate::tracing::Level,
}

impl Default for Tracing {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: crate::tracing::Mode::default(),
            level: crate::tracing::Level::default(),
        }
    }
}

/// Remote REST API access.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Api {
    /// Base address all REST paths are joined onto. A missing trailing slash
    /// is added by the client.
    pub base_url: Url,
    /// Bearer token sent with every request, if present.
    pub token: Option<String>,
    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            // parsing a constant
            base_url: Url::parse("https://public-api.wordpress.com/rest/v1.1/")
                .expect("default api url must parse"),
            token: None,
            timeout: 30,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Site {
    /// Time zone used for sites that don't report their own.
    pub default_time_zone: Tz,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            default_time_zone: chrono_tz::UTC,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Db {
    /// Path to the local database directory. Relative to the current working
    /// directory.
    pub path: String,
}

impl Default for Db {
    fn default() -> Self {
        Self {
            path: "db".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [site]
            default_time_zone = "Europe/Warsaw"

            [api]
            token = "abc"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.site.default_time_zone, chrono_tz::Europe::Warsaw);
        assert_eq!(cfg.api.token.as_deref(), Some("abc"));
        assert_eq!(cfg.api.timeout, 30);
        assert_eq!(cfg.db.path, "db");
        assert!(cfg.tracing.enabled);
    }
}
