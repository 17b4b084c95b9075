use std::{fmt, net::IpAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variable holding the base URL of the mail relay backend.
pub const BACKEND_URL_ENV: &str = "BACKEND_URL";
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Load the config files at `paths` (later files take precedence) and apply
/// the `BACKEND_URL` environment variable, if set and non-empty.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    let backend_url = std::env::var(BACKEND_URL_ENV)
        .ok()
        .filter(|url| !url.is_empty());
    load_with_overrides(paths, &[], backend_url.as_deref())
}

/// Like [`load`], but reads no environment variables. `overrides` are TOML
/// snippets applied on top of the files.
pub fn load_with_overrides(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
    backend_url: Option<&str>,
) -> anyhow::Result<Config> {
    let builder = config::Config::builder().set_default("relay.backend_url", DEFAULT_BACKEND_URL)?;

    let builder = paths.iter().try_fold(builder, |builder, path| {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let source = File::from_str(&content, FileFormat::Toml);
        anyhow::Ok(builder.add_source(source))
    })?;

    overrides
        .iter()
        .fold(builder, |builder, &snippet| {
            builder.add_source(File::from_str(snippet, FileFormat::Toml))
        })
        .set_override_option("relay.backend_url", backend_url)?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub relay: RelayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    pub backend_url: BackendUrl,
}

/// Base URL of the mail relay backend, without trailing slashes.
#[derive(Clone, PartialEq, Eq)]
pub struct BackendUrl(String);

impl BackendUrl {
    pub const SEND_EMAIL_PATH: &'static str = "/send_email";

    pub fn new(url: &str) -> anyhow::Result<Self> {
        let url = url.trim_end_matches('/');
        Url::parse(url).with_context(|| format!("Invalid backend url {url:?}"))?;
        Ok(Self(url.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Destination of the `/send_email` rewrite rule.
    pub fn send_email_url(&self) -> Url {
        Url::parse(&format!("{}{}", self.0, Self::SEND_EMAIL_PATH))
            .expect("backend url was validated on construction")
    }
}

impl fmt::Debug for BackendUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for BackendUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BackendUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}
