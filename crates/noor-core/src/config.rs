//! Layered configuration loader and path helpers.
//!
//! Uses Figment to merge built-in defaults + `config.toml` + `config.<env>.toml`
//! + `NOOR_*` env vars (nested keys separated by `__`, e.g.
//! `NOOR_BROWSE__PAGE_SIZE=10`). Provides helpers to expand `~` and `${VAR}`
//! and to resolve relative paths against a known base directory.
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_for_env(&env_name)
    }

    pub fn load_for_env(env_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file("config.toml"));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("NOOR_").split("__"));

        let config = Self { figment };
        config.validate_for_env(env_name)?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    pub fn settings(&self) -> anyhow::Result<Settings> {
        self.figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to extract settings: {}", e))
    }

    fn validate_for_env(&self, env: &str) -> anyhow::Result<()> {
        let settings = self.settings()?;
        settings.validate()?;
        match env {
            "prod" | "production" => {
                if settings.corpus.sources.is_empty() {
                    anyhow::bail!("Prod config must list at least one corpus source");
                }
            }
            "dev" | "development" | "test" | "testing" => {}
            _ => {}
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub matcher: MatcherSettings,
    pub browse: BrowseSettings,
    pub corpus: CorpusSettings,
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.matcher.top_k == 0 {
            return Err(Error::InvalidConfig("matcher.top_k must be at least 1".into()));
        }
        if !(0.0..1.0).contains(&self.matcher.threshold) {
            return Err(Error::InvalidConfig(format!(
                "matcher.threshold must be in [0, 1), got {}",
                self.matcher.threshold
            )));
        }
        if self.browse.page_size == 0 {
            return Err(Error::InvalidConfig("browse.page_size must be at least 1".into()));
        }
        if self.corpus.fetch_timeout_ms == 0 {
            return Err(Error::InvalidConfig("corpus.fetch_timeout_ms must be positive".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherSettings {
    pub top_k: usize,
    pub threshold: f32,
}

impl Default for MatcherSettings {
    fn default() -> Self {
        Self {
            top_k: 3,
            threshold: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseSettings {
    pub page_size: usize,
    pub debounce_ms: u64,
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self {
            page_size: 20,
            debounce_ms: 250,
        }
    }
}

impl BrowseSettings {
    /// Zero is rejected by [`Settings::validate`]; an unvalidated zero falls back to 1.
    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.page_size).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// How the loader walks its sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceStrategy {
    /// One source at a time, in priority order.
    #[default]
    Sequential,
    /// All sources at once; the highest-priority success still wins.
    Parallel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusSettings {
    /// Collection key assigned to records whose document does not name one.
    pub collection: String,
    /// File paths or http(s) URLs, highest priority first.
    pub sources: Vec<String>,
    pub fetch_timeout_ms: u64,
    pub strategy: SourceStrategy,
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self {
            collection: "sahih-bukhari".to_string(),
            sources: vec!["data/bukhari.json".to_string(), "bukhari.json".to_string()],
            fetch_timeout_ms: 5_000,
            strategy: SourceStrategy::Sequential,
        }
    }
}

impl CorpusSettings {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let s = Settings::default();
        assert!(s.validate().is_ok());
        assert_eq!(s.matcher.top_k, 3);
        assert_eq!(s.browse.page_size().get(), 20);
        assert_eq!(s.browse.debounce(), Duration::from_millis(250));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut s = Settings::default();
        s.matcher.top_k = 0;
        assert!(matches!(s.validate(), Err(Error::InvalidConfig(_))));

        let mut s = Settings::default();
        s.matcher.threshold = 1.0;
        assert!(s.validate().is_err());

        let mut s = Settings::default();
        s.browse.page_size = 0;
        assert!(s.validate().is_err());
        assert_eq!(s.browse.page_size().get(), 1);
    }

    #[test]
    fn resolve_with_base_keeps_absolute_paths() {
        let base = Path::new("/srv/site");
        assert_eq!(
            resolve_with_base(base, "data/bukhari.json"),
            PathBuf::from("/srv/site/data/bukhari.json")
        );
        assert_eq!(resolve_with_base(base, "/tmp/x.json"), PathBuf::from("/tmp/x.json"));
    }
}
