//! Build-time site configuration: deployment base path and unmatched-path policy.
//!
//! The workspace-level `site.toml` is the source of truth (`[deploy]` table). Values exported
//! as `SITE_BASE_PATH` / `SITE_UNMATCHED_PATHS` at compile time override the file, which is how
//! `cargo xtask build-web` threads a deployment prefix through trunk.

use std::fmt;

use platform_host::{normalize_base_path, BasePathError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors produced while loading or validating site configuration.
pub enum SiteConfigError {
    /// `site.toml` could not be parsed or one of its values failed validation.
    #[error("site config is invalid: {0}")]
    Parse(String),
    /// The base path breaks the shared normalization rules.
    #[error(transparent)]
    BasePath(#[from] BasePathError),
    /// `unmatched_paths` named an unknown policy.
    #[error("unknown unmatched path policy `{0}` (expected `passthrough` or `root`)")]
    UnknownUnmatchedPolicy(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
/// Deployment prefix under which the site is served.
///
/// Always starts with `/`, ends with exactly one `/` and contains no empty segments.
pub struct BasePath(String);

impl Default for BasePath {
    fn default() -> Self {
        Self::root()
    }
}

impl BasePath {
    /// The root deployment prefix (`/`).
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Validates and normalizes a configured base path with [`normalize_base_path`].
    ///
    /// # Errors
    ///
    /// Returns [`SiteConfigError::BasePath`] for relative prefixes and unsafe characters.
    pub fn parse(raw: &str) -> Result<Self, SiteConfigError> {
        Ok(Self(normalize_base_path(raw)?))
    }

    /// Returns the normalized prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `pathname` with this prefix removed, or `None` when it is served elsewhere.
    pub fn strip<'a>(&self, pathname: &'a str) -> Option<&'a str> {
        pathname.strip_prefix(self.0.as_str())
    }

    /// Appends a route to this prefix, dropping the route's leading slashes.
    ///
    /// The result stays under the prefix even for `//host`-shaped routes.
    pub fn join(&self, route: &str) -> String {
        let route = route.trim_start_matches(&['/', '\\'][..]);
        format!("{}{route}", self.0)
    }
}

impl TryFrom<String> for BasePath {
    type Error = SiteConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BasePath> for String {
    fn from(value: BasePath) -> Self {
        value.0
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// How the navigation adapter reports a browser path outside the base path.
pub enum UnmatchedPathPolicy {
    /// Report the raw browser pathname unchanged.
    #[default]
    Passthrough,
    /// Clamp to the home route (`/`).
    Root,
}

impl UnmatchedPathPolicy {
    /// Stable config token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Passthrough => "passthrough",
            Self::Root => "root",
        }
    }

    /// Parses a config token.
    ///
    /// # Errors
    ///
    /// Returns [`SiteConfigError::UnknownUnmatchedPolicy`] for anything but `passthrough`/`root`.
    pub fn parse(raw: &str) -> Result<Self, SiteConfigError> {
        match raw.trim() {
            "passthrough" => Ok(Self::Passthrough),
            "root" => Ok(Self::Root),
            other => Err(SiteConfigError::UnknownUnmatchedPolicy(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Resolved site configuration consumed by the navigation adapter.
pub struct SiteConfig {
    /// Deployment prefix.
    #[serde(default)]
    pub base_path: BasePath,
    /// Reporting policy for paths outside [`SiteConfig::base_path`].
    #[serde(default)]
    pub unmatched_paths: UnmatchedPathPolicy,
}

#[derive(Debug, Deserialize)]
struct SiteToml {
    #[serde(default)]
    deploy: SiteConfig,
}

impl SiteConfig {
    /// Parses the `[deploy]` table of a `site.toml` document. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SiteConfigError::Parse`] when the document is not valid TOML or a value fails
    /// validation.
    pub fn from_toml_str(raw: &str) -> Result<Self, SiteConfigError> {
        let parsed: SiteToml =
            toml::from_str(raw).map_err(|err| SiteConfigError::Parse(err.to_string()))?;
        Ok(parsed.deploy)
    }

    /// Applies optional overrides. Blank values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error when an override fails validation.
    pub fn with_overrides(
        mut self,
        base_path: Option<&str>,
        unmatched_paths: Option<&str>,
    ) -> Result<Self, SiteConfigError> {
        if let Some(raw) = base_path.filter(|raw| !raw.trim().is_empty()) {
            self.base_path = BasePath::parse(raw)?;
        }
        if let Some(raw) = unmatched_paths.filter(|raw| !raw.trim().is_empty()) {
            self.unmatched_paths = UnmatchedPathPolicy::parse(raw)?;
        }
        Ok(self)
    }

    /// Loads `site_toml` and applies the compile-time environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error when the document or an override is invalid.
    pub fn from_build_env(site_toml: &str) -> Result<Self, SiteConfigError> {
        Self::from_toml_str(site_toml)?
            .with_overrides(option_env!("SITE_BASE_PATH"), option_env!("SITE_UNMATCHED_PATHS"))
    }
}
