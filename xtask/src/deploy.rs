//! Deployment settings from `site.toml` and the static-host fallback page.

use std::fs;
use std::path::{Path, PathBuf};

use platform_host::normalize_base_path;
use serde::Deserialize;

/// Workspace-relative location of the deployment settings.
pub const SITE_CONFIG_FILE: &str = "site.toml";
/// Environment variable overriding `deploy.base_path`, also read by the site at compile time.
pub const BASE_PATH_ENV: &str = "SITE_BASE_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
/// `[deploy]` table of `site.toml`. Keys used only by the site itself are ignored here.
pub struct DeployConfig {
    /// Prefix the bundle is served under.
    pub base_path: String,
    /// File name of the fallback document written next to the bundle.
    pub fallback_page: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            fallback_page: "404.html".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct SiteToml {
    #[serde(default)]
    deploy: DeployConfig,
}

impl DeployConfig {
    /// Loads `site.toml` from the workspace root. A missing file yields the defaults.
    pub fn load(root: &Path) -> Result<Self, String> {
        let path = root.join(SITE_CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let body = fs::read_to_string(&path)
            .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
        Self::parse(&body).map_err(|err| format!("failed to parse {}: {err}", path.display()))
    }

    /// Parses a `site.toml` document.
    pub fn parse(body: &str) -> Result<Self, String> {
        let parsed: SiteToml = toml::from_str(body).map_err(|err| err.to_string())?;
        Ok(parsed.deploy)
    }

    /// Replaces the base path when `value` is present and non-blank.
    pub fn with_base_path_override(mut self, value: Option<String>) -> Self {
        if let Some(value) = value.filter(|value| !value.trim().is_empty()) {
            self.base_path = value;
        }
        self
    }

    /// Returns the base path in `/segment/` form, validated by the same rules the site applies.
    pub fn normalized_base_path(&self) -> Result<String, String> {
        normalize_base_path(&self.base_path).map_err(|err| err.to_string())
    }

    /// Returns the fallback page file name, rejecting anything that would escape the dist dir.
    pub fn fallback_file_name(&self) -> Result<&str, String> {
        let name = self.fallback_page.trim();
        if name.is_empty() || name.contains(&['/', '\\'][..]) || name == "." || name == ".." {
            return Err(format!(
                "deploy.fallback_page must be a plain file name, found `{}`",
                self.fallback_page
            ));
        }
        Ok(name)
    }
}

/// Renders the fallback document that bounces a deep link back to the site entry.
///
/// `<base><sub>?q#h` becomes `<base>?redirect=<encoded sub?q>#h`; the site restores the path
/// before it mounts. Paths outside `base` keep everything after their leading `/`.
pub fn fallback_page_html(base_path: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>Redirecting…</title>
    <meta name="robots" content="noindex" />
    <script>
      (function () {{
        var base = "{base_path}";
        var location = window.location;
        var path = location.pathname;
        var sub = path.indexOf(base) === 0 ? path.slice(base.length) : path.replace(/^\/+/, "");
        var target = base + "?redirect=" + encodeURIComponent(sub + location.search);
        location.replace(target + location.hash);
      }})();
    </script>
  </head>
  <body>
    <noscript><a href="{base_path}">Continue to the site</a></noscript>
  </body>
</html>
"#
    )
}

/// Writes the fallback page into `dist` and returns its path.
pub fn write_fallback_page(dist: &Path, config: &DeployConfig) -> Result<PathBuf, String> {
    let base_path = config.normalized_base_path()?;
    let file_name = config.fallback_file_name()?;
    if !dist.is_dir() {
        return Err(format!(
            "dist directory {} does not exist; run `cargo xtask build-web` first",
            dist.display()
        ));
    }

    let path = dist.join(file_name);
    fs::write(&path, fallback_page_html(&base_path))
        .map_err(|err| format!("failed to write {}: {err}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_test_root() -> PathBuf {
        std::env::temp_dir().join(format!(
            "xtask-deploy-test-{}-{}",
            std::process::id(),
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos())
                .unwrap_or_default()
        ))
    }

    #[test]
    fn base_path_follows_the_site_rules() {
        let cases = [
            ("/", Some("/")),
            ("fineline", Some("/fineline/")),
            ("/fineline//preview/", Some("/fineline/preview/")),
            ("https://example.github.io/fineline", Some("/fineline/")),
            ("./", None),
            ("/app?x=1", None),
            ("/a\"b/", None),
        ];

        for (input, expected) in cases {
            let config = DeployConfig {
                base_path: input.to_string(),
                ..DeployConfig::default()
            };
            assert_eq!(
                config.normalized_base_path().ok().as_deref(),
                expected,
                "input={input:?}"
            );
        }
    }

    #[test]
    fn site_toml_defaults_and_overrides() {
        assert_eq!(DeployConfig::parse("").expect("empty"), DeployConfig::default());

        let config = DeployConfig::parse(
            "[deploy]\nbase_path = \"/fineline\"\nunmatched_paths = \"root\"\n",
        )
        .expect("parse");
        assert_eq!(config.base_path, "/fineline");
        assert_eq!(config.fallback_page, "404.html");

        let overridden = config
            .clone()
            .with_base_path_override(Some("/preview/".to_string()));
        assert_eq!(overridden.base_path, "/preview/");
        assert_eq!(
            config.clone().with_base_path_override(Some("  ".to_string())),
            config
        );
    }

    #[test]
    fn fallback_file_name_rejects_paths() {
        let mut config = DeployConfig::default();
        assert_eq!(config.fallback_file_name(), Ok("404.html"));

        config.fallback_page = "../404.html".to_string();
        assert!(config.fallback_file_name().is_err());
        config.fallback_page = String::new();
        assert!(config.fallback_file_name().is_err());
    }

    #[test]
    fn fallback_page_embeds_base_and_redirect_key() {
        let html = fallback_page_html("/fineline/");
        assert!(html.contains(r#"var base = "/fineline/";"#));
        assert!(html.contains(r#"base + "?redirect=" + encodeURIComponent(sub + location.search)"#));
        assert!(html.contains("location.replace(target + location.hash)"));
        assert!(html.contains(r#"<a href="/fineline/">"#));
    }

    #[test]
    fn write_fallback_page_requires_existing_dist() {
        let root = unique_test_root();
        let config = DeployConfig::default();
        assert!(write_fallback_page(&root, &config).is_err());

        fs::create_dir_all(&root).expect("create dist");
        let written = write_fallback_page(&root, &config).expect("write");
        assert_eq!(written, root.join("404.html"));
        let body = fs::read_to_string(&written).expect("read back");
        assert!(body.contains(r#"var base = "/";"#));

        fs::remove_dir_all(&root).expect("cleanup");
    }
}
