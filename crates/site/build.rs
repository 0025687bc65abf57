use std::fs;
use std::path::PathBuf;

use platform_host::normalize_base_path;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SiteToml {
    #[serde(default)]
    deploy: DeployTable,
}

#[derive(Debug, Default, Deserialize)]
struct DeployTable {
    base_path: Option<String>,
    unmatched_paths: Option<String>,
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("..").join("..").join("site.toml");
    println!("cargo:rerun-if-changed={}", path.display());
    println!("cargo:rerun-if-env-changed=SITE_BASE_PATH");
    println!("cargo:rerun-if-env-changed=SITE_UNMATCHED_PATHS");

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let parsed: SiteToml = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));

    let base_override = env_override("SITE_BASE_PATH");
    let base_path = base_override
        .as_deref()
        .or(parsed.deploy.base_path.as_deref())
        .unwrap_or("/");
    if let Err(err) = normalize_base_path(base_path) {
        panic!("invalid deploy base path for {}: {err}", path.display());
    }

    let policy_override = env_override("SITE_UNMATCHED_PATHS");
    if let Some(policy) = policy_override
        .as_deref()
        .or(parsed.deploy.unmatched_paths.as_deref())
    {
        if !matches!(policy.trim(), "passthrough" | "root") {
            panic!(
                "deploy.unmatched_paths for {} must be `passthrough` or `root`, found `{policy}`",
                path.display()
            );
        }
    }
    if raw.contains("\"##") {
        panic!("{} must not contain the sequence `\"##`", path.display());
    }

    let generated = format!(
        "/// Build-time copy of the workspace `site.toml`.\n\
pub const SITE_TOML: &str = r##\"{raw}\"##;\n"
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("site_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
