//! Workspace maintenance and developer workflow commands (`cargo xtask`).
//!
//! The `xtask` binary wraps the trunk build of the site and the static-host deployment steps so
//! the repository can expose stable entrypoints through Cargo aliases.

mod deploy;

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode, Stdio};

use deploy::{DeployConfig, BASE_PATH_ENV};

const RELEASE_DIST_DIR: &str = "target/trunk-dist";
const TRUNK_HINT: &str = "Install it with `cargo setup-web` (or `cargo install trunk`)";

fn main() -> ExitCode {
    let root = workspace_root();
    let mut args = env::args().skip(1);

    let Some(cmd) = args.next() else {
        print_usage();
        return ExitCode::from(2);
    };

    let rest: Vec<String> = args.collect();

    let result = match cmd.as_str() {
        "setup-web" => setup_web(&root),
        "dev" => dev(&root, rest),
        "build-web" => build_web(&root, rest),
        "fallback-page" => fallback_page(&root, rest),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(format!("unknown xtask command: {other}")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn print_usage() {
    eprintln!(
        "Usage: cargo xtask <command> [args]\n\
         \n\
         Commands:\n\
           setup-web              Install wasm target and trunk (if missing)\n\
           dev [trunk args]       Serve the site with trunk under the configured base path\n\
           build-web [args]       Build the release bundle and write the fallback page\n\
           fallback-page [dist]   Write only the fallback page (default dist: target/trunk-dist)\n\
         \n\
         Notes:\n\
           - The base path comes from `site.toml` ([deploy] base_path) or `SITE_BASE_PATH`.\n"
    );
}

fn setup_web(root: &Path) -> Result<(), String> {
    run(
        root,
        "rustup",
        vec!["target", "add", "wasm32-unknown-unknown"],
    )?;

    if command_available("trunk") {
        println!("trunk already installed");
        return Ok(());
    }

    run(root, "cargo", vec!["install", "trunk"])
}

fn load_deploy_config(root: &Path) -> Result<(DeployConfig, String), String> {
    let config = DeployConfig::load(root)?.with_base_path_override(env::var(BASE_PATH_ENV).ok());
    let base_path = config.normalized_base_path()?;
    Ok((config, base_path))
}

fn dev(root: &Path, args: Vec<String>) -> Result<(), String> {
    ensure_command("trunk", TRUNK_HINT)?;
    let (_, base_path) = load_deploy_config(root)?;

    let mut trunk_args = vec!["serve".to_string(), "index.html".to_string()];
    if !args_specify_public_url(&args) {
        trunk_args.push("--public-url".to_string());
        trunk_args.push(base_path.clone());
    }
    trunk_args.extend(args);

    run_trunk(site_dir(root), trunk_args, &base_path)
}

fn build_web(root: &Path, args: Vec<String>) -> Result<(), String> {
    ensure_command("trunk", TRUNK_HINT)?;
    let (config, base_path) = load_deploy_config(root)?;

    let dist = dist_dir(root, &args);
    let mut trunk_args = vec![
        "build".to_string(),
        "index.html".to_string(),
        "--release".to_string(),
    ];
    if !args_specify_public_url(&args) {
        trunk_args.push("--public-url".to_string());
        trunk_args.push(base_path.clone());
    }
    if !args_specify_dist(&args) {
        trunk_args.push("--dist".to_string());
        trunk_args.push(dist.display().to_string());
    }
    trunk_args.extend(args);

    run_trunk(site_dir(root), trunk_args, &base_path)?;

    let written = deploy::write_fallback_page(&dist, &config)?;
    println!("wrote fallback page {}", written.display());
    Ok(())
}

fn fallback_page(root: &Path, args: Vec<String>) -> Result<(), String> {
    let (config, _) = load_deploy_config(root)?;
    let dist = match args.first() {
        Some(path) => resolve_dist(root, path),
        None => root.join(RELEASE_DIST_DIR),
    };

    let written = deploy::write_fallback_page(&dist, &config)?;
    println!("wrote fallback page {}", written.display());
    Ok(())
}

fn args_specify_dist(args: &[String]) -> bool {
    dist_arg(args).is_some()
}

fn args_specify_public_url(args: &[String]) -> bool {
    args.iter()
        .any(|arg| arg == "--public-url" || arg.starts_with("--public-url="))
}

fn dist_arg(args: &[String]) -> Option<&str> {
    args.iter().enumerate().find_map(|(index, arg)| {
        if arg == "--dist" {
            args.get(index + 1).map(String::as_str)
        } else {
            arg.strip_prefix("--dist=")
        }
    })
}

/// Output directory of a release build. Trunk resolves `--dist` against the site crate.
fn dist_dir(root: &Path, args: &[String]) -> PathBuf {
    match dist_arg(args) {
        Some(path) => resolve_dist(&site_dir(root), path),
        None => root.join(RELEASE_DIST_DIR),
    }
}

fn resolve_dist(base: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn command_available(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

fn ensure_command(program: &str, hint: &str) -> Result<(), String> {
    if command_available(program) {
        Ok(())
    } else {
        Err(format!("required command `{program}` not found. {hint}"))
    }
}

fn run(root: &Path, program: &str, args: Vec<&str>) -> Result<(), String> {
    let owned: Vec<String> = args.into_iter().map(ToString::to_string).collect();
    print_command(program, &owned);
    let status = Command::new(program)
        .current_dir(root)
        .args(&owned)
        .status()
        .map_err(|err| format!("failed to start `{program}`: {err}"))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("`{program}` exited with status {status}"))
    }
}

fn run_trunk(cwd: PathBuf, args: Vec<String>, base_path: &str) -> Result<(), String> {
    print_command("trunk", &args);
    let mut cmd = Command::new("trunk");
    cmd.current_dir(cwd)
        .args(&args)
        .env(BASE_PATH_ENV, base_path);

    // Some environments export NO_COLOR=1, but trunk expects "true"/"false".
    if env::var("NO_COLOR").as_deref() == Ok("1") {
        cmd.env("NO_COLOR", "true");
    }

    let status = cmd
        .status()
        .map_err(|err| format!("failed to start `trunk`: {err}"))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("`trunk` exited with status {status}"))
    }
}

fn site_dir(root: &Path) -> PathBuf {
    root.join("crates/site")
}

fn print_command(program: &str, args: &[String]) {
    if args.is_empty() {
        println!("+ {program}");
        return;
    }

    println!("+ {program} {}", args.join(" "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dist_detection_handles_split_and_inline_forms() {
        assert!(args_specify_dist(&["--dist".into(), "x".into()]));
        assert!(args_specify_dist(&["--dist=target/custom".into()]));
        assert!(!args_specify_dist(&["--release".into()]));
    }

    #[test]
    fn dist_dir_resolves_against_site_crate() {
        let root = Path::new("/work");
        assert_eq!(dist_dir(root, &[]), PathBuf::from("/work/target/trunk-dist"));
        assert_eq!(
            dist_dir(root, &["--dist".into(), "out".into()]),
            PathBuf::from("/work/crates/site/out")
        );
        assert_eq!(
            dist_dir(root, &["--dist=/tmp/site".into()]),
            PathBuf::from("/tmp/site")
        );
    }

    #[test]
    fn public_url_detection_respects_caller_override() {
        assert!(args_specify_public_url(&["--public-url".into(), "/x/".into()]));
        assert!(args_specify_public_url(&["--public-url=/x/".into()]));
        assert!(!args_specify_public_url(&["--port".into(), "9000".into()]));
    }
}
