//! Target repository resolution

use std::process::Command;

use anyhow::{
    anyhow,
    bail,
    Context,
};
use gh_annotations_api::RepoRef;
use gh_annotations_github::DEFAULT_HOST;

/// Uses the explicit `[HOST/]OWNER/REPO` when given, otherwise the current
/// checkout's `origin` remote
pub fn resolve(explicit: Option<&str>) -> anyhow::Result<RepoRef> {
    match explicit.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => Ok(value.parse::<RepoRef>()?),
        None => current_repository(),
    }
}

fn current_repository() -> anyhow::Result<RepoRef> {
    let output = Command::new("git")
        .args(["remote", "get-url", "origin"])
        .output()
        .context("Failed to run git to detect the current repository")?;

    if !output.status.success() {
        bail!(
            "Could not determine the current repository ({}); pass --repo OWNER/REPO",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let url = String::from_utf8_lossy(&output.stdout);
    let repo = RepoRef::from_remote_url(&url)
        .ok_or_else(|| anyhow!("Unrecognized git remote URL: {}", url.trim()))?;

    tracing::debug!("Detected repository {repo} from git remote");
    Ok(repo)
}

/// Host whose API serves `repo`: its own host, then `GH_HOST`, then github.com
pub fn api_host(repo: &RepoRef, env_host: Option<String>) -> String {
    repo.host
        .clone()
        .or(env_host.filter(|host| !host.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_HOST.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_explicit() {
        let repo = resolve(Some(" swfz/gh-annotations ")).unwrap();
        assert_eq!(repo, RepoRef::new("swfz", "gh-annotations"));
    }

    #[test]
    fn test_resolve_explicit_invalid() {
        let err = resolve(Some("not-a-repo")).unwrap_err();
        assert!(err.to_string().contains("Invalid repository format"));
    }

    #[test]
    fn test_api_host_precedence() {
        let plain = RepoRef::new("o", "r");
        let hosted = RepoRef::new("o", "r").with_host("ghe.example.com");

        assert_eq!(api_host(&plain, None), "github.com");
        assert_eq!(api_host(&plain, Some("  ".to_string())), "github.com");
        assert_eq!(
            api_host(&plain, Some("ghe.corp.io".to_string())),
            "ghe.corp.io"
        );
        assert_eq!(
            api_host(&hosted, Some("ghe.corp.io".to_string())),
            "ghe.example.com"
        );
    }
}
