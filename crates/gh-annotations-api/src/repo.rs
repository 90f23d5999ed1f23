//! Repository coordinates

use std::fmt;
use std::str::FromStr;

use crate::{
    SourceError,
    SourceResult,
};

/// A repository as `[HOST/]OWNER/NAME`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub host: Option<String>,
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            host: None,
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// `OWNER/NAME`, the form used in API paths and output rows
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Parses a git remote URL
    ///
    /// Accepts `https://HOST/OWNER/REPO(.git)`, `git@HOST:OWNER/REPO(.git)` and
    /// `ssh://git@HOST/OWNER/REPO(.git)`.
    pub fn from_remote_url(url: &str) -> Option<Self> {
        let url = url.trim();

        let (host, path) = if let Some(rest) = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .or_else(|| url.strip_prefix("ssh://"))
            .or_else(|| url.strip_prefix("git://"))
        {
            let rest = match (rest.find('@'), rest.find('/')) {
                (Some(at), Some(slash)) if at < slash => &rest[at + 1..],
                _ => rest,
            };
            rest.split_once('/')?
        } else {
            let rest = url.split_once('@').map_or(url, |(_, r)| r);
            rest.split_once(':')?
        };

        // ssh://git@host:22/owner/repo
        let host = host.split(':').next().unwrap_or(host);
        let path = path.trim_end_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);

        let (owner, name) = path.split_once('/')?;
        if host.is_empty() || owner.is_empty() || name.is_empty() || name.contains('/') {
            return None;
        }

        Some(Self::new(owner, name).with_host(host.to_lowercase()))
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoRef {
    type Err = SourceError;

    fn from_str(s: &str) -> SourceResult<Self> {
        let parts: Vec<&str> = s.trim().split('/').collect();
        if parts.iter().any(|p| p.trim().is_empty()) {
            return Err(SourceError::InvalidConfig(format!(
                "Invalid repository format: {s} (expected [HOST/]OWNER/REPO)"
            )));
        }

        match parts.as_slice() {
            [owner, name] => Ok(Self::new(*owner, *name)),
            [host, owner, name] => Ok(Self::new(*owner, *name).with_host(host.to_lowercase())),
            _ => Err(SourceError::InvalidConfig(format!(
                "Invalid repository format: {s} (expected [HOST/]OWNER/REPO)"
            ))),
        }
    }
}
