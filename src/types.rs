//! Core types for lichen
//!
//! Thin, mostly pass-through representations of the remote API's resources.
//! Nothing here is cached or persisted; each repository's workflow builds
//! its own reference/tree/commit from scratch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A repository addressed as `owner/name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoId {
    /// Owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl RepoId {
    /// Create a repo id from owner and name
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A branch reference: symbolic name pointing at a commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Fully qualified ref name (`refs/heads/<branch>`)
    pub name: String,
    /// Target commit sha
    pub sha: String,
}

/// A single blob entry staged into a tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    /// Target path in the repository
    pub path: String,
    /// File mode; always `100644` (regular, non-executable) for staged files
    pub mode: String,
    /// Entry type; always `blob` for staged files
    #[serde(rename = "type")]
    pub kind: String,
    /// File content
    pub content: String,
}

impl TreeEntry {
    /// Create a regular-file blob entry
    pub fn blob(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mode: "100644".to_string(),
            kind: "blob".to_string(),
            content: content.into(),
        }
    }
}

/// A tree materialized by the remote service, identified by content hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree {
    /// Tree sha assigned by the remote service
    pub sha: String,
}

/// A commit known to the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Commit sha
    pub sha: String,
}

/// Commit author identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitAuthor {
    /// Author name
    pub name: String,
    /// Author email
    pub email: String,
}

/// A commit to be created on the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCommit {
    /// Commit message
    pub message: String,
    /// Tree sha the commit points at
    pub tree: String,
    /// Parent commit shas (exactly one for this workflow)
    pub parents: Vec<String>,
    /// Author identity
    pub author: CommitAuthor,
    /// Author date (wall-clock time at construction)
    pub date: DateTime<Utc>,
}

/// License descriptor attached to a repository, when one exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseInfo {
    /// SPDX-ish license key (e.g. `mit`)
    pub key: String,
    /// Human-readable license name
    pub name: String,
    /// License URL, when the service provides one
    #[serde(default)]
    pub url: Option<String>,
}

/// A repository as returned by the organization listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name
    pub name: String,
    /// Owner login
    pub owner: String,
    /// License descriptor; absent means the repository needs the workflow
    pub license: Option<LicenseInfo>,
}

/// A `localPath[:targetPath]` file specifier, resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    /// Local file to read
    pub local: std::path::PathBuf,
    /// Target path in the repository (defaults to the local path)
    pub target: String,
}

/// A pull request to be opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPullRequest {
    /// PR title
    pub title: String,
    /// Head branch, optionally qualified as `owner:branch` for cross-owner PRs
    pub head: String,
    /// Base branch the change is proposed into
    pub base: String,
    /// PR description body
    pub body: String,
    /// Whether base-repo maintainers may modify the head branch
    pub maintainer_can_modify: bool,
}

/// An opened pull request (fire-and-forget; not tracked after creation)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// Head branch name
    pub head_ref: String,
    /// Base branch name
    pub base_ref: String,
    /// PR title
    pub title: String,
}
