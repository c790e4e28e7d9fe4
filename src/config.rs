//! Run configuration
//!
//! One immutable [`SweepConfig`] value is constructed at startup and passed
//! by reference into each workflow step. Derived values (such as an
//! owner-qualified head branch) are computed locally where needed; nothing
//! here is mutated mid-run.

use crate::error::{Error, Result};
use crate::types::{CommitAuthor, FileSpec};

/// Configuration for the commit-and-PR workflow
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Branch the commit is created on; created from `base_branch` if absent
    pub commit_branch: String,
    /// Branch `commit_branch` is created from when it does not exist
    pub base_branch: String,
    /// Branch the pull request proposes to merge into
    pub merge_branch: String,
    /// Commit message
    pub commit_message: String,
    /// Pull request title; empty means "skip PR creation intentionally"
    pub pr_title: String,
    /// Pull request description body
    pub pr_body: String,
    /// Files to stage, already parsed from the `--files` flag
    pub files: Vec<FileSpec>,
    /// Commit author identity
    pub author: CommitAuthor,
    /// Owner of the repo the PR targets, when different from the source owner
    pub merge_owner: Option<String>,
    /// Name of the repo the PR targets, when different from the source repo
    pub merge_repo: Option<String>,
}

impl SweepConfig {
    /// Check that every field the workflow depends on is populated
    ///
    /// Collects all violations into a single error so the user sees the
    /// complete list of missing flags at once.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.commit_branch.is_empty() {
            missing.push("--commit-branch");
        }
        if self.files.is_empty() {
            missing.push("--files");
        }
        if self.author.name.is_empty() {
            missing.push("--author-name");
        }
        if self.author.email.is_empty() {
            missing.push("--author-email");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::Config(format!(
                "non-empty values required for: {}",
                missing.join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_config() -> SweepConfig {
        SweepConfig {
            commit_branch: "license".to_string(),
            base_branch: "master".to_string(),
            merge_branch: "master".to_string(),
            commit_message: "Add License to project".to_string(),
            pr_title: "Add license file".to_string(),
            pr_body: "Add license file to project".to_string(),
            files: vec![FileSpec {
                local: PathBuf::from("LICENSE"),
                target: "LICENSE".to_string(),
            }],
            author: CommitAuthor {
                name: "Octo Cat".to_string(),
                email: "octo@example.com".to_string(),
            },
            merge_owner: None,
            merge_repo: None,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(make_config().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let mut config = make_config();
        config.commit_branch.clear();
        config.author.email.clear();

        let err = config.validate().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("--commit-branch"));
        assert!(msg.contains("--author-email"));
        assert!(!msg.contains("--files"));
    }

    #[test]
    fn test_empty_file_list_is_rejected() {
        let mut config = make_config();
        config.files.clear();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("--files"));
    }
}
