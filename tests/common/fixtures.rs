//! Test data factories for lichen types
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use lichen::config::SweepConfig;
use lichen::types::{CommitAuthor, FileSpec, LicenseInfo, Repository};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a workflow config staging a single existing LICENSE file
///
/// Returns the tempdir so the staged file outlives the test body.
pub fn make_config() -> (SweepConfig, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let license = dir.path().join("LICENSE");
    write!(std::fs::File::create(&license).unwrap(), "MIT License\n").unwrap();

    let config = SweepConfig {
        commit_branch: "license".to_string(),
        base_branch: "master".to_string(),
        merge_branch: "master".to_string(),
        commit_message: "Add License to project".to_string(),
        pr_title: "Add license file".to_string(),
        pr_body: "Add license file to project".to_string(),
        files: vec![FileSpec {
            local: license,
            target: "LICENSE".to_string(),
        }],
        author: CommitAuthor {
            name: "Octo Cat".to_string(),
            email: "octo@example.com".to_string(),
        },
        merge_owner: None,
        merge_repo: None,
    };
    (config, dir)
}

/// Create a config whose file list points at a nonexistent local path
pub fn make_config_with_missing_file() -> SweepConfig {
    let (mut config, dir) = make_config();
    drop(dir);
    config.files = vec![FileSpec {
        local: PathBuf::from("/nonexistent/LICENSE"),
        target: "LICENSE".to_string(),
    }];
    config
}

/// Create a repository without a license descriptor
pub fn make_unlicensed_repo(owner: &str, name: &str) -> Repository {
    Repository {
        name: name.to_string(),
        owner: owner.to_string(),
        license: None,
    }
}

/// Create a repository carrying a license descriptor
pub fn make_licensed_repo(owner: &str, name: &str) -> Repository {
    Repository {
        name: name.to_string(),
        owner: owner.to_string(),
        license: Some(make_license()),
    }
}

/// Create a plain MIT license descriptor
pub fn make_license() -> LicenseInfo {
    LicenseInfo {
        key: "mit".to_string(),
        name: "MIT License".to_string(),
        url: Some("https://api.github.com/licenses/mit".to_string()),
    }
}
