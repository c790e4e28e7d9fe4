//! Mock forge service for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use lichen::error::{Error, Result};
use lichen::forge::ForgeService;
use lichen::types::{
    Commit, NewCommit, NewPullRequest, PullRequest, Reference, RepoId, Repository, Tree, TreeEntry,
};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Call record for `create_ref`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRefCall {
    pub repo: RepoId,
    pub branch: String,
    pub sha: String,
}

/// Call record for `create_tree`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTreeCall {
    pub repo: RepoId,
    pub base_tree: String,
    pub entries: Vec<TreeEntry>,
}

/// Call record for `update_ref`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRefCall {
    pub repo: RepoId,
    pub branch: String,
    pub sha: String,
}

/// Call record for `create_pull_request`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePrCall {
    pub repo: RepoId,
    pub pr: NewPullRequest,
}

/// Simple in-memory forge for testing
///
/// This manually implements `ForgeService` rather than using a mocking
/// crate, keeping call verification explicit.
///
/// Features:
/// - In-memory branch references and known commits
/// - Auto-incrementing tree/commit shas and PR numbers
/// - Call tracking for verification
/// - Per-repository error injection for failure path testing
pub struct MockForgeService {
    repos: Mutex<Vec<Repository>>,
    refs: Mutex<HashMap<String, String>>,
    known_commits: Mutex<HashSet<String>>,
    next_id: AtomicU64,
    // Call tracking
    list_org_calls: Mutex<Vec<String>>,
    get_ref_calls: Mutex<Vec<(RepoId, String)>>,
    create_ref_calls: Mutex<Vec<CreateRefCall>>,
    get_commit_calls: Mutex<Vec<(RepoId, String)>>,
    create_tree_calls: Mutex<Vec<CreateTreeCall>>,
    create_commit_calls: Mutex<Vec<(RepoId, NewCommit)>>,
    update_ref_calls: Mutex<Vec<UpdateRefCall>>,
    create_pr_calls: Mutex<Vec<CreatePrCall>>,
    // Error injection, keyed by repository name
    error_on_create_tree: Mutex<HashMap<String, String>>,
    error_on_update_ref: Mutex<HashMap<String, String>>,
    error_on_create_pr: Mutex<HashMap<String, String>>,
}

impl MockForgeService {
    /// Create an empty mock
    pub fn new() -> Self {
        Self {
            repos: Mutex::new(Vec::new()),
            refs: Mutex::new(HashMap::new()),
            known_commits: Mutex::new(HashSet::new()),
            next_id: AtomicU64::new(1),
            list_org_calls: Mutex::new(Vec::new()),
            get_ref_calls: Mutex::new(Vec::new()),
            create_ref_calls: Mutex::new(Vec::new()),
            get_commit_calls: Mutex::new(Vec::new()),
            create_tree_calls: Mutex::new(Vec::new()),
            create_commit_calls: Mutex::new(Vec::new()),
            update_ref_calls: Mutex::new(Vec::new()),
            create_pr_calls: Mutex::new(Vec::new()),
            error_on_create_tree: Mutex::new(HashMap::new()),
            error_on_update_ref: Mutex::new(HashMap::new()),
            error_on_create_pr: Mutex::new(HashMap::new()),
        }
    }

    /// Add a repository to the organization listing
    pub fn add_repo(&self, repo: Repository) {
        self.repos.lock().unwrap().push(repo);
    }

    /// Seed a branch reference and register its target as a known commit
    pub fn set_ref(&self, repo: &RepoId, branch: &str, sha: &str) {
        self.refs
            .lock()
            .unwrap()
            .insert(ref_key(repo, branch), sha.to_string());
        self.known_commits.lock().unwrap().insert(sha.to_string());
    }

    /// Current target of a branch reference, if any
    pub fn ref_sha(&self, repo: &RepoId, branch: &str) -> Option<String> {
        self.refs.lock().unwrap().get(&ref_key(repo, branch)).cloned()
    }

    // === Error injection methods ===

    /// Make `create_tree` fail for a repository
    pub fn fail_create_tree(&self, repo_name: &str, msg: &str) {
        self.error_on_create_tree
            .lock()
            .unwrap()
            .insert(repo_name.to_string(), msg.to_string());
    }

    /// Make `update_ref` fail with a conflict for a repository
    pub fn fail_update_ref(&self, repo_name: &str, msg: &str) {
        self.error_on_update_ref
            .lock()
            .unwrap()
            .insert(repo_name.to_string(), msg.to_string());
    }

    /// Make `create_pull_request` fail for a repository
    pub fn fail_create_pr(&self, repo_name: &str, msg: &str) {
        self.error_on_create_pr
            .lock()
            .unwrap()
            .insert(repo_name.to_string(), msg.to_string());
    }

    // === Call verification methods ===

    /// Get all `create_ref` calls
    pub fn get_create_ref_calls(&self) -> Vec<CreateRefCall> {
        self.create_ref_calls.lock().unwrap().clone()
    }

    /// Get all `create_tree` calls
    pub fn get_create_tree_calls(&self) -> Vec<CreateTreeCall> {
        self.create_tree_calls.lock().unwrap().clone()
    }

    /// Get all `create_commit` calls
    pub fn get_create_commit_calls(&self) -> Vec<(RepoId, NewCommit)> {
        self.create_commit_calls.lock().unwrap().clone()
    }

    /// Get all `update_ref` calls
    pub fn get_update_ref_calls(&self) -> Vec<UpdateRefCall> {
        self.update_ref_calls.lock().unwrap().clone()
    }

    /// Get all `create_pull_request` calls
    pub fn get_create_pr_calls(&self) -> Vec<CreatePrCall> {
        self.create_pr_calls.lock().unwrap().clone()
    }

    /// Get all repositories `get_ref` was called against
    pub fn get_get_ref_calls(&self) -> Vec<(RepoId, String)> {
        self.get_ref_calls.lock().unwrap().clone()
    }

    fn next(&self, prefix: &str) -> String {
        format!("{prefix}{}", self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    fn injected(&self, map: &Mutex<HashMap<String, String>>, repo: &RepoId) -> Option<String> {
        map.lock().unwrap().get(&repo.name).cloned()
    }
}

impl Default for MockForgeService {
    fn default() -> Self {
        Self::new()
    }
}

fn ref_key(repo: &RepoId, branch: &str) -> String {
    format!("{repo}#{branch}")
}

#[async_trait]
impl ForgeService for MockForgeService {
    async fn list_org_repos(&self, org: &str) -> Result<Vec<Repository>> {
        self.list_org_calls.lock().unwrap().push(org.to_string());
        Ok(self.repos.lock().unwrap().clone())
    }

    async fn get_ref(&self, repo: &RepoId, branch: &str) -> Result<Option<Reference>> {
        self.get_ref_calls
            .lock()
            .unwrap()
            .push((repo.clone(), branch.to_string()));

        Ok(self
            .refs
            .lock()
            .unwrap()
            .get(&ref_key(repo, branch))
            .map(|sha| Reference {
                name: format!("refs/heads/{branch}"),
                sha: sha.clone(),
            }))
    }

    async fn create_ref(&self, repo: &RepoId, branch: &str, sha: &str) -> Result<Reference> {
        self.create_ref_calls.lock().unwrap().push(CreateRefCall {
            repo: repo.clone(),
            branch: branch.to_string(),
            sha: sha.to_string(),
        });

        self.refs
            .lock()
            .unwrap()
            .insert(ref_key(repo, branch), sha.to_string());

        Ok(Reference {
            name: format!("refs/heads/{branch}"),
            sha: sha.to_string(),
        })
    }

    async fn get_commit(&self, repo: &RepoId, sha: &str) -> Result<Commit> {
        self.get_commit_calls
            .lock()
            .unwrap()
            .push((repo.clone(), sha.to_string()));

        if self.known_commits.lock().unwrap().contains(sha) {
            Ok(Commit {
                sha: sha.to_string(),
            })
        } else {
            Err(Error::NotFound(format!("commit {sha} in {repo}")))
        }
    }

    async fn create_tree(
        &self,
        repo: &RepoId,
        base_tree: &str,
        entries: &[TreeEntry],
    ) -> Result<Tree> {
        self.create_tree_calls.lock().unwrap().push(CreateTreeCall {
            repo: repo.clone(),
            base_tree: base_tree.to_string(),
            entries: entries.to_vec(),
        });

        if let Some(msg) = self.injected(&self.error_on_create_tree, repo) {
            return Err(Error::Remote(msg));
        }

        Ok(Tree {
            sha: self.next("tree"),
        })
    }

    async fn create_commit(&self, repo: &RepoId, commit: &NewCommit) -> Result<Commit> {
        self.create_commit_calls
            .lock()
            .unwrap()
            .push((repo.clone(), commit.clone()));

        let sha = self.next("commit");
        self.known_commits.lock().unwrap().insert(sha.clone());
        Ok(Commit { sha })
    }

    async fn update_ref(&self, repo: &RepoId, branch: &str, sha: &str) -> Result<Reference> {
        self.update_ref_calls.lock().unwrap().push(UpdateRefCall {
            repo: repo.clone(),
            branch: branch.to_string(),
            sha: sha.to_string(),
        });

        if let Some(msg) = self.injected(&self.error_on_update_ref, repo) {
            return Err(Error::Conflict(msg));
        }

        self.refs
            .lock()
            .unwrap()
            .insert(ref_key(repo, branch), sha.to_string());

        Ok(Reference {
            name: format!("refs/heads/{branch}"),
            sha: sha.to_string(),
        })
    }

    async fn create_pull_request(
        &self,
        repo: &RepoId,
        pr: &NewPullRequest,
    ) -> Result<PullRequest> {
        self.create_pr_calls.lock().unwrap().push(CreatePrCall {
            repo: repo.clone(),
            pr: pr.clone(),
        });

        if let Some(msg) = self.injected(&self.error_on_create_pr, repo) {
            return Err(Error::Remote(msg));
        }

        let number = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(PullRequest {
            number,
            html_url: format!("https://github.com/{repo}/pull/{number}"),
            head_ref: pr.head.clone(),
            base_ref: pr.base.clone(),
            title: pr.title.clone(),
        })
    }
}
