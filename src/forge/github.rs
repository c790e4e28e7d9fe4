//! GitHub forge implementation using reqwest

use crate::auth::Credentials;
use crate::error::{Error, Result};
use crate::forge::ForgeService;
use crate::types::{
    Commit, CommitAuthor, LicenseInfo, NewCommit, NewPullRequest, PullRequest, Reference, RepoId,
    Repository, Tree, TreeEntry,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent with every request; the API rejects anonymous clients
const USER_AGENT: &str = concat!("lichen/", env!("CARGO_PKG_VERSION"));

/// Page size for repository listings
const LIST_PAGE_SIZE: usize = 100;

/// GitHub service using basic authentication over REST v3
pub struct GitHubForge {
    client: Client,
    username: String,
    password: String,
    base_url: String,
}

#[derive(Deserialize)]
struct ApiObject {
    sha: String,
}

#[derive(Deserialize)]
struct ApiRef {
    #[serde(rename = "ref")]
    name: String,
    object: ApiObject,
}

#[derive(Serialize)]
struct CreateRefPayload {
    #[serde(rename = "ref")]
    name: String,
    sha: String,
}

#[derive(Serialize)]
struct UpdateRefPayload {
    sha: String,
    force: bool,
}

#[derive(Serialize)]
struct CreateTreePayload<'a> {
    base_tree: &'a str,
    tree: &'a [TreeEntry],
}

#[derive(Deserialize)]
struct ApiTree {
    sha: String,
}

#[derive(Serialize)]
struct ApiAuthor<'a> {
    name: &'a str,
    email: &'a str,
    date: DateTime<Utc>,
}

#[derive(Serialize)]
struct CreateCommitPayload<'a> {
    message: &'a str,
    tree: &'a str,
    parents: &'a [String],
    author: ApiAuthor<'a>,
}

#[derive(Deserialize)]
struct ApiCommit {
    sha: String,
}

#[derive(Deserialize)]
struct ApiOwner {
    login: String,
}

#[derive(Deserialize)]
struct ApiRepo {
    name: String,
    owner: ApiOwner,
    license: Option<LicenseInfo>,
}

#[derive(Serialize)]
struct CreatePrPayload<'a> {
    title: &'a str,
    head: &'a str,
    base: &'a str,
    body: &'a str,
    maintainer_can_modify: bool,
}

#[derive(Deserialize)]
struct ApiBranchRef {
    #[serde(rename = "ref")]
    name: String,
}

#[derive(Deserialize)]
struct ApiPull {
    number: u64,
    html_url: String,
    head: ApiBranchRef,
    base: ApiBranchRef,
    title: String,
}

#[derive(Deserialize)]
struct ApiUser {
    login: String,
}

impl GitHubForge {
    /// Create a forge handle for github.com or a GitHub Enterprise host
    pub fn new(credentials: &Credentials, host: Option<&str>) -> Self {
        let base_url = host.map_or_else(
            || "https://api.github.com".to_string(),
            |h| format!("https://{h}/api/v3"),
        );
        Self::with_base_url(credentials, base_url)
    }

    /// Create a forge handle against an explicit base URL
    ///
    /// Used by tests that point the client at a local mock server.
    pub fn with_base_url(credentials: &Credentials, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            username: credentials.username.clone(),
            password: credentials.password.clone(),
            base_url,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .basic_auth(&self.username, Some(&self.password))
    }

    /// Verify the credentials by fetching the authenticated user's login
    pub async fn authenticated_user(&self) -> Result<String> {
        let user: ApiUser = self
            .request(Method::GET, "/user")
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Auth(format!("invalid credentials: {e}")))?
            .json()
            .await?;
        Ok(user.login)
    }
}

#[async_trait]
impl ForgeService for GitHubForge {
    async fn list_org_repos(&self, org: &str) -> Result<Vec<Repository>> {
        let mut repos = Vec::new();
        let mut page = 1u32;

        loop {
            debug!(org, page, "listing organization repositories");
            let batch: Vec<ApiRepo> = self
                .request(Method::GET, &format!("/orgs/{org}/repos"))
                .query(&[
                    ("per_page", LIST_PAGE_SIZE.to_string()),
                    ("page", page.to_string()),
                ])
                .send()
                .await?
                .error_for_status()
                .map_err(|e| Error::Remote(format!("cannot list repos of {org}: {e}")))?
                .json()
                .await?;

            let batch_len = batch.len();
            repos.extend(batch.into_iter().map(|r| Repository {
                name: r.name,
                owner: r.owner.login,
                license: r.license,
            }));

            if batch_len < LIST_PAGE_SIZE {
                return Ok(repos);
            }
            page += 1;
        }
    }

    async fn get_ref(&self, repo: &RepoId, branch: &str) -> Result<Option<Reference>> {
        debug!(%repo, branch, "fetching ref");
        let response = self
            .request(Method::GET, &format!("/repos/{repo}/git/ref/heads/{branch}"))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let api_ref: ApiRef = response
            .error_for_status()
            .map_err(|e| Error::Remote(format!("cannot fetch ref {branch} in {repo}: {e}")))?
            .json()
            .await?;

        Ok(Some(Reference {
            name: api_ref.name,
            sha: api_ref.object.sha,
        }))
    }

    async fn create_ref(&self, repo: &RepoId, branch: &str, sha: &str) -> Result<Reference> {
        debug!(%repo, branch, sha, "creating ref");
        let payload = CreateRefPayload {
            name: format!("refs/heads/{branch}"),
            sha: sha.to_string(),
        };

        let api_ref: ApiRef = self
            .request(Method::POST, &format!("/repos/{repo}/git/refs"))
            .json(&payload)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Remote(format!("cannot create ref {branch} in {repo}: {e}")))?
            .json()
            .await?;

        Ok(Reference {
            name: api_ref.name,
            sha: api_ref.object.sha,
        })
    }

    async fn get_commit(&self, repo: &RepoId, sha: &str) -> Result<Commit> {
        debug!(%repo, sha, "fetching commit");
        let response = self
            .request(Method::GET, &format!("/repos/{repo}/git/commits/{sha}"))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(format!("commit {sha} in {repo}")));
        }

        let commit: ApiCommit = response
            .error_for_status()
            .map_err(|e| Error::Remote(format!("cannot fetch commit {sha} in {repo}: {e}")))?
            .json()
            .await?;

        Ok(Commit { sha: commit.sha })
    }

    async fn create_tree(
        &self,
        repo: &RepoId,
        base_tree: &str,
        entries: &[TreeEntry],
    ) -> Result<Tree> {
        debug!(%repo, base_tree, entries = entries.len(), "creating tree");
        let payload = CreateTreePayload { base_tree, tree: entries };

        let tree: ApiTree = self
            .request(Method::POST, &format!("/repos/{repo}/git/trees"))
            .json(&payload)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Remote(format!("cannot create tree in {repo}: {e}")))?
            .json()
            .await?;

        Ok(Tree { sha: tree.sha })
    }

    async fn create_commit(&self, repo: &RepoId, commit: &NewCommit) -> Result<Commit> {
        debug!(%repo, tree = %commit.tree, "creating commit");
        let CommitAuthor { name, email } = &commit.author;
        let payload = CreateCommitPayload {
            message: &commit.message,
            tree: &commit.tree,
            parents: &commit.parents,
            author: ApiAuthor {
                name,
                email,
                date: commit.date,
            },
        };

        let created: ApiCommit = self
            .request(Method::POST, &format!("/repos/{repo}/git/commits"))
            .json(&payload)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Remote(format!("cannot create commit in {repo}: {e}")))?
            .json()
            .await?;

        Ok(Commit { sha: created.sha })
    }

    async fn update_ref(&self, repo: &RepoId, branch: &str, sha: &str) -> Result<Reference> {
        debug!(%repo, branch, sha, "updating ref (non-force)");
        let payload = UpdateRefPayload {
            sha: sha.to_string(),
            force: false,
        };

        let response = self
            .request(Method::PATCH, &format!("/repos/{repo}/git/refs/heads/{branch}"))
            .json(&payload)
            .send()
            .await?;

        // A rejected fast-forward means the branch moved under us.
        if response.status() == StatusCode::UNPROCESSABLE_ENTITY
            || response.status() == StatusCode::CONFLICT
        {
            return Err(Error::Conflict(format!(
                "ref {branch} in {repo} has moved; non-force update rejected"
            )));
        }

        let api_ref: ApiRef = response
            .error_for_status()
            .map_err(|e| Error::Remote(format!("cannot update ref {branch} in {repo}: {e}")))?
            .json()
            .await?;

        Ok(Reference {
            name: api_ref.name,
            sha: api_ref.object.sha,
        })
    }

    async fn create_pull_request(
        &self,
        repo: &RepoId,
        pr: &NewPullRequest,
    ) -> Result<PullRequest> {
        debug!(%repo, head = %pr.head, base = %pr.base, "opening pull request");
        let payload = CreatePrPayload {
            title: &pr.title,
            head: &pr.head,
            base: &pr.base,
            body: &pr.body,
            maintainer_can_modify: pr.maintainer_can_modify,
        };

        let pull: ApiPull = self
            .request(Method::POST, &format!("/repos/{repo}/pulls"))
            .json(&payload)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Remote(format!("cannot open pull request in {repo}: {e}")))?
            .json()
            .await?;

        Ok(PullRequest {
            number: pull.number,
            html_url: pull.html_url,
            head_ref: pull.head.name,
            base_ref: pull.base.name,
            title: pull.title,
        })
    }
}
