//! lichen - license pull requests for whole organizations
//!
//! Enumerates the repositories of an organization, finds the ones without a
//! license, and for each one commits a license file to a dedicated branch
//! and opens a pull request proposing the change.
//!
//! The library is split along the seams of that workflow:
//! - [`forge`] - the remote API surface (refs, trees, commits, PRs)
//! - [`sweep`] - the per-repository workflow and the organization loop
//! - [`auth`] - credential acquisition, kept out of the workflow entirely
//! - [`config`] - immutable run configuration built once at startup

pub mod auth;
pub mod config;
pub mod error;
pub mod forge;
pub mod sweep;
pub mod types;
