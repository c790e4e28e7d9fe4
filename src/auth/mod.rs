//! Credential acquisition
//!
//! Collects credentials from the environment or interactively. This is a
//! pure I/O concern: the workflow never sees credentials, only an already
//! authenticated forge handle.

mod github;

pub use github::{Credentials, get_credentials};

/// Source of the credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Credentials from environment variables
    EnvVar,
    /// Credentials collected interactively
    Prompt,
}
