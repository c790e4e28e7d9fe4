//! GitHub credential acquisition

use crate::auth::AuthSource;
use crate::error::{Error, Result};
use dialoguer::{Input, Password};
use std::env;

/// Basic-auth credentials for the GitHub API
///
/// The password slot accepts a personal access token as well; the API treats
/// both identically under basic authentication.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Account username
    pub username: String,
    /// Password or personal access token
    pub password: String,
    /// Where the credentials were obtained from
    pub source: AuthSource,
}

/// Get GitHub credentials
///
/// Priority:
/// 1. `GITHUB_USER` + `GITHUB_PASSWORD` environment variables
/// 2. `GITHUB_USER` + `GITHUB_TOKEN` environment variables
/// 3. Interactive prompt (password input suppressed from echo)
pub fn get_credentials() -> Result<Credentials> {
    if let Ok(username) = env::var("GITHUB_USER") {
        let password = env::var("GITHUB_PASSWORD").or_else(|_| env::var("GITHUB_TOKEN"));
        if let Ok(password) = password {
            if !username.is_empty() && !password.is_empty() {
                return Ok(Credentials {
                    username,
                    password,
                    source: AuthSource::EnvVar,
                });
            }
        }
    }

    prompt_credentials()
}

fn prompt_credentials() -> Result<Credentials> {
    let username: String = Input::new()
        .with_prompt("GitHub username")
        .interact_text()
        .map_err(|e| Error::Auth(format!("cannot read username: {e}")))?;

    let password = Password::new()
        .with_prompt("GitHub password or token")
        .interact()
        .map_err(|e| Error::Auth(format!("cannot read password: {e}")))?;

    let username = username.trim().to_string();
    let password = password.trim().to_string();
    if username.is_empty() || password.is_empty() {
        return Err(Error::Auth(
            "username and password must not be empty".to_string(),
        ));
    }

    Ok(Credentials {
        username,
        password,
        source: AuthSource::Prompt,
    })
}
