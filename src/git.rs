// Cloner: rewrites the clone URL to carry credentials inline, then shells
// out to the system `git` binary. Using the real git keeps the tool out of
// the business of transports, progress output and terminal prompts.

use crate::api::Repo;
use anyhow::{Context, Result};
use std::process::Command;

/// Embed `username:password@` into a GitHub HTTPS clone URL.
///
/// Plain textual substitution on the host prefix; the credentials are not
/// percent-encoded. URLs on other hosts pass through unchanged.
pub fn authenticated_url(clone_url: &str, username: &str, password: &str) -> String {
    clone_url.replace(
        "https://github.com",
        &format!("https://{}:{}@github.com", username, password),
    )
}

/// Clone the repository into the working directory, inheriting stdout and
/// stderr so git's own output is visible. A non-zero git exit status is
/// not treated as an error; only failing to run git at all is.
pub fn clone(repo: &Repo, username: &str, password: &str) -> Result<()> {
    println!("Cloning {}", repo);

    let url = authenticated_url(&repo.clone_url, username, password);
    Command::new("git")
        .args(["clone", &url])
        .status()
        .context("Failed to run git clone")?;

    println!();
    Ok(())
}
