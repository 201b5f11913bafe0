//! cli::commands::repos
//!
//! The `repos` command: list the authenticated user's repositories.

use anyhow::Result;

use crate::github::repos::fetch_user_repos;
use crate::github::Gateway;
use crate::ui::output::{self, Verbosity};

/// Repositories fetched per page.
const PER_PAGE: u32 = 100;

/// List the user's repositories, most recently updated first.
pub async fn repos(gateway: &Gateway, verbosity: Verbosity, page: u32) -> Result<()> {
    let repos = fetch_user_repos(gateway, page, PER_PAGE).await?;
    if repos.is_empty() {
        output::print("no repositories", verbosity);
        return Ok(());
    }
    for repo in repos {
        let language = repo.language.as_deref().unwrap_or("-");
        output::print(
            format!(
                "{} [{}] ★{} ({})",
                repo.full_name, language, repo.stargazers_count, repo.html_url
            ),
            verbosity,
        );
    }
    Ok(())
}
