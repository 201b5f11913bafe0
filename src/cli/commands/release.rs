//! cli::commands::release
//!
//! The `release` command family: list and publish releases.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::args::ReleaseCommand;
use crate::github::releases::{self, CreateReleaseRequest};
use crate::github::{Gateway, RepoRef};
use crate::refine::{Passthrough, RefineContext, Refiner};
use crate::ui::output::{self, Verbosity};

/// Dispatch a release subcommand.
pub async fn release(gateway: &Gateway, verbosity: Verbosity, cmd: ReleaseCommand) -> Result<()> {
    match cmd {
        ReleaseCommand::List { repo } => list(gateway, verbosity, &repo).await,
        ReleaseCommand::Create {
            repo,
            tag,
            target,
            name,
            notes,
            draft,
            prerelease,
            assets,
        } => {
            create(
                gateway, verbosity, &repo, tag, target, name, notes, draft, prerelease, assets,
            )
            .await
        }
    }
}

async fn list(gateway: &Gateway, verbosity: Verbosity, repo_url: &str) -> Result<()> {
    let repo = RepoRef::parse_url(repo_url)?;
    let releases = releases::list_releases(gateway, &repo).await?;
    if releases.is_empty() {
        output::print("no releases", verbosity);
        return Ok(());
    }
    for release in releases {
        let name = release.name.as_deref().unwrap_or(&release.tag_name);
        output::print(
            format!(
                "{} {} ({} asset(s)) {}",
                release.tag_name,
                name,
                release.assets.len(),
                release.html_url
            ),
            verbosity,
        );
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn create(
    gateway: &Gateway,
    verbosity: Verbosity,
    repo_url: &str,
    tag: String,
    target: Option<String>,
    name: Option<String>,
    notes: String,
    draft: bool,
    prerelease: bool,
    assets: Vec<PathBuf>,
) -> Result<()> {
    let repo = RepoRef::parse_url(repo_url)?;

    let refiner = Passthrough;
    let notes = if notes.is_empty() {
        notes
    } else {
        match refiner.refine(&notes, RefineContext::ReleaseNotes).await {
            Ok(refined) => refined,
            Err(err) => {
                output::error(err);
                notes
            }
        }
    };

    let request = CreateReleaseRequest {
        name: name.unwrap_or_else(|| tag.clone()),
        tag_name: tag,
        target_commitish: target,
        body: notes,
        draft,
        prerelease,
    };
    let release = releases::create_release(gateway, &repo, &request).await?;
    output::success(
        format!("published {}: {}", release.tag_name, release.html_url),
        verbosity,
    );

    // Uploads are sequential; the first failure stops the run and earlier
    // assets remain attached.
    for path in &assets {
        let bytes =
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let asset_name = file_name(path)?;
        releases::upload_release_asset(
            gateway,
            &release.upload_url,
            &asset_name,
            "application/octet-stream",
            bytes,
        )
        .await?;
        output::print(format!("uploaded {}", asset_name), verbosity);
    }
    Ok(())
}

fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("{} has no file name", path.display()))
}
