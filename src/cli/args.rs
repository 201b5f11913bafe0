//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--token <token>`: GitHub token (falls back to `GITHUB_TOKEN`)
//! - `--debug`: Enable debug output
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gitdrop - push files, issues, and releases to GitHub repositories
#[derive(Parser, Debug)]
#[command(name = "gitdrop")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// GitHub token; falls back to the GITHUB_TOKEN environment variable
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Commit files to a repository branch as a single commit
    #[command(
        long_about = "Commit one or more local files to a repository branch.\n\n\
            All files land in a single commit built through the git data API. \
            Empty repositories are initialized with one atomic multi-file \
            commit; existing branches are fast-forwarded."
    )]
    Commit {
        /// Repository web URL (https://github.com/<owner>/<repo>)
        #[arg(long)]
        repo: String,

        /// Commit message
        #[arg(short, long)]
        message: String,

        /// Target branch (defaults to the repository's default branch)
        #[arg(long)]
        branch: Option<String>,

        /// Destination path prefix inside the repository
        #[arg(long)]
        dest: Option<String>,

        /// Files to commit
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// List or create branches
    #[command(subcommand)]
    Branch(BranchCommand),

    /// List or create issues
    #[command(subcommand)]
    Issue(IssueCommand),

    /// List or publish releases
    #[command(subcommand)]
    Release(ReleaseCommand),

    /// List your repositories
    Repos {
        /// Page number (100 repositories per page)
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
}

/// Branch subcommands.
#[derive(Subcommand, Debug)]
pub enum BranchCommand {
    /// List branches
    List {
        /// Repository web URL
        #[arg(long)]
        repo: String,
    },
    /// Create a branch from an existing one
    Create {
        /// Repository web URL
        #[arg(long)]
        repo: String,

        /// Name of the branch to create
        #[arg(long)]
        name: String,

        /// Branch the new branch should start from
        #[arg(long)]
        from: String,
    },
}

/// Issue subcommands.
#[derive(Subcommand, Debug)]
pub enum IssueCommand {
    /// List open issues
    List {
        /// Repository web URL
        #[arg(long)]
        repo: String,
    },
    /// Open a new issue
    Create {
        /// Repository web URL
        #[arg(long)]
        repo: String,

        /// Issue title
        #[arg(long)]
        title: String,

        /// Issue body
        #[arg(long, default_value = "")]
        body: String,
    },
}

/// Release subcommands.
#[derive(Subcommand, Debug)]
pub enum ReleaseCommand {
    /// List releases
    List {
        /// Repository web URL
        #[arg(long)]
        repo: String,
    },
    /// Publish a release
    Create {
        /// Repository web URL
        #[arg(long)]
        repo: String,

        /// Tag name for the release
        #[arg(long)]
        tag: String,

        /// Branch or commit the tag should point at (defaults to the
        /// repository's default branch)
        #[arg(long)]
        target: Option<String>,

        /// Release title (defaults to the tag name)
        #[arg(long)]
        name: Option<String>,

        /// Release notes
        #[arg(long, default_value = "")]
        notes: String,

        /// Publish as draft
        #[arg(long)]
        draft: bool,

        /// Mark as prerelease
        #[arg(long)]
        prerelease: bool,

        /// Asset files to upload after creation
        #[arg(long = "asset")]
        assets: Vec<PathBuf>,
    },
}
