use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line arguments for the pipepal CLI.
#[derive(Debug, Parser)]
#[command(
    name = "pipepal",
    version,
    about = "Bootstrap tooling for the pipepal speech and voice analysis package.",
    long_about = None
)]
pub struct Args {
    /// Subcommand to execute; prints the greeting when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Personalize a fresh checkout of the package template.
    Setup(SetupArgs),
}

/// Replacement values for the template placeholders.
#[derive(Debug, Clone, clap::Args)]
pub struct SetupArgs {
    /// Package name.
    #[arg(long)]
    pub package_name: String,

    /// Package repository URL, without .git extension.
    #[arg(long)]
    pub package_repo_without_git_extension: String,

    /// GitHub nickname.
    #[arg(long)]
    pub github_nickname: String,

    /// Codecov graphics token.
    #[arg(long)]
    pub codecov_token: String,

    /// Email address.
    #[arg(long)]
    pub email: String,

    /// Directory containing the scaffold checkout.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}
