use std::path::PathBuf;

use thiserror::Error;

pub type CommandResult<T> = Result<T, PipepalError>;

#[derive(Debug, Error)]
pub enum PipepalError {
    #[error("package name cannot be empty")]
    EmptyPackageName,
    #[error("{} is not a directory", .0.display())]
    InvalidRoot(PathBuf),
    #[error(transparent)]
    Scaffold(#[from] anyhow::Error),
}
