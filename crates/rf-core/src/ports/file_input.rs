use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::registration::draft::ProfileImage;

#[derive(Debug, Error)]
pub enum FileInputError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Supplies the file chosen through the form's file input.
#[async_trait]
pub trait FileInputPort: Send + Sync {
    /// Loads exactly one file reference for the given selection.
    async fn read_file(&self, path: &Path) -> Result<ProfileImage, FileInputError>;
}
