use std::path::Path;

use async_trait::async_trait;
use rf_core::ports::{FileInputError, FileInputPort};
use rf_core::registration::ProfileImage;
use tokio::fs;

/// Reads the profile picture from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileInput;

impl FsFileInput {
    pub fn new() -> Self {
        Self
    }
}

/// Infers the MIME type from the file extension.
fn guess_content_type(path: &Path) -> Option<String> {
    mime_guess::from_path(path)
        .first()
        .map(|mime| mime.essence_str().to_string())
}

#[async_trait]
impl FileInputPort for FsFileInput {
    async fn read_file(&self, path: &Path) -> Result<ProfileImage, FileInputError> {
        let metadata = match fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FileInputError::NotFound(path.to_path_buf()));
            }
            Err(source) => {
                return Err(FileInputError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        if !metadata.is_file() {
            return Err(FileInputError::NotAFile(path.to_path_buf()));
        }

        let bytes = fs::read(path).await.map_err(|source| FileInputError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        tracing::debug!(
            path = %path.display(),
            len = bytes.len(),
            "profile image read from disk"
        );
        Ok(ProfileImage::new(file_name, bytes).with_content_type(guess_content_type(path)))
    }
}
