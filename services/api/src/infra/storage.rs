use std::path::PathBuf;

use anyhow::Context as _;

use crate::domain::repository::FileStore;
use crate::error::ApiServiceError;

/// Web path prefix under which the upload directory is served.
pub const PUBLIC_PREFIX: &str = "/static/uploads";

/// Upload directory on local disk, served by the frontend under
/// [`PUBLIC_PREFIX`].
#[derive(Clone)]
pub struct LocalFileStore {
    pub root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn disk_path(&self, web_path: &str) -> PathBuf {
        let filename = web_path
            .strip_prefix(PUBLIC_PREFIX)
            .unwrap_or(web_path)
            .trim_start_matches('/');
        self.root.join(filename)
    }
}

impl FileStore for LocalFileStore {
    async fn save(&self, filename: &str, bytes: &[u8]) -> Result<String, ApiServiceError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .context("create upload directory")?;
        tokio::fs::write(self.root.join(filename), bytes)
            .await
            .context("write uploaded file")?;
        Ok(format!("{PUBLIC_PREFIX}/{filename}"))
    }

    async fn delete(&self, web_path: &str) -> Result<(), ApiServiceError> {
        match tokio::fs::remove_file(self.disk_path(web_path)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = web_path, "file already gone, skipping delete");
                Ok(())
            }
            Err(err) => Err(anyhow::Error::new(err)
                .context("remove uploaded file")
                .into()),
        }
    }
}
