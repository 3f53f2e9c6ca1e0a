use crate::core::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Filesystem storage rooted at `base_path`. Relative paths resolve
/// against the root, absolute paths are used as given.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    async fn exists(&self, path: &Path) -> bool {
        fs::try_exists(self.resolve(path)).await.unwrap_or(false)
    }

    async fn ensure_dir(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(self.resolve(path)).await?;
        Ok(())
    }

    /// Writes through a `.part` sibling and renames it into place, so an
    /// interrupted write never leaves a truncated file under the final name.
    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut partial = full_path.clone().into_os_string();
        partial.push(".part");
        let partial = PathBuf::from(partial);

        fs::write(&partial, data).await?;
        if let Err(e) = fs::rename(&partial, &full_path).await {
            let _ = fs::remove_file(&partial).await;
            return Err(e.into());
        }
        Ok(())
    }
}
