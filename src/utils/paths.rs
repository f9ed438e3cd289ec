//! Download directory management
//!
//! Every download request works inside its own scratch directory under
//! the downloads root, so concurrent requests for the same video never
//! collide and the produced file can be found without guessing names.

use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Ensure the downloads root exists.
pub async fn ensure_downloads_root(root: &Path) -> io::Result<()> {
    tokio::fs::create_dir_all(root).await?;
    debug!("Downloads root ready at {}", root.display());
    Ok(())
}

/// Create a fresh scratch directory for a single download request.
pub async fn create_scratch_dir(root: &Path) -> io::Result<PathBuf> {
    let dir = root.join(Uuid::new_v4().to_string());
    tokio::fs::create_dir_all(&dir).await?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn scratch_dirs_are_unique() {
        let temp = TempDir::new().expect("temp dir");
        let a = create_scratch_dir(temp.path()).await.expect("scratch a");
        let b = create_scratch_dir(temp.path()).await.expect("scratch b");

        assert_ne!(a, b);
        assert!(a.is_dir());
        assert!(b.is_dir());
        assert_eq!(a.parent(), Some(temp.path()));
    }

    #[tokio::test]
    async fn ensure_root_creates_missing_dirs() {
        let temp = TempDir::new().expect("temp dir");
        let root = temp.path().join("nested").join("downloads");
        ensure_downloads_root(&root).await.expect("create root");
        assert!(root.is_dir());
    }
}
