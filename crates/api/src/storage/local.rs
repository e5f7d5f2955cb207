use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{join_url, ObjectStorage, StorageError};

/// Objects as files under a root directory.
///
/// Keys map to relative paths; the server exposes the root under
/// `public_base_url` so returned URLs resolve.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
    public_base_url: String,
}

impl LocalStorage {
    pub fn new(root: PathBuf, public_base_url: String) -> Self {
        Self {
            root,
            public_base_url,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

#[async_trait]
impl ObjectStorage for LocalStorage {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), StorageError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, bytes).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, StorageError> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn url(&self, key: &str) -> String {
        join_url(&self.public_base_url, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_delete() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().to_path_buf(), "/files/".to_string());

        storage
            .put("uploads/1/10-a.png", vec![1, 2, 3], "image/png")
            .await
            .unwrap();
        let written = tokio::fs::read(dir.path().join("uploads/1/10-a.png"))
            .await
            .unwrap();
        assert_eq!(written, vec![1, 2, 3]);

        assert!(storage.delete("uploads/1/10-a.png").await.unwrap());
        assert!(!storage.delete("uploads/1/10-a.png").await.unwrap());
    }

    #[test]
    fn url_joins_cleanly() {
        let storage = LocalStorage::new(PathBuf::from("/tmp"), "/files/".to_string());
        assert_eq!(storage.url("uploads/1/a.png"), "/files/uploads/1/a.png");
    }
}
