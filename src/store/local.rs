use std::path::{Path, PathBuf};

use futures_locks::Mutex;
use tokio::{
    fs::{self, File},
    io::AsyncWriteExt,
};

use super::MenuEntry;

/// Entries appended to a local file, one JSON object per line.
pub struct FileStore {
    path: PathBuf,
    file: Mutex<File>,
}

impl std::fmt::Debug for FileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FileStore").field(&self.path).finish()
    }
}

impl FileStore {
    pub async fn open(p: impl AsRef<Path>) -> crate::Result<Self> {
        let path = p.as_ref().to_owned();
        let file = fs::File::options()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub async fn append(&self, entries: &[MenuEntry]) -> crate::Result<()> {
        let mut buf = Vec::new();
        for entry in entries {
            serde_json::to_writer(&mut buf, entry)?;
            buf.push(b'\n');
        }
        let mut file = self.file.lock().await;
        file.write_all(&buf).await?;
        file.flush().await?;
        Ok(())
    }

    pub async fn list(&self) -> crate::Result<Vec<MenuEntry>> {
        // hold the lock so a half-written batch is never read
        let _guard = self.file.lock().await;
        let text = fs::read_to_string(&self.path).await?;
        text.lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str::<MenuEntry>(line).map_err(From::from))
            .collect()
    }

    pub async fn close(self) -> crate::Result<()> {
        let file = self
            .file
            .try_unwrap()
            .map_err(|_| std::io::Error::other("file store is still in use"))?;
        file.sync_all().await?;
        Ok(())
    }
}
