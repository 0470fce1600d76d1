use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tokio::sync::RwLock;

use super::error::{Result, StoreError};
use super::posts::Posts;
use super::users::Users;
use crate::model::{Post, User};

fn first_id() -> i32 {
    1
}

/// Both tables plus their auto-increment counters. This is the document
/// written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct Tables {
    #[serde(default = "first_id")]
    pub next_user_id: i32,

    #[serde(default = "first_id")]
    pub next_post_id: i32,

    #[serde(default)]
    pub users: Vec<User>,

    #[serde(default)]
    pub posts: Vec<Post>,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            next_user_id: first_id(),
            next_post_id: first_id(),
            users: Vec::new(),
            posts: Vec::new(),
        }
    }
}

impl Tables {
    pub fn allocate_user_id(&mut self) -> Result<i32> {
        let id = self.next_user_id;
        self.next_user_id = id
            .checked_add(1)
            .ok_or_else(|| StoreError::Unknown("user id space exhausted".to_string()))?;
        Ok(id)
    }

    pub fn allocate_post_id(&mut self) -> Result<i32> {
        let id = self.next_post_id;
        self.next_post_id = id
            .checked_add(1)
            .ok_or_else(|| StoreError::Unknown("post id space exhausted".to_string()))?;
        Ok(id)
    }

    /// Raise each counter past the highest id already stored. Documents
    /// written by hand may omit the counters or carry stale ones.
    fn reconcile_counters(&mut self) -> Result<()> {
        let next_user_id =
            next_free_id("user", self.next_user_id, self.users.iter().map(|u| u.id))?;
        let next_post_id =
            next_free_id("post", self.next_post_id, self.posts.iter().map(|p| p.id))?;

        if next_user_id != self.next_user_id || next_post_id != self.next_post_id {
            tracing::warn!(
                next_user_id,
                next_post_id,
                "Database counters were behind stored ids, raised"
            );
        }
        self.next_user_id = next_user_id;
        self.next_post_id = next_post_id;
        Ok(())
    }
}

fn next_free_id(entity: &str, counter: i32, ids: impl Iterator<Item = i32>) -> Result<i32> {
    let floor = match ids.max() {
        Some(max) => max.checked_add(1).ok_or_else(|| {
            StoreError::Corrupt(format!("{} id {} leaves no room for new rows", entity, max))
        })?,
        None => first_id(),
    };
    Ok(counter.max(floor))
}

/// Process-wide persistence handle.
///
/// Holds both tables in memory behind an async `RwLock` and, unless opened in
/// memory, mirrors every committed write to a JSON file. Each write is
/// applied to a staged copy and only becomes visible once it has been
/// flushed, so a failed flush leaves the previous state intact.
pub struct Database {
    path: Option<PathBuf>,
    tables: RwLock<Option<Tables>>,
}

impl Database {
    /// Open (or create) the database document at `path`.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        tracing::info!(path = %path.display(), "Opening database");

        let tables = if tokio::fs::try_exists(&path).await? {
            let content = tokio::fs::read_to_string(&path).await?;
            let mut tables = serde_json::from_str::<Tables>(&content)
                .map_err(|e| StoreError::Corrupt(format!("{}: {}", path.display(), e)))?;
            tables.reconcile_counters()?;
            tables
        } else {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            let tables = Tables::default();
            write_document(&path, &tables).await?;
            tables
        };

        tracing::debug!(
            users = tables.users.len(),
            posts = tables.posts.len(),
            "Database loaded"
        );

        Ok(Self {
            path: Some(path),
            tables: RwLock::new(Some(tables)),
        })
    }

    /// A database that lives only as long as the process.
    pub fn open_in_memory() -> Self {
        tracing::info!("Opening in-memory database");
        Self {
            path: None,
            tables: RwLock::new(Some(Tables::default())),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Flush and release the database. Later calls fail with
    /// [`StoreError::Closed`]. Closing twice is a no-op.
    pub async fn close(&self) -> Result<()> {
        let mut guard = self.tables.write().await;
        if let Some(tables) = guard.take() {
            if let Some(path) = &self.path {
                write_document(path, &tables).await?;
            }
            tracing::info!("Database closed");
        }
        Ok(())
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    pub fn posts(&self) -> Posts<'_> {
        Posts::new(self)
    }

    pub(super) async fn read<T>(&self, f: impl FnOnce(&Tables) -> T) -> Result<T> {
        let guard = self.tables.read().await;
        let tables = guard.as_ref().ok_or(StoreError::Closed)?;
        Ok(f(tables))
    }

    pub(super) async fn write<T>(&self, f: impl FnOnce(&mut Tables) -> Result<T>) -> Result<T> {
        let mut guard = self.tables.write().await;
        let tables = guard.as_mut().ok_or(StoreError::Closed)?;

        let mut staged = tables.clone();
        let out = f(&mut staged)?;

        if let Some(path) = &self.path {
            write_document(path, &staged).await?;
        }
        *tables = staged;

        Ok(out)
    }
}

async fn write_document(path: &Path, tables: &Tables) -> Result<()> {
    let content = serde_json::to_string_pretty(tables)
        .map_err(|e| StoreError::Unknown(format!("Failed to serialize database: {}", e)))?;
    let path = path.to_path_buf();

    tokio::task::spawn_blocking(move || atomic_write(&path, &content))
        .await
        .map_err(|e| StoreError::Unknown(format!("Write task failed: {}", e)))?
}

/// Write via temp file + rename so the document is never left half written.
fn atomic_write(target_path: &Path, content: &str) -> Result<()> {
    use std::io::Write;

    let target_dir = match target_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp_file = NamedTempFile::new_in(target_dir)
        .map_err(|e| StoreError::Connection(format!("Failed to create temp file: {}", e)))?;
    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| StoreError::Connection(format!("Failed to write temp file: {}", e)))?;
    temp_file
        .as_file()
        .sync_all()
        .map_err(|e| StoreError::Connection(format!("Failed to sync temp file: {}", e)))?;
    temp_file
        .persist(target_path)
        .map_err(|e| StoreError::Connection(format!("Failed to persist temp file: {}", e)))?;

    Ok(())
}
