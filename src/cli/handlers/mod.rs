mod init;
mod mutate;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::cli::Cli;
use crate::config::PostboardConfig;
use crate::storage::Database;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: PostboardConfig,
    pub root: PathBuf,
}

impl CommandContext {
    /// Load configuration and apply the global CLI overrides on top of it.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let (mut config, root) = match &cli.config {
            Some(path) => PostboardConfig::load_from(&absolutize(&cwd, path)),
            None => PostboardConfig::load(&cwd),
        }
        .context("Failed to load postboard configuration")?;

        if let Some(path) = &cli.database {
            config.database.path = absolutize(&cwd, path).display().to_string();
        }
        if cli.in_memory {
            config.database.in_memory = true;
        }
        if cli.verbose {
            config.logging.verbose = true;
        }
        if let Some(path) = &cli.log_file {
            config.logging.file = Some(absolutize(&cwd, path).display().to_string());
        }

        Ok(Self { config, root })
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.config
            .logging
            .file
            .as_ref()
            .map(|f| absolutize(&self.root, f))
    }

    pub async fn open_database(&self) -> Result<Arc<Database>> {
        let db = if self.config.database.in_memory {
            Database::open_in_memory()
        } else {
            let path = self.config.database_path(&self.root);
            Database::open(&path)
                .await
                .with_context(|| format!("Failed to open database at {}", path.display()))?
        };
        Ok(Arc::new(db))
    }
}

fn absolutize(base: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
