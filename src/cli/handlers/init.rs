use crate::config::{CONFIG_FILE_NAME, PostboardConfig};
use crate::error::PostboardError;
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(database: Option<String>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(PostboardError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let mut config = PostboardConfig::default();
    if let Some(path) = database {
        config.database.path = path;
    }

    let db_path = config.database_path(&cwd);
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    config.save(&config_path)?;

    println!(
        "{} postboard project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config:   {}", config_path.display());
    println!("  Database: {}", db_path.display());

    Ok(())
}
