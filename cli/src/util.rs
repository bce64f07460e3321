use std::path::PathBuf;

use anyhow::{Error, Result};
use tokio::fs::{create_dir_all, read_to_string, remove_file, write};

fn token_path() -> Result<PathBuf> {
    let dirs = match directories::ProjectDirs::from("", "", "quill") {
        Some(dirs) => dirs,
        None => return Err(Error::msg("couldn't access default directory on system")),
    };
    Ok(dirs.config_dir().join("token"))
}

/// Stores provided token in the target location where it can be read.
pub async fn store_token(token: &str) -> Result<()> {
    let path = token_path()?;
    if let Some(dir) = path.parent() {
        create_dir_all(dir).await?;
    }
    write(path, token.trim()).await?;
    Ok(())
}

pub async fn retrieve_token() -> Result<String> {
    let token = read_to_string(token_path()?)
        .await
        .map_err(|_| Error::msg("token not found"))?;
    Ok(token.trim().to_string())
}

pub async fn remove_token() -> Result<()> {
    let path = token_path()?;
    if path.exists() {
        remove_file(path).await?;
    }
    Ok(())
}
