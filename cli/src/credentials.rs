//! Token persistence.
//!
//! The session survives restarts through one JSON file at
//! `~/.sustaingo/tokens`, holding the `access_token`/`refresh_token` pair
//! under those exact keys. Nothing else is persisted; deleting the file is
//! equivalent to logging out.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use dirs::home_dir;
use sustaingo_business::Credential;

/// The on-disk token store.
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    /// The store at the default location, creating `~/.sustaingo` if needed.
    pub fn open_default() -> Result<Self> {
        let home = home_dir().context("Could not find home directory")?;
        let config_dir = home.join(".sustaingo");
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create {}", config_dir.display()))?;
        }
        Ok(Self {
            path: config_dir.join("tokens"),
        })
    }

    /// A store at an explicit path. Tests point this at a temp directory.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored credential, if the file exists and parses.
    pub fn load(&self) -> Result<Option<Credential>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let credential = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        Ok(Some(credential))
    }

    /// Write the credential, replacing whatever was stored.
    pub fn save(&self, credential: &Credential) -> Result<()> {
        let json = serde_json::to_string(credential)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    /// Remove the file. Returns whether anything was stored.
    pub fn clear(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&self.path)
            .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        Ok(true)
    }
}
