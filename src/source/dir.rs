// src/source/dir.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::FeedSource;

/// Reads documents from a local directory, e.g. a checked-out `docs/` folder.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl FeedSource for DirSource {
    async fn fetch(&self, name: &str) -> Result<String> {
        let path = self.root.join(name);
        tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("reading {}", path.display()))
    }

    fn name(&self) -> &'static str {
        "dir"
    }
}
