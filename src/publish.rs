//! Publishing of finished report artifacts.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::files::{resolve_under, write_bytes};

/// Outcome of one publish attempt. A failed publish never invalidates the report itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublishStatus {
    pub pushed: bool,
    pub path: Option<String>,
    pub error: Option<String>,
}

impl PublishStatus {
    pub fn skipped() -> Self {
        Self::default()
    }

    pub fn published(path: impl Into<String>) -> Self {
        Self {
            pushed: true,
            path: Some(path.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            pushed: false,
            path: None,
            error: Some(error.into()),
        }
    }
}

/// Destination for report artifacts.
pub trait Publisher {
    /// Store `payload` at the `/`-separated `destination`, recording `message` with it.
    fn publish(&self, destination: &str, payload: &[u8], message: &str) -> PublishStatus;
}

/// Writes artifacts into a directory tree on local disk.
#[derive(Debug, Clone)]
pub struct FilesystemPublisher {
    root: PathBuf,
}

impl FilesystemPublisher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Publisher for FilesystemPublisher {
    fn publish(&self, destination: &str, payload: &[u8], message: &str) -> PublishStatus {
        let Some(path) = resolve_under(&self.root, destination) else {
            warn!(%destination, "refusing to publish outside the reports directory");
            return PublishStatus::failed(format!("Invalid destination: {destination}"));
        };

        match write_bytes(&path, payload) {
            Ok(()) => {
                info!(path = %path.display(), bytes = payload.len(), %message, "report published");
                PublishStatus::published(destination)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "report publish failed");
                PublishStatus::failed(format!("Write to {} failed: {e}", path.display()))
            }
        }
    }
}
