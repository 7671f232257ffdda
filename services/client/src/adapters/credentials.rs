//! services/client/src/adapters/credentials.rs
//!
//! A `CredentialStore` backed by a small JSON file, the local stand-in for
//! browser storage.

use async_trait::async_trait;
use athletic_spirit_core::ports::{CredentialStore, PortError, PortResult};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Name of the storage entry that holds the session token.
pub const TOKEN_KEY: &str = "authToken";

/// Keeps named entries in a JSON object on disk. Only `authToken` is written.
#[derive(Clone, Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> PortResult<Map<String, Value>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(PortError::Storage(e.to_string())),
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(entries)) => Ok(entries),
            Ok(_) => Err(PortError::Storage(format!(
                "{} does not hold a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(PortError::Storage(e.to_string())),
        }
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn save_token(&self, token: &str) -> PortResult<()> {
        // A corrupt file is replaced rather than blocking the login.
        let mut entries = self.read_entries().await.unwrap_or_default();
        entries.insert(TOKEN_KEY.to_string(), Value::String(token.to_string()));

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                error!("Failed to create {}: {:?}", parent.display(), e);
                PortError::Storage(e.to_string())
            })?;
        }

        let serialized = serde_json::to_string_pretty(&Value::Object(entries))
            .map_err(|e| PortError::Storage(e.to_string()))?;
        tokio::fs::write(&self.path, serialized).await.map_err(|e| {
            error!("Failed to write {}: {:?}", self.path.display(), e);
            PortError::Storage(e.to_string())
        })?;

        info!("Session token stored in {}", self.path.display());
        Ok(())
    }

    async fn load_token(&self) -> PortResult<Option<String>> {
        let entries = self.read_entries().await?;
        Ok(entries
            .get(TOKEN_KEY)
            .and_then(Value::as_str)
            .map(str::to_string))
    }
}
