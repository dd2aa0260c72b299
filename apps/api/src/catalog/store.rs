//! Durable storage for the pack-size catalog.
//!
//! Backends are swapped behind the `CatalogStore` trait; `CatalogService`
//! carries one as `Arc<dyn CatalogStore>`.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::catalog::model::{CatalogError, PackSizeCatalog};

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Returns `None` when nothing has been persisted yet.
    async fn load(&self) -> Result<Option<PackSizeCatalog>, CatalogError>;

    async fn save(&self, catalog: &PackSizeCatalog) -> Result<(), CatalogError>;

    /// Human-readable location, used in logs and error messages.
    fn describe(&self) -> String;
}

/// On-disk layout, compatible with existing `packSizeConfig.json` files.
#[derive(Debug, Serialize, Deserialize)]
struct StoredCatalog {
    #[serde(rename = "packSizes")]
    pack_sizes: PackSizeCatalog,
}

// ────────────────────────────────────────────────────────────────────────────
// JsonFileStore
// ────────────────────────────────────────────────────────────────────────────

/// JSON file backend. Writes go to a temporary file in the same directory
/// and are renamed over the target, so readers never see a partial file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogStore for JsonFileStore {
    async fn load(&self) -> Result<Option<PackSizeCatalog>, CatalogError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let stored: StoredCatalog = serde_json::from_str(&raw)?;
        Ok(Some(stored.pack_sizes))
    }

    async fn save(&self, catalog: &PackSizeCatalog) -> Result<(), CatalogError> {
        let stored = StoredCatalog {
            pack_sizes: catalog.clone(),
        };
        let data = serde_json::to_vec_pretty(&stored)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_atomically(&path, &data))
            .await
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))??;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn write_atomically(path: &Path, data: &[u8]) -> Result<(), CatalogError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.write_all(b"\n")?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// MemoryStore
// ────────────────────────────────────────────────────────────────────────────

/// Process-local backend for tests and ephemeral deployments.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Mutex<Option<PackSizeCatalog>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: PackSizeCatalog) -> Self {
        Self {
            saved: Mutex::new(Some(catalog)),
        }
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn load(&self) -> Result<Option<PackSizeCatalog>, CatalogError> {
        Ok(self.saved.lock().await.clone())
    }

    async fn save(&self, catalog: &PackSizeCatalog) -> Result<(), CatalogError> {
        *self.saved.lock().await = Some(catalog.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory catalog".to_string()
    }
}
