use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::catalog::model::{CatalogError, PackSizeCatalog};
use crate::catalog::store::CatalogStore;

/// Synchronized owner of the live catalog.
///
/// Readers get owned snapshots; writers hold the lock across persistence, so
/// the in-memory catalog and the store never diverge. A failed save rolls the
/// in-memory change back.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<RwLock<PackSizeCatalog>>,
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    /// Loads the persisted catalog, seeding the store with `defaults` when
    /// nothing has been saved yet. A persisted but empty catalog is an error.
    pub async fn open(
        store: Arc<dyn CatalogStore>,
        defaults: PackSizeCatalog,
    ) -> Result<Self, CatalogError> {
        let catalog = match store.load().await? {
            Some(catalog) if catalog.is_empty() => {
                return Err(CatalogError::Empty(store.describe()));
            }
            Some(catalog) => {
                info!(
                    "Loaded {} pack sizes from {}",
                    catalog.len(),
                    store.describe()
                );
                catalog
            }
            None => {
                info!(
                    "No catalog at {}; seeding with defaults {:?}",
                    store.describe(),
                    defaults.sizes()
                );
                store.save(&defaults).await?;
                defaults
            }
        };

        Ok(Self {
            catalog: Arc::new(RwLock::new(catalog)),
            store,
        })
    }

    /// Copy of the current sizes, largest first.
    pub async fn snapshot(&self) -> Vec<u32> {
        self.catalog.read().await.snapshot()
    }

    pub async fn add(&self, size: i64) -> Result<Vec<u32>, CatalogError> {
        let mut catalog = self.catalog.write().await;
        let previous = catalog.clone();
        let added = catalog.add(size)?;

        if let Err(e) = self.store.save(&catalog).await {
            warn!("Failed to persist pack size {added}: {e}");
            *catalog = previous;
            return Err(e);
        }

        info!("Added pack size {added}");
        Ok(catalog.snapshot())
    }

    pub async fn remove(&self, size: u32) -> Result<Vec<u32>, CatalogError> {
        let mut catalog = self.catalog.write().await;
        let previous = catalog.clone();
        catalog.remove(size)?;

        if let Err(e) = self.store.save(&catalog).await {
            warn!("Failed to persist removal of pack size {size}: {e}");
            *catalog = previous;
            return Err(e);
        }

        if catalog.is_empty() {
            warn!("Removed the last pack size; calculations will fail until one is added");
        } else {
            info!("Removed pack size {size}");
        }
        Ok(catalog.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::store::MemoryStore;
    use async_trait::async_trait;

    fn defaults() -> PackSizeCatalog {
        PackSizeCatalog::from_sizes([250, 500, 1000, 2000, 5000]).unwrap()
    }

    /// Store that loads nothing and refuses every save.
    struct ReadOnlyStore;

    #[async_trait]
    impl CatalogStore for ReadOnlyStore {
        async fn load(&self) -> Result<Option<PackSizeCatalog>, CatalogError> {
            Ok(Some(PackSizeCatalog::from_sizes([250, 500]).unwrap()))
        }

        async fn save(&self, _catalog: &PackSizeCatalog) -> Result<(), CatalogError> {
            Err(CatalogError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }

        fn describe(&self) -> String {
            "read-only".to_string()
        }
    }

    #[tokio::test]
    async fn test_open_seeds_defaults_into_empty_store() {
        let store = Arc::new(MemoryStore::new());
        let service = CatalogService::open(store.clone(), defaults()).await.unwrap();

        assert_eq!(service.snapshot().await, vec![5000, 2000, 1000, 500, 250]);
        assert_eq!(store.load().await.unwrap(), Some(defaults()));
    }

    #[tokio::test]
    async fn test_open_prefers_persisted_catalog() {
        let persisted = PackSizeCatalog::from_sizes([23, 31, 53]).unwrap();
        let store = Arc::new(MemoryStore::with_catalog(persisted));
        let service = CatalogService::open(store, defaults()).await.unwrap();

        assert_eq!(service.snapshot().await, vec![53, 31, 23]);
    }

    #[tokio::test]
    async fn test_open_rejects_persisted_empty_catalog() {
        let store = Arc::new(MemoryStore::with_catalog(PackSizeCatalog::default()));
        let result = CatalogService::open(store, defaults()).await;
        assert!(matches!(result, Err(CatalogError::Empty(_))));
    }

    #[tokio::test]
    async fn test_add_and_remove_persist() {
        let store = Arc::new(MemoryStore::new());
        let service = CatalogService::open(store.clone(), defaults()).await.unwrap();

        let sizes = service.add(750).await.unwrap();
        assert_eq!(sizes, vec![5000, 2000, 1000, 750, 500, 250]);
        assert!(store.load().await.unwrap().unwrap().sizes().contains(&750));

        let sizes = service.remove(5000).await.unwrap();
        assert_eq!(sizes, vec![2000, 1000, 750, 500, 250]);
        assert!(!store.load().await.unwrap().unwrap().sizes().contains(&5000));
    }

    #[tokio::test]
    async fn test_add_duplicate_is_rejected() {
        let service = CatalogService::open(Arc::new(MemoryStore::new()), defaults())
            .await
            .unwrap();
        assert!(matches!(
            service.add(250).await,
            Err(CatalogError::AlreadyExists(250))
        ));
    }

    #[tokio::test]
    async fn test_remove_missing_is_not_found() {
        let service = CatalogService::open(Arc::new(MemoryStore::new()), defaults())
            .await
            .unwrap();
        assert!(matches!(
            service.remove(42).await,
            Err(CatalogError::NotFound(42))
        ));
    }

    #[tokio::test]
    async fn test_failed_save_rolls_back() {
        let service = CatalogService::open(Arc::new(ReadOnlyStore), defaults())
            .await
            .unwrap();

        assert!(matches!(service.add(1000).await, Err(CatalogError::Io(_))));
        assert!(matches!(service.remove(250).await, Err(CatalogError::Io(_))));
        assert_eq!(service.snapshot().await, vec![500, 250]);
    }

    #[tokio::test]
    async fn test_snapshot_unaffected_by_later_mutation() {
        let service = CatalogService::open(Arc::new(MemoryStore::new()), defaults())
            .await
            .unwrap();
        let before = service.snapshot().await;
        service.add(1).await.unwrap();
        assert_eq!(before.len(), 5);
        assert_eq!(service.snapshot().await.len(), 6);
    }
}
