use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid pack size: {0}")]
    InvalidSize(i64),

    #[error("Pack size already exists: {0}")]
    AlreadyExists(u32),

    #[error("Pack size not found: {0}")]
    NotFound(u32),

    #[error("No pack sizes defined in {0}")]
    Empty(String),

    #[error("Catalog storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// The set of shippable pack sizes, kept distinct and sorted largest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<u32>")]
pub struct PackSizeCatalog {
    sizes: Vec<u32>,
}

impl PackSizeCatalog {
    /// Builds a catalog from arbitrary input. Duplicates collapse; any
    /// non-positive or out-of-range size is rejected.
    pub fn from_sizes<I>(sizes: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut validated = sizes
            .into_iter()
            .map(validate_size)
            .collect::<Result<Vec<u32>, CatalogError>>()?;
        validated.sort_unstable_by(|a, b| b.cmp(a));
        validated.dedup();
        Ok(Self { sizes: validated })
    }

    pub fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    /// Owned copy handed to the calculator for one computation.
    pub fn snapshot(&self) -> Vec<u32> {
        self.sizes.clone()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Inserts `size` keeping descending order. Returns the validated size.
    pub fn add(&mut self, size: i64) -> Result<u32, CatalogError> {
        let size = validate_size(size)?;
        match self.sizes.binary_search_by(|probe| size.cmp(probe)) {
            Ok(_) => Err(CatalogError::AlreadyExists(size)),
            Err(index) => {
                self.sizes.insert(index, size);
                Ok(size)
            }
        }
    }

    pub fn remove(&mut self, size: u32) -> Result<(), CatalogError> {
        let index = self
            .sizes
            .iter()
            .position(|&s| s == size)
            .ok_or(CatalogError::NotFound(size))?;
        self.sizes.remove(index);
        Ok(())
    }
}

impl TryFrom<Vec<i64>> for PackSizeCatalog {
    type Error = CatalogError;

    fn try_from(sizes: Vec<i64>) -> Result<Self, Self::Error> {
        Self::from_sizes(sizes)
    }
}

impl From<PackSizeCatalog> for Vec<u32> {
    fn from(catalog: PackSizeCatalog) -> Self {
        catalog.sizes
    }
}

fn validate_size(size: i64) -> Result<u32, CatalogError> {
    match u32::try_from(size) {
        Ok(valid) if valid > 0 => Ok(valid),
        _ => Err(CatalogError::InvalidSize(size)),
    }
}
