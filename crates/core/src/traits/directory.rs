//! Place directory trait and an in-memory implementation

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::place::{BusinessRecord, PlaceFilter, PlaceRecord};
use crate::Result;

/// Data-access interface for the two source collections
///
/// Implementations:
/// - `StaticDirectory` - Vec-backed fixture store for tests and embedders
/// - application-provided adapters over a remote backend
///
/// # Example
///
/// ```ignore
/// let directory: Arc<dyn PlaceDirectory> = Arc::new(StaticDirectory::new());
/// let filter = PlaceFilter::by_category("restaurants");
/// let places = directory.list_places(&filter).await?;
/// ```
#[async_trait]
pub trait PlaceDirectory: Send + Sync + 'static {
    /// List place records, optionally restricted by category
    async fn list_places(&self, filter: &PlaceFilter) -> Result<Vec<PlaceRecord>>;

    /// List business records, optionally restricted by category
    async fn list_businesses(&self, filter: &PlaceFilter) -> Result<Vec<BusinessRecord>>;

    /// Get directory name for logging
    fn name(&self) -> &str {
        "directory"
    }
}

/// Vec-backed directory for tests and fixture data sets
#[derive(Default)]
pub struct StaticDirectory {
    places: RwLock<Vec<PlaceRecord>>,
    businesses: RwLock<Vec<BusinessRecord>>,
}

impl StaticDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a place record
    pub fn add_place(&self, record: PlaceRecord) {
        self.places.write().push(record);
    }

    /// Add a business record
    pub fn add_business(&self, record: BusinessRecord) {
        self.businesses.write().push(record);
    }

    /// Number of records across both collections
    pub fn len(&self) -> usize {
        self.places.read().len() + self.businesses.read().len()
    }

    /// Whether both collections are empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn category_matches(candidate: &str, filter: &PlaceFilter) -> bool {
    match &filter.category {
        Some(category) => candidate.eq_ignore_ascii_case(category),
        None => true,
    }
}

#[async_trait]
impl PlaceDirectory for StaticDirectory {
    async fn list_places(&self, filter: &PlaceFilter) -> Result<Vec<PlaceRecord>> {
        Ok(self
            .places
            .read()
            .iter()
            .filter(|r| category_matches(&r.category, filter))
            .cloned()
            .collect())
    }

    async fn list_businesses(&self, filter: &PlaceFilter) -> Result<Vec<BusinessRecord>> {
        Ok(self
            .businesses
            .read()
            .iter()
            .filter(|r| category_matches(&r.category, filter))
            .cloned()
            .collect())
    }

    fn name(&self) -> &str {
        "static"
    }
}
