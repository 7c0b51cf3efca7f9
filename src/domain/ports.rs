use crate::domain::model::{Business, BusinessHours, BusinessListing, RawListingRow};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Supplies raw listing rows; the pipeline does not care how they are loaded.
pub trait TabularSource: Send + Sync {
    fn fetch_rows(&self)
        -> impl std::future::Future<Output = Result<Vec<RawListingRow>>> + Send;
}

/// Persistence sink and read surface for normalized listings.
///
/// Per-row write ordering is business first, then the seven day-shift
/// records, then categories. Writing hours or categories for an unknown
/// business id fails with a not-found error.
pub trait ListingStore: Send + Sync {
    fn insert_business(
        &self,
        business: &Business,
    ) -> impl std::future::Future<Output = Result<i64>> + Send;

    fn insert_business_hours(
        &self,
        business_id: i64,
        hours: &BusinessHours,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    fn insert_categories(
        &self,
        business_id: i64,
        categories: &[String],
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    fn listings(&self) -> impl std::future::Future<Output = Result<Vec<BusinessListing>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn category_placeholder(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RawListingRow>>;
    async fn transform(&self, rows: Vec<RawListingRow>) -> Result<Vec<BusinessListing>>;
    async fn load(&self, listings: Vec<BusinessListing>) -> Result<usize>;
}
