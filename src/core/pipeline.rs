use crate::core::categories::Categories;
use crate::core::hours::cleanse_time_range;
use crate::domain::model::{BusinessHours, BusinessListing, DayShifts, RawListingRow, DAYS_OF_WEEK};
use crate::domain::ports::{ConfigProvider, ListingStore, Pipeline, TabularSource};
use crate::utils::error::Result;

/// The listings ingest pipeline: raw CSV rows in, normalized businesses
/// with hours and categories out, written through the store port.
pub struct IngestPipeline<T: TabularSource, S: ListingStore, C: ConfigProvider> {
    source: T,
    store: S,
    config: C,
}

impl<T: TabularSource, S: ListingStore, C: ConfigProvider> IngestPipeline<T, S, C> {
    pub fn new(source: T, store: S, config: C) -> Self {
        Self {
            source,
            store,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<T: TabularSource, S: ListingStore, C: ConfigProvider> Pipeline for IngestPipeline<T, S, C> {
    async fn extract(&self) -> Result<Vec<RawListingRow>> {
        tracing::debug!("Reading listing rows from: {}", self.config.input_path());
        let rows = self.source.fetch_rows().await?;
        tracing::debug!("Source produced {} rows", rows.len());
        Ok(rows)
    }

    async fn transform(&self, rows: Vec<RawListingRow>) -> Result<Vec<BusinessListing>> {
        let mut listings = Vec::with_capacity(rows.len());

        for row in rows {
            // each day cell is normalized independently of every other cell
            let hours = DAYS_OF_WEEK
                .iter()
                .map(|day| {
                    let pairs = cleanse_time_range(row.hours_for(day));
                    BusinessHours::from_shifts(day, &DayShifts::from_pairs(&pairs))
                })
                .collect();

            let categories = Categories::from_raw(row.categories.as_deref())
                .resolve(self.config.category_placeholder());

            listings.push(BusinessListing {
                business: row.business(),
                hours,
                categories,
            });
        }

        Ok(listings)
    }

    async fn load(&self, listings: Vec<BusinessListing>) -> Result<usize> {
        let mut loaded = 0;

        for listing in &listings {
            let business_id = self.store.insert_business(&listing.business).await?;

            for hours in &listing.hours {
                self.store.insert_business_hours(business_id, hours).await?;
            }

            self.store
                .insert_categories(business_id, &listing.categories)
                .await?;

            loaded += 1;
        }

        Ok(loaded)
    }
}
