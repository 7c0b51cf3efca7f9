//! Read surface over the listing store: category, day-of-week and
//! open-now lookups. Businesses that are closed every day of the week are
//! excluded from all of them.

use crate::domain::model::{canonical_day, BusinessListing};
use crate::domain::ports::ListingStore;
use crate::utils::error::{EtlError, Result};
use chrono::Local;

pub struct ListingQuery<S: ListingStore> {
    store: S,
}

impl<S: ListingStore> ListingQuery<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Businesses carrying the given category (exact match).
    pub async fn by_category(&self, category: &str) -> Result<Vec<BusinessListing>> {
        tracing::info!("Fetching businesses for category: {}", category);

        let matches: Vec<BusinessListing> = self
            .store
            .listings()
            .await?
            .into_iter()
            .filter(|listing| listing.categories.iter().any(|c| c == category))
            .filter(|listing| !listing.is_fully_closed())
            .collect();

        if matches.is_empty() {
            tracing::warn!("No businesses found for category: {}", category);
        }

        Ok(matches)
    }

    /// Businesses with a persisted hours record for the given day.
    /// The day name is matched case-insensitively against the canonical
    /// English names; anything else is an error.
    pub async fn by_day(&self, day: &str) -> Result<Vec<BusinessListing>> {
        let day = canonical_day(day).ok_or_else(|| EtlError::InvalidDay(day.to_string()))?;
        tracing::info!("Fetching businesses open on: {}", day);

        let matches: Vec<BusinessListing> = self
            .store
            .listings()
            .await?
            .into_iter()
            .filter(|listing| listing.hours_on(day).is_some())
            .filter(|listing| !listing.is_fully_closed())
            .collect();

        if matches.is_empty() {
            tracing::warn!("No businesses found open on: {}", day);
        }

        Ok(matches)
    }

    /// Businesses whose record for `day` covers the given "HH:MM" time,
    /// inclusive on both shift bounds.
    pub async fn open_at(&self, day: &str, time: &str) -> Result<Vec<BusinessListing>> {
        let day = canonical_day(day).ok_or_else(|| EtlError::InvalidDay(day.to_string()))?;

        let matches: Vec<BusinessListing> = self
            .store
            .listings()
            .await?
            .into_iter()
            .filter(|listing| {
                listing
                    .hours_on(day)
                    .is_some_and(|hours| hours.covers(time))
            })
            .filter(|listing| !listing.is_fully_closed())
            .collect();

        Ok(matches)
    }

    /// Businesses open at the current local day and time.
    pub async fn open_now(&self) -> Result<Vec<BusinessListing>> {
        let now = Local::now();
        let day = now.format("%A").to_string();
        let time = now.format("%H:%M").to_string();
        tracing::info!("Fetching businesses open on {} at {}", day, time);

        self.open_at(&day, &time).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory_store::MemoryStore;
    use crate::domain::model::{Business, BusinessHours, DayShifts, ShiftPair, DAYS_OF_WEEK};
    use crate::domain::ports::ListingStore;

    fn business(id: i64) -> Business {
        Business {
            id,
            timezone: "Europe/London".to_string(),
            rating: 4.0,
            max_rating: 5.0,
            review_count: 25,
        }
    }

    /// Inserts a business open 09:00-17:00 on the given days and closed on
    /// the rest.
    async fn seed(store: &MemoryStore, id: i64, open_days: &[&str], categories: &[&str]) {
        store.insert_business(&business(id)).await.unwrap();
        for day in DAYS_OF_WEEK {
            let shifts = if open_days.contains(&day) {
                DayShifts::from_pairs(&[ShiftPair::new("09:00", "17:00")])
            } else {
                DayShifts::closed()
            };
            store
                .insert_business_hours(id, &BusinessHours::from_shifts(day, &shifts))
                .await
                .unwrap();
        }
        let categories: Vec<String> = categories.iter().map(|c| c.to_string()).collect();
        store.insert_categories(id, &categories).await.unwrap();
    }

    #[tokio::test]
    async fn test_by_category_exact_match_only() {
        let store = MemoryStore::new();
        seed(&store, 1, &["Monday"], &["Restaurants", "Bars"]).await;
        seed(&store, 2, &["Monday"], &["Bakeries"]).await;

        let query = ListingQuery::new(store);
        let matches = query.by_category("Restaurants").await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].business.id, 1);

        assert!(query.by_category("restaurants").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fully_closed_businesses_are_excluded() {
        let store = MemoryStore::new();
        seed(&store, 1, &[], &["Restaurants"]).await;
        seed(&store, 2, &["Tuesday"], &["Restaurants"]).await;

        let query = ListingQuery::new(store);
        let matches = query.by_category("Restaurants").await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].business.id, 2);

        let matches = query.by_day("tuesday").await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].business.id, 2);
    }

    #[tokio::test]
    async fn test_by_day_rejects_unknown_names() {
        let query = ListingQuery::new(MemoryStore::new());
        let err = query.by_day("Fredag").await.unwrap_err();
        assert!(matches!(err, EtlError::InvalidDay(_)));
    }

    #[tokio::test]
    async fn test_by_day_is_case_insensitive() {
        let store = MemoryStore::new();
        seed(&store, 1, &["Wednesday"], &["Gyms"]).await;

        let query = ListingQuery::new(store);
        assert_eq!(query.by_day("WEDNESDAY").await.unwrap().len(), 1);
        assert_eq!(query.by_day("wednesday").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_open_at_bounds_are_inclusive() {
        let store = MemoryStore::new();
        seed(&store, 1, &["Monday"], &["Gyms"]).await;

        let query = ListingQuery::new(store);
        assert_eq!(query.open_at("Monday", "09:00").await.unwrap().len(), 1);
        assert_eq!(query.open_at("Monday", "17:00").await.unwrap().len(), 1);
        assert_eq!(query.open_at("Monday", "12:00").await.unwrap().len(), 1);
        assert!(query.open_at("Monday", "08:59").await.unwrap().is_empty());
        assert!(query.open_at("Monday", "17:01").await.unwrap().is_empty());
        assert!(query.open_at("Tuesday", "12:00").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_open_at_checks_second_shift_too() {
        let store = MemoryStore::new();
        store.insert_business(&business(1)).await.unwrap();
        let shifts = DayShifts {
            shift1: ShiftPair::new("09:00", "12:00"),
            shift2: ShiftPair::new("13:00", "17:00"),
        };
        store
            .insert_business_hours(1, &BusinessHours::from_shifts("Monday", &shifts))
            .await
            .unwrap();
        store
            .insert_categories(1, &["Cafes".to_string()])
            .await
            .unwrap();

        let query = ListingQuery::new(store);
        assert_eq!(query.open_at("Monday", "13:30").await.unwrap().len(), 1);
        assert!(query.open_at("Monday", "12:30").await.unwrap().is_empty());
    }
}
