use crate::domain::model::{Business, BusinessHours, BusinessListing};
use crate::domain::ports::ListingStore;
use crate::utils::error::{EtlError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory listing store. Businesses keep their insertion order so query
/// output is deterministic.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<StoreInner>>,
}

#[derive(Debug, Default)]
struct StoreInner {
    businesses: Vec<Business>,
    hours: HashMap<i64, Vec<BusinessHours>>,
    categories: HashMap<i64, Vec<String>>,
}

impl StoreInner {
    fn contains(&self, business_id: i64) -> bool {
        self.businesses.iter().any(|b| b.id == business_id)
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListingStore for MemoryStore {
    async fn insert_business(&self, business: &Business) -> Result<i64> {
        let mut inner = self.inner.lock().await;
        inner.businesses.push(business.clone());
        tracing::debug!(
            "Inserted business {}: {}, rating: {}",
            business.id,
            business.timezone,
            business.rating
        );
        Ok(business.id)
    }

    async fn insert_business_hours(&self, business_id: i64, hours: &BusinessHours) -> Result<()> {
        let mut inner = self.inner.lock().await;
        if !inner.contains(business_id) {
            tracing::error!("Business with ID {} does not exist", business_id);
            return Err(EtlError::BusinessNotFound { id: business_id });
        }
        inner.hours.entry(business_id).or_default().push(hours.clone());
        Ok(())
    }

    async fn insert_categories(&self, business_id: i64, categories: &[String]) -> Result<()> {
        let mut inner = self.inner.lock().await;
        if !inner.contains(business_id) {
            tracing::error!("Business with ID {} does not exist", business_id);
            return Err(EtlError::BusinessNotFound { id: business_id });
        }
        inner
            .categories
            .entry(business_id)
            .or_default()
            .extend(categories.iter().cloned());
        Ok(())
    }

    async fn listings(&self) -> Result<Vec<BusinessListing>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .businesses
            .iter()
            .map(|business| BusinessListing {
                business: business.clone(),
                hours: inner.hours.get(&business.id).cloned().unwrap_or_default(),
                categories: inner
                    .categories
                    .get(&business.id)
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect())
    }
}
