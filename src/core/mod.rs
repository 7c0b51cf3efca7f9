pub mod categories;
pub mod etl;
pub mod hours;
pub mod pipeline;
pub mod query;

pub use crate::domain::model::{
    Business, BusinessHours, BusinessListing, DayShifts, RawListingRow, ShiftPair,
};
pub use crate::domain::ports::{ConfigProvider, ListingStore, Pipeline, TabularSource};
pub use crate::utils::error::Result;
