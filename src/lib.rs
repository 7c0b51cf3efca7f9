pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{csv_source::CsvSource, memory_store::MemoryStore};
pub use crate::config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::{etl::EtlEngine, pipeline::IngestPipeline, query::ListingQuery};
pub use crate::utils::error::{EtlError, Result};
