pub mod toml_config;

use crate::core::categories::DEFAULT_CATEGORY;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_path, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "listings-etl")]
#[command(about = "Ingests business-listing CSVs and answers simple listing queries")]
pub struct CliConfig {
    /// Path to the listings CSV file
    #[arg(long, default_value = "./data/sample.csv")]
    pub input_path: String,

    /// Optional TOML pipeline config; overrides the flags above
    #[arg(long)]
    pub config: Option<String>,

    /// Category assigned to rows without one
    #[arg(long, default_value = DEFAULT_CATEGORY)]
    pub category_placeholder: String,

    /// After ingest, print businesses in this category as JSON
    #[arg(long)]
    pub category: Option<String>,

    /// After ingest, print businesses with hours on this day as JSON
    #[arg(long)]
    pub day: Option<String>,

    /// After ingest, print businesses open right now as JSON
    #[arg(long)]
    pub open_now: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn category_placeholder(&self) -> &str {
        &self.category_placeholder
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_file_extensions(
            "input_path",
            std::slice::from_ref(&self.input_path),
            &["csv"],
        )?;
        validate_non_empty_string("category_placeholder", &self.category_placeholder)?;
        Ok(())
    }
}
