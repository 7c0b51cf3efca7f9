use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Drives a pipeline through its extract, transform and load stages.
pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Run the full pipeline; returns the number of businesses loaded.
    pub async fn run(&self) -> Result<usize> {
        tracing::info!("Starting listings ETL");

        let rows = self.pipeline.extract().await?;
        tracing::info!("Extracted {} rows", rows.len());

        let listings = self.pipeline.transform(rows).await?;
        tracing::info!("Transformed {} listings", listings.len());

        let loaded = self.pipeline.load(listings).await?;
        tracing::info!("Loaded {} businesses", loaded);

        Ok(loaded)
    }
}
