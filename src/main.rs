use clap::Parser;
use listings_etl::domain::model::BusinessListing;
use listings_etl::domain::ports::ConfigProvider;
use listings_etl::utils::{logger, validation::Validate};
use listings_etl::{
    CliConfig, CsvSource, EtlEngine, IngestPipeline, ListingQuery, MemoryStore, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting listings-etl");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let store = MemoryStore::new();

    let loaded = match config.config.as_deref() {
        Some(path) => {
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            run_ingest(store.clone(), file_config).await?
        }
        None => run_ingest(store.clone(), config.clone()).await?,
    };

    tracing::info!("✅ Ingest completed: {} businesses", loaded);

    let query = ListingQuery::new(store);

    if let Some(category) = &config.category {
        let matches = query.by_category(category).await?;
        print_listings(&format!("category '{}'", category), &matches)?;
    }

    if let Some(day) = &config.day {
        let matches = query.by_day(day).await?;
        print_listings(&format!("day '{}'", day), &matches)?;
    }

    if config.open_now {
        let matches = query.open_now().await?;
        print_listings("open now", &matches)?;
    }

    Ok(())
}

async fn run_ingest<C: ConfigProvider>(store: MemoryStore, config: C) -> anyhow::Result<usize> {
    let source = CsvSource::new(config.input_path());
    let pipeline = IngestPipeline::new(source, store, config);
    Ok(EtlEngine::new(pipeline).run().await?)
}

fn print_listings(label: &str, listings: &[BusinessListing]) -> listings_etl::Result<()> {
    println!("{} businesses for {}:", listings.len(), label);
    println!("{}", serde_json::to_string_pretty(listings)?);
    Ok(())
}
