use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use image_catalog::application::{CatalogSnapshot, ImageCatalogStore};
use image_catalog::infrastructure::{AppConfig, CliArgs, PicsumClient, StorageManager};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config() -> Result<(AppConfig, CliArgs)> {
    let args = CliArgs::parse();

    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(&args);

    Ok((config, args))
}

fn print_results(snapshot: &CatalogSnapshot) {
    if !snapshot.search_query.is_empty() {
        println!("Search: \"{}\"", snapshot.search_query);
    }

    for image in &snapshot.images {
        println!(
            "{:>6}  {:<28} {:>5}x{:<5} {}",
            image.id.as_str(), image.author, image.width, image.height, image.download_url
        );
    }

    println!(
        "{} images (page {})",
        snapshot.result_count(),
        snapshot.current_page
    );

    if let Some(error) = &snapshot.error {
        eprintln!("{error}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let (config, args) = load_config()?;
    init_logging(&config)?;

    info!(version = image_catalog::VERSION, "Starting image catalog");

    let client = PicsumClient::with_base_url(
        config.catalog.base_url.clone(),
        config.catalog.request_timeout(),
    )?;
    let store = ImageCatalogStore::new(Arc::new(client), config.catalog.settings());

    store.fetch_current_page().await;
    for _ in 0..args.pages {
        store.load_more().await;
    }
    if let Some(query) = &args.search {
        store.search(query).await;
    }

    print_results(&store.snapshot());
    info!(stats = %store.cache_stats(), "Done");

    Ok(())
}
