use mllab_client::config::Config;
use mllab_client::lab_api::lab_client::{LabApiTrait, LabClient};
use tracing::{error, info};
use tracing_appender::rolling;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt};

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_file("config.toml").or_else(|e| {
        println!("Config file not found. Creating example config.toml...");
        Config::save_example("config.toml")?;
        println!("Please edit config.toml with your settings and restart the application.");
        Err(e)
    })?;

    let info_file = rolling::daily(&config.logging.directory, &config.logging.info_file);

    let info_layer = fmt::layer()
        .with_writer(info_file)
        .with_ansi(false)
        .with_filter(tracing_subscriber::filter::LevelFilter::INFO);

    let console_layer = fmt::layer()
        .pretty()
        .with_filter(EnvFilter::new(&config.logging.console_level));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(info_layer)
        .init();

    let project = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "default".to_string());

    let client = LabClient::new(
        &config.lab.base_url,
        &config.lab.api_token,
        config.lab.timeout_seconds,
    )?;

    let response = client.list_lab_events(&project).await?;

    if let Some(errors) = &response.errors {
        error!(
            "Listing events for {} failed: code {:?}, message {:?}",
            project, errors.code, errors.message
        );
        return Ok(());
    }

    let events = response.data.unwrap_or_default();
    info!("Fetched {} lab events for project {}", events.len(), project);
    if let Some(metadata) = &response.metadata {
        info!(
            "Page {:?} of {:?} ({:?} items total)",
            metadata.page, metadata.page_count, metadata.item_count
        );
    }
    for event in &events {
        info!(
            "{} [{}] at {:?}",
            event.name.as_deref().unwrap_or("<unnamed>"),
            event.event_type.as_deref().unwrap_or("unknown"),
            event.timestamp
        );
    }

    Ok(())
}
