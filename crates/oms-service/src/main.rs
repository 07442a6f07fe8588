//! Main entry point for the OMS order-lifecycle service.
//!
//! This binary wires the storage, notification, processing and query
//! components together according to the loaded configuration and serves
//! the HTTP API until interrupted.

use clap::Parser;
use oms_config::Config;
use oms_core::{OrchestrationPipeline, UuidIdGenerator};
use oms_notify::implementations::channel::ChannelNotifier;
use oms_notify::implementations::log::LogNotifier;
use oms_notify::{NotificationService, NotifierInterface};
use oms_query::QueryService;
use oms_storage::implementations::memory::MemoryOrderStore;
use oms_storage::OrderStore;
use std::path::PathBuf;
use std::sync::Arc;

mod server;

/// Command-line arguments for the OMS service.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Path to configuration file
	#[arg(short, long, default_value = "config.toml")]
	config: PathBuf,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "info")]
	log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	// Initialize tracing with env filter
	use tracing_subscriber::{fmt, EnvFilter};

	let env_filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(args.log_level.clone()));

	fmt().with_env_filter(env_filter).with_target(true).init();

	tracing::info!("Started OMS service");

	let config_path = args
		.config
		.to_str()
		.ok_or("Configuration path is not valid UTF-8")?;
	let config = Config::from_file(config_path).await?;
	tracing::info!(
		storage = %config.storage.backend,
		notification = %config.notification.backend,
		"Loaded configuration"
	);

	let state = build_state(&config)?;
	server::start_server(&config.service, state).await?;

	tracing::info!("Stopped OMS service");
	Ok(())
}

/// Builds the shared application state from configured backends.
fn build_state(config: &Config) -> Result<server::AppState, Box<dyn std::error::Error>> {
	let store: Arc<dyn OrderStore> = match config.storage.backend.as_str() {
		"memory" => Arc::new(MemoryOrderStore::new()),
		other => return Err(format!("Unknown storage backend '{}'", other).into()),
	};

	let notifier: Arc<dyn NotifierInterface> = match config.notification.backend.as_str() {
		"log" => Arc::new(LogNotifier::new()),
		"channel" => Arc::new(ChannelNotifier::new(64)),
		other => return Err(format!("Unknown notification backend '{}'", other).into()),
	};
	let notifications = Arc::new(NotificationService::new(
		notifier,
		config.notification.topic.clone(),
	));

	let pipeline = Arc::new(OrchestrationPipeline::new(
		Arc::clone(&store),
		Arc::new(UuidIdGenerator::new()),
		notifications,
	));
	let query = Arc::new(QueryService::new(store));

	Ok(server::AppState { pipeline, query })
}
