use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use gradmatch::config::{LoggingSettings, Settings};
use gradmatch::routes::{self, handle_json_payload_error, rankings::AppState};
use gradmatch::services::{load_catalog, RemoteCatalogClient};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // GRADMATCH_LOG takes precedence over the configured level
    let filter = EnvFilter::try_from_env("GRADMATCH_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let loaded = Settings::load();
    let logging = loaded
        .as_ref()
        .map(|settings| settings.logging.clone())
        .unwrap_or_default();
    init_logging(&logging);

    let settings = loaded.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Starting gradmatch scoring service...");

    let catalog = load_catalog(&settings.catalog.path).map_err(|e| {
        error!("Failed to load catalog {}: {}", settings.catalog.path, e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;

    if catalog.is_empty() {
        warn!("Catalog {} contains no institutions", settings.catalog.path);
    }
    info!("Loaded {} institutions from {}", catalog.len(), settings.catalog.path);

    let remote = match &settings.catalog.remote_endpoint {
        Some(endpoint) => {
            let client = RemoteCatalogClient::new(endpoint.clone(), settings.catalog.timeout())
                .map_err(|e| {
                    error!("Failed to create catalog client: {}", e);
                    std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
                })?;
            info!("Remote catalog enabled at {}", endpoint);
            Some(Arc::new(client))
        }
        None => {
            info!("No remote catalog configured, search uses the local dataset");
            None
        }
    };

    let app_state = AppState {
        catalog: Arc::new(catalog),
        remote,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
