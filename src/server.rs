//! HTTP server assembly
//!
//! Builds the shared store handle once, wires the redirect route for every
//! method, and attaches the CORS layer that answers the dashboard's
//! cross-origin preflights.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Compress, web};
use anyhow::Result;
use tracing::info;

use crate::analytics::{ClickRecorder, ClickSink};
use crate::config::{CorsConfig, get_config};
use crate::services::redirect_routes;
use crate::storage::{LinkStore, SeaOrmStore};

/// CORS for the dashboard's preview tooling: any origin may follow a short
/// link, and preflights must succeed with the allow-listed request headers.
pub fn build_cors_middleware(cors_config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .send_wildcard()
        .max_age(cors_config.max_age as usize);

    for header in &cors_config.allowed_headers {
        cors = cors.allowed_header(header.as_str());
    }

    cors
}

/// Run the redirect service.
///
/// The store handle is constructed once here and reused across all requests;
/// the handler only ever reads through it.
pub async fn run_server() -> Result<()> {
    let config = get_config();

    let store = Arc::new(SeaOrmStore::new(&config.database.url).await?);
    let link_store: Arc<dyn LinkStore> = store.clone();
    let click_sink: Arc<dyn ClickSink> = store;
    let recorder = Arc::new(ClickRecorder::new(click_sink));

    let cors_config = config.cors.clone();

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting redirect service at http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors_middleware(&cors_config))
            .wrap(Compress::default())
            .app_data(web::Data::new(link_store.clone()))
            .app_data(web::Data::new(recorder.clone()))
            .service(redirect_routes())
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .bind(bind_address)?
    .run()
    .await?;

    Ok(())
}
