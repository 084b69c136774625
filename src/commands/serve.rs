//! Serve command - run the HTTP service

use std::path::Path;
use std::sync::Arc;

use receipt_points::adapters::InMemoryReceiptStore;
use receipt_points::config::ServiceConfig;
use receipt_points::core::ports::ReceiptStore;
use receipt_points::server::tiny_http as http_server;

/// Start the receipt points HTTP service
pub fn serve(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    workers: Option<usize>,
) -> anyhow::Result<()> {
    let config = ServiceConfig::load(config_path)?.with_overrides(host, port, workers);
    config.validate()?;

    let store: Arc<dyn ReceiptStore> = Arc::new(InMemoryReceiptStore::new());
    http_server::serve(&config.server, &store)
}
