use std::sync::Arc;

use crate::data::DataRegistry;

pub mod api;
pub mod routes;

/// Serve the registry until the listener fails.
pub async fn serve(bind_addr: &str, registry: Arc<DataRegistry>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!("warcry-data listening on http://{local_addr}");
    axum::serve(listener, routes::router(registry)).await
}

/// Blocking entry point for the CLI: runs [`serve`] on a fresh tokio runtime.
pub fn run_server(bind_addr: &str, registry: Arc<DataRegistry>) -> std::io::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve(bind_addr, registry))
}
