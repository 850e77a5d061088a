pub mod api;

pub use api::{ build_router, AppState };

use std::error::Error;
use tokio::net::TcpListener;
use log::info;

pub struct Server {
    addr: String,
    state: AppState,
    cors_origins: Vec<String>,
}

impl Server {
    pub fn new(addr: String, state: AppState, cors_origins: Vec<String>) -> Self {
        Self { addr, state, cors_origins }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let app = build_router(self.state.clone(), &self.cors_origins)?;

        let listener = TcpListener::bind(&self.addr)
            .await
            .map_err(|e| format!("Failed to bind HTTP server to {}: {}", self.addr, e))?;
        info!("HTTP server listening on: http://{}", listener.local_addr()?);

        axum::serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}
