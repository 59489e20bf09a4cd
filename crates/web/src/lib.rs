pub use crate::common::RouteResult;

use std::{env, net::SocketAddr};

use axum::{extract::FromRef, Router};
use database::PgDatabase;
use providers::ProviderClient;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod common;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Clone, FromRef)]
pub struct WebState {
    pub providers: ProviderClient,
    /// Journey history; `None` when no database is configured.
    pub database: Option<PgDatabase>,
}

#[derive(Debug, Clone)]
pub struct WebConfig {
    pub bind_address: SocketAddr,
}

impl WebConfig {
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        let bind_address = env::var("WEB_BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_owned())
            .parse()?;
        Ok(Self { bind_address })
    }
}

pub fn router(state: WebState) -> Router {
    Router::new()
        .nest_service("/api", api::routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn start_web_server(state: WebState, config: WebConfig) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.bind_address).await?;
    log::info!("listening on {}", config.bind_address);
    axum::serve(listener, router(state).into_make_service()).await?;

    Ok(())
}
