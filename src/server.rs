//! HTTP host for the GraphQL schema

use crate::config::ServerConfig;
use crate::error::{PokedexError, Result};
use crate::schema::PokedexSchema;

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use std::net::{IpAddr, SocketAddr};
use tower_http::cors::CorsLayer;

/// Router exposing `/graphql` (POST queries, GET playground) and `/health`
pub fn router(schema: PokedexSchema) -> Router {
    Router::new()
        .route("/graphql", post(graphql_handler).get(graphql_playground))
        .route("/health", get(health_check))
        .with_state(schema)
        .layer(CorsLayer::permissive())
}

/// Bind to the configured address and serve until Ctrl+C
pub async fn serve(schema: PokedexSchema, config: &ServerConfig) -> Result<()> {
    let ip: IpAddr = config.bind.parse().map_err(|_| {
        PokedexError::Config(format!("Bind address '{}' is not a valid IP address", config.bind))
    })?;
    let addr = SocketAddr::new(ip, config.port);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        PokedexError::Config(format!(
            "Failed to bind to {}: {}. Port may be in use.",
            addr, e
        ))
    })?;

    tracing::info!("🚀 GraphQL server running on http://{}", addr);
    tracing::info!("📊 Playground: http://{}/graphql", addr);
    tracing::info!("💡 Press Ctrl+C to stop the server");

    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| PokedexError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

async fn graphql_handler(
    State(schema): State<PokedexSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

async fn graphql_playground() -> Html<String> {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

async fn health_check() -> &'static str {
    "OK"
}
