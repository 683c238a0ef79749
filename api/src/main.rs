//! Bookshop API Server
//!
//! A small bookstore backend exposing REST endpoints for books, users, and
//! orders, backed by PostgreSQL. Uses hexagonal (ports & adapters)
//! architecture: domain entities and repository ports in the center,
//! SeaORM adapters and axum handlers at the edges.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{PostgresBookRepository, PostgresOrderRepository, PostgresUserRepository};
use app::{BookService, OrderService, UserService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<BookService<PostgresBookRepository>>,
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub order_service: Arc<
        OrderService<PostgresOrderRepository, PostgresBookRepository, PostgresUserRepository>,
    >,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bookshop_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting bookshop API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("Database connected");

    // Create adapters
    let book_repo = Arc::new(PostgresBookRepository::new(db.clone()));
    let user_repo = Arc::new(PostgresUserRepository::new(db.clone()));
    let order_repo = Arc::new(PostgresOrderRepository::new(db.clone()));

    // Create application services
    let book_service = Arc::new(BookService::new(book_repo.clone()));
    let user_service = Arc::new(UserService::new(user_repo.clone()));
    let order_service = Arc::new(OrderService::new(
        order_repo.clone(),
        book_repo.clone(),
        user_repo.clone(),
    ));

    let state = AppState {
        book_service,
        user_service,
        order_service,
    };

    // Rate limiting for the credential endpoints: 2 req/sec sustained,
    // burst of 5, keyed on the client socket address.
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .expect("Failed to build governor config"),
    );

    let rate_limited_routes = Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .layer(GovernorLayer {
            config: governor_config,
        });

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        // Book routes
        .route("/books", post(handlers::create_book).get(handlers::list_books))
        .route(
            "/books/:id",
            get(handlers::get_book)
                .put(handlers::update_book)
                .delete(handlers::delete_book),
        )
        // Order routes
        .route(
            "/orders",
            post(handlers::create_order).get(handlers::list_orders),
        )
        .route("/orders/:id", get(handlers::get_order))
        .route("/users/:user_id/orders", get(handlers::list_user_orders))
        // Auth routes
        .merge(rate_limited_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
