use axum::{Server, http::HeaderValue, middleware::from_fn};
use diesel::{
    PgConnection,
    r2d2::{self, ConnectionManager as DbConnectionManager},
};
use roadmap_backend::{AppState, config::Config, db::DbPool, init_tracing, middleware, routes};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() {
    let config = Config::from_env().expect("Invalid configuration");
    init_tracing(&config);

    let database = config.database();
    let manager = DbConnectionManager::<PgConnection>::new(&database.url);
    let db: DbPool = r2d2::Pool::builder()
        .max_size(database.max_connections)
        .min_idle(Some(database.min_connections))
        .build(manager)
        .expect("Failed to create database connection pool");

    let redis =
        redis::Client::open(config.redis_url.clone()).expect("Failed to create Redis client");

    let address = config.server_address();
    let server = config.server();

    let cors = if server.cors_origins.iter().any(|origin| origin == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = server
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let state = Arc::new(AppState::new(db, redis, config));

    let app = routes::create_router(state)
        .layer(cors)
        .layer(from_fn(middleware::logger::logger));

    tracing::info!("Server running at http://{}", address);
    Server::bind(&address.parse().expect("Invalid server address"))
        .serve(app.into_make_service())
        .await
        .expect("Server error");
}
