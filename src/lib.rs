pub mod analytics;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod schema;
pub mod services;
pub mod validation;

use std::sync::Arc;

use crate::analytics::Tracker;
use crate::cache::{FormStateStore, OtpStore};
use crate::config::Config;
use crate::db::DbPool;
use crate::middleware::auth::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub redis: redis::Client,
    pub config: Arc<Config>,
    pub auth_service: AuthService,
    pub tracker: Tracker,
    pub form_state: FormStateStore,
    pub otp: OtpStore,
}

impl AppState {
    pub fn new(db: DbPool, redis: redis::Client, config: Config) -> Self {
        let auth_service = AuthService::new(config.auth());
        let tracker = Tracker::from_config(&config, redis.clone());
        let form_state = FormStateStore::new(redis.clone());
        let otp = OtpStore::new(redis.clone(), config.jwt_secret.clone(), config.otp_code_ttl);
        Self {
            db,
            redis,
            config: Arc::new(config),
            auth_service,
            tracker,
            form_state,
            otp,
        }
    }
}

pub fn init_tracing(config: &Config) {
    let logging = config.logging();

    let level = match logging.level.as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    };

    match logging.format.as_str() {
        "json" => {
            tracing_subscriber::fmt().json().with_max_level(level).init();
        }
        _ => {
            tracing_subscriber::fmt().with_max_level(level).init();
        }
    }
}
