//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors use `shared::error::AppError`.
//!
//! The process refuses to start without `SESSION_SECRET`: tokens signed
//! with a known default would make every deployment forgeable.

use auth::{AuthConfig, PgAdminRepository, auth_router, middleware::admin_gate};
use axum::{
    Router, http,
    http::{Method, header},
};
use content::{PgContentRepository, content_router, dashboard_router};
use content::presentation::ContentAppState;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use storage::R2Client;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use shared::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,content=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Session signing secret: no fallback, missing means no start
    let session_secret =
        env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in environment");

    let production = env::var("APP_ENV").map(|v| v == "production").unwrap_or(false);

    let auth_config = Arc::new(
        AuthConfig::new(session_secret.into_bytes(), production)?.with_bootstrap(
            env::var("BOOTSTRAP_ADMIN_EMAIL").ok(),
            env::var("BOOTSTRAP_ADMIN_PASSWORD").ok(),
        ),
    );

    // Object store (image cleanup on content delete). Optional: without it,
    // record deletion still works and orphaned objects accumulate.
    let object_store = match (
        env::var("R2_ENDPOINT"),
        env::var("R2_BUCKET"),
        env::var("R2_ACCESS_KEY_ID"),
        env::var("R2_SECRET_ACCESS_KEY"),
    ) {
        (Ok(endpoint), Ok(bucket), Ok(access_key), Ok(secret_key)) => {
            Some(Arc::new(R2Client::new(endpoint, bucket, access_key, secret_key)?))
        }
        _ => {
            tracing::warn!("Object store not configured; deletes will leave objects behind");
            None
        }
    };

    let assets_base = env::var("PUBLIC_ASSETS_BASE").ok();

    let content_state = ContentAppState {
        repo: Arc::new(PgContentRepository::new(pool.clone())),
        store: object_store,
        assets_base,
        auth: auth_config.clone(),
    };

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Admin SPA, served behind the authorization gate
    let admin_dir = env::var("ADMIN_ASSETS_DIR").unwrap_or_else(|_| "admin-dist".to_string());
    let admin_spa = ServeDir::new(&admin_dir)
        .not_found_service(ServeFile::new(format!("{admin_dir}/index.html")));

    // Build router
    let app = Router::new()
        .nest(
            "/api/auth",
            auth_router(PgAdminRepository::new(pool.clone()), auth_config.clone()),
        )
        .nest("/api/content", content_router(content_state.clone()))
        .nest("/api/dashboard", dashboard_router(content_state))
        .nest_service("/admin", admin_spa)
        .layer(axum::middleware::from_fn_with_state(
            auth_config.clone(),
            admin_gate,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
