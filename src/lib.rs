//! CitaSalud backend: a REST service for scheduling medical appointments.
//!
//! The service manages three entities stored in PostgreSQL:
//!
//! - **Doctores**: medical professionals, keyed by `id_profesional`
//! - **Pacientes**: patients, keyed by their national ID number
//! - **Citas**: appointments linking one doctor and one patient at an
//!   instant, keyed by the full (fecha_hora, doctor, paciente) triple
//!
//! # Architecture
//!
//! Requests flow through three layers:
//!
//! 1. **API layer** ([`api`]): axum handlers and wire models
//! 2. **Database layer** ([`db`]): repositories implementing the
//!    [`db::handlers::Repository`] CRUD contract over `sqlx`
//! 3. **PostgreSQL**: schema constraints (primary keys, foreign keys) are the
//!    source of truth for integrity; violations surface as typed errors
//!
//! # Usage
//!
//! ```no_run
//! use citasalud::{config::Config, Application};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::default();
//! let app = Application::new(config).await?;
//! app.serve(async {
//!     tokio::signal::ctrl_c().await.ok();
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod telemetry;
#[cfg(test)]
pub mod test_utils;
pub mod types;

use axum::{
    extract::State,
    http::HeaderValue,
    routing::get,
    Json, Router,
};
pub use config::Config;
use serde_json::json;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info, instrument};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

/// Shared state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,
    /// Application configuration
    pub config: Config,
}

/// Database migrator for the embedded migration files.
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Connect to PostgreSQL and bring the schema up to date.
pub async fn setup_database(config: &Config) -> anyhow::Result<PgPool> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;

    migrator().run(&pool).await?;

    Ok(pool)
}

fn build_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    if config.cors.allowed_origins.iter().any(|origin| origin == "*") {
        return Ok(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any));
    }

    let origins = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| anyhow::anyhow!("invalid CORS origin {origin:?}: {e}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new().allow_origin(origins).allow_methods(Any).allow_headers(Any))
}

/// Liveness probe. Confirms the database answers before reporting healthy.
async fn healthz(State(state): State<AppState>) -> errors::Result<Json<serde_json::Value>> {
    sqlx::query("SELECT 1")
        .execute(&state.db)
        .await
        .map_err(|e| errors::Error::Database(e.into()))?;

    Ok(Json(json!({ "status": "ok" })))
}

/// Build the HTTP router with all routes, middleware, and documentation.
#[instrument(skip_all)]
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let cors = build_cors_layer(&state.config)?;

    let router = Router::new()
        .route("/healthz", get(healthz))
        .route("/doctores", get(api::handlers::doctores::list_doctores).post(api::handlers::doctores::create_doctor))
        .route(
            "/doctores/{id}",
            get(api::handlers::doctores::get_doctor)
                .put(api::handlers::doctores::update_doctor)
                .delete(api::handlers::doctores::delete_doctor),
        )
        .route("/doctores/{id}/citas", get(api::handlers::doctores::get_doctor_citas))
        .route(
            "/pacientes",
            get(api::handlers::pacientes::list_pacientes).post(api::handlers::pacientes::create_paciente),
        )
        .route(
            "/pacientes/{id}",
            get(api::handlers::pacientes::get_paciente)
                .put(api::handlers::pacientes::update_paciente)
                .delete(api::handlers::pacientes::delete_paciente),
        )
        .route("/pacientes/{id}/citas", get(api::handlers::pacientes::get_paciente_citas))
        .route(
            "/citas",
            get(api::handlers::citas::list_citas)
                .post(api::handlers::citas::create_cita)
                .put(api::handlers::citas::update_cita)
                .delete(api::handlers::citas::delete_cita),
        )
        .route("/citas/uno", get(api::handlers::citas::get_cita))
        .route("/api-docs/openapi.json", get(|| async { Json(api::ApiDoc::openapi()) }))
        .merge(Scalar::with_url("/docs", api::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    Ok(router)
}

/// The assembled service: router, configuration, and database pool.
///
/// Construction ([`Application::new`]) connects to the database and runs
/// migrations; [`Application::serve`] binds a TCP port and handles requests
/// until the shutdown future resolves.
pub struct Application {
    router: Router,
    config: Config,
    pool: PgPool,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        Self::new_with_pool(config, None).await
    }

    /// Like [`Application::new`], but reuse an existing pool (for tests).
    pub async fn new_with_pool(config: Config, pool: Option<PgPool>) -> anyhow::Result<Self> {
        debug!("Starting citasalud with configuration: {:#?}", config);

        let pool = match pool {
            Some(pool) => {
                migrator().run(&pool).await?;
                pool
            }
            None => setup_database(&config).await?,
        };

        let state = AppState {
            db: pool.clone(),
            config: config.clone(),
        };
        let router = build_router(state)?;

        Ok(Self { router, config, pool })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("CitaSalud listening on http://{bind_addr}");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}
