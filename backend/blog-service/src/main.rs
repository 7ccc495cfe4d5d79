use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use blog_service::auth::JwtKeys;
use blog_service::config::StoreBackend;
use blog_service::db::{self, InMemoryStore, PgStore, SharedStore};
use blog_service::{handlers, metrics, middleware};
use chrono::Utc;
use serde::Serialize;
use std::io;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum ComponentStatus {
    Healthy,
    Unhealthy,
}

#[derive(Serialize)]
struct ReadinessResponse {
    ready: bool,
    status: ComponentStatus,
    store: &'static str,
    message: String,
    latency_ms: u64,
    timestamp: String,
}

struct HealthState {
    store: SharedStore,
    backend: StoreBackend,
}

impl HealthState {
    fn backend_name(&self) -> &'static str {
        match self.backend {
            StoreBackend::Postgres => "postgres",
            StoreBackend::Memory => "memory",
        }
    }
}

async fn health_summary(state: web::Data<HealthState>) -> HttpResponse {
    match state.store.ping().await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "blog-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("Store check failed: {}", e),
            "service": "blog-service"
        })),
    }
}

async fn readiness_summary(state: web::Data<HealthState>) -> HttpResponse {
    let start = Instant::now();
    let result = state.store.ping().await;
    let latency_ms = start.elapsed().as_millis() as u64;

    let (ready, status, message) = match result {
        Ok(()) => (true, ComponentStatus::Healthy, "Store ping successful".to_string()),
        Err(e) => (
            false,
            ComponentStatus::Unhealthy,
            format!("Store ping failed: {}", e),
        ),
    };

    let response = ReadinessResponse {
        ready,
        status,
        store: state.backend_name(),
        message,
        latency_ms,
        timestamp: Utc::now().to_rfc3339(),
    };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = terminate.recv() => {},
                }
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

/// Blog Service
///
/// # Routes
///
/// - `/posts/*` - posts, upvotes and comments (bearer token required)
/// - `/users/{username}/posts` - posts by author (bearer token required)
/// - `/health`, `/health/ready`, `/health/live`, `/metrics`
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match blog_service::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting blog-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let store: SharedStore = match config.store {
        StoreBackend::Postgres => {
            let pool = db::init_pool(&config.database).await.map_err(|e| {
                tracing::error!("Database initialization failed: {}", e);
                io::Error::new(
                    io::ErrorKind::Other,
                    format!("Failed to initialize database: {e}"),
                )
            })?;
            tracing::info!("Connected to PostgreSQL");
            Arc::new(PgStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on restart");
            Arc::new(InMemoryStore::new())
        }
    };

    let jwt_keys = web::Data::new(JwtKeys::from_secret(
        config.auth.jwt_secret.as_bytes(),
        config.auth.leeway_secs,
    ));
    let store_data = web::Data::new(store.clone());
    let health_state = web::Data::new(HealthState {
        store,
        backend: config.store,
    });

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    let allowed_origins = config.cors.allowed_origins.clone();
    let server = HttpServer::new(move || {
        let mut cors = Cors::default();
        for origin in allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else if !origin.is_empty() {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(store_data.clone())
            .app_data(jwt_keys.clone())
            .app_data(health_state.clone())
            .wrap(cors)
            .wrap(middleware::MetricsMiddleware)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/metrics", web::get().to(metrics::serve_metrics))
            .route("/health", web::get().to(health_summary))
            .route("/health/ready", web::get().to(readiness_summary))
            .route("/health/live", web::get().to(liveness_check))
            .configure(handlers::configure)
    })
    .bind(&bind_address)?
    .run();

    let server_handle = server.handle();
    let mut server_task = tokio::spawn(server);

    let joined = tokio::select! {
        joined = &mut server_task => joined,
        _ = shutdown_signal() => {
            tracing::info!("Shutdown signal received");
            server_handle.stop(true).await;
            server_task.await
        }
    };

    let result = match joined {
        Ok(result) => result,
        Err(e) => Err(io::Error::new(io::ErrorKind::Other, e.to_string())),
    };

    if let Err(e) = &result {
        tracing::error!("HTTP server exited with error: {}", e);
    }
    tracing::info!("Blog-service shutting down");
    result
}
