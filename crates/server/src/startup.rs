use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::student::{SeaOrmStudentRepository, StudentRepository};

use crate::{routes, state::AppState};

/// Any origin may call the API; the original client is a browser app on another port.
pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Host/port from config, else `SERVER_HOST`/`SERVER_PORT`, else 127.0.0.1:8080.
pub fn load_bind_addr(cfg: Option<&AppConfig>) -> anyhow::Result<SocketAddr> {
    let (host, port) = match cfg {
        Some(cfg) => (cfg.server.host.clone(), cfg.server.port),
        None => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

async fn connect(cfg: Option<&AppConfig>) -> anyhow::Result<DatabaseConnection> {
    match cfg {
        Some(cfg) => models::db::connect_with_config(&cfg.database).await,
        None => models::db::connect().await,
    }
}

/// Wire the SeaORM repository into the router.
pub fn build_app(db: DatabaseConnection) -> Router {
    let repo: Arc<dyn StudentRepository> = Arc::new(SeaOrmStudentRepository::new(db));
    routes::build_router(AppState::new(repo), build_cors())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
    }
}

/// Public entry: connect, migrate, build the app and serve until Ctrl+C.
pub async fn run(cfg: Option<AppConfig>) -> anyhow::Result<()> {
    let db = connect(cfg.as_ref()).await?;
    migration::Migrator::up(&db, None).await?;
    info!("database schema up to date");

    let app = build_app(db);

    let addr = load_bind_addr(cfg.as_ref())?;
    info!(%addr, "starting student registry");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
