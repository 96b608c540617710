use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, ServerConfig, StoreBackend};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use service::users::{repo::{MemoryUserStore, SeaOrmUserStore}, UserService, UserStore};

use crate::{routes, state::AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

/// Construct the store selected by configuration; migrates the schema when asked.
pub async fn build_store(cfg: &AppConfig) -> anyhow::Result<Arc<dyn UserStore>> {
    match cfg.store.backend {
        StoreBackend::Memory => {
            info!("using in-memory user store");
            Ok(Arc::new(MemoryUserStore::new()))
        }
        StoreBackend::Database => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            if cfg.database.auto_migrate {
                migration::Migrator::up(&db, None).await?;
                info!("database schema up to date");
            } else {
                warn!("auto_migrate disabled; assuming users table exists");
            }
            Ok(Arc::new(SeaOrmUserStore::new(db)))
        }
    }
}

/// Build the router for a configuration without binding a socket.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let store = build_store(cfg).await?;
    let policy = cfg.store.effective_update_policy();
    info!(backend = ?cfg.store.backend, ?policy, "user service configured");
    let state = AppState::new(UserService::new(store, policy));
    Ok(routes::build_router(state, build_cors()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting users api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
