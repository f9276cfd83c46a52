use chrono::Utc;
use mimalloc::MiMalloc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use sms_portal::auth::password::prime_dummy_hash;
use sms_portal::config::Config;
use sms_portal::db::{self, SessionStorage};
use sms_portal::{AppState, SessionSettings, portal_router};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        port = cfg.port,
        loglevel = %cfg.loglevel,
        session_ttl_hours = cfg.session_ttl_hours,
        insecure_cookie = cfg.insecure_cookie
    );

    let pool = db::connect(&cfg.database_url, cfg.max_connections).await?;
    if let Err(e) = db::init_schema(&pool).await {
        error!(error = %e, "schema migration failed");
        return Err(e.into());
    }

    if !tokio::task::spawn_blocking(prime_dummy_hash).await? {
        warn!("failed to build dummy password hash; unknown-email signins will answer faster");
    }

    spawn_session_purge(SessionStorage::new(pool.clone()));

    let settings = SessionSettings {
        ttl: cfg.session_ttl(),
        secure_cookie: !cfg.insecure_cookie,
    };
    let state = AppState::new(pool, cfg.cookie_key(), settings);
    let app = portal_router(state);

    let addr = format!("0.0.0.0:{}", cfg.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("HTTP server listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

fn spawn_session_purge(sessions: SessionStorage) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_PURGE_INTERVAL);
        loop {
            ticker.tick().await;
            match sessions.purge_expired(Utc::now()).await {
                Ok(0) => {}
                Ok(purged) => info!(purged, "expired sessions removed"),
                Err(e) => warn!(error = %e, "session purge failed"),
            }
        }
    });
}
