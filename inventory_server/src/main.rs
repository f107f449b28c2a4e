//! Inventory server: loads configuration, connects to PostgreSQL and serves the API until
//! SIGINT, SIGTERM, SIGHUP or SIGQUIT.
//!
//! Run from repo root: `cargo run -p inventory-server -- --dev`

mod telemetry;

use clap::Parser;
use inventory_api::{app_router, connect_pool, AppConfig, AppState, NanoId};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

#[derive(Parser, Debug)]
#[command(version, about = "Inventory REST API server")]
struct Cli {
    /// Use DATABASE_URL_DEV, sqlx pool defaults and human-readable logs.
    #[arg(long)]
    dev: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = AppConfig::from_env(cli.dev)?;
    let _log_guard = telemetry::init(config.dev, config.log_dir.as_deref(), config.log_max_files)?;

    tracing::info!(
        app = %config.app_name,
        addr = %config.addr,
        dev = config.dev,
        miss_policy = ?config.miss_policy,
        "starting"
    );

    let pool = connect_pool(&config).await?;
    tracing::info!("database connected");

    let state = AppState::new(pool.clone(), Arc::new(NanoId), config.miss_policy);
    let app = app_router(state, config.body_limit);
    let listener = TcpListener::bind(&config.addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let mut server = tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async {
            stop_rx.await.ok();
        })
        .await
    });

    tokio::select! {
        _ = shutdown_signal() => {}
        result = &mut server => {
            tracing::error!("server exited before a shutdown signal");
            pool.close().await;
            result??;
            return Ok(());
        }
    }

    let _ = stop_tx.send(());
    match tokio::time::timeout(config.shutdown_grace, &mut server).await {
        Ok(Ok(Ok(()))) => tracing::info!("in-flight requests drained"),
        Ok(Ok(Err(err))) => tracing::error!(error = %err, "server error during shutdown"),
        Ok(Err(err)) => tracing::error!(error = %err, "server task failed"),
        Err(_) => {
            tracing::warn!(grace = ?config.shutdown_grace, "grace period elapsed, dropping connections");
            server.abort();
        }
    }
    pool.close().await;
    tracing::info!("stopped");
    Ok(())
}

/// Resolves on the first terminating signal. When the Unix handlers cannot be installed, only
/// ctrl-c is honored.
async fn shutdown_signal() {
    #[cfg(unix)]
    match TerminationSignals::install() {
        Ok(mut signals) => {
            let name = signals.recv().await;
            tracing::info!(signal = name, "shutting down");
            return;
        }
        Err(err) => tracing::error!(error = %err, "cannot listen for termination signals"),
    }

    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!(signal = "SIGINT", "shutting down"),
        Err(err) => {
            tracing::error!(error = %err, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    }
}

/// SIGINT, SIGTERM, SIGHUP and SIGQUIT all request a graceful drain.
#[cfg(unix)]
struct TerminationSignals {
    interrupt: Signal,
    terminate: Signal,
    hangup: Signal,
    quit: Signal,
}

#[cfg(unix)]
impl TerminationSignals {
    fn install() -> std::io::Result<Self> {
        Ok(TerminationSignals {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
            hangup: signal(SignalKind::hangup())?,
            quit: signal(SignalKind::quit())?,
        })
    }

    /// Name of the first signal received.
    async fn recv(&mut self) -> &'static str {
        tokio::select! {
            _ = self.interrupt.recv() => "SIGINT",
            _ = self.terminate.recv() => "SIGTERM",
            _ = self.hangup.recv() => "SIGHUP",
            _ = self.quit.recv() => "SIGQUIT",
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::process::Command;
    use std::time::Duration;

    fn raise(name: &str) {
        let status = Command::new("kill")
            .arg(format!("-{}", name))
            .arg(std::process::id().to_string())
            .status()
            .unwrap();
        assert!(status.success());
    }

    #[tokio::test]
    async fn hangup_and_quit_request_shutdown() {
        let mut signals = TerminationSignals::install().unwrap();

        raise("HUP");
        let first = tokio::time::timeout(Duration::from_secs(5), signals.recv())
            .await
            .unwrap();
        assert_eq!(first, "SIGHUP");

        raise("QUIT");
        let second = tokio::time::timeout(Duration::from_secs(5), signals.recv())
            .await
            .unwrap();
        assert_eq!(second, "SIGQUIT");
    }
}
