mod configuration;
mod controllers;
mod data;

use std::future::Future;
use std::net::SocketAddr;
use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use crate::configuration::Configuration;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into())
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let configuration = Configuration::load()?;

    let port = configuration.port();
    serve(configuration.listen_address, shutdown_signal(), |_| {
        println!("{}", startup_message(port));
    })
    .await?;

    tracing::info!("Server shut down");
    Ok(())
}

fn startup_message(port: u16) -> String {
    format!("Server listening on port {}", port)
}

/// Binds `addr` and serves the router until `shutdown` resolves.
/// `on_listening` receives the address actually bound.
async fn serve<F>(
    addr: SocketAddr,
    shutdown: F,
    on_listening: impl FnOnce(SocketAddr),
) -> eyre::Result<()>
where
    F: Future<Output = ()>,
{
    let server = axum::Server::try_bind(&addr)?
        .serve(controllers::router().into_make_service());

    let bound = server.local_addr();
    tracing::info!(%bound, "Accepting connections");
    on_listening(bound);

    server.with_graceful_shutdown(shutdown).await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Unable to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Unable to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
