use anyhow::Result;
use tokio::signal;

/// Signals that can trigger shutdown.
enum ShutdownSignal {
    CtrlC,
    #[cfg(unix)]
    Sigterm,
}

/// Resolves once Ctrl+C or SIGTERM arrives.
///
/// If the handlers cannot be installed the error is logged and the future
/// never resolves, so the server keeps running until killed.
pub async fn shutdown_signal() {
    match wait_for_shutdown().await {
        Ok(ShutdownSignal::CtrlC) => tracing::info!("Received Ctrl+C, shutting down"),
        #[cfg(unix)]
        Ok(ShutdownSignal::Sigterm) => tracing::info!("Received SIGTERM, shutting down"),
        Err(e) => {
            tracing::error!(error = %e, "Signal handling failed");
            std::future::pending::<()>().await;
        }
    }
}

async fn wait_for_shutdown() -> Result<ShutdownSignal> {
    tokio::select! {
        result = wait_ctrl_c() => result,
        result = wait_sigterm() => result,
    }
}

async fn wait_ctrl_c() -> Result<ShutdownSignal> {
    signal::ctrl_c().await?;
    Ok(ShutdownSignal::CtrlC)
}

#[cfg(unix)]
async fn wait_sigterm() -> Result<ShutdownSignal> {
    let mut handler = signal::unix::signal(signal::unix::SignalKind::terminate())?;
    handler.recv().await;
    Ok(ShutdownSignal::Sigterm)
}

#[cfg(not(unix))]
async fn wait_sigterm() -> Result<ShutdownSignal> {
    std::future::pending::<Result<ShutdownSignal>>().await
}
