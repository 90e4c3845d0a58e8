//! MSI Donations server binary.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use msi_donations::adapters::{
    app_router, with_middleware, AppState, InMemoryNotificationStore, RecordingMailSender,
    ResendConfig, ResendMailSender,
};
use msi_donations::application::NotificationPruner;
use msi_donations::config::AppConfig;
use msi_donations::ports::MailSender;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    init_tracing(&config);

    let mail_sender = build_mail_sender(&config)?;
    let notification_store = Arc::new(InMemoryNotificationStore::new());
    let state = AppState::from_config(&config, notification_store.clone(), mail_sender);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let pruner = NotificationPruner::new(
        notification_store,
        config.payfast.notification_retention(),
        config.payfast.prune_interval(),
    );
    let pruner_handle = tokio::spawn(async move { pruner.run(shutdown_rx).await });

    let app = with_middleware(app_router(state), &config.server);

    let addr = config
        .server
        .socket_addr()
        .context("invalid server host or port")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        process_url = %config.process_url(),
        "msi-donations listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let _ = shutdown_tx.send(true);
    pruner_handle.await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn build_mail_sender(config: &AppConfig) -> anyhow::Result<Arc<dyn MailSender>> {
    match config.email.resend_api_key.as_deref() {
        Some(key) if config.email.has_transport() => {
            let sender = ResendMailSender::new(ResendConfig::new(key, config.email.from_header()))
                .context("failed to build mail client")?;
            Ok(Arc::new(sender))
        }
        _ => {
            tracing::warn!("no mail transport configured; enquiries will only be logged");
            Ok(Arc::new(RecordingMailSender::new()))
        }
    }
}
