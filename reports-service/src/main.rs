use anyhow::Context;
use reports_service::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config)?;

    tracing::info!(backend = %config.store.backend, "Selecting report store");

    match config.store.backend {
        StoreBackend::SurrealDb => {
            let store = SurrealReportStore::connect(&config.store)
                .await
                .context("failed to connect to SurrealDB")?;
            run(config, store).await
        }
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory store; reports are lost on shutdown");
            run(config, MemoryReportStore::new()).await
        }
    }
}

async fn run<S: ReportStore>(config: Config, store: S) -> anyhow::Result<()> {
    let app = router(AppState::new(config.clone(), store));
    Server::new(config).serve(app).await?;
    Ok(())
}
