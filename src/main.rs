use scandeck::{init_logging, Config, DocumentArchive, ScanSession, VirtualScanner};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!(
        "scandeck {} (built {})",
        scandeck::VERSION,
        scandeck::BUILD_DATE
    );

    let config = Config::load_or_default();
    let archive = DocumentArchive::new(&config.storage.data_dir, config.storage.backup_retention);

    // No physical scanner backend is wired in yet; the virtual device
    // keeps the session operable for the UI shell and scripting.
    let device = Arc::new(VirtualScanner::new());
    let mut session = ScanSession::new(device, config).with_archive(archive);

    match session.restore_from_archive() {
        Ok(true) => {
            tracing::info!(
                pages = session.document().pages().len(),
                "restored previous document"
            );
        }
        Ok(false) => tracing::info!("starting with an empty document"),
        Err(e) => tracing::warn!("could not restore previous document: {e}"),
    }

    let readiness = session.initialize_device().await?;
    tracing::info!(scanners = readiness.scanners.len(), "session ready");

    Ok(())
}
