use anyhow::Result;
use site_config::Config;
use site_server::{BearerTokenGate, SiteServer};
use site_storage::Storage;
use std::sync::Arc;
use tracing::warn;

pub async fn handle(
    config: Config,
    host: Option<String>,
    port: Option<u16>,
    admin_token: Option<String>,
) -> Result<()> {
    let host = host.unwrap_or(config.server.host);
    let port = port.unwrap_or(config.server.port);
    let admin_token = admin_token.or(config.admin.token);

    if admin_token.is_none() {
        warn!("No admin token configured; content updates will be rejected");
    }

    // Single store for the process lifetime, shared with every handler
    let storage = Storage::new(config.database.path).await?;
    let gate = Arc::new(BearerTokenGate::new(admin_token));

    SiteServer::new(storage, gate).serve(&host, port).await
}
