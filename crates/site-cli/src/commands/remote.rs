use anyhow::Result;
use site_client::SiteContentClient;

use super::read_patch;
use crate::cli::RemoteCommands;

pub async fn handle(cmd: RemoteCommands) -> Result<()> {
    match cmd {
        RemoteCommands::Show { url } => {
            let client = SiteContentClient::new(url, None);
            let content = client.content().await?;
            println!("{}", serde_json::to_string_pretty(&content)?);
            Ok(())
        }
        RemoteCommands::Update { url, token, file } => {
            let patch = read_patch(&file)?;
            let client = SiteContentClient::new(url, token);

            let notice = client.submit(&patch).await;
            if notice.is_error() {
                anyhow::bail!("{}: {}", notice.title, notice.description);
            }
            println!("✓ {}: {}", notice.title, notice.description);
            Ok(())
        }
    }
}
