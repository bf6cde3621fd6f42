use anyhow::Result;
use site_config::Config;
use site_storage::Storage;

use super::read_patch;

/// Print the content row, creating it if this is a fresh database
pub async fn show(config: &Config) -> Result<()> {
    let storage = Storage::new(config.database.path.clone()).await?;
    let content = storage.get_content().await?;
    println!("{}", serde_json::to_string_pretty(&content)?);
    Ok(())
}

/// Apply a patch file directly to the local database
pub async fn update(config: &Config, file: &str) -> Result<()> {
    let patch = read_patch(file)?;
    if patch.is_empty() {
        println!("Nothing to update");
        return Ok(());
    }

    let storage = Storage::new(config.database.path.clone()).await?;
    storage.update_content(&patch).await?;
    println!("✓ Updated {}", patch.field_names().join(", "));
    Ok(())
}
