use anyhow::Result;
use site_config::Config;
use std::path::Path;

pub fn handle(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return Ok(());
    }

    Config::default().save_to(config_path)?;
    println!("✓ Created {}", config_path.display());
    println!("  Set [admin] token to enable content updates");
    Ok(())
}
