use anyhow::Result;
use hive_search::{Config, QuickSearch};

pub async fn run_rebuild(config: &Config) -> Result<()> {
    log::info!("Rebuilding summary from {}", config.catalog_dir.display());

    let summary = QuickSearch::from_config(config).init_or_update_file().await?;

    println!("✓ Indexed {} libraries", summary.len());
    println!("  in {}", config.summary_path.display());
    Ok(())
}
