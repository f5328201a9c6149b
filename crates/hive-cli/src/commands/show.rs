use anyhow::Result;
use hive_search::Config;

/// Print a single library definition as pretty JSON.
pub async fn show_library(config: &Config, name: &str) -> Result<()> {
    let catalog = config.catalog();

    match catalog.load_definition(name).await {
        Ok(definition) => {
            println!("{}", definition.name);
            println!("{}", serde_json::to_string_pretty(&definition)?);
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            eprintln!("Run 'hive search {name}' to look for similar libraries.");
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}
