use anyhow::Result;
use hive_search::{Config, QuickSearch, SearchOutcome};

pub async fn run_search(config: &Config, term: &str) -> Result<()> {
    log::info!("Searching for \"{}\"", term);

    let search = QuickSearch::from_config(config);
    let mut stdout = std::io::stdout().lock();

    match search.search_with_suggestions(term, &mut stdout).await? {
        SearchOutcome::Presented(suggestions) => {
            log::debug!("Presented {} suggestions", suggestions.len());
        }
        SearchOutcome::SuggestCreate { term } => {
            log::debug!("No suggestions for \"{}\"", term);
        }
    }

    Ok(())
}

pub async fn run_best(config: &Config, term: &str) -> Result<()> {
    let search = QuickSearch::from_config(config);

    match search.search(term).await? {
        Some(best) => println!("{} ({:.3})", best.candidate, best.rating),
        None => println!(
            "No libraries in catalog {}",
            config.catalog_dir.display()
        ),
    }

    Ok(())
}

pub async fn run_matches(config: &Config, term: &str, json: bool) -> Result<()> {
    let search = QuickSearch::from_config(config);
    let result = search.search_with_matches(term).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.is_empty() {
        println!("No libraries in catalog {}", config.catalog_dir.display());
        return Ok(());
    }

    for (index, rating) in result.ratings.iter().enumerate() {
        let marker = if result.best_match_index == Some(index) { "*" } else { " " };
        println!("{marker} {:.3}  {}", rating.rating, rating.candidate);
    }

    Ok(())
}

pub async fn run_resolve(config: &Config, term: &str) -> Result<()> {
    let search = QuickSearch::from_config(config);
    println!("{}", search.get_pair_from_input(term).await?);
    Ok(())
}
