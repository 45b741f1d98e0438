//! Search command implementation

use anyhow::{Context, Result};
use booktrack_core::CatalogSource;

/// Search the catalog and print the results
pub async fn search(query: &str, json: bool) -> Result<()> {
    if query.is_empty() {
        anyhow::bail!("Query must not be empty");
    }

    let client = super::catalog_client()?;
    let entries = client
        .search(query)
        .await
        .with_context(|| format!("Catalog search for '{}' failed", query))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No results for '{}'", query);
        return Ok(());
    }

    for entry in &entries {
        println!("{}  {}", entry.id, entry.title);
        if !entry.authors.is_empty() {
            println!("    by {}", entry.authors.join(", "));
        }
        if let Some(date) = &entry.published_date {
            println!("    published {}", date);
        }
    }
    println!("{} result(s)", entries.len());

    Ok(())
}
