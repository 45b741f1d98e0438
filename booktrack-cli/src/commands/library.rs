//! List and stats command implementations

use anyhow::{Context, Result};
use booktrack_core::{BookRecord, BookStore, JsonStore, LibraryView};
use serde::Serialize;

async fn load_view(data_dir: &str, user: &str) -> Result<LibraryView> {
    let store = JsonStore::open(data_dir)
        .await
        .with_context(|| format!("Failed to open store at {}", data_dir))?;
    let records = store.all().await.context("Failed to load library")?;
    Ok(LibraryView::for_user(&records, user))
}

fn print_shelf(heading: &str, shelf: &[&BookRecord]) {
    println!("{}", heading);
    if shelf.is_empty() {
        println!("  (none)");
        return;
    }
    for record in shelf {
        println!("  {}  {}", record.id, record.title);
    }
}

/// Shelves output for --json
#[derive(Serialize)]
struct Shelves<'a> {
    reading_now: Vec<&'a BookRecord>,
    up_next: Vec<&'a BookRecord>,
    finished: Vec<&'a BookRecord>,
}

/// List a user's saved books, grouped by shelf
pub async fn list(data_dir: &str, user: &str, json: bool) -> Result<()> {
    let view = load_view(data_dir, user).await?;

    if json {
        let shelves = Shelves {
            reading_now: view.in_progress(),
            up_next: view.unstarted(),
            finished: view.finished(),
        };
        println!("{}", serde_json::to_string_pretty(&shelves)?);
        return Ok(());
    }

    if view.records().is_empty() {
        println!("No books saved for {}", user);
        return Ok(());
    }

    print_shelf("Reading now:", &view.in_progress());
    print_shelf("Up next:", &view.unstarted());
    print_shelf("Finished:", &view.finished());

    Ok(())
}

/// Show reading statistics for a user
pub async fn stats(data_dir: &str, user: &str, json: bool) -> Result<()> {
    let view = load_view(data_dir, user).await?;
    let stats = view.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Stats for {}", user);
    println!("Reading: {} book(s)", stats.in_progress);
    println!("Read:    {} book(s)", stats.finished);

    Ok(())
}
