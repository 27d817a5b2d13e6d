//! A small CLI over the sample home-repair catalog, wired through the
//! `handy` crates: membership checks, sorting, dirty-state detection, and
//! clipboard copy.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use handy_clipboard::{system_clipboard, Clipboard};
use handy_kit::{capitalize_words, sort_mappings_by_key, truncate};
use handy_value::{deep_equal_sequences, is_value_in_mappings, Mapping, Value};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "catalog", about = "Browse the sample home-repair catalog")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// List the catalog items
    Items {
        /// Sort by category name
        #[arg(long)]
        sorted: bool,
        /// Reverse the sort order
        #[arg(long)]
        descending: bool,
    },
    /// Check whether a category exists in the catalog
    Check { category: String },
    /// Compare a catalog export (JSON file) against the built-in data
    Diff { path: PathBuf },
    /// Copy a category name to the system clipboard
    Copy { category: String },
}

fn item(category: &str, title: &str, img: &str, price: &str) -> Value {
    Value::Mapping(Mapping::from([
        ("category".to_string(), Value::from(category)),
        ("title".to_string(), Value::from(title)),
        ("img".to_string(), Value::from(img)),
        ("price".to_string(), Value::from(price)),
    ]))
}

fn sample_items() -> Vec<Value> {
    vec![
        item("electrical", "lights", "", "1"),
        item("plumbing", "water", "2", "1"),
        item("windows", "lights", "", "1"),
        item("others", "water", "2", "1"),
    ]
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Cmd::Items { sorted, descending } => {
            let mut items = sample_items();
            if sorted || descending {
                sort_mappings_by_key(&mut items, "category", descending);
            }
            for entry in &items {
                let category = entry
                    .field("category")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                let title = entry
                    .field("title")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                println!(
                    "{:<12} {}",
                    capitalize_words(category),
                    truncate(title, 24)
                );
            }
        }
        Cmd::Check { category } => {
            let items = sample_items();
            let found = is_value_in_mappings(&Value::from(category.as_str()), &items, "category");
            println!("{}", if found { "present" } else { "absent" });
        }
        Cmd::Diff { path } => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let exported: Vec<Value> =
                serde_json::from_str(&text).context("parsing catalog export")?;
            if deep_equal_sequences(&sample_items(), &exported) {
                println!("unchanged");
            } else {
                println!("modified");
            }
        }
        Cmd::Copy { category } => {
            let items = sample_items();
            if !is_value_in_mappings(&Value::from(category.as_str()), &items, "category") {
                bail!("unknown category: {category}");
            }
            let clipboard =
                system_clipboard().context("no clipboard command on this platform")?;
            clipboard
                .copy(&category)
                .context("copying to the system clipboard")?;
            println!("copied");
        }
    }
    Ok(())
}
