//! The `readiness questions` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use readiness_core::model::Category;

use crate::config::load_config_from;

pub fn execute(
    catalog_path: Option<PathBuf>,
    category: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let catalog = super::resolve_catalog(catalog_path, &config)?;

    let filter: Option<Category> = category
        .map(|c| c.parse::<Category>().map_err(|e| anyhow::anyhow!(e)))
        .transpose()?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Category", "Subcategory", "Type", "Weight", "Question"]);

    let mut shown = 0;
    for q in catalog.questions() {
        if filter.is_some_and(|c| c != q.category) {
            continue;
        }
        table.add_row(vec![
            Cell::new(&q.id),
            Cell::new(q.category),
            Cell::new(q.subcategory.as_deref().unwrap_or("-")),
            Cell::new(q.answer_type),
            Cell::new(format!("{:.1}", q.weight)),
            Cell::new(&q.text),
        ]);
        shown += 1;
    }

    println!("Catalog: {} ({} questions)", catalog.name(), shown);
    println!("{table}");

    Ok(())
}
