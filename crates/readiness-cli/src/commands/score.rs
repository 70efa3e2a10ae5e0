//! The `readiness score` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use readiness_core::engine::AssessmentEngine;
use readiness_core::parser::load_responses;
use readiness_core::session::Session;

use crate::config::load_config_from;

pub fn execute(
    responses_path: PathBuf,
    catalog_path: Option<PathBuf>,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let catalog = super::resolve_catalog(catalog_path, &config)?;
    let responses = load_responses(&responses_path)?;

    tracing::debug!(
        "scoring {} response(s) against {}",
        responses.len(),
        catalog.id()
    );

    let engine = AssessmentEngine::new(catalog);

    // One response per question; later entries in the file win.
    let mut session = Session::new(engine.catalog());
    for response in responses {
        session.record(response);
    }

    let result = engine
        .evaluate(session.responses())
        .with_context(|| format!("failed to score {}", responses_path.display()))?;

    let format = format.unwrap_or(config.default_format);
    println!("{}", super::render_result(engine.catalog(), &result, &format)?);

    Ok(())
}
