pub mod init;
pub mod questions;
pub mod score;
pub mod take;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use readiness_core::catalog::Catalog;
use readiness_core::model::AssessmentResult;
use readiness_core::report::ScoreBand;

use crate::config::ReadinessConfig;

/// The catalog named on the command line, else the configured one, else the
/// built-in instrument.
pub fn resolve_catalog(explicit: Option<PathBuf>, config: &ReadinessConfig) -> Result<Catalog> {
    match explicit.or_else(|| config.catalog.clone()) {
        Some(path) => {
            tracing::debug!("loading catalog from {}", path.display());
            readiness_core::parser::parse_catalog(&path)
        }
        None => Ok(Catalog::carbon_auditor()),
    }
}

/// Render a result in one of the supported output formats.
pub fn render_result(catalog: &Catalog, result: &AssessmentResult, format: &str) -> Result<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(result)?),
        "markdown" | "md" => Ok(format!("# {}\n\n{}", catalog.name(), result.to_markdown())),
        "text" => Ok(render_text(catalog, result)),
        other => anyhow::bail!("unknown output format: {other} (expected text, json or markdown)"),
    }
}

fn render_text(catalog: &Catalog, result: &AssessmentResult) -> String {
    let mut table = Table::new();
    table.set_header(vec!["Dimension", "Score", "Band"]);

    let core = [
        ("Psychometric Fit", result.psychometric_score),
        ("Technical Readiness", result.technical_score),
    ];
    let wiscar = result
        .wiscar_scores
        .iter()
        .map(|(dimension, score)| (dimension.label(), score));
    for (label, score) in core.into_iter().chain(wiscar) {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(format!("{score}%")),
            Cell::new(ScoreBand::of(score)),
        ]);
    }

    let mut out = format!(
        "{}\n{} ({})\nOverall score: {}%\n\n{table}\n\n{}\n",
        catalog.name(),
        result.recommendation.headline(),
        result.recommendation,
        result.overall_score,
        result.feedback
    );

    out.push_str("\nSuggested learning path:\n");
    for (i, step) in result.suggested_path.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, step));
    }

    if !result.alternative_careers.is_empty() {
        out.push_str("\nAlternative careers:\n");
        for career in &result.alternative_careers {
            out.push_str(&format!("  - {career}\n"));
        }
    }

    out
}
