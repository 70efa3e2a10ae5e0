//! TOML catalog and response file loading.
//!
//! Loads catalogs and response collections from disk, and reports soft
//! catalog issues that are legal but probably unintended.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::{AnswerValues, Catalog, ScoringRule};
use crate::model::{AnswerType, Category, Question, Response, WiscarDimension};

/// Intermediate TOML structure for catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    catalog: TomlCatalogHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlCatalogHeader {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    text: String,
    #[serde(rename = "type")]
    answer_type: String,
    #[serde(default)]
    options: Vec<String>,
    category: String,
    #[serde(default)]
    subcategory: Option<String>,
    #[serde(default = "default_weight")]
    weight: f64,
    #[serde(default)]
    correct_answer: Option<String>,
    #[serde(default)]
    answer_values: Option<BTreeMap<String, f64>>,
}

fn default_weight() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
struct TomlResponseFile {
    #[serde(default)]
    responses: Vec<Response>,
}

/// Parse a single TOML file into a `Catalog`.
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a `Catalog` (useful for testing).
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<Catalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let mut questions = Vec::with_capacity(parsed.questions.len());
    let mut answer_values = BTreeMap::new();
    let mut correct_answers = BTreeMap::new();

    for q in parsed.questions {
        let answer_type: AnswerType = q
            .answer_type
            .parse()
            .map_err(|e: String| anyhow::anyhow!("question {}: {}", q.id, e))?;
        let category: Category = q
            .category
            .parse()
            .map_err(|e: String| anyhow::anyhow!("question {}: {}", q.id, e))?;

        if let Some(answer) = q.correct_answer {
            correct_answers.insert(q.id.clone(), answer);
        }
        if let Some(values) = q.answer_values {
            answer_values.insert(q.id.clone(), values);
        }

        questions.push(Question {
            id: q.id,
            text: q.text,
            answer_type,
            options: q.options,
            category,
            subcategory: q.subcategory,
            weight: q.weight,
        });
    }

    Catalog::new(
        parsed.catalog.id,
        parsed.catalog.name,
        questions,
        answer_values,
        correct_answers,
    )
    .with_context(|| format!("invalid catalog: {}", source_path.display()))
}

/// Recursively load all `.toml` catalog files from a directory.
pub fn load_catalog_directory(dir: &Path) -> Result<Vec<Catalog>> {
    let mut catalogs = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            catalogs.extend(load_catalog_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_catalog(&path) {
                Ok(catalog) => catalogs.push(catalog),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    Ok(catalogs)
}

/// Load a response collection. `.toml` files use `[[responses]]` tables,
/// anything else is read as a JSON array.
pub fn load_responses(path: &Path) -> Result<Vec<Response>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read responses file: {}", path.display()))?;

    if path.extension().is_some_and(|ext| ext == "toml") {
        let parsed: TomlResponseFile = toml::from_str(&content)
            .with_context(|| format!("failed to parse TOML: {}", path.display()))?;
        Ok(parsed.responses)
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse responses JSON: {}", path.display()))
    }
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Check a catalog for issues that still score but are likely mistakes.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for q in catalog.questions() {
        let warn = |message: String| ValidationWarning {
            question_id: Some(q.id.clone()),
            message,
        };

        if q.text.trim().is_empty() {
            warnings.push(warn("question text is empty".into()));
        }

        if q.answer_type != AnswerType::Likert && q.options.is_empty() {
            warnings.push(warn(format!(
                "{} question has no options",
                q.answer_type
            )));
        }

        match catalog.scoring_rule(q) {
            ScoringRule::AnswerTable => match catalog.answer_values(&q.id) {
                None => warnings.push(warn(
                    "no answer_values table; every answer scores 50".into(),
                )),
                Some(table) => {
                    warnings.extend(unknown_table_keys(q, table).map(|key| {
                        warn(format!("answer_values key {key:?} is not one of the options"))
                    }));
                }
            },
            ScoringRule::Likert | ScoringRule::CorrectAnswer => {
                if catalog.answer_values(&q.id).is_some() {
                    warnings.push(warn(format!(
                        "answer_values table is ignored for {} questions",
                        q.answer_type
                    )));
                }
            }
        }
    }

    for dimension in WiscarDimension::ALL {
        let covered = catalog
            .questions()
            .iter()
            .any(|q| q.wiscar_dimension() == Some(dimension));
        if !covered {
            warnings.push(ValidationWarning {
                question_id: None,
                message: format!("no questions for wiscar dimension {dimension}; it always scores 50"),
            });
        }
    }

    for category in [Category::Psychometric, Category::Technical] {
        if catalog.questions_in(category).next().is_none() {
            warnings.push(ValidationWarning {
                question_id: None,
                message: format!("no {category} questions; that score is always 0"),
            });
        }
    }

    warnings
}

fn unknown_table_keys<'a>(
    question: &'a Question,
    table: &'a AnswerValues,
) -> impl Iterator<Item = &'a String> + 'a {
    table.keys().filter(|key| !question.options.contains(key))
}
