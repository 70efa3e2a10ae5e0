//! Dimension scoring.
//!
//! Each response is turned into a raw score in 0..=100 according to its
//! question's [`ScoringRule`], then a group of responses is reduced to one
//! integer score with a weighted arithmetic mean.

use std::fmt;

use crate::catalog::{Catalog, ScoringRule};
use crate::error::ScoringError;
use crate::model::{Answer, Category, Question, Response, WiscarDimension};

/// Raw score given to a choice answer missing from its value table.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// A named group of questions that produces one score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grouping {
    /// A top-level category. `Category::Wiscar` on its own matches nothing;
    /// WISCAR questions are grouped by dimension.
    Category(Category),
    Wiscar(WiscarDimension),
}

impl Grouping {
    pub fn contains(&self, question: &Question) -> bool {
        match self {
            Grouping::Category(Category::Wiscar) => false,
            Grouping::Category(category) => question.category == *category,
            Grouping::Wiscar(dimension) => question.wiscar_dimension() == Some(*dimension),
        }
    }

    /// Score reported when nothing in the group was answered.
    ///
    /// Categories report 0 ("nothing answered yet") while WISCAR dimensions
    /// report a neutral 50.
    pub fn empty_default(&self) -> u32 {
        match self {
            Grouping::Category(_) => 0,
            Grouping::Wiscar(_) => 50,
        }
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grouping::Category(category) => write!(f, "{category}"),
            Grouping::Wiscar(dimension) => write!(f, "wiscar/{dimension}"),
        }
    }
}

/// Likert interpolation: index `k` of `n` options scores `k / (n - 1) * 100`.
///
/// Returns `None` for an out-of-range index or a scale with fewer than two
/// points.
pub fn likert_score(index: usize, option_count: usize) -> Option<f64> {
    if option_count < 2 || index >= option_count {
        return None;
    }
    Some(index as f64 / (option_count - 1) as f64 * 100.0)
}

/// Raw score for one answer, or `None` when the answer is malformed for the
/// question and must be left out.
pub fn raw_score(catalog: &Catalog, question: &Question, answer: &Answer) -> Option<f64> {
    match (catalog.scoring_rule(question), answer) {
        (ScoringRule::Likert, Answer::Index(index)) => {
            likert_score(*index, question.options.len())
        }
        (ScoringRule::CorrectAnswer, Answer::Text(text)) => {
            let correct = catalog.correct_answer(&question.id)?;
            Some(if text == correct { 100.0 } else { 0.0 })
        }
        (ScoringRule::AnswerTable, Answer::Text(text)) => Some(
            catalog
                .answer_value(&question.id, text)
                .unwrap_or(NEUTRAL_SCORE),
        ),
        _ => None,
    }
}

/// `round(Σ raw·w / Σ w)` over `(raw, weight)` pairs.
///
/// The caller handles the empty case; an empty or zero-weight input here is
/// a configuration fault.
pub fn weighted_mean(scores: &[(f64, f64)], grouping: Grouping) -> Result<u32, ScoringError> {
    let (total, total_weight) = scores
        .iter()
        .fold((0.0, 0.0), |(sum, weights), &(raw, weight)| {
            (sum + raw * weight, weights + weight)
        });

    if !total_weight.is_finite() || total_weight <= 0.0 {
        return Err(ScoringError::DegenerateWeights {
            grouping: grouping.to_string(),
            total_weight,
        });
    }

    Ok((total / total_weight).round().clamp(0.0, 100.0) as u32)
}

/// Score one grouping over a response collection.
pub fn score_dimension(
    catalog: &Catalog,
    responses: &[Response],
    grouping: Grouping,
) -> Result<u32, ScoringError> {
    let mut scored = Vec::new();

    for response in responses {
        let Some(question) = catalog.question(&response.question_id) else {
            continue;
        };
        if !grouping.contains(question) {
            continue;
        }
        match raw_score(catalog, question, &response.answer) {
            Some(raw) => scored.push((raw, question.weight)),
            None => {
                tracing::debug!(
                    "excluding malformed answer {} for question {}",
                    response.answer,
                    question.id
                );
            }
        }
    }

    if scored.is_empty() {
        return Ok(grouping.empty_default());
    }

    weighted_mean(&scored, grouping)
}
