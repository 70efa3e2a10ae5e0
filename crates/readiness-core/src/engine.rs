//! Assessment engine.
//!
//! Runs the scorer over every grouping, aggregates, classifies and hands the
//! score card to a [`Narrator`]. Every call recomputes the result from the
//! responses alone.

use crate::aggregate::{overall_score, wiscar_average};
use crate::catalog::Catalog;
use crate::classify::{classify, TierInputs};
use crate::error::ScoringError;
use crate::model::{AssessmentResult, Category, Response, WiscarDimension, WiscarScores};
use crate::narrative::{CarbonAuditNarrator, Narrator, ScoreCard};
use crate::scoring::{score_dimension, Grouping};

/// Scores response collections against one catalog.
#[derive(Debug, Clone)]
pub struct AssessmentEngine<N: Narrator = CarbonAuditNarrator> {
    catalog: Catalog,
    narrator: N,
}

impl AssessmentEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_narrator(catalog, CarbonAuditNarrator::default())
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new(Catalog::carbon_auditor())
    }
}

impl<N: Narrator> AssessmentEngine<N> {
    pub fn with_narrator(catalog: Catalog, narrator: N) -> Self {
        Self { catalog, narrator }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn narrator(&self) -> &N {
        &self.narrator
    }

    /// The score card alone, without classification or narrative.
    ///
    /// Duplicate responses for one question are all counted; keeping only
    /// the latest answer is the caller's job (see [`crate::session::Session`]).
    pub fn score(&self, responses: &[Response]) -> Result<ScoreCard, ScoringError> {
        let unknown = responses
            .iter()
            .filter(|r| self.catalog.question(&r.question_id).is_none())
            .count();
        if unknown > 0 {
            tracing::debug!("ignoring {unknown} response(s) with unknown question ids");
        }

        let psychometric = score_dimension(
            &self.catalog,
            responses,
            Grouping::Category(Category::Psychometric),
        )?;
        let technical = score_dimension(
            &self.catalog,
            responses,
            Grouping::Category(Category::Technical),
        )?;

        let mut wiscar = WiscarScores::uniform(0);
        for dimension in WiscarDimension::ALL {
            let score = score_dimension(&self.catalog, responses, Grouping::Wiscar(dimension))?;
            wiscar.set(dimension, score);
        }

        let overall = overall_score(psychometric, technical, wiscar_average(&wiscar));

        Ok(ScoreCard {
            overall,
            psychometric,
            technical,
            wiscar,
        })
    }

    /// Produce the full readiness report.
    pub fn evaluate(&self, responses: &[Response]) -> Result<AssessmentResult, ScoringError> {
        let card = self.score(responses)?;
        let recommendation = classify(TierInputs {
            overall: card.overall,
            psychometric: card.psychometric,
            technical: card.technical,
        });
        let narrative = self.narrator.narrate(recommendation, &card);

        tracing::debug!(
            "assessment scored: overall={} psychometric={} technical={} tier={}",
            card.overall,
            card.psychometric,
            card.technical,
            recommendation
        );

        Ok(AssessmentResult {
            psychometric_score: card.psychometric,
            technical_score: card.technical,
            wiscar_scores: card.wiscar,
            overall_score: card.overall,
            recommendation,
            feedback: narrative.feedback,
            suggested_path: narrative.suggested_path,
            alternative_careers: narrative.alternative_careers,
        })
    }
}
