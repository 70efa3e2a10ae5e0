//! Rendering helpers for assessment results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{AssessmentResult, Recommendation};

/// Coarse quality band a score is displayed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn of(score: u32) -> Self {
        match score {
            80.. => ScoreBand::Strong,
            60..=79 => ScoreBand::Moderate,
            _ => ScoreBand::Weak,
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreBand::Strong => write!(f, "strong"),
            ScoreBand::Moderate => write!(f, "moderate"),
            ScoreBand::Weak => write!(f, "weak"),
        }
    }
}

impl Recommendation {
    /// Headline shown above the report.
    pub fn headline(&self) -> &'static str {
        match self {
            Recommendation::Yes => "Recommended: strong fit",
            Recommendation::Maybe => "Possible fit with targeted growth",
            Recommendation::No => "Not the best fit right now",
        }
    }
}

impl AssessmentResult {
    /// Format the result as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "## {} ({})\n\n**Overall score:** {}%\n\n{}\n\n",
            self.recommendation.headline(),
            self.recommendation,
            self.overall_score,
            self.feedback
        ));

        md.push_str("### Scores\n\n");
        md.push_str("| Dimension | Score | Band |\n");
        md.push_str("|-----------|-------|------|\n");
        let core = [
            ("Psychometric Fit", self.psychometric_score),
            ("Technical Readiness", self.technical_score),
        ];
        let wiscar = self
            .wiscar_scores
            .iter()
            .map(|(dimension, score)| (dimension.label(), score));
        for (label, score) in core.into_iter().chain(wiscar) {
            md.push_str(&format!(
                "| {} | {}% | {} |\n",
                label,
                score,
                ScoreBand::of(score)
            ));
        }
        md.push('\n');

        md.push_str("### Suggested learning path\n\n");
        for (i, step) in self.suggested_path.iter().enumerate() {
            md.push_str(&format!("{}. {}\n", i + 1, step));
        }

        if !self.alternative_careers.is_empty() {
            md.push_str("\n### Alternative careers\n\n");
            for career in &self.alternative_careers {
                md.push_str(&format!("- {career}\n"));
            }
        }

        md
    }
}
