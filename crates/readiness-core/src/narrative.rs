//! Feedback text, learning paths and alternative careers.
//!
//! Everything here is copy keyed by tier and sub-scores; scoring never
//! reads it.

use serde::{Deserialize, Serialize};

use crate::model::{Recommendation, WiscarDimension, WiscarScores};

/// The scores a narrator may condition on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub overall: u32,
    pub psychometric: u32,
    pub technical: u32,
    pub wiscar: WiscarScores,
}

/// Narrative half of an assessment result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub feedback: String,
    pub suggested_path: Vec<String>,
    pub alternative_careers: Vec<String>,
}

/// Produces the narrative for a classified score card.
pub trait Narrator: Send + Sync {
    fn narrate(&self, tier: Recommendation, scores: &ScoreCard) -> Narrative;
}

/// The three fixed step sequences a learning path is assembled from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPaths {
    pub base: Vec<String>,
    pub advanced: Vec<String>,
    pub remedial: Vec<String>,
}

impl LearningPaths {
    /// Technical score at which a `yes` gets the advanced path only.
    pub const ADVANCED_THRESHOLD: u32 = 70;
    /// Technical score at which a `maybe` skips remedial work.
    pub const BASE_THRESHOLD: u32 = 50;

    pub fn select(&self, tier: Recommendation, technical: u32) -> Vec<String> {
        match tier {
            Recommendation::Yes if technical >= Self::ADVANCED_THRESHOLD => self.advanced.clone(),
            Recommendation::Yes => concat_head(&self.base, &self.advanced, 2),
            Recommendation::Maybe if technical >= Self::BASE_THRESHOLD => self.base.clone(),
            Recommendation::Maybe => concat_head(&self.remedial, &self.base, 2),
            Recommendation::No => self.remedial.clone(),
        }
    }
}

fn concat_head(first: &[String], second: &[String], take: usize) -> Vec<String> {
    first
        .iter()
        .chain(second.iter().take(take))
        .cloned()
        .collect()
}

/// Appends `careers` when `dimension` scores at least `threshold`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerRule {
    pub dimension: WiscarDimension,
    pub threshold: u32,
    pub careers: Vec<String>,
}

/// Alternative-career suggestions for tiers other than `yes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerMap {
    pub rules: Vec<CareerRule>,
    pub fallback: Vec<String>,
}

impl CareerMap {
    /// Rule order is kept and repeated titles are not collapsed.
    pub fn select(&self, tier: Recommendation, wiscar: &WiscarScores) -> Vec<String> {
        if tier == Recommendation::Yes {
            return Vec::new();
        }

        let matched: Vec<String> = self
            .rules
            .iter()
            .filter(|rule| wiscar.get(rule.dimension) >= rule.threshold)
            .flat_map(|rule| rule.careers.iter().cloned())
            .collect();

        if matched.is_empty() {
            self.fallback.clone()
        } else {
            matched
        }
    }
}

/// Narrator for the built-in carbon auditor instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarbonAuditNarrator {
    pub paths: LearningPaths,
    pub careers: CareerMap,
}

impl CarbonAuditNarrator {
    pub fn feedback(&self, tier: Recommendation, scores: &ScoreCard) -> String {
        match tier {
            Recommendation::Yes => format!(
                "Excellent! You demonstrate strong alignment with carbon auditing requirements. \
                 Your psychological fit ({}%) and technical readiness ({}%) indicate you're \
                 well-prepared to pursue this career path. Your analytical mindset and \
                 environmental motivation make you an ideal candidate.",
                scores.psychometric, scores.technical
            ),
            Recommendation::Maybe => {
                let mut text =
                    String::from("You show solid potential for carbon auditing with room for growth. ");
                if scores.technical < 60 {
                    text.push_str(
                        "Focus on building technical knowledge in GHG protocols and environmental standards. ",
                    );
                }
                if scores.psychometric < 70 {
                    text.push_str(
                        "Consider developing stronger analytical and detail-oriented work habits. ",
                    );
                }
                text.push_str("With targeted learning, you can become well-suited for this field.");
                text
            }
            Recommendation::No => "While carbon auditing may not be the optimal fit currently, \
                 don't be discouraged. Your assessment reveals strengths that align with related \
                 environmental careers. Consider exploring alternative paths in sustainability \
                 that better match your interests and aptitudes while building foundational skills."
                .to_string(),
        }
    }
}

impl Default for CarbonAuditNarrator {
    fn default() -> Self {
        let paths = LearningPaths {
            base: owned(&[
                "Complete foundational environmental science coursework",
                "Learn GHG Protocol standards and ISO 14064 frameworks",
                "Develop proficiency in Excel and data analysis tools",
                "Practice emission calculation methodologies",
            ]),
            advanced: owned(&[
                "Pursue GHG Protocol certification",
                "Gain hands-on experience through internships or projects",
                "Specialize in specific sectors (manufacturing, energy, etc.)",
                "Build expertise in verification and assurance processes",
            ]),
            remedial: owned(&[
                "Strengthen mathematical and analytical foundations",
                "Take introductory courses in environmental regulations",
                "Develop attention to detail through structured exercises",
                "Build familiarity with sustainability reporting frameworks",
            ]),
        };

        let careers = CareerMap {
            rules: vec![
                CareerRule {
                    dimension: WiscarDimension::Interest,
                    threshold: 70,
                    careers: owned(&[
                        "Sustainability Reporting Specialist",
                        "Environmental Policy Analyst",
                    ]),
                },
                CareerRule {
                    dimension: WiscarDimension::Skill,
                    threshold: 60,
                    careers: owned(&[
                        "Environmental Data Analyst",
                        "Regulatory Compliance Officer",
                    ]),
                },
                CareerRule {
                    dimension: WiscarDimension::Cognitive,
                    threshold: 65,
                    careers: owned(&["Environmental Consultant", "Climate Change Researcher"]),
                },
            ],
            fallback: owned(&[
                "Environmental Educator",
                "Sustainability Coordinator",
                "Green Building Specialist",
            ]),
        };

        Self { paths, careers }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Narrator for CarbonAuditNarrator {
    fn narrate(&self, tier: Recommendation, scores: &ScoreCard) -> Narrative {
        Narrative {
            feedback: self.feedback(tier, scores),
            suggested_path: self.paths.select(tier, scores.technical),
            alternative_careers: self.careers.select(tier, &scores.wiscar),
        }
    }
}
