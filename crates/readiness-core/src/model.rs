//! Core data model types for readiness.
//!
//! Questions are immutable catalog entries, responses are what the
//! questionnaire collects, and `AssessmentResult` is the engine's only output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level section a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Psychometric,
    Technical,
    Wiscar,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Psychometric => write!(f, "psychometric"),
            Category::Technical => write!(f, "technical"),
            Category::Wiscar => write!(f, "wiscar"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "psychometric" => Ok(Category::Psychometric),
            "technical" => Ok(Category::Technical),
            "wiscar" => Ok(Category::Wiscar),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerType {
    /// Scaled choice; answered with the zero-based option index.
    Likert,
    MultipleChoice,
    Scenario,
    /// Multiple choice with one objectively correct option.
    Technical,
}

impl fmt::Display for AnswerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerType::Likert => write!(f, "likert"),
            AnswerType::MultipleChoice => write!(f, "multiple-choice"),
            AnswerType::Scenario => write!(f, "scenario"),
            AnswerType::Technical => write!(f, "technical"),
        }
    }
}

impl FromStr for AnswerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "likert" => Ok(AnswerType::Likert),
            "multiple-choice" | "multiple_choice" | "choice" => Ok(AnswerType::MultipleChoice),
            "scenario" => Ok(AnswerType::Scenario),
            "technical" => Ok(AnswerType::Technical),
            other => Err(format!("unknown answer type: {other}")),
        }
    }
}

/// One of the six WISCAR readiness dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WiscarDimension {
    #[serde(rename = "will")]
    Will,
    #[serde(rename = "interest")]
    Interest,
    #[serde(rename = "skill")]
    Skill,
    #[serde(rename = "cognitive")]
    Cognitive,
    #[serde(rename = "ability")]
    Ability,
    #[serde(rename = "realWorld")]
    RealWorld,
}

impl WiscarDimension {
    /// All dimensions in report order.
    pub const ALL: [WiscarDimension; 6] = [
        WiscarDimension::Will,
        WiscarDimension::Interest,
        WiscarDimension::Skill,
        WiscarDimension::Cognitive,
        WiscarDimension::Ability,
        WiscarDimension::RealWorld,
    ];

    /// Human-readable label shown next to the score.
    pub fn label(&self) -> &'static str {
        match self {
            WiscarDimension::Will => "Will & Persistence",
            WiscarDimension::Interest => "Interest & Motivation",
            WiscarDimension::Skill => "Current Skills",
            WiscarDimension::Cognitive => "Cognitive Readiness",
            WiscarDimension::Ability => "Ability to Learn",
            WiscarDimension::RealWorld => "Real-World Alignment",
        }
    }
}

impl fmt::Display for WiscarDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WiscarDimension::Will => "will",
            WiscarDimension::Interest => "interest",
            WiscarDimension::Skill => "skill",
            WiscarDimension::Cognitive => "cognitive",
            WiscarDimension::Ability => "ability",
            WiscarDimension::RealWorld => "realWorld",
        };
        f.write_str(name)
    }
}

impl FromStr for WiscarDimension {
    type Err = String;

    /// Exact match only; subcategories are stable keys, not free text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "will" => Ok(WiscarDimension::Will),
            "interest" => Ok(WiscarDimension::Interest),
            "skill" => Ok(WiscarDimension::Skill),
            "cognitive" => Ok(WiscarDimension::Cognitive),
            "ability" => Ok(WiscarDimension::Ability),
            "realWorld" => Ok(WiscarDimension::RealWorld),
            other => Err(format!("unknown wiscar dimension: {other}")),
        }
    }
}

/// A single catalog question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Stable unique key.
    pub id: String,
    /// The prompt shown to the respondent.
    pub text: String,
    /// How the question is answered.
    #[serde(rename = "type")]
    pub answer_type: AnswerType,
    /// Ordered options for choice-style questions.
    #[serde(default)]
    pub options: Vec<String>,
    pub category: Category,
    /// Free-form for psychometric/technical; a dimension name for WISCAR.
    #[serde(default)]
    pub subcategory: Option<String>,
    /// Relative influence inside its group.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl Question {
    /// The WISCAR dimension this question scores, if any.
    pub fn wiscar_dimension(&self) -> Option<WiscarDimension> {
        if self.category != Category::Wiscar {
            return None;
        }
        self.subcategory.as_deref()?.parse().ok()
    }
}

/// The answer given to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// Zero-based option index (likert questions).
    Index(usize),
    /// Literal option text (choice questions).
    Text(String),
    /// Any other JSON value (negative or fractional numbers, `null`,
    /// booleans). Never scores.
    Other(serde_json::Value),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Index(i) => write!(f, "#{i}"),
            Answer::Text(t) => f.write_str(t),
            Answer::Other(v) => write!(f, "{v}"),
        }
    }
}

impl From<usize> for Answer {
    fn from(index: usize) -> Self {
        Answer::Index(index)
    }
}

impl From<&str> for Answer {
    fn from(text: &str) -> Self {
        Answer::Text(text.to_string())
    }
}

impl From<String> for Answer {
    fn from(text: String) -> Self {
        Answer::Text(text)
    }
}

/// One respondent answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub question_id: String,
    pub answer: Answer,
    /// Seconds spent on the question. Carried through, never scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<f64>,
}

impl Response {
    pub fn new(question_id: impl Into<String>, answer: Answer) -> Self {
        Self {
            question_id: question_id.into(),
            answer,
            time_spent: None,
        }
    }

    /// A likert answer by option index.
    pub fn index(question_id: impl Into<String>, index: usize) -> Self {
        Self::new(question_id, Answer::Index(index))
    }

    /// A choice answer by option text.
    pub fn text(question_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(question_id, Answer::Text(text.into()))
    }
}

/// Scores for the six WISCAR dimensions, each in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiscarScores {
    pub will: u32,
    pub interest: u32,
    pub skill: u32,
    pub cognitive: u32,
    pub ability: u32,
    pub real_world: u32,
}

impl WiscarScores {
    /// Every dimension set to the same value.
    pub fn uniform(score: u32) -> Self {
        Self {
            will: score,
            interest: score,
            skill: score,
            cognitive: score,
            ability: score,
            real_world: score,
        }
    }

    pub fn get(&self, dimension: WiscarDimension) -> u32 {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::Ability => self.ability,
            WiscarDimension::RealWorld => self.real_world,
        }
    }

    pub fn set(&mut self, dimension: WiscarDimension, score: u32) {
        let slot = match dimension {
            WiscarDimension::Will => &mut self.will,
            WiscarDimension::Interest => &mut self.interest,
            WiscarDimension::Skill => &mut self.skill,
            WiscarDimension::Cognitive => &mut self.cognitive,
            WiscarDimension::Ability => &mut self.ability,
            WiscarDimension::RealWorld => &mut self.real_world,
        };
        *slot = score;
    }

    /// `(dimension, score)` pairs in [`WiscarDimension::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (WiscarDimension, u32)> + '_ {
        WiscarDimension::ALL.iter().map(move |&d| (d, self.get(d)))
    }
}

/// Three-valued recommendation tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Yes => write!(f, "yes"),
            Recommendation::Maybe => write!(f, "maybe"),
            Recommendation::No => write!(f, "no"),
        }
    }
}

/// The complete readiness report for one response collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub psychometric_score: u32,
    pub technical_score: u32,
    pub wiscar_scores: WiscarScores,
    pub overall_score: u32,
    pub recommendation: Recommendation,
    pub feedback: String,
    pub suggested_path: Vec<String>,
    pub alternative_careers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_display_and_parse() {
        assert_eq!(Category::Wiscar.to_string(), "wiscar");
        assert_eq!(
            "Psychometric".parse::<Category>().unwrap(),
            Category::Psychometric
        );
        assert!("personality".parse::<Category>().is_err());
    }

    #[test]
    fn answer_type_accepts_aliases() {
        assert_eq!(
            "multiple-choice".parse::<AnswerType>().unwrap(),
            AnswerType::MultipleChoice
        );
        assert_eq!(
            "multiple_choice".parse::<AnswerType>().unwrap(),
            AnswerType::MultipleChoice
        );
        assert_eq!(AnswerType::MultipleChoice.to_string(), "multiple-choice");
    }

    #[test]
    fn dimension_names_are_exact() {
        for dim in WiscarDimension::ALL {
            assert_eq!(dim.to_string().parse::<WiscarDimension>().unwrap(), dim);
        }
        assert!("realworld".parse::<WiscarDimension>().is_err());
        assert_eq!(WiscarDimension::RealWorld.label(), "Real-World Alignment");
    }

    #[test]
    fn psychometric_subcategory_is_not_a_dimension() {
        let q = Question {
            id: "p1".into(),
            text: String::new(),
            answer_type: AnswerType::Likert,
            options: vec![],
            category: Category::Psychometric,
            subcategory: Some("interest".into()),
            weight: 1.0,
        };
        assert_eq!(q.wiscar_dimension(), None);
    }

    #[test]
    fn response_json_uses_collaborator_field_names() {
        let json = r#"[
            {"questionId": "p1", "answer": 3, "timeSpent": 4.5},
            {"questionId": "t2", "answer": "500 tonnes CO2"}
        ]"#;
        let responses: Vec<Response> = serde_json::from_str(json).unwrap();
        assert_eq!(responses[0].answer, Answer::Index(3));
        assert_eq!(responses[0].time_spent, Some(4.5));
        assert_eq!(responses[1].answer, Answer::Text("500 tonnes CO2".into()));

        let out = serde_json::to_string(&Response::index("p1", 2)).unwrap();
        assert_eq!(out, r#"{"questionId":"p1","answer":2}"#);
    }

    #[test]
    fn unusable_answers_still_deserialize() {
        let json = r#"[
            {"questionId": "p1", "answer": -1},
            {"questionId": "p2", "answer": 2.5},
            {"questionId": "p3", "answer": null},
            {"questionId": "p4", "answer": true}
        ]"#;
        let responses: Vec<Response> = serde_json::from_str(json).unwrap();
        assert_eq!(responses.len(), 4);
        assert!(responses
            .iter()
            .all(|r| matches!(r.answer, Answer::Other(_))));
        assert_eq!(responses[0].answer.to_string(), "-1");
    }

    #[test]
    fn question_weight_defaults_to_one() {
        let q: Question = serde_json::from_str(
            r#"{"id":"x","text":"?","type":"likert","category":"wiscar","subcategory":"will"}"#,
        )
        .unwrap();
        assert_eq!(q.weight, 1.0);
        assert_eq!(q.wiscar_dimension(), Some(WiscarDimension::Will));
    }

    #[test]
    fn wiscar_scores_get_set() {
        let mut scores = WiscarScores::uniform(50);
        scores.set(WiscarDimension::RealWorld, 75);
        assert_eq!(scores.get(WiscarDimension::RealWorld), 75);
        let json = serde_json::to_value(scores).unwrap();
        assert_eq!(json["realWorld"], 75);
        assert_eq!(scores.iter().count(), 6);
    }
}
