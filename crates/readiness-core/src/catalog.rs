//! The question catalog and its scoring lookup tables.
//!
//! A catalog is validated once at construction and never mutated, so every
//! scoring pass can rely on positive weights, well-formed likert scales and a
//! correct option for every technical question.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::error::CatalogError;
use crate::model::{AnswerType, Category, Question};

/// Option text → value in 0..=100, for one question.
pub type AnswerValues = BTreeMap<String, f64>;

/// How a single question turns an answer into a raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringRule {
    /// Linear interpolation over the option index.
    Likert,
    /// Binary: the designated option scores 100, anything else 0.
    CorrectAnswer,
    /// Lookup in the question's answer-value table, 50 when absent.
    AnswerTable,
}

/// An immutable, validated set of questions.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    id: String,
    name: String,
    questions: Vec<Question>,
    answer_values: BTreeMap<String, AnswerValues>,
    correct_answers: BTreeMap<String, String>,
}

impl Catalog {
    /// Build and validate a catalog.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        questions: Vec<Question>,
        answer_values: BTreeMap<String, AnswerValues>,
        correct_answers: BTreeMap<String, String>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            id: id.into(),
            name: name.into(),
            questions,
            answer_values,
            correct_answers,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for (position, q) in self.questions.iter().enumerate() {
            if q.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if !seen.insert(q.id.as_str()) {
                return Err(CatalogError::DuplicateId(q.id.clone()));
            }
            if !q.weight.is_finite() || q.weight <= 0.0 {
                return Err(CatalogError::InvalidWeight {
                    id: q.id.clone(),
                    weight: q.weight,
                });
            }
            if q.answer_type == AnswerType::Likert && q.options.len() < 2 {
                return Err(CatalogError::TooFewOptions {
                    id: q.id.clone(),
                    count: q.options.len(),
                });
            }
            if q.category == Category::Wiscar && q.wiscar_dimension().is_none() {
                return Err(CatalogError::InvalidWiscarDimension {
                    id: q.id.clone(),
                    subcategory: q.subcategory.clone(),
                });
            }
            if self.scoring_rule(q) == ScoringRule::CorrectAnswer {
                let Some(answer) = self.correct_answers.get(&q.id) else {
                    return Err(CatalogError::MissingCorrectAnswer(q.id.clone()));
                };
                if !q.options.contains(answer) {
                    return Err(CatalogError::CorrectAnswerNotAnOption {
                        id: q.id.clone(),
                        answer: answer.clone(),
                    });
                }
            }
        }

        for id in self.answer_values.keys().chain(self.correct_answers.keys()) {
            if !seen.contains(id.as_str()) {
                return Err(CatalogError::UnknownQuestion(id.clone()));
            }
        }

        for (id, table) in &self.answer_values {
            for (answer, &value) in table {
                if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                    return Err(CatalogError::AnswerValueOutOfRange {
                        id: id.clone(),
                        answer: answer.clone(),
                        value,
                    });
                }
            }
        }

        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All questions in presentation order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn questions_in(&self, category: Category) -> impl Iterator<Item = &Question> + '_ {
        self.questions.iter().filter(move |q| q.category == category)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The answer-value table for a question, if it has one.
    pub fn answer_values(&self, question_id: &str) -> Option<&AnswerValues> {
        self.answer_values.get(question_id)
    }

    /// Value of one option in a question's table.
    pub fn answer_value(&self, question_id: &str, answer: &str) -> Option<f64> {
        self.answer_values.get(question_id)?.get(answer).copied()
    }

    pub fn correct_answer(&self, question_id: &str) -> Option<&str> {
        self.correct_answers.get(question_id).map(String::as_str)
    }

    /// Technical questions are always scored right/wrong, whatever their
    /// presentation type (the built-in `t4` is a scenario).
    pub fn scoring_rule(&self, question: &Question) -> ScoringRule {
        if question.answer_type == AnswerType::Likert {
            ScoringRule::Likert
        } else if question.category == Category::Technical
            || question.answer_type == AnswerType::Technical
        {
            ScoringRule::CorrectAnswer
        } else {
            ScoringRule::AnswerTable
        }
    }

    /// The built-in carbon auditor readiness instrument.
    pub fn carbon_auditor() -> Self {
        let questions = builtin::questions();
        let answer_values = builtin::answer_values();
        let correct_answers = builtin::correct_answers();
        Self {
            id: "carbon-auditor".into(),
            name: "Carbon Auditor Readiness".into(),
            questions,
            answer_values,
            correct_answers,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::carbon_auditor()
    }
}

mod builtin {
    use std::collections::BTreeMap;

    use super::AnswerValues;
    use crate::model::{AnswerType, Category, Question};

    const AGREEMENT: [&str; 5] = [
        "Strongly Disagree",
        "Disagree",
        "Neutral",
        "Agree",
        "Strongly Agree",
    ];

    const COMFORT: [&str; 5] = [
        "Very Uncomfortable",
        "Uncomfortable",
        "Neutral",
        "Comfortable",
        "Very Comfortable",
    ];

    fn question(
        id: &str,
        text: &str,
        answer_type: AnswerType,
        options: &[&str],
        category: Category,
        subcategory: &str,
        weight: f64,
    ) -> Question {
        Question {
            id: id.into(),
            text: text.into(),
            answer_type,
            options: options.iter().map(|o| o.to_string()).collect(),
            category,
            subcategory: Some(subcategory.into()),
            weight,
        }
    }

    pub(super) fn questions() -> Vec<Question> {
        use AnswerType::{Likert, MultipleChoice, Scenario};
        use Category::{Psychometric, Technical, Wiscar};

        vec![
            question(
                "p1",
                "I enjoy working with detailed data and finding patterns in complex information.",
                Likert,
                &AGREEMENT,
                Psychometric,
                "interest",
                1.0,
            ),
            question(
                "p2",
                "Environmental sustainability is personally important to me.",
                Likert,
                &AGREEMENT,
                Psychometric,
                "interest",
                1.2,
            ),
            question(
                "p3",
                "I prefer work that requires attention to detail and accuracy.",
                Likert,
                &AGREEMENT,
                Psychometric,
                "personality",
                1.1,
            ),
            question(
                "p4",
                "I feel motivated when my work contributes to solving environmental challenges.",
                Likert,
                &AGREEMENT,
                Psychometric,
                "motivation",
                1.3,
            ),
            question(
                "p5",
                "When faced with a complex problem, I prefer to:",
                MultipleChoice,
                &[
                    "Break it down into smaller, manageable parts",
                    "Look for creative, innovative solutions",
                    "Seek guidance from experts or established methods",
                    "Use trial and error to find what works",
                ],
                Psychometric,
                "cognitive",
                1.0,
            ),
            question(
                "t1",
                "What are the three main scopes of greenhouse gas emissions according to the GHG Protocol?",
                MultipleChoice,
                &[
                    "Direct emissions, Indirect emissions, Other emissions",
                    "Scope 1 (Direct), Scope 2 (Electricity), Scope 3 (Value chain)",
                    "Carbon dioxide, Methane, Nitrous oxide",
                    "Manufacturing, Transportation, Disposal",
                ],
                Technical,
                "knowledge",
                1.2,
            ),
            question(
                "t2",
                "If a company uses 1,000 MWh of electricity from the grid with an emission factor of 0.5 kg CO2/kWh, what are the total CO2 emissions?",
                MultipleChoice,
                &["500 kg CO2", "500 tonnes CO2", "5,000 kg CO2", "50 tonnes CO2"],
                Technical,
                "calculation",
                1.3,
            ),
            question(
                "t3",
                "Which standard is most commonly used for organizational greenhouse gas inventories?",
                MultipleChoice,
                &["ISO 9001", "ISO 14001", "ISO 14064-1", "ISO 27001"],
                Technical,
                "standards",
                1.1,
            ),
            question(
                "t4",
                "A manufacturing company wants to reduce their carbon footprint. You discover their largest emission source is from purchased electricity. What scope is this and what would you recommend?",
                Scenario,
                &[
                    "Scope 1 - Switch to renewable energy sources",
                    "Scope 2 - Purchase renewable electricity or install solar panels",
                    "Scope 3 - Improve energy efficiency in manufacturing",
                    "Scope 2 - Reduce overall electricity consumption only",
                ],
                Technical,
                "application",
                1.4,
            ),
            question(
                "w1",
                "How likely are you to persist through a 6-month certification program even when the material becomes challenging?",
                Likert,
                &["Very Unlikely", "Unlikely", "Neutral", "Likely", "Very Likely"],
                Wiscar,
                "will",
                1.2,
            ),
            question(
                "w2",
                "I have successfully completed long-term goals that required sustained effort over months or years.",
                Likert,
                &AGREEMENT,
                Wiscar,
                "will",
                1.1,
            ),
            question(
                "i1",
                "How interested are you in learning about carbon accounting methodologies and emission calculation techniques?",
                Likert,
                &[
                    "Not Interested",
                    "Slightly Interested",
                    "Moderately Interested",
                    "Very Interested",
                    "Extremely Interested",
                ],
                Wiscar,
                "interest",
                1.3,
            ),
            question(
                "i2",
                "I actively seek information about environmental issues and sustainability practices.",
                Likert,
                &["Never", "Rarely", "Sometimes", "Often", "Always"],
                Wiscar,
                "interest",
                1.1,
            ),
            question(
                "s1",
                "Rate your current proficiency with data analysis and Excel/spreadsheet applications.",
                Likert,
                &["Beginner", "Basic", "Intermediate", "Advanced", "Expert"],
                Wiscar,
                "skill",
                1.2,
            ),
            question(
                "s2",
                "How comfortable are you with reading and interpreting technical documentation and standards?",
                Likert,
                &COMFORT,
                Wiscar,
                "skill",
                1.1,
            ),
            question(
                "c1",
                "When reviewing a company's emission data, you notice inconsistencies. What is your first approach?",
                MultipleChoice,
                &[
                    "Flag the inconsistencies and request clarification",
                    "Try to correct the data based on similar companies",
                    "Ignore minor inconsistencies if the overall trend looks right",
                    "Research industry standards to understand acceptable variance",
                ],
                Wiscar,
                "cognitive",
                1.3,
            ),
            question(
                "a1",
                "How do you typically respond when receiving feedback on your work?",
                MultipleChoice,
                &[
                    "I appreciate feedback and actively seek ways to improve",
                    "I listen to feedback but prefer to implement changes my way",
                    "I find feedback helpful but sometimes feel defensive",
                    "I prefer to figure things out independently",
                ],
                Wiscar,
                "ability",
                1.2,
            ),
            question(
                "r1",
                "Carbon auditors often work with strict deadlines and regulatory requirements. How comfortable are you with this type of work environment?",
                Likert,
                &COMFORT,
                Wiscar,
                "realWorld",
                1.3,
            ),
        ]
    }

    fn table(entries: &[(&str, f64)]) -> AnswerValues {
        entries
            .iter()
            .map(|(answer, value)| (answer.to_string(), *value))
            .collect()
    }

    pub(super) fn answer_values() -> BTreeMap<String, AnswerValues> {
        let mut values = BTreeMap::new();
        values.insert(
            "p5".to_string(),
            table(&[
                ("Break it down into smaller, manageable parts", 100.0),
                ("Seek guidance from experts or established methods", 75.0),
                ("Look for creative, innovative solutions", 50.0),
                ("Use trial and error to find what works", 25.0),
            ]),
        );
        values.insert(
            "c1".to_string(),
            table(&[
                ("Flag the inconsistencies and request clarification", 100.0),
                (
                    "Research industry standards to understand acceptable variance",
                    85.0,
                ),
                ("Try to correct the data based on similar companies", 50.0),
                (
                    "Ignore minor inconsistencies if the overall trend looks right",
                    20.0,
                ),
            ]),
        );
        values.insert(
            "a1".to_string(),
            table(&[
                ("I appreciate feedback and actively seek ways to improve", 100.0),
                ("I find feedback helpful but sometimes feel defensive", 75.0),
                (
                    "I listen to feedback but prefer to implement changes my way",
                    50.0,
                ),
                ("I prefer to figure things out independently", 25.0),
            ]),
        );
        values
    }

    pub(super) fn correct_answers() -> BTreeMap<String, String> {
        [
            (
                "t1",
                "Scope 1 (Direct), Scope 2 (Electricity), Scope 3 (Value chain)",
            ),
            ("t2", "500 tonnes CO2"),
            ("t3", "ISO 14064-1"),
            (
                "t4",
                "Scope 2 - Purchase renewable electricity or install solar panels",
            ),
        ]
        .into_iter()
        .map(|(id, answer)| (id.to_string(), answer.to_string()))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn likert(id: &str, category: Category, subcategory: &str, weight: f64) -> Question {
        Question {
            id: id.into(),
            text: format!("{id}?"),
            answer_type: AnswerType::Likert,
            options: vec!["No".into(), "Maybe".into(), "Yes".into()],
            category,
            subcategory: Some(subcategory.into()),
            weight,
        }
    }

    fn build(questions: Vec<Question>) -> Result<Catalog, CatalogError> {
        Catalog::new("t", "Test", questions, BTreeMap::new(), BTreeMap::new())
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let builtin = Catalog::carbon_auditor();
        let rebuilt = Catalog::new(
            builtin.id.clone(),
            builtin.name.clone(),
            builtin.questions.clone(),
            builtin.answer_values.clone(),
            builtin.correct_answers.clone(),
        );
        assert!(rebuilt.is_ok(), "built-in catalog invalid: {rebuilt:?}");
        assert_eq!(builtin.len(), 18);
        assert_eq!(builtin.questions_in(Category::Psychometric).count(), 5);
        assert_eq!(builtin.questions_in(Category::Technical).count(), 4);
        assert_eq!(builtin.questions_in(Category::Wiscar).count(), 9);
    }

    #[test]
    fn builtin_answer_tables_cover_their_options() {
        let catalog = Catalog::carbon_auditor();
        for id in ["p5", "c1", "a1"] {
            let question = catalog.question(id).unwrap();
            let table = catalog.answer_values(id).unwrap();
            for option in &question.options {
                assert!(table.contains_key(option), "{id} missing {option}");
            }
        }
    }

    #[test]
    fn technical_scenario_is_scored_right_or_wrong() {
        let catalog = Catalog::carbon_auditor();
        let t4 = catalog.question("t4").unwrap();
        assert_eq!(t4.answer_type, AnswerType::Scenario);
        assert_eq!(catalog.scoring_rule(t4), ScoringRule::CorrectAnswer);
        let p5 = catalog.question("p5").unwrap();
        assert_eq!(catalog.scoring_rule(p5), ScoringRule::AnswerTable);
        let w1 = catalog.question("w1").unwrap();
        assert_eq!(catalog.scoring_rule(w1), ScoringRule::Likert);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = build(vec![
            likert("q", Category::Psychometric, "x", 1.0),
            likert("q", Category::Psychometric, "x", 1.0),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("q".into()));
    }

    #[test]
    fn rejects_non_positive_weight() {
        for weight in [0.0, -1.0, f64::NAN] {
            let err = build(vec![likert("q", Category::Psychometric, "x", weight)]).unwrap_err();
            assert!(matches!(err, CatalogError::InvalidWeight { .. }));
        }
    }

    #[test]
    fn rejects_single_option_likert() {
        let mut q = likert("q", Category::Psychometric, "x", 1.0);
        q.options.truncate(1);
        let err = build(vec![q]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::TooFewOptions {
                id: "q".into(),
                count: 1
            }
        );
    }

    #[test]
    fn rejects_unknown_wiscar_dimension() {
        let err = build(vec![likert("q", Category::Wiscar, "grit", 1.0)]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidWiscarDimension { .. }));
    }

    #[test]
    fn technical_question_needs_a_valid_correct_answer() {
        let q = Question {
            id: "t".into(),
            text: "2 + 2?".into(),
            answer_type: AnswerType::MultipleChoice,
            options: vec!["3".into(), "4".into()],
            category: Category::Technical,
            subcategory: None,
            weight: 1.0,
        };
        let err = build(vec![q.clone()]).unwrap_err();
        assert_eq!(err, CatalogError::MissingCorrectAnswer("t".into()));

        let wrong = BTreeMap::from([("t".to_string(), "5".to_string())]);
        let err = Catalog::new("t", "T", vec![q.clone()], BTreeMap::new(), wrong).unwrap_err();
        assert!(matches!(err, CatalogError::CorrectAnswerNotAnOption { .. }));

        let right = BTreeMap::from([("t".to_string(), "4".to_string())]);
        let catalog = Catalog::new("t", "T", vec![q], BTreeMap::new(), right).unwrap();
        assert_eq!(catalog.correct_answer("t"), Some("4"));
    }

    #[test]
    fn rejects_tables_for_unknown_questions_and_bad_values() {
        let q = likert("q", Category::Psychometric, "x", 1.0);
        let stray = BTreeMap::from([("nope".to_string(), AnswerValues::new())]);
        let err = Catalog::new("t", "T", vec![q.clone()], stray, BTreeMap::new()).unwrap_err();
        assert_eq!(err, CatalogError::UnknownQuestion("nope".into()));

        let mut table = AnswerValues::new();
        table.insert("Yes".into(), 150.0);
        let values = BTreeMap::from([("q".to_string(), table)]);
        let err = Catalog::new("t", "T", vec![q], values, BTreeMap::new()).unwrap_err();
        assert!(matches!(err, CatalogError::AnswerValueOutOfRange { .. }));
    }
}
