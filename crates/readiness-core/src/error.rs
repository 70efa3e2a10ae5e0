//! Catalog and scoring error types.
//!
//! Only programming or data errors surface here. Bad user input (unknown
//! question ids, malformed answers, answers missing from a value table) is
//! never an error; the scorer excludes or defaults it instead.

use thiserror::Error;

/// A catalog that cannot be scored consistently.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// A question has an empty id.
    #[error("question at position {0} has an empty id")]
    EmptyId(usize),

    /// Two questions share an id.
    #[error("duplicate question id: {0}")]
    DuplicateId(String),

    /// A weight of zero, below zero, or not a number.
    #[error("question {id} has invalid weight {weight} (must be finite and > 0)")]
    InvalidWeight { id: String, weight: f64 },

    /// Likert interpolation needs at least two points.
    #[error("likert question {id} has {count} option(s), needs at least 2")]
    TooFewOptions { id: String, count: usize },

    /// A WISCAR question whose subcategory is missing or not a dimension.
    #[error("wiscar question {id} has invalid subcategory {subcategory:?}")]
    InvalidWiscarDimension {
        id: String,
        subcategory: Option<String>,
    },

    /// A technical question with no designated correct option.
    #[error("technical question {0} has no correct answer")]
    MissingCorrectAnswer(String),

    /// The designated correct option is not one of the question's options.
    #[error("correct answer {answer:?} for question {id} is not one of its options")]
    CorrectAnswerNotAnOption { id: String, answer: String },

    /// An answer-table value outside [0, 100].
    #[error("answer value {value} for {id}/{answer:?} is outside 0..=100")]
    AnswerValueOutOfRange {
        id: String,
        answer: String,
        value: f64,
    },

    /// An answer table or correct answer keyed by a question that does not exist.
    #[error("scoring data references unknown question id: {0}")]
    UnknownQuestion(String),
}

/// A fault raised while scoring. Reaching one means the catalog is broken.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// The weights of a scored group sum to zero or less.
    #[error("degenerate weights for {grouping}: total weight {total_weight}")]
    DegenerateWeights {
        grouping: String,
        total_weight: f64,
    },
}
