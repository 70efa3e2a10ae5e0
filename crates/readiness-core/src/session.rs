//! Answer session bookkeeping for questionnaire front ends.
//!
//! The engine scores whatever it is handed. A `Session` is what a front end
//! keeps while the respondent works through the catalog: the current
//! question, the section it belongs to, and at most one response per
//! question (the latest answer wins).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::model::{Answer, Category, Question, Response};

/// Where the respondent is in the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Intro,
    Psychometric,
    Technical,
    Wiscar,
    Results,
}

impl Section {
    /// All sections in order, with their display titles.
    pub const STEPS: [(Section, &'static str); 5] = [
        (Section::Intro, "Introduction"),
        (Section::Psychometric, "Psychometric"),
        (Section::Technical, "Technical"),
        (Section::Wiscar, "WISCAR"),
        (Section::Results, "Results"),
    ];

    /// One-based step number.
    pub fn step(&self) -> usize {
        Self::STEPS
            .iter()
            .position(|(section, _)| section == self)
            .map_or(1, |i| i + 1)
    }

    pub fn title(&self) -> &'static str {
        Self::STEPS[self.step() - 1].1
    }

    fn of(category: Category) -> Self {
        match category {
            Category::Psychometric => Section::Psychometric,
            Category::Technical => Section::Technical,
            Category::Wiscar => Section::Wiscar,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A snapshot of session progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub section: Section,
    pub step: usize,
    pub total_steps: usize,
    /// Zero-based index of the current question.
    pub question_index: usize,
    pub answered: usize,
    pub total_questions: usize,
}

/// One respondent's pass through a catalog.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    catalog: &'a Catalog,
    section: Section,
    current: usize,
    responses: Vec<Response>,
}

impl<'a> Session<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            section: Section::Intro,
            current: 0,
            responses: Vec::new(),
        }
    }

    /// Leave the intro and show the first question.
    pub fn start(&mut self) {
        self.current = 0;
        self.section = match self.catalog.questions().first() {
            Some(q) => Section::of(q.category),
            None => Section::Results,
        };
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn is_complete(&self) -> bool {
        self.section == Section::Results
    }

    /// The question on screen, or `None` outside the question sections.
    pub fn current_question(&self) -> Option<&'a Question> {
        match self.section {
            Section::Intro | Section::Results => None,
            _ => self.catalog.questions().get(self.current),
        }
    }

    /// The stored answer to the current question, if any.
    pub fn current_answer(&self) -> Option<&Answer> {
        let question = self.current_question()?;
        self.responses
            .iter()
            .find(|r| r.question_id == question.id)
            .map(|r| &r.answer)
    }

    /// Answer the current question. Returns `false` when no question is shown.
    pub fn answer(&mut self, answer: Answer) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        self.record(Response::new(question.id.clone(), answer));
        true
    }

    /// Store a response, replacing any earlier one for the same question.
    pub fn record(&mut self, response: Response) {
        self.responses.retain(|r| r.question_id != response.question_id);
        self.responses.push(response);
    }

    /// Move to the next question, switching sections when the category
    /// changes, or to `Results` after the last question.
    pub fn advance(&mut self) -> Section {
        match self.section {
            Section::Intro => self.start(),
            Section::Results => {}
            _ => {
                let next = self.current + 1;
                match self.catalog.questions().get(next) {
                    Some(q) => {
                        self.current = next;
                        self.section = Section::of(q.category);
                    }
                    None => self.section = Section::Results,
                }
            }
        }
        self.section
    }

    pub fn progress(&self) -> Progress {
        Progress {
            section: self.section,
            step: self.section.step(),
            total_steps: Section::STEPS.len(),
            question_index: self.current,
            answered: self.responses.len(),
            total_questions: self.catalog.len(),
        }
    }

    /// The point-in-time response snapshot to hand to the engine.
    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    /// Discard all answers and return to the intro.
    pub fn restart(&mut self) {
        self.section = Section::Intro;
        self.current = 0;
        self.responses.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_sections_in_catalog_order() {
        let catalog = Catalog::carbon_auditor();
        let mut session = Session::new(&catalog);
        assert_eq!(session.section(), Section::Intro);
        assert!(session.current_question().is_none());

        session.start();
        assert_eq!(session.section(), Section::Psychometric);
        assert_eq!(session.current_question().unwrap().id, "p1");

        let mut seen = vec![session.section()];
        while !session.is_complete() {
            let section = session.advance();
            if seen.last() != Some(&section) {
                seen.push(section);
            }
        }
        assert_eq!(
            seen,
            vec![
                Section::Psychometric,
                Section::Technical,
                Section::Wiscar,
                Section::Results
            ]
        );
        assert_eq!(session.progress().step, 5);
    }

    #[test]
    fn later_answers_replace_earlier_ones() {
        let catalog = Catalog::carbon_auditor();
        let mut session = Session::new(&catalog);
        session.start();
        assert!(session.answer(Answer::Index(1)));
        assert!(session.answer(Answer::Index(3)));
        assert_eq!(session.responses().len(), 1);
        assert_eq!(session.current_answer(), Some(&Answer::Index(3)));

        session.record(Response::index("p1", 4));
        session.record(Response::index("w1", 2));
        assert_eq!(session.responses().len(), 2);
        assert_eq!(session.responses()[0].question_id, "p1");
        assert_eq!(session.responses()[0].answer, Answer::Index(4));
    }

    #[test]
    fn answering_outside_questions_is_refused() {
        let catalog = Catalog::carbon_auditor();
        let mut session = Session::new(&catalog);
        assert!(!session.answer(Answer::Index(0)));
        assert!(session.responses().is_empty());
    }

    #[test]
    fn progress_and_restart() {
        let catalog = Catalog::carbon_auditor();
        let mut session = Session::new(&catalog);
        session.advance();
        session.answer(Answer::Index(2));
        session.advance();

        let progress = session.progress();
        assert_eq!(progress.section, Section::Psychometric);
        assert_eq!(progress.step, 2);
        assert_eq!(progress.total_steps, 5);
        assert_eq!(progress.question_index, 1);
        assert_eq!(progress.answered, 1);
        assert_eq!(progress.total_questions, 18);

        session.restart();
        assert_eq!(session.section(), Section::Intro);
        assert!(session.responses().is_empty());
    }

    #[test]
    fn section_titles() {
        assert_eq!(Section::Wiscar.to_string(), "WISCAR");
        assert_eq!(Section::Intro.step(), 1);
        assert_eq!(Section::Results.step(), 5);
    }
}
