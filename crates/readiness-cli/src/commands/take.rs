//! The `readiness take` command: answer the questionnaire on stdin.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use readiness_core::catalog::{Catalog, ScoringRule};
use readiness_core::engine::AssessmentEngine;
use readiness_core::model::{Answer, Question};
use readiness_core::session::{Section, Session};

use crate::config::load_config_from;

pub fn execute(
    catalog_path: Option<PathBuf>,
    format: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let catalog = super::resolve_catalog(catalog_path, &config)?;
    let format = format.unwrap_or(config.default_format);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(catalog, &format, stdin.lock(), stdout.lock())
}

/// Drive a session over `input`, writing prompts and the final report to
/// `output`. Every question needs an answer before moving on; end of input
/// leaves the remaining questions unanswered.
pub fn run<R: BufRead, W: Write>(
    catalog: Catalog,
    format: &str,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let mut session = Session::new(&catalog);

    writeln!(
        output,
        "{} ({} questions)\nEnter an option number.",
        catalog.name(),
        catalog.len()
    )?;

    session.start();
    let mut shown = Section::Intro;
    let mut line = String::new();

    'questions: while let Some(question) = session.current_question() {
        let progress = session.progress();
        if progress.section != shown {
            shown = progress.section;
            writeln!(
                output,
                "\n== {} (step {}/{}) ==",
                shown, progress.step, progress.total_steps
            )?;
        }

        writeln!(
            output,
            "\n[{}/{}] {}",
            progress.question_index + 1,
            progress.total_questions,
            question.text
        )?;
        for (i, option) in question.options.iter().enumerate() {
            writeln!(output, "  {}. {}", i + 1, option)?;
        }

        loop {
            write!(output, "> ")?;
            output.flush()?;

            line.clear();
            let read = input
                .read_line(&mut line)
                .context("failed to read answer")?;
            if read == 0 {
                break 'questions;
            }

            match parse_answer(&catalog, question, line.trim()) {
                Ok(answer) => {
                    session.answer(answer);
                    break;
                }
                Err(msg) => writeln!(output, "{msg}")?,
            }
        }

        session.advance();
    }

    tracing::debug!(
        "session ended with {} of {} questions answered",
        session.responses().len(),
        catalog.len()
    );

    let engine = AssessmentEngine::new(catalog.clone());
    let result = engine.evaluate(session.responses())?;
    writeln!(output, "\n{}", super::render_result(&catalog, &result, format)?)?;

    Ok(())
}

/// Choice questions take a one-based option number; questions without
/// options take free text. Blank input is refused.
fn parse_answer(catalog: &Catalog, question: &Question, input: &str) -> Result<Answer, String> {
    if input.is_empty() {
        return Err("Please select an answer to continue.".to_string());
    }
    if question.options.is_empty() {
        return Ok(Answer::Text(input.to_string()));
    }

    let count = question.options.len();
    let index = match input.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => n - 1,
        _ => return Err(format!("Please enter a number between 1 and {count}.")),
    };

    Ok(match catalog.scoring_rule(question) {
        ScoringRule::Likert => Answer::Index(index),
        ScoringRule::CorrectAnswer | ScoringRule::AnswerTable => {
            Answer::Text(question.options[index].clone())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take(input: &str) -> String {
        let mut out = Vec::new();
        run(Catalog::carbon_auditor(), "text", input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn no_input_scores_the_empty_collection() {
        let out = take("");
        assert!(out.contains("== Psychometric (step 2/5) =="));
        assert!(out.contains("Overall score: 20%"));
    }

    #[test]
    fn invalid_choices_are_reprompted() {
        let out = take("9\nabc\n5\n");
        assert_eq!(out.matches("Please enter a number between 1 and 5.").count(), 2);
        assert!(out.contains("[2/18]"));
    }

    #[test]
    fn blank_lines_do_not_skip_questions() {
        let out = take("\n\n3\n");
        assert_eq!(out.matches("Please select an answer to continue.").count(), 2);
        assert!(out.contains("[2/18]"));
        assert!(!out.contains("[3/18]"));
    }

    #[test]
    fn answers_map_to_the_scoring_rule() {
        let catalog = Catalog::carbon_auditor();
        let likert = catalog.question("p1").unwrap();
        assert_eq!(
            parse_answer(&catalog, likert, "4"),
            Ok(Answer::Index(3))
        );

        let technical = catalog.question("t3").unwrap();
        assert_eq!(
            parse_answer(&catalog, technical, "1"),
            Ok(Answer::Text(technical.options[0].clone()))
        );
        assert!(parse_answer(&catalog, technical, "").is_err());
        assert!(parse_answer(&catalog, technical, "0").is_err());
    }

    #[test]
    fn full_run_reaches_the_wiscar_section() {
        let input = "1\n".repeat(18);
        let out = take(&input);
        assert!(out.contains("== Technical (step 3/5) =="));
        assert!(out.contains("== WISCAR (step 4/5) =="));
        assert!(out.contains("Suggested learning path:"));
    }
}
