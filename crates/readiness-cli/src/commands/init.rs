//! The `readiness init` command.

use std::path::Path;

use anyhow::{Context, Result};

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("readiness.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("catalogs").context("failed to create catalogs/")?;
    write_if_missing(Path::new("catalogs/example.toml"), EXAMPLE_CATALOG)?;

    std::fs::create_dir_all("responses").context("failed to create responses/")?;
    write_if_missing(Path::new("responses/example.json"), EXAMPLE_RESPONSES)?;

    println!("\nNext steps:");
    println!("  1. Run: readiness validate --catalog catalogs/example.toml");
    println!("  2. Run: readiness score --responses responses/example.json");
    println!("  3. Run: readiness take");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# readiness configuration

# Catalog used when --catalog is not given. Omit to use the built-in
# carbon auditor instrument. ${VAR} references are expanded.
catalog = "catalogs/example.toml"

# text, json or markdown
default_format = "text"
"#;

const EXAMPLE_CATALOG: &str = r#"[catalog]
id = "example"
name = "Example Readiness Check"
description = "A short catalog covering every scoring rule"

[[questions]]
id = "p1"
text = "I enjoy working through detailed data."
type = "likert"
options = ["Strongly Disagree", "Disagree", "Neutral", "Agree", "Strongly Agree"]
category = "psychometric"
subcategory = "interest"
weight = 1.2

[[questions]]
id = "p2"
text = "How do you approach a complex problem?"
type = "multiple-choice"
options = ["Break it into parts", "Ask an expert", "Trial and error"]
category = "psychometric"
subcategory = "problem-solving"

[questions.answer_values]
"Break it into parts" = 100
"Ask an expert" = 70
"Trial and error" = 30

[[questions]]
id = "t1"
text = "Which scope covers purchased electricity?"
type = "multiple-choice"
options = ["Scope 1", "Scope 2", "Scope 3"]
category = "technical"
subcategory = "fundamentals"
correct_answer = "Scope 2"

[[questions]]
id = "t2"
text = "1,000 kWh at 0.5 kg CO2/kWh emits how much?"
type = "multiple-choice"
options = ["50 kg CO2", "500 kg CO2", "5,000 kg CO2"]
category = "technical"
subcategory = "calculation"
weight = 1.3
correct_answer = "500 kg CO2"

[[questions]]
id = "w1"
text = "I keep studying when the material gets hard."
type = "likert"
options = ["Very Unlikely", "Unlikely", "Neutral", "Likely", "Very Likely"]
category = "wiscar"
subcategory = "will"

[[questions]]
id = "i1"
text = "I read about sustainability in my free time."
type = "likert"
options = ["Never", "Rarely", "Sometimes", "Often", "Always"]
category = "wiscar"
subcategory = "interest"

[[questions]]
id = "s1"
text = "Rate your spreadsheet skills."
type = "likert"
options = ["Beginner", "Basic", "Intermediate", "Advanced", "Expert"]
category = "wiscar"
subcategory = "skill"

[[questions]]
id = "c1"
text = "A supplier's data does not add up. What do you do?"
type = "scenario"
options = ["Flag it and ask for clarification", "Fix it myself", "Ignore it"]
category = "wiscar"
subcategory = "cognitive"

[questions.answer_values]
"Flag it and ask for clarification" = 100
"Fix it myself" = 50
"Ignore it" = 10

[[questions]]
id = "a1"
text = "How do you take critical feedback?"
type = "scenario"
options = ["I seek it out", "I accept it", "I avoid it"]
category = "wiscar"
subcategory = "ability"

[questions.answer_values]
"I seek it out" = 100
"I accept it" = 70
"I avoid it" = 20

[[questions]]
id = "r1"
text = "Auditing work appeals to me day to day."
type = "likert"
options = ["Strongly Disagree", "Disagree", "Neutral", "Agree", "Strongly Agree"]
category = "wiscar"
subcategory = "realWorld"
"#;

const EXAMPLE_RESPONSES: &str = r#"[
  { "questionId": "p1", "answer": 3, "timeSpent": 6.5 },
  { "questionId": "p2", "answer": "Break it into parts" },
  { "questionId": "t1", "answer": "Scope 2" },
  { "questionId": "t2", "answer": "50 kg CO2" },
  { "questionId": "w1", "answer": 4 },
  { "questionId": "i1", "answer": 3 },
  { "questionId": "s1", "answer": 2 },
  { "questionId": "c1", "answer": "Flag it and ask for clarification" },
  { "questionId": "a1", "answer": "I accept it" },
  { "questionId": "r1", "answer": 3 }
]
"#;
