use criterion::{black_box, criterion_group, criterion_main, Criterion};

use readiness_core::catalog::Catalog;
use readiness_core::engine::AssessmentEngine;
use readiness_core::model::{Answer, Category, Response};
use readiness_core::scoring::{likert_score, raw_score, score_dimension, Grouping};

fn full_responses(catalog: &Catalog) -> Vec<Response> {
    catalog
        .questions()
        .iter()
        .enumerate()
        .map(|(i, q)| match catalog.correct_answer(&q.id) {
            Some(answer) => Response::text(q.id.clone(), answer),
            None if q.options.is_empty() => Response::index(q.id.clone(), 0),
            None if catalog.answer_values(&q.id).is_some() => {
                Response::text(q.id.clone(), q.options[i % q.options.len()].clone())
            }
            None => Response::index(q.id.clone(), i % q.options.len()),
        })
        .collect()
}

fn bench_raw_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_score");
    let catalog = Catalog::carbon_auditor();

    group.bench_function("likert_index", |b| {
        b.iter(|| likert_score(black_box(3), black_box(5)))
    });

    if let Some(q) = catalog.question("p1") {
        let answer = Answer::Index(3);
        group.bench_function("likert_question", |b| {
            b.iter(|| raw_score(black_box(&catalog), black_box(q), black_box(&answer)))
        });
    }

    if let Some(q) = catalog.question("t3") {
        let answer = Answer::from("ISO 14064-1");
        group.bench_function("correct_answer", |b| {
            b.iter(|| raw_score(black_box(&catalog), black_box(q), black_box(&answer)))
        });
    }

    if let Some(q) = catalog.question("c1") {
        let answer = Answer::from("Flag the inconsistencies and request clarification");
        group.bench_function("answer_table", |b| {
            b.iter(|| raw_score(black_box(&catalog), black_box(q), black_box(&answer)))
        });
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let engine: AssessmentEngine = AssessmentEngine::default();
    let responses = full_responses(engine.catalog());
    let empty: Vec<Response> = Vec::new();

    group.bench_function("technical_group", |b| {
        b.iter(|| {
            score_dimension(
                black_box(engine.catalog()),
                black_box(&responses),
                Grouping::Category(Category::Technical),
            )
        })
    });

    group.bench_function("empty", |b| b.iter(|| engine.evaluate(black_box(&empty))));

    group.bench_function("full_catalog", |b| {
        b.iter(|| engine.evaluate(black_box(&responses)))
    });

    group.finish();
}

criterion_group!(benches, bench_raw_score, bench_evaluate);
criterion_main!(benches);
