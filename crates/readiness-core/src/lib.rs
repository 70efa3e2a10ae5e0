//! readiness-core: scoring and classification engine for career-readiness
//! questionnaires.
//!
//! This crate defines the question catalog, the response model, and the
//! pure computation that turns a response collection into a readiness
//! report.

pub mod aggregate;
pub mod catalog;
pub mod classify;
pub mod engine;
pub mod error;
pub mod model;
pub mod narrative;
pub mod parser;
pub mod report;
pub mod scoring;
pub mod session;
