//! Deterministic consumer-credit engine: score calculation, tier
//! classification, default-risk estimation, loan pricing, amortization,
//! and improvement suggestions, plus a CSV batch layer over the same
//! calculators.

pub mod batch;
pub mod config;
pub mod error;
pub mod pricing;
pub mod scoring;
pub mod telemetry;
