//! Rule-based career and skills assessment engine.
//!
//! The [`assessment`] module holds the full pipeline: a fixed career catalog
//! scored against a user profile, keyword-bucketed learning resources, a
//! generic development roadmap, and motivational advice with an optional
//! external text-generation provider behind a strict latency budget.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
