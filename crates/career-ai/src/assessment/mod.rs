//! Career and skills assessment pipeline: catalog matching, learning-resource
//! recommendation, roadmap construction, and motivational advice.

pub mod advice;
pub mod catalog;
pub mod domain;
mod insights;
pub mod matcher;
pub mod resources;
pub mod roadmap;
pub mod service;

#[cfg(test)]
mod tests;

pub use advice::{AdviceGenerator, TextGenerator, ADVICE_POOL};
pub use catalog::CareerCatalog;
pub use domain::{AnalysisResult, CareerCategory, CareerEntry, ProfileInsights, UserProfile};
pub use insights::assess_profile;
pub use matcher::{rank_careers, suggest_careers, MatchSignal, ScoredCareer, SignalKind};
pub use resources::{recommend_resources, ResourceBuckets};
pub use roadmap::{build_roadmap, RoadmapPhase};
pub use service::CareerAdvisor;
