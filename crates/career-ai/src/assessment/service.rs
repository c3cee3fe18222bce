use chrono::Local;
use tracing::info;

use super::advice::AdviceGenerator;
use super::catalog::CareerCatalog;
use super::domain::{AnalysisResult, UserProfile};
use super::insights::assess_profile;
use super::matcher::suggest_careers;
use super::resources::{recommend_resources, ResourceBuckets};
use super::roadmap::build_roadmap;
use crate::config::AppConfig;

/// Presentation bound for unique recommended skills.
const RECOMMENDED_SKILL_LIMIT: usize = 8;
/// Presentation bound for learning resources.
const RESOURCE_LIMIT: usize = 6;

/// Service composing the catalog, matcher, resource buckets, roadmap, and
/// advice generator into the single assessment pipeline.
pub struct CareerAdvisor {
    catalog: CareerCatalog,
    buckets: ResourceBuckets,
    advice: AdviceGenerator,
}

impl CareerAdvisor {
    pub fn new(advice: AdviceGenerator) -> Self {
        Self {
            catalog: CareerCatalog::standard(),
            buckets: ResourceBuckets::standard(),
            advice,
        }
    }

    /// Advisor wired from configuration: real text generation when the
    /// environment provides it, the local pool otherwise.
    pub fn from_config(config: &AppConfig) -> Self {
        let provider = super::advice::provider_from_config(&config.provider);
        Self::new(AdviceGenerator::new(provider, config.advice.budget()))
    }

    pub fn catalog(&self) -> &CareerCatalog {
        &self.catalog
    }

    /// Run the full assessment. An unset profile yields an absent result so
    /// the presentation boundary can prompt re-entry; it is never an error.
    pub async fn analyze(&self, profile: Option<&UserProfile>) -> Option<AnalysisResult> {
        let profile = profile?;

        let insights = assess_profile(profile);
        let career_suggestions = suggest_careers(profile, &self.catalog);

        let required_skills: Vec<String> = career_suggestions
            .iter()
            .flat_map(|career| career.skills.iter().map(|skill| skill.to_string()))
            .collect();

        let mut recommended_skills = Vec::new();
        for skill in &required_skills {
            if !recommended_skills.contains(skill) {
                recommended_skills.push(skill.clone());
            }
            if recommended_skills.len() == RECOMMENDED_SKILL_LIMIT {
                break;
            }
        }

        let resources: Vec<String> = recommend_resources(&required_skills, &self.buckets)
            .into_iter()
            .take(RESOURCE_LIMIT)
            .collect();

        let advice = self.advice.generate(profile).await;

        info!(
            suggestions = career_suggestions.len(),
            resources = resources.len(),
            "assessment completed"
        );

        Some(AnalysisResult {
            profile: profile.clone(),
            strengths: insights.strengths,
            growth_areas: insights.growth_areas,
            career_suggestions,
            recommended_skills,
            resources,
            roadmap: build_roadmap(),
            advice,
            analysis_date: Local::now().format("%B %d, %Y").to_string(),
        })
    }
}
