use std::collections::HashMap;

use serde::Serialize;

use super::roadmap::RoadmapPhase;

/// One career path in the reference catalog: the skills it requires and the
/// free-text keywords that signal interest in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareerEntry {
    pub name: &'static str,
    pub skills: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

/// Named group of career entries. Category names are lowercase so they can be
/// matched directly against normalized profile text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareerCategory {
    pub name: &'static str,
    pub careers: &'static [CareerEntry],
}

/// Snapshot of one user's background, built once per assessment request and
/// immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub education: String,
    pub field: String,
    pub skills: Vec<String>,
    pub interests: String,
    pub career_goals: String,
    pub timeline: String,
}

impl UserProfile {
    /// Build a profile from raw form-style fields. Missing keys default to
    /// empty values; the skills field is comma-split with empty entries
    /// dropped.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let field = |key: &str| fields.get(key).cloned().unwrap_or_default();

        let skills = field("skills")
            .split(',')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            name: field("name"),
            education: field("education"),
            field: field("field"),
            skills,
            interests: field("interests"),
            career_goals: field("career_goals"),
            timeline: field("timeline"),
        }
    }

    /// Lowercased interests and goals joined with a single space, the text the
    /// matcher scans for keyword and category signals.
    pub(crate) fn interest_goal_text(&self) -> String {
        format!("{} {}", self.interests, self.career_goals).to_lowercase()
    }

    /// Lowercased comma-joined skill list scanned for skill signals.
    pub(crate) fn joined_skills_text(&self) -> String {
        self.skills.join(", ").to_lowercase()
    }
}

/// Strengths and growth areas derived from the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileInsights {
    pub strengths: Vec<String>,
    pub growth_areas: Vec<String>,
}

/// Aggregate handed to the presentation boundary. Constructed fresh per
/// request and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub profile: UserProfile,
    pub strengths: Vec<String>,
    pub growth_areas: Vec<String>,
    pub career_suggestions: Vec<CareerEntry>,
    pub recommended_skills: Vec<String>,
    pub resources: Vec<String>,
    pub roadmap: Vec<RoadmapPhase>,
    pub advice: String,
    pub analysis_date: String,
}
