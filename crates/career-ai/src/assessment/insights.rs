use super::domain::{ProfileInsights, UserProfile};

const TECH_SKILL_MARKERS: &[&str] = &["python", "javascript", "programming", "coding"];

const GROWTH_AREAS: &[&str] = &[
    "Networking",
    "Industry Knowledge",
    "Practical Experience",
    "Soft Skills",
];

/// Derive strengths and growth areas from the profile. Strengths come from a
/// small rule set over skill count, technical markers, and stated interests;
/// growth areas are a fixed list every newcomer benefits from.
pub fn assess_profile(profile: &UserProfile) -> ProfileInsights {
    let mut strengths = Vec::new();

    if profile.skills.len() >= 3 {
        strengths.push("Strong skill foundation".to_string());
    }

    let skills_text = profile.joined_skills_text();
    if TECH_SKILL_MARKERS
        .iter()
        .any(|marker| skills_text.contains(marker))
    {
        strengths.push("Technical aptitude".to_string());
    }

    if profile.interests.to_lowercase().contains("communication") {
        strengths.push("Communication-oriented".to_string());
    }

    ProfileInsights {
        strengths,
        growth_areas: GROWTH_AREAS.iter().map(|area| area.to_string()).collect(),
    }
}
