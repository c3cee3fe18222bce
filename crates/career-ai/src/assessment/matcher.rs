use std::cmp::Reverse;

use serde::Serialize;

use super::catalog::CareerCatalog;
use super::domain::{CareerEntry, UserProfile};

const KEYWORD_POINTS: i32 = 10;
const SKILL_POINTS: i32 = 5;
const CATEGORY_POINTS: i32 = 3;
const GOAL_NAME_POINTS: i32 = 15;

/// How many scored entries survive ranking before the final cut.
const RANKED_LIMIT: usize = 5;
/// How many suggestions the caller ultimately receives.
pub(crate) const SUGGESTION_LIMIT: usize = 3;

/// Signal classes feeding an entry's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SignalKind {
    Keyword,
    Skill,
    Category,
    GoalName,
}

/// Discrete contribution to a career score, kept so rankings can be audited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSignal {
    pub kind: SignalKind,
    pub points: i32,
    pub detail: String,
}

/// Transient ranking row produced by [`rank_careers`].
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCareer {
    pub score: i32,
    pub entry: CareerEntry,
    pub signals: Vec<MatchSignal>,
}

/// Score every catalog entry against the profile and return the top ranked
/// rows, highest score first. Entries scoring zero are dropped; equal scores
/// keep catalog order.
///
/// Matching is plain substring containment, not word-boundary tokenization:
/// a marker such as "ai" also matches inside longer words.
pub fn rank_careers(profile: &UserProfile, catalog: &CareerCatalog) -> Vec<ScoredCareer> {
    let user_text = profile.interest_goal_text();
    let user_skills_text = profile.joined_skills_text();
    let goals_text = profile.career_goals.to_lowercase();

    let mut ranked: Vec<ScoredCareer> = catalog
        .entries()
        .map(|(category, entry)| score_entry(category.name, entry, &user_text, &user_skills_text, &goals_text))
        .filter(|scored| scored.score > 0)
        .collect();

    ranked.sort_by_key(|scored| Reverse(scored.score));
    ranked.truncate(RANKED_LIMIT);
    ranked
}

fn score_entry(
    category: &'static str,
    entry: &CareerEntry,
    user_text: &str,
    user_skills_text: &str,
    goals_text: &str,
) -> ScoredCareer {
    let mut signals = Vec::new();

    for keyword in entry.keywords {
        if user_text.contains(keyword) {
            signals.push(MatchSignal {
                kind: SignalKind::Keyword,
                points: KEYWORD_POINTS,
                detail: format!("interest text mentions \"{keyword}\""),
            });
        }
    }

    for skill in entry.skills {
        if user_skills_text.contains(&skill.to_lowercase()) {
            signals.push(MatchSignal {
                kind: SignalKind::Skill,
                points: SKILL_POINTS,
                detail: format!("already practicing {skill}"),
            });
        }
    }

    if user_text.contains(category) {
        signals.push(MatchSignal {
            kind: SignalKind::Category,
            points: CATEGORY_POINTS,
            detail: format!("interest text mentions the {category} field"),
        });
    }

    if goals_text.contains(&entry.name.to_lowercase()) {
        signals.push(MatchSignal {
            kind: SignalKind::GoalName,
            points: GOAL_NAME_POINTS,
            detail: format!("career goal names {} directly", entry.name),
        });
    }

    ScoredCareer {
        score: signals.iter().map(|signal| signal.points).sum(),
        entry: *entry,
        signals,
    }
}

/// Select up to three career suggestions for the profile.
///
/// The primary path projects the ranked rows from [`rank_careers`]. When
/// nothing scores, two deterministic fallback tiers take over: first a
/// skill-marker lookup into fixed catalog positions, then a fixed default
/// trio. The result never exceeds three entries and never panics, whatever
/// the input.
pub fn suggest_careers(profile: &UserProfile, catalog: &CareerCatalog) -> Vec<CareerEntry> {
    let mut suggestions: Vec<CareerEntry> = rank_careers(profile, catalog)
        .into_iter()
        .map(|scored| scored.entry)
        .take(SUGGESTION_LIMIT)
        .collect();

    if suggestions.is_empty() {
        suggestions = skill_marker_fallback(&profile.joined_skills_text(), catalog);
    }

    if suggestions.is_empty() {
        suggestions = default_suggestions(catalog);
    }

    suggestions.truncate(SUGGESTION_LIMIT);
    suggestions
}

/// Tier-1 fallback: broad skill markers mapped to fixed catalog positions.
/// Each marker group contributes at most one entry; nothing is re-scored.
fn skill_marker_fallback(user_skills_text: &str, catalog: &CareerCatalog) -> Vec<CareerEntry> {
    const MARKER_GROUPS: &[(&[&str], &str, usize)] = &[
        (&["web", "html", "css", "javascript"], "tech", 1),
        (&["python", "programming", "coding"], "tech", 0),
        (&["ai", "data", "analytics"], "data", 0),
    ];

    let mut fallback = Vec::new();
    for (markers, category, index) in MARKER_GROUPS {
        if markers.iter().any(|marker| user_skills_text.contains(marker)) {
            if let Some(entry) = catalog.entry_at(category, *index) {
                fallback.push(entry);
            }
        }
    }
    fallback
}

/// Tier-2 fallback: fixed beginner-friendly default set.
fn default_suggestions(catalog: &CareerCatalog) -> Vec<CareerEntry> {
    [("tech", 0), ("business", 1), ("data", 1)]
        .iter()
        .filter_map(|(category, index)| catalog.entry_at(category, *index))
        .collect()
}
