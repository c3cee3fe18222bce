use super::common::*;
use crate::assessment::assess_profile;

#[test]
fn three_skills_count_as_a_foundation() {
    let insights = assess_profile(&profile(&["Excel", "Writing", "Research"], "", ""));

    assert!(insights
        .strengths
        .contains(&"Strong skill foundation".to_string()));
    assert!(!insights.strengths.contains(&"Technical aptitude".to_string()));
}

#[test]
fn technical_markers_signal_aptitude() {
    let insights = assess_profile(&profile(&["Python"], "", ""));

    assert_eq!(insights.strengths, ["Technical aptitude"]);
}

#[test]
fn communication_interest_is_recognized() {
    let insights = assess_profile(&profile(&[], "communication and writing", ""));

    assert_eq!(insights.strengths, ["Communication-oriented"]);
}

#[test]
fn growth_areas_are_fixed() {
    let insights = assess_profile(&empty_profile());

    assert!(insights.strengths.is_empty());
    assert_eq!(
        insights.growth_areas,
        [
            "Networking",
            "Industry Knowledge",
            "Practical Experience",
            "Soft Skills"
        ]
    );
}
