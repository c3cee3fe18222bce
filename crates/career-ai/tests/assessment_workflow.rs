//! End-to-end coverage for the assessment pipeline, driven entirely through
//! the public facade a presentation boundary would consume.

mod common {
    use std::collections::HashMap;

    use career_ai::assessment::{AdviceGenerator, CareerAdvisor, UserProfile};

    pub(super) fn advisor() -> CareerAdvisor {
        CareerAdvisor::new(AdviceGenerator::offline())
    }

    pub(super) fn form_fields() -> HashMap<String, String> {
        let mut fields = HashMap::new();
        fields.insert("name".to_string(), "Ana".to_string());
        fields.insert("education".to_string(), "Bachelor's Degree".to_string());
        fields.insert("field".to_string(), "Computer Science".to_string());
        fields.insert("skills".to_string(), "Python, SQL".to_string());
        fields.insert(
            "interests".to_string(),
            "data and machine learning".to_string(),
        );
        fields.insert(
            "career_goals".to_string(),
            "become a data scientist".to_string(),
        );
        fields.insert("timeline".to_string(), "1 year".to_string());
        fields
    }

    pub(super) fn ana() -> UserProfile {
        UserProfile::from_fields(&form_fields())
    }
}

use career_ai::assessment::advice::{provider_from_config, VertexTextGenerator};
use career_ai::assessment::ADVICE_POOL;
use career_ai::config::ProviderConfig;

#[tokio::test]
async fn full_assessment_over_the_public_api() {
    let advisor = common::advisor();
    let profile = common::ana();

    let result = advisor
        .analyze(Some(&profile))
        .await
        .expect("profile is set");

    assert_eq!(result.profile.skills, ["Python", "SQL"]);
    assert_eq!(result.career_suggestions[0].name, "Data Scientist");
    assert_eq!(result.career_suggestions.len(), 3);
    assert!(result.recommended_skills.len() <= 8);
    assert!(result.resources.len() <= 6);
    assert_eq!(result.roadmap.len(), 3);
    assert!(ADVICE_POOL.contains(&result.advice.as_str()));
}

#[tokio::test]
async fn unset_profile_yields_an_absent_result() {
    let advisor = common::advisor();

    assert!(advisor.analyze(None).await.is_none());
}

#[tokio::test]
async fn analysis_result_serializes_for_the_boundary() {
    let advisor = common::advisor();
    let profile = common::ana();

    let result = advisor
        .analyze(Some(&profile))
        .await
        .expect("profile is set");
    let payload = serde_json::to_value(&result).expect("serializable aggregate");

    for key in [
        "profile",
        "strengths",
        "growth_areas",
        "career_suggestions",
        "recommended_skills",
        "resources",
        "roadmap",
        "advice",
        "analysis_date",
    ] {
        assert!(payload.get(key).is_some(), "missing key {key}");
    }
}

#[test]
fn missing_provider_environment_means_unavailable_not_failing() {
    let unconfigured = ProviderConfig {
        credentials: None,
        project: None,
        location: "us-central1".to_string(),
        model: "text-bison@001".to_string(),
        access_token: None,
    };

    assert!(VertexTextGenerator::from_config(&unconfigured).is_none());

    let provider = provider_from_config(&unconfigured);
    assert!(!provider.is_available());
}
