use std::collections::HashMap;

use tracing::info;

use career_ai::assessment::{rank_careers, CareerAdvisor, CareerCatalog, UserProfile};
use career_ai::config::AppConfig;
use career_ai::error::AppError;

use crate::cli::AssessArgs;

pub(crate) async fn run_assessment(args: AssessArgs, config: &AppConfig) -> Result<(), AppError> {
    let mut fields = HashMap::new();
    for (key, value) in [
        ("name", &args.name),
        ("education", &args.education),
        ("field", &args.field),
        ("skills", &args.skills),
        ("interests", &args.interests),
        ("career_goals", &args.career_goals),
        ("timeline", &args.timeline),
    ] {
        if let Some(value) = value {
            fields.insert(key.to_string(), value.clone());
        }
    }
    let profile = UserProfile::from_fields(&fields);

    info!(name = %profile.name, skills = profile.skills.len(), "assessment requested");

    let advisor = CareerAdvisor::from_config(config);
    let Some(result) = advisor.analyze(Some(&profile)).await else {
        println!("No profile provided; nothing to analyze.");
        return Ok(());
    };

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Analysis payload unavailable: {err}"),
        }
        return Ok(());
    }

    println!("Career & Skills Assessment");
    if result.profile.name.is_empty() {
        println!("Hello!");
    } else {
        println!("Hello {}!", result.profile.name);
    }
    println!("Analysis date: {}", result.analysis_date);

    println!("\nStrengths");
    if result.strengths.is_empty() {
        println!("- none recorded yet; the roadmap below will change that");
    }
    for strength in &result.strengths {
        println!("- {strength}");
    }

    println!("\nGrowth areas");
    for area in &result.growth_areas {
        println!("- {area}");
    }

    println!("\nCareer suggestions");
    for (position, career) in result.career_suggestions.iter().enumerate() {
        println!(
            "{}. {} (key skills: {})",
            position + 1,
            career.name,
            career.skills.join(", ")
        );
    }

    let ranked = rank_careers(&profile, advisor.catalog());
    if let Some(top) = ranked.first() {
        println!("\nWhy {} leads the list", top.entry.name);
        for signal in &top.signals {
            println!("- +{} {}", signal.points, signal.detail);
        }
    }

    println!("\nRecommended skills to develop");
    for skill in &result.recommended_skills {
        println!("- {skill}");
    }

    println!("\nFree learning resources");
    for resource in &result.resources {
        println!("- {resource}");
    }

    let timeline = if result.profile.timeline.is_empty() {
        "6-month".to_string()
    } else {
        result.profile.timeline.clone()
    };
    println!("\nYour {timeline} roadmap");
    for phase in &result.roadmap {
        println!("\n{}: {}", phase.window, phase.focus);
        for task in phase.tasks {
            println!("  - {task}");
        }
    }

    println!("\nMotivation tip");
    println!("{}", result.advice);

    Ok(())
}

pub(crate) fn run_catalog() {
    let catalog = CareerCatalog::standard();

    println!("Career catalog");
    for category in catalog.categories() {
        println!("\n[{}]", category.name);
        for career in category.careers {
            println!("- {} (key skills: {})", career.name, career.skills.join(", "));
        }
    }
}
