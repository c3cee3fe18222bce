use serde::Serialize;

/// One phase of the generic skill-development roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoadmapPhase {
    pub window: &'static str,
    pub focus: &'static str,
    pub tasks: &'static [&'static str],
}

/// Fixed three-phase roadmap handed to every assessment. Carries no scoring
/// logic; it exists as a boundary contract for the presentation layer.
pub fn build_roadmap() -> Vec<RoadmapPhase> {
    vec![
        RoadmapPhase {
            window: "Month 1-2",
            focus: "Foundation Building",
            tasks: &[
                "Complete beginner courses in your chosen field",
                "Set up a learning routine (2-3 hours daily)",
                "Join relevant online communities",
                "Create a learning portfolio/project folder",
            ],
        },
        RoadmapPhase {
            window: "Month 3-4",
            focus: "Skill Development",
            tasks: &[
                "Work on 2-3 practical projects",
                "Network with professionals in your field",
                "Attend virtual meetups or webinars",
                "Update LinkedIn profile and resume",
            ],
        },
        RoadmapPhase {
            window: "Month 5-6",
            focus: "Application & Growth",
            tasks: &[
                "Apply skills to real-world problems",
                "Seek internships or volunteer opportunities",
                "Build a portfolio website or showcase",
                "Start applying for entry-level positions",
            ],
        },
    ]
}
