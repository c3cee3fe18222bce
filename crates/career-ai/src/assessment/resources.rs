use std::collections::BTreeSet;

/// One keyword-classified bucket of learning resources. `take` bounds how many
/// of its resources a single classification contributes.
#[derive(Debug, Clone, Copy)]
struct ResourceBucket {
    markers: &'static [&'static str],
    resources: &'static [&'static str],
    take: usize,
}

/// Fixed resource buckets checked in priority order; the first bucket whose
/// marker matches a skill wins for that skill.
#[derive(Debug)]
pub struct ResourceBuckets {
    buckets: Vec<ResourceBucket>,
    general: &'static [&'static str],
}

impl ResourceBuckets {
    pub fn standard() -> Self {
        Self {
            buckets: vec![
                ResourceBucket {
                    markers: &["python", "javascript", "programming", "coding", "git"],
                    resources: &[
                        "freeCodeCamp - Complete web development curriculum",
                        "Codecademy - Interactive coding lessons",
                        "Python.org Tutorial - Official Python documentation",
                    ],
                    take: 2,
                },
                ResourceBucket {
                    markers: &[
                        "security",
                        "penetration",
                        "vulnerability",
                        "forensics",
                        "network security",
                    ],
                    resources: &[
                        "TryHackMe - Guided hands-on security labs",
                        "OverTheWire - Wargames for security fundamentals",
                        "OWASP - Open application security resources",
                    ],
                    take: 3,
                },
                ResourceBucket {
                    markers: &["data", "analytics", "statistics", "ml", "machine learning"],
                    resources: &[
                        "Kaggle Learn - Free micro-courses in data science",
                        "Coursera Audit - Data Science courses (audit for free)",
                        "YouTube: StatQuest - Statistics and ML concepts",
                    ],
                    take: 2,
                },
                ResourceBucket {
                    markers: &["design", "figma", "ui", "ux", "prototyping"],
                    resources: &[
                        "Figma Academy - Free design tutorials",
                        "Adobe Creative Cloud Tutorials - Free design resources",
                        "Dribbble - Design inspiration and tutorials",
                    ],
                    take: 2,
                },
                ResourceBucket {
                    markers: &["marketing", "business", "strategy", "communication"],
                    resources: &[
                        "Google Digital Marketing Courses - Free certification",
                        "HubSpot Academy - Free marketing and sales courses",
                        "Coursera Business Courses - Audit mode available",
                    ],
                    take: 2,
                },
            ],
            general: &[
                "LinkedIn Learning - Often free through libraries",
                "YouTube - Vast collection of tutorial videos",
                "edX - Free courses from top universities",
            ],
        }
    }
}

impl Default for ResourceBuckets {
    fn default() -> Self {
        Self::standard()
    }
}

/// Map skills to a deduplicated set of learning resources.
///
/// Each skill is lowercased and classified into the first bucket whose marker
/// it contains (substring match); that bucket contributes its bounded slice.
/// Skills matching no bucket contribute nothing. An empty result falls back
/// to the first three general resources. Callers must not rely on any
/// particular ordering beyond set semantics.
pub fn recommend_resources(skills: &[String], buckets: &ResourceBuckets) -> BTreeSet<String> {
    let mut recommended = BTreeSet::new();

    for skill in skills {
        let skill = skill.to_lowercase();
        let matched = buckets.buckets.iter().find(|bucket| {
            bucket
                .markers
                .iter()
                .any(|marker| skill.contains(marker))
        });

        if let Some(bucket) = matched {
            recommended.extend(
                bucket
                    .resources
                    .iter()
                    .take(bucket.take)
                    .map(|resource| resource.to_string()),
            );
        }
    }

    if recommended.is_empty() {
        recommended.extend(
            buckets
                .general
                .iter()
                .take(3)
                .map(|resource| resource.to_string()),
        );
    }

    recommended
}
