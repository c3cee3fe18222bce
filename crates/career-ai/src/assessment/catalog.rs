use super::domain::{CareerCategory, CareerEntry};

/// Fixed reference catalog of career paths. Loaded once, never mutated;
/// category and entry order doubles as the tie-break order during matching.
#[derive(Debug)]
pub struct CareerCatalog {
    categories: Vec<CareerCategory>,
}

impl CareerCatalog {
    pub fn standard() -> Self {
        Self {
            categories: standard_categories(),
        }
    }

    pub fn categories(&self) -> &[CareerCategory] {
        &self.categories
    }

    /// Iterate every entry in catalog order together with its category.
    pub fn entries(&self) -> impl Iterator<Item = (&CareerCategory, &CareerEntry)> {
        self.categories
            .iter()
            .flat_map(|category| category.careers.iter().map(move |entry| (category, entry)))
    }

    /// Positional lookup used by the fallback tiers.
    pub(crate) fn entry_at(&self, category: &str, index: usize) -> Option<CareerEntry> {
        self.categories
            .iter()
            .find(|candidate| candidate.name == category)
            .and_then(|category| category.careers.get(index))
            .copied()
    }
}

impl Default for CareerCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_categories() -> Vec<CareerCategory> {
    vec![
        CareerCategory {
            name: "tech",
            careers: &[
                CareerEntry {
                    name: "Software Developer",
                    skills: &["Python", "JavaScript", "Git", "Problem Solving"],
                    keywords: &["software", "programming", "coding", "developer", "building apps"],
                },
                CareerEntry {
                    name: "Web Developer",
                    skills: &["HTML", "CSS", "JavaScript", "React", "Node.js"],
                    keywords: &["web", "website", "frontend", "backend", "full stack"],
                },
                CareerEntry {
                    name: "DevOps Engineer",
                    skills: &["Linux", "Docker", "Kubernetes", "AWS", "CI/CD"],
                    keywords: &["devops", "infrastructure", "automation", "cloud", "deployment"],
                },
            ],
        },
        CareerCategory {
            name: "data",
            careers: &[
                CareerEntry {
                    name: "Data Scientist",
                    skills: &["Python", "Statistics", "Machine Learning", "SQL"],
                    keywords: &["data", "machine learning", "statistics", "analytics", "ai"],
                },
                CareerEntry {
                    name: "Data Analyst",
                    skills: &["Excel", "SQL", "Python", "Data Visualization"],
                    keywords: &["data", "analysis", "reporting", "dashboards", "insights"],
                },
            ],
        },
        CareerCategory {
            name: "business",
            careers: &[
                CareerEntry {
                    name: "Product Manager",
                    skills: &["Strategy", "Analytics", "Communication", "Agile"],
                    keywords: &["product", "management", "leadership", "roadmap", "stakeholders"],
                },
                CareerEntry {
                    name: "Digital Marketing",
                    skills: &["SEO", "Content Marketing", "Analytics", "Social Media"],
                    keywords: &["marketing", "advertising", "branding", "social media", "content"],
                },
                CareerEntry {
                    name: "Business Analyst",
                    skills: &["Excel", "SQL", "Process Mapping", "Requirements Analysis"],
                    keywords: &["business", "process", "requirements", "consulting", "operations"],
                },
            ],
        },
        CareerCategory {
            name: "design",
            careers: &[
                CareerEntry {
                    name: "UX/UI Designer",
                    skills: &["Figma", "User Research", "Prototyping", "Design Systems"],
                    keywords: &["design", "user experience", "ux", "ui", "creative"],
                },
                CareerEntry {
                    name: "Graphic Designer",
                    skills: &["Adobe Creative Suite", "Typography", "Branding", "Layout"],
                    keywords: &["design", "graphics", "visual", "illustration", "branding"],
                },
            ],
        },
        CareerCategory {
            name: "security",
            careers: &[
                CareerEntry {
                    name: "Cybersecurity Analyst",
                    skills: &["Network Security", "Linux", "Python", "Incident Response"],
                    keywords: &["security", "cybersecurity", "defense", "threats", "monitoring"],
                },
                CareerEntry {
                    name: "Penetration Tester",
                    skills: &[
                        "Penetration Testing",
                        "Vulnerability Assessment",
                        "Networking",
                        "Scripting",
                    ],
                    keywords: &["security", "penetration", "ethical hacking", "vulnerability", "red team"],
                },
            ],
        },
    ]
}
