use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Portfolio content rendered by the UI.
///
/// Loaded from `portfolio.toml`; a built-in sample is used when the
/// file is absent so the page never renders empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    /// Display name shown in the hero section
    pub name: String,
    /// Roles cycled by the typewriter tagline
    #[serde(default)]
    pub roles: Vec<String>,
    /// About-section paragraphs
    #[serde(default)]
    pub about: Vec<String>,
    /// Animated stat counters
    #[serde(default)]
    pub stats: Vec<Stat>,
    /// Skill groups with level bars
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    /// Project cards
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Education timeline, most recent first
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    /// Contact details
    #[serde(default)]
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    /// Final counter value
    pub value: u64,
    /// Render a trailing `+` after the value
    #[serde(default = "default_true")]
    pub plus_suffix: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency from 0 to 100
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    /// One-line summary shown on the card
    pub summary: String,
    /// Longer description shown in the detail popup
    #[serde(default)]
    pub detail: String,
    /// Technologies used
    #[serde(default)]
    pub tech: Vec<String>,
    /// Live demo URL
    #[serde(default)]
    pub demo_url: Option<String>,
    /// Source repository URL
    #[serde(default)]
    pub repo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub period: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

fn default_true() -> bool {
    true
}

impl Portfolio {
    /// Load portfolio content from a TOML file, falling back to the
    /// built-in sample when the file is absent or unreadable.
    pub fn load_or_sample(path: &Path) -> Self {
        if !path.exists() {
            return Self::sample();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(portfolio) => portfolio,
                Err(e) => {
                    warn!("Invalid portfolio file {}: {}", path.display(), e);
                    Self::sample()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::sample()
            }
        }
    }

    /// Built-in sample content
    pub fn sample() -> Self {
        Self {
            name: "Kenneth".to_string(),
            roles: vec![
                "Frontend Developer".to_string(),
                "Data Science Aspirant".to_string(),
                "Aspiring Full Stack Dev".to_string(),
                "Aspiring AI & ML Engineer".to_string(),
                "CP Enthusiast".to_string(),
            ],
            about: vec![
                "Developer who enjoys building small, fast tools and the \
                 occasional over-engineered terminal UI."
                    .to_string(),
                "Currently exploring data science and machine learning while \
                 keeping a soft spot for competitive programming."
                    .to_string(),
            ],
            stats: vec![
                Stat {
                    label: "Projects Completed".to_string(),
                    value: 25,
                    plus_suffix: true,
                },
                Stat {
                    label: "Problems Solved".to_string(),
                    value: 500,
                    plus_suffix: true,
                },
                Stat {
                    label: "Technologies".to_string(),
                    value: 12,
                    plus_suffix: true,
                },
                Stat {
                    label: "Hackathon Wins".to_string(),
                    value: 3,
                    plus_suffix: false,
                },
            ],
            skills: vec![
                SkillGroup {
                    name: "Languages".to_string(),
                    skills: vec![
                        Skill { name: "Rust".to_string(), level: 85 },
                        Skill { name: "Python".to_string(), level: 90 },
                        Skill { name: "JavaScript".to_string(), level: 80 },
                        Skill { name: "C++".to_string(), level: 75 },
                    ],
                },
                SkillGroup {
                    name: "Tools & Frameworks".to_string(),
                    skills: vec![
                        Skill { name: "React".to_string(), level: 78 },
                        Skill { name: "Git".to_string(), level: 88 },
                        Skill { name: "Linux".to_string(), level: 82 },
                    ],
                },
            ],
            projects: vec![
                Project {
                    title: "Weather Dashboard".to_string(),
                    summary: "Live weather dashboard with forecast charts".to_string(),
                    detail: "Dashboard aggregating several weather APIs with \
                             hourly and weekly forecast charts and location search."
                        .to_string(),
                    tech: vec!["React".to_string(), "Chart.js".to_string()],
                    demo_url: Some("https://example.com/weather".to_string()),
                    repo_url: Some("https://github.com/kenneth/weather".to_string()),
                },
                Project {
                    title: "Algorithm Visualizer".to_string(),
                    summary: "Step-through visualizer for classic algorithms".to_string(),
                    detail: "Interactive visualizer for sorting and graph \
                             algorithms with adjustable speed and input size."
                        .to_string(),
                    tech: vec!["TypeScript".to_string(), "Canvas".to_string()],
                    demo_url: None,
                    repo_url: Some("https://github.com/kenneth/algoviz".to_string()),
                },
                Project {
                    title: "Terminal RSS Reader".to_string(),
                    summary: "Keyboard-driven feed reader for the terminal".to_string(),
                    detail: "A ratatui-based RSS reader with vim-style keys, \
                             themes and offline storage."
                        .to_string(),
                    tech: vec!["Rust".to_string(), "ratatui".to_string()],
                    demo_url: None,
                    repo_url: Some("https://github.com/kenneth/reader".to_string()),
                },
            ],
            education: vec![
                EducationEntry {
                    degree: "B.Tech, Computer Science".to_string(),
                    institution: "State Institute of Technology".to_string(),
                    period: "2022 - 2026".to_string(),
                    note: Some("Coursework in algorithms, ML and systems".to_string()),
                },
                EducationEntry {
                    degree: "Higher Secondary".to_string(),
                    institution: "City Public School".to_string(),
                    period: "2020 - 2022".to_string(),
                    note: None,
                },
            ],
            contact: ContactInfo {
                email: "kenneth@example.com".to_string(),
                location: "Somewhere, Earth".to_string(),
                social: vec![
                    SocialLink {
                        label: "GitHub".to_string(),
                        url: "https://github.com/kenneth".to_string(),
                    },
                    SocialLink {
                        label: "LinkedIn".to_string(),
                        url: "https://linkedin.com/in/kenneth".to_string(),
                    },
                ],
            },
        }
    }
}
