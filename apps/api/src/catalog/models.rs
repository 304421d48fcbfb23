use serde::{Deserialize, Serialize};

/// Read-only portfolio content. Loaded once at startup and shared by every session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentCatalog {
    pub profile: Profile,
    pub stats: Vec<Stat>,
    pub currently_working_on: Vec<String>,
    pub projects: Vec<ProjectEntry>,
    /// Technologies shown in the project breakdown chart, in chart order.
    /// Empty means "every technology".
    #[serde(default)]
    pub breakdown_focus: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
    pub personality: Vec<ProgressItem>,
    pub skills: Vec<SkillEntry>,
    pub skills_note: String,
    pub radar: Vec<RadarAxis>,
    pub tools: Vec<ToolGroup>,
    pub education: EducationSummary,
    pub certificates: Vec<Certificate>,
    pub currently_learning: Vec<ProgressItem>,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub short_tagline: String,
    pub description: String,
    pub location: String,
    pub degree: String,
    pub languages: String,
    pub story: Vec<String>,
    pub quote: Quote,
    pub badges: Vec<String>,
    pub interests: Vec<String>,
}

impl Profile {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
    WebDev,
    AcademicProject,
    Personal,
}

impl ProjectCategory {
    #[cfg(test)]
    pub const ALL: [ProjectCategory; 3] = [
        ProjectCategory::WebDev,
        ProjectCategory::AcademicProject,
        ProjectCategory::Personal,
    ];

    /// Human label, as shown in the category selector.
    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::WebDev => "Web Dev",
            ProjectCategory::AcademicProject => "Academic Project",
            ProjectCategory::Personal => "Personal",
        }
    }

    #[cfg(test)]
    pub fn key(self) -> &'static str {
        match self {
            ProjectCategory::WebDev => "web_dev",
            ProjectCategory::AcademicProject => "academic_project",
            ProjectCategory::Personal => "personal",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectMetric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectEntry {
    pub title: String,
    pub category: ProjectCategory,
    pub year: String,
    /// Ordered technology tags.
    pub stack: Vec<String>,
    pub description: String,
    /// Ordered label/value pairs shown under the description.
    pub metrics: Vec<ProjectMetric>,
    /// Link without scheme, e.g. `github.com/user/repo`.
    pub link: String,
}

impl ProjectEntry {
    pub fn url(&self) -> String {
        if self.link.starts_with("http://") || self.link.starts_with("https://") {
            self.link.clone()
        } else {
            format!("https://{}", self.link)
        }
    }

    /// Short subtitle used on featured cards: primary technology and year.
    pub fn subtitle(&self) -> String {
        match self.stack.first() {
            Some(primary) => format!("{primary} · {}", self.year),
            None => self.year.clone(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills, timeline, education
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillEntry {
    pub category: String,
    pub label: String,
    /// 0–100
    pub proficiency: u8,
}

/// A labelled percentage bar without a grouping key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressItem {
    pub label: String,
    /// 0–100
    pub percent: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RadarAxis {
    pub label: String,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolGroup {
    pub category: String,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineEntry {
    pub period: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EducationSummary {
    pub degree: String,
    pub status: String,
    pub paragraphs: Vec<String>,
    pub dream: String,
    pub goals: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Certificate {
    pub title: String,
    pub issuer: String,
    /// A year, or a status such as "In Progress".
    pub status: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Contact
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactLink {
    pub icon: String,
    pub label: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseMetric {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub delta: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactInfo {
    pub email: String,
    pub links: Vec<ContactLink>,
    pub open_to: Vec<ProgressItem>,
    pub response_metrics: Vec<ResponseMetric>,
}
