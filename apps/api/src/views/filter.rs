//! Catalog derivations — project filtering, technology counts, skill grouping.
//!
//! All functions preserve catalog order; none of them reorder entries within a result
//! except `technology_frequency`, which ranks by count.

use std::str::FromStr;

use serde::Serialize;

use crate::catalog::models::{ProjectCategory, ProjectEntry, SkillEntry};
use crate::views::ViewError;

// ────────────────────────────────────────────────────────────────────────────
// Project filtering
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// Selector options in display order.
    pub const OPTIONS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(ProjectCategory::WebDev),
        CategoryFilter::Only(ProjectCategory::AcademicProject),
        CategoryFilter::Only(ProjectCategory::Personal),
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, project: &ProjectEntry) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ViewError;

    /// Accepts display labels ("Web Dev") and keys ("web_dev"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "all" => Ok(CategoryFilter::All),
            "web_dev" => Ok(CategoryFilter::Only(ProjectCategory::WebDev)),
            "academic_project" => Ok(CategoryFilter::Only(ProjectCategory::AcademicProject)),
            "personal" => Ok(CategoryFilter::Only(ProjectCategory::Personal)),
            _ => Err(ViewError::InvalidFilter(s.to_string())),
        }
    }
}

/// Projects matching `filter`, in catalog order. `All` returns every project.
/// Category strings go through `CategoryFilter::from_str` first, so an unrecognized
/// category is an error and never a silent `All`.
pub fn filter_projects(projects: &[ProjectEntry], filter: CategoryFilter) -> Vec<&ProjectEntry> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Technology frequency
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TechnologyCount {
    pub technology: String,
    pub count: usize,
}

/// Number of projects listing each technology, across the whole catalog.
///
/// Callers pass the unfiltered project list so the breakdown does not move with the
/// active category filter. Ranked by descending count, ties in first-appearance order.
/// A technology listed twice in one stack counts once for that project.
pub fn technology_frequency(projects: &[ProjectEntry]) -> Vec<TechnologyCount> {
    let mut counts: Vec<TechnologyCount> = Vec::new();

    for project in projects {
        for (i, tech) in project.stack.iter().enumerate() {
            if project.stack[..i].contains(tech) {
                continue;
            }
            match counts.iter_mut().find(|c| &c.technology == tech) {
                Some(existing) => existing.count += 1,
                None => counts.push(TechnologyCount {
                    technology: tech.clone(),
                    count: 1,
                }),
            }
        }
    }

    // stable: ties keep first-appearance order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

// ────────────────────────────────────────────────────────────────────────────
// Skill grouping
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<SkillEntry>,
}

/// Groups skills by category. Groups appear in the order their category is first
/// declared; skills keep their catalog order within a group.
pub fn group_skills(skills: &[SkillEntry]) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(skill.clone()),
            None => groups.push(SkillGroup {
                category: skill.category.clone(),
                skills: vec![skill.clone()],
            }),
        }
    }
    groups
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
