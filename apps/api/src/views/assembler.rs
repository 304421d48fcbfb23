//! View Assembler — builds the render-ready bundle for one page.
//!
//! Input: the session state (theme + photo), the catalog, the page, and for the
//! portfolio page a category filter. Output: a `PageView` carrying the resolved
//! palette, the sidebar avatar, and the page's content slice.
//! Recomputed on every request; nothing is cached between renders.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::catalog::models::{
    Certificate, ContactInfo, ContentCatalog, EducationSummary, ProgressItem, ProjectEntry,
    Quote, Stat, TimelineEntry, ToolGroup,
};
use crate::contact::validation::Subject;
use crate::session::avatar::{AvatarDescriptor, AvatarSlot, ACCEPTED_EXTENSIONS};
use crate::session::state::SessionState;
use crate::theme::{resolve, Palette, Theme};
use crate::views::charts::{breakdown_chart, skill_radar, DonutChart, RadarChart};
use crate::views::filter::{
    filter_projects, group_skills, technology_frequency, CategoryFilter, SkillGroup,
    TechnologyCount,
};
use crate::views::ViewError;

/// Number of projects featured on the home page.
pub const FEATURED_PROJECTS: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Pages
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    About,
    Portfolio,
    Skills,
    Education,
    Contact,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Portfolio,
        Page::Skills,
        Page::Education,
        Page::Contact,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Portfolio => "portfolio",
            Page::Skills => "skills",
            Page::Education => "education",
            Page::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About Me",
            Page::Portfolio => "Portfolio",
            Page::Skills => "Skills & Expertise",
            Page::Education => "Education",
            Page::Contact => "Get In Touch",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Page {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Page::ALL
            .into_iter()
            .find(|page| page.key() == key)
            .ok_or_else(|| ViewError::UnknownPage(s.to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// View models
// ────────────────────────────────────────────────────────────────────────────

/// Fields every page shares: theme, palette, sidebar identity.
#[derive(Debug, Clone, Serialize)]
pub struct PageHeader {
    pub page: Page,
    pub title: &'static str,
    pub theme: Theme,
    pub toggle_label: &'static str,
    pub palette: Palette,
    pub avatar: AvatarDescriptor,
    pub name: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub header: PageHeader,
    pub content: PageContent,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageContent {
    Home(HomeView),
    About(AboutView),
    Portfolio(PortfolioView),
    Skills(SkillsView),
    Education(EducationView),
    Contact(ContactView),
}

/// A project as drawn on a card: the catalog entry plus its derived link and subtitle.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectCard {
    #[serde(flatten)]
    pub project: ProjectEntry,
    pub url: String,
    pub subtitle: String,
}

impl From<&ProjectEntry> for ProjectCard {
    fn from(project: &ProjectEntry) -> Self {
        Self {
            url: project.url(),
            subtitle: project.subtitle(),
            project: project.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub tagline: String,
    pub description: String,
    pub badges: Vec<String>,
    pub stats: Vec<Stat>,
    pub quote: Quote,
    pub featured: Vec<ProjectCard>,
    pub currently_working_on: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutView {
    pub avatar: AvatarDescriptor,
    pub story: Vec<String>,
    pub quote: Quote,
    pub location: String,
    pub degree: String,
    pub languages: String,
    pub interests: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
    pub personality: Vec<ProgressItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioView {
    pub active_category: &'static str,
    pub categories: Vec<&'static str>,
    pub projects: Vec<ProjectCard>,
    pub total_projects: usize,
    pub technology_breakdown: Vec<TechnologyCount>,
    pub breakdown_chart: DonutChart,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillsView {
    pub groups: Vec<SkillGroup>,
    pub note: String,
    pub radar: RadarChart,
    pub tools: Vec<ToolGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationView {
    pub education: EducationSummary,
    pub certificates: Vec<Certificate>,
    pub currently_learning: Vec<ProgressItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubjectOption {
    pub key: Subject,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactView {
    pub avatar: AvatarDescriptor,
    pub short_tagline: String,
    pub contact: ContactInfo,
    pub subjects: Vec<SubjectOption>,
    pub accepted_photo_extensions: &'static [&'static str],
}

// ────────────────────────────────────────────────────────────────────────────
// Assembly
// ────────────────────────────────────────────────────────────────────────────

/// Builds the view for `page`. `category` only applies to the portfolio page and
/// defaults to "All" there; an unrecognized value is an `InvalidFilter` error.
pub fn assemble(
    page: Page,
    session: &SessionState,
    catalog: &ContentCatalog,
    category: Option<&str>,
) -> Result<PageView, ViewError> {
    let palette = resolve(session.theme());
    let avatar = session.avatar();

    let content = match page {
        Page::Home => PageContent::Home(home(catalog)),
        Page::About => PageContent::About(about(catalog, AvatarSlot::About.resolve(avatar))),
        Page::Portfolio => {
            let filter = match category {
                Some(raw) => raw.parse()?,
                None => CategoryFilter::All,
            };
            PageContent::Portfolio(portfolio(catalog, filter, &palette))
        }
        Page::Skills => PageContent::Skills(skills(catalog, &palette)),
        Page::Education => PageContent::Education(EducationView {
            education: catalog.education.clone(),
            certificates: catalog.certificates.clone(),
            currently_learning: catalog.currently_learning.clone(),
        }),
        Page::Contact => {
            PageContent::Contact(contact(catalog, AvatarSlot::Contact.resolve(avatar)))
        }
    };

    Ok(PageView {
        header: PageHeader {
            page,
            title: page.title(),
            theme: session.theme(),
            toggle_label: session.theme().toggle_label(),
            palette,
            avatar: AvatarSlot::Sidebar.resolve(avatar),
            name: catalog.profile.name.clone(),
            tagline: catalog.profile.tagline.clone(),
        },
        content,
    })
}

fn home(catalog: &ContentCatalog) -> HomeView {
    let profile = &catalog.profile;
    HomeView {
        tagline: profile.tagline.clone(),
        description: profile.description.clone(),
        badges: profile.badges.clone(),
        stats: catalog.stats.clone(),
        quote: profile.quote.clone(),
        featured: catalog
            .projects
            .iter()
            .take(FEATURED_PROJECTS)
            .map(ProjectCard::from)
            .collect(),
        currently_working_on: catalog.currently_working_on.clone(),
    }
}

fn about(catalog: &ContentCatalog, avatar: AvatarDescriptor) -> AboutView {
    let profile = &catalog.profile;
    AboutView {
        avatar,
        story: profile.story.clone(),
        quote: profile.quote.clone(),
        location: profile.location.clone(),
        degree: profile.degree.clone(),
        languages: profile.languages.clone(),
        interests: profile.interests.clone(),
        timeline: catalog.timeline.clone(),
        personality: catalog.personality.clone(),
    }
}

fn portfolio(catalog: &ContentCatalog, filter: CategoryFilter, palette: &Palette) -> PortfolioView {
    // Breakdown comes from the full catalog so it does not move with the filter.
    let technology_breakdown = technology_frequency(&catalog.projects);
    let breakdown_chart = breakdown_chart(&technology_breakdown, &catalog.breakdown_focus, palette);

    PortfolioView {
        active_category: filter.label(),
        categories: CategoryFilter::OPTIONS.iter().map(|o| o.label()).collect(),
        projects: filter_projects(&catalog.projects, filter)
            .into_iter()
            .map(ProjectCard::from)
            .collect(),
        total_projects: catalog.projects.len(),
        technology_breakdown,
        breakdown_chart,
    }
}

fn skills(catalog: &ContentCatalog, palette: &Palette) -> SkillsView {
    SkillsView {
        groups: group_skills(&catalog.skills),
        note: catalog.skills_note.clone(),
        radar: skill_radar(&catalog.profile.name, &catalog.radar, palette),
        tools: catalog.tools.clone(),
    }
}

fn contact(catalog: &ContentCatalog, avatar: AvatarDescriptor) -> ContactView {
    ContactView {
        avatar,
        short_tagline: catalog.profile.short_tagline.clone(),
        contact: catalog.contact.clone(),
        subjects: Subject::ALL
            .into_iter()
            .map(|key| SubjectOption {
                key,
                label: key.label(),
            })
            .collect(),
        accepted_photo_extensions: ACCEPTED_EXTENSIONS,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::default_catalog;
    use bytes::Bytes;

    fn entries(cards: &[ProjectCard]) -> Vec<ProjectEntry> {
        cards.iter().map(|c| c.project.clone()).collect()
    }

    fn portfolio_of(view: PageView) -> PortfolioView {
        match view.content {
            PageContent::Portfolio(p) => p,
            other => panic!("expected portfolio content, got {other:?}"),
        }
    }

    #[test]
    fn test_page_from_str() {
        for page in Page::ALL {
            assert_eq!(page.key().parse::<Page>().unwrap(), page);
        }
        assert_eq!("Skills".parse::<Page>().unwrap(), Page::Skills);
        assert_eq!(
            "blog".parse::<Page>(),
            Err(ViewError::UnknownPage("blog".to_string()))
        );
    }

    #[test]
    fn test_home_features_first_three_projects() {
        let catalog = default_catalog();
        let view = assemble(Page::Home, &SessionState::new(), &catalog, None).unwrap();
        match view.content {
            PageContent::Home(home) => {
                assert_eq!(entries(&home.featured), catalog.projects[..3].to_vec());
                assert!(home.featured[0].url.starts_with("https://"));
                assert_eq!(home.stats.len(), 4);
            }
            other => panic!("expected home content, got {other:?}"),
        }
    }

    #[test]
    fn test_home_ignores_category() {
        let catalog = default_catalog();
        assert!(assemble(Page::Home, &SessionState::new(), &catalog, Some("NotACategory")).is_ok());
    }

    #[test]
    fn test_header_follows_theme() {
        let catalog = default_catalog();
        let mut session = SessionState::new();

        let light = assemble(Page::Skills, &session, &catalog, None).unwrap();
        assert_eq!(light.header.theme, Theme::Light);
        assert_eq!(light.header.palette, resolve(Theme::Light));
        assert_eq!(light.header.toggle_label, "🌙  Dark Mode");

        session.toggle_theme();
        let dark = assemble(Page::Skills, &session, &catalog, None).unwrap();
        assert_eq!(dark.header.palette, resolve(Theme::Dark));
        match dark.content {
            PageContent::Skills(skills) => {
                assert_eq!(skills.radar.grid_color, resolve(Theme::Dark).plot_grid);
                assert_eq!(skills.groups.len(), 4);
            }
            other => panic!("expected skills content, got {other:?}"),
        }
    }

    #[test]
    fn test_uploaded_photo_reaches_every_avatar() {
        let catalog = default_catalog();
        let mut session = SessionState::new();
        session.set_avatar(Bytes::from_static(b"photo"), "image/png");

        for page in Page::ALL {
            let view = assemble(page, &session, &catalog, None).unwrap();
            assert!(view.header.avatar.is_image(), "{page} sidebar avatar");
            match view.content {
                PageContent::About(about) => assert!(about.avatar.is_image()),
                PageContent::Contact(contact) => assert!(contact.avatar.is_image()),
                _ => {}
            }
        }
    }

    #[test]
    fn test_initials_slot_sizes() {
        let catalog = default_catalog();
        let view = assemble(Page::Contact, &SessionState::new(), &catalog, None).unwrap();
        assert_eq!(view.header.avatar, AvatarSlot::Sidebar.resolve(None));
        match view.content {
            PageContent::Contact(contact) => {
                assert_eq!(contact.avatar, AvatarSlot::Contact.resolve(None));
                assert_eq!(contact.subjects.len(), 5);
            }
            other => panic!("expected contact content, got {other:?}"),
        }
    }

    #[test]
    fn test_portfolio_defaults_to_all() {
        let catalog = default_catalog();
        let view =
            portfolio_of(assemble(Page::Portfolio, &SessionState::new(), &catalog, None).unwrap());
        assert_eq!(view.active_category, "All");
        assert_eq!(entries(&view.projects), catalog.projects);
        assert_eq!(
            view.categories,
            vec!["All", "Web Dev", "Academic Project", "Personal"]
        );
    }

    #[test]
    fn test_portfolio_filters_by_category() {
        let catalog = default_catalog();
        let view = portfolio_of(
            assemble(Page::Portfolio, &SessionState::new(), &catalog, Some("Personal")).unwrap(),
        );
        assert_eq!(view.active_category, "Personal");
        assert_eq!(view.projects.len(), 2);
        assert_eq!(view.total_projects, 8);
    }

    #[test]
    fn test_portfolio_breakdown_independent_of_filter() {
        let catalog = default_catalog();
        let session = SessionState::new();
        let baseline = portfolio_of(assemble(Page::Portfolio, &session, &catalog, None).unwrap());

        for option in CategoryFilter::OPTIONS {
            let view = portfolio_of(
                assemble(Page::Portfolio, &session, &catalog, Some(option.label())).unwrap(),
            );
            assert_eq!(view.technology_breakdown, baseline.technology_breakdown);
            assert_eq!(view.breakdown_chart, baseline.breakdown_chart);
        }
        assert_eq!(baseline.breakdown_chart.values, vec![4, 3, 3, 1]);
    }

    #[test]
    fn test_portfolio_invalid_filter() {
        let catalog = default_catalog();
        let err = assemble(Page::Portfolio, &SessionState::new(), &catalog, Some("NotACategory"))
            .unwrap_err();
        assert_eq!(err, ViewError::InvalidFilter("NotACategory".to_string()));
    }

    #[test]
    fn test_about_timeline_in_catalog_order() {
        let catalog = default_catalog();
        let view = assemble(Page::About, &SessionState::new(), &catalog, None).unwrap();
        match view.content {
            PageContent::About(about) => {
                assert_eq!(about.timeline, catalog.timeline);
                assert_eq!(about.timeline[0].period, "Early Years");
            }
            other => panic!("expected about content, got {other:?}"),
        }
    }

    #[test]
    fn test_view_serializes_with_kind_tag() {
        let catalog = default_catalog();
        let view = assemble(Page::Education, &SessionState::new(), &catalog, None).unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["header"]["page"], "education");
        assert_eq!(json["header"]["palette"]["accent_gold"], "#c9a84c");
        assert_eq!(json["content"]["kind"], "education");
        assert_eq!(json["content"]["certificates"].as_array().unwrap().len(), 4);
    }
}
