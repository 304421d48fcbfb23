//! Built-in portfolio content, used when no `CATALOG_PATH` is configured.
//!
//! Project stacks are tagged so the derived technology breakdown reads
//! JavaScript 4, Java 3, Python 3, Apex 1.

use crate::catalog::models::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn project(
    title: &str,
    category: ProjectCategory,
    stack: &[&str],
    description: &str,
    metrics: &[(&str, &str)],
    link: &str,
) -> ProjectEntry {
    ProjectEntry {
        title: title.to_string(),
        category,
        year: "2025".to_string(),
        stack: strings(stack),
        description: description.to_string(),
        metrics: metrics
            .iter()
            .map(|(label, value)| ProjectMetric {
                label: label.to_string(),
                value: value.to_string(),
            })
            .collect(),
        link: link.to_string(),
    }
}

fn skills(category: &str, items: &[(&str, u8)]) -> Vec<SkillEntry> {
    items
        .iter()
        .map(|(label, proficiency)| SkillEntry {
            category: category.to_string(),
            label: label.to_string(),
            proficiency: *proficiency,
        })
        .collect()
}

fn progress(items: &[(&str, u8)]) -> Vec<ProgressItem> {
    items
        .iter()
        .map(|(label, percent)| ProgressItem {
            label: label.to_string(),
            percent: *percent,
        })
        .collect()
}

fn projects() -> Vec<ProjectEntry> {
    use ProjectCategory::*;
    vec![
        project(
            "📊 Streamlit Portfolio",
            Personal,
            &["Python", "Streamlit", "Plotly"],
            "This very portfolio app — personal autobiography and project showcase featuring interactive charts, multi-page navigation, dark mode, and custom CSS.",
            &[("Language", "Python"), ("Pages", "6"), ("Status", "Live")],
            "github.com/alexandreinsh/Streamlit",
        ),
        project(
            "✅ SmartFormValidation",
            WebDev,
            &["JavaScript", "HTML", "CSS"],
            "A smart client-side form validation library in JavaScript that provides real-time feedback, custom validation rules, and clean error messaging for web forms.",
            &[("Language", "JavaScript"), ("Updated", "Dec 2025"), ("Visibility", "Public")],
            "github.com/alexandreinsh/SmartFormValidation",
        ),
        project(
            "📚 PeerLendingLibrary",
            WebDev,
            &["JavaScript", "HTML", "CSS", "Java"],
            "A peer-to-peer book lending web application that lets users list, borrow, and track books within a community — promoting a culture of shared reading.",
            &[("Language", "JavaScript"), ("Updated", "Dec 2025"), ("Type", "Web App")],
            "github.com/alexandreinsh/PeerLendingLibrary",
        ),
        project(
            "🔐 OAuth2 Integration",
            AcademicProject,
            &["Java", "OAuth2", "GitHub API", "Google API", "JavaScript"],
            "Implemented OAuth2 authentication flows integrating both GitHub and Google login providers in a Java application, handling token exchange, scopes, and session management.",
            &[("Language", "Java"), ("Providers", "2"), ("Updated", "Oct 2025")],
            "github.com/alexandreinsh/OAuth2-Integration-with-GitHub-Google",
        ),
        project(
            "💰 FinApp",
            AcademicProject,
            &["Java"],
            "A personal finance management application built in Java. Helps users track income, expenses, and budgets with a clean interface and summary reports.",
            &[("Language", "Java"), ("Updated", "Oct 2025"), ("Type", "Finance App")],
            "github.com/alexandreinsh/FinApp",
        ),
        project(
            "🪪 QREntry",
            AcademicProject,
            &["Apex", "QR Code", "Salesforce", "Python"],
            "A QR code-based entry and attendance system built using Apex (Salesforce platform). Enables fast event check-ins by scanning QR codes linked to registrant records.",
            &[("Language", "Apex"), ("Updated", "Oct 2025"), ("Use Case", "Attendance")],
            "github.com/alexandreinsh/QREntry",
        ),
        project(
            "🐍 Nash_Project",
            Personal,
            &["Python"],
            "A Python personal project exploring scripting, automation, or data processing. Reflects hands-on practice with Python fundamentals and problem-solving.",
            &[("Language", "Python"), ("Updated", "Sep 2025"), ("Type", "Personal")],
            "github.com/alexandreinsh/Nash_Project",
        ),
        project(
            "📝 BeanNotes",
            WebDev,
            &["React", "Tailwind CSS", "JavaScript"],
            "A simple and modern notes web app built with React and Tailwind CSS. Supports creating, editing, and organizing notes with a clean, minimal UI.",
            &[("Language", "JavaScript"), ("Framework", "React"), ("Updated", "Sep 2025")],
            "github.com/alexandreinsh/BeanNotes",
        ),
    ]
}

fn skill_table() -> Vec<SkillEntry> {
    let mut table = skills(
        "Programming Languages",
        &[
            ("Python", 60),
            ("JavaScript", 58),
            ("Java", 55),
            ("HTML & CSS", 65),
            ("Apex (Salesforce)", 40),
        ],
    );
    table.extend(skills(
        "Frameworks & Libraries",
        &[
            ("React (Basic)", 45),
            ("Streamlit", 60),
            ("Tailwind CSS", 50),
            ("Node.js (Basic)", 40),
        ],
    ));
    table.extend(skills(
        "Design & UI/UX",
        &[
            ("Figma", 62),
            ("UI Design Principles", 60),
            ("Wireframing", 58),
            ("Color & Typography", 55),
        ],
    ));
    table.extend(skills(
        "Tools & Practices",
        &[
            ("Git & GitHub", 65),
            ("VS Code", 75),
            ("Problem Solving", 65),
            ("Teamwork & Communication", 70),
        ],
    ));
    table
}

/// The default catalog.
pub fn default_catalog() -> ContentCatalog {
    ContentCatalog {
        profile: Profile {
            name: "Alexandrei Nash Dinapo".to_string(),
            tagline: "IT Student · CITU · Aspiring UI/UX Designer".to_string(),
            short_tagline: "IT Student · CITU".to_string(),
            description: "An Information Technology student at CITU with a dream of becoming a UI/UX Designer. I'm passionate about crafting digital experiences that feel intuitive and beautiful — while also building real projects through code to sharpen my technical foundation.".to_string(),
            location: "Cebu, Philippines".to_string(),
            degree: "BS Information Technology".to_string(),
            languages: "Filipino · English".to_string(),
            story: strings(&[
                "Hi! I'm Alexandrei Nash Dinapo, an Information Technology student at CITU. My dream is to become a UI/UX Designer — someone who bridges the gap between technology and people through thoughtful, beautiful, and intuitive design.",
                "I'm still early in my journey, but I've already worked across multiple languages and technologies: Python, JavaScript, Java, and Apex. Each project teaches me something new, and I embrace that learning curve as part of growing toward my goal.",
                "I use Figma to explore how digital experiences can be made simpler and more human — and every line of code I write brings me closer to understanding what makes great design work under the hood.",
            ]),
            quote: Quote {
                text: "The expert in anything was once a beginner.".to_string(),
                author: "Helen Hayes".to_string(),
            },
            badges: strings(&["Python", "JavaScript", "Java", "UI/UX Design", "Figma"]),
            interests: strings(&[
                "🎨 Design",
                "🖥️ Coding",
                "📷 Photography",
                "🎵 Music",
                "✏️ Sketching",
                "🎮 Gaming",
            ]),
        },
        stats: vec![
            Stat {
                value: "CITU".to_string(),
                label: "University".to_string(),
            },
            Stat {
                value: "13+".to_string(),
                label: "GitHub Repos".to_string(),
            },
            Stat {
                value: "4".to_string(),
                label: "Languages Used".to_string(),
            },
            Stat {
                value: "∞".to_string(),
                label: "Willingness to Learn".to_string(),
            },
        ],
        currently_working_on: strings(&[
            "Building this portfolio app (just pushed it to GitHub!)",
            "Expanding SmartFormValidation with more validation rule types",
            "Learning more about React through BeanNotes and side projects",
            "Studying OAuth2 flows and secure authentication patterns",
            "Exploring UI/UX design principles using Figma",
        ]),
        projects: projects(),
        breakdown_focus: strings(&["JavaScript", "Java", "Python", "Apex"]),
        timeline: vec![
            (
                "Early Years",
                "Curiosity for Technology 💻",
                "Grew up curious about computers and how things worked digitally — always drawn to screens and gadgets.",
            ),
            (
                "High School",
                "First Steps in Design 🎨",
                "Started experimenting with graphic design tools and simple layouts, building a feel for aesthetics.",
            ),
            (
                "2022",
                "Enrolled at CITU 🎓",
                "Began BS Information Technology at CITU. Got introduced to real programming.",
            ),
            (
                "2023",
                "First Real Projects 💻",
                "Started building Python projects and exploring web technologies. Discovered a love for problem-solving through code.",
            ),
            (
                "2024",
                "Expanding Skills 🚀",
                "Worked on Java apps, OAuth2 integration, JavaScript libraries, and began exploring UI/UX design with Figma.",
            ),
            (
                "2025",
                "Building & Growing 🌟",
                "Actively pushing to GitHub, building this portfolio, and leveling up across multiple languages and frameworks.",
            ),
        ]
        .into_iter()
        .map(|(period, title, description)| TimelineEntry {
            period: period.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect(),
        personality: progress(&[
            ("💡 Willingness to Learn", 95),
            ("🎨 Creative Thinking", 75),
            ("🔍 Attention to Detail", 70),
            ("🤝 Teamwork & Collaboration", 80),
            ("☕ Late-Night Coding Sessions", 85),
        ]),
        skills: skill_table(),
        skills_note: "💡 Skills are self-assessed as a current IT student at CITU. Still learning and growing every day!".to_string(),
        radar: [
            ("Python", 60),
            ("JavaScript", 58),
            ("Java", 55),
            ("HTML/CSS", 65),
            ("Figma/Design", 62),
            ("Git & GitHub", 65),
            ("Problem Solving", 65),
        ]
        .into_iter()
        .map(|(label, score)| RadarAxis {
            label: label.to_string(),
            score,
        })
        .collect(),
        tools: vec![
            ToolGroup {
                category: "🎨 Design".to_string(),
                tools: strings(&["Figma", "Canva", "Adobe Photoshop (Basic)"]),
            },
            ToolGroup {
                category: "💻 Development".to_string(),
                tools: strings(&["VS Code", "Python", "JavaScript", "Java", "HTML/CSS", "React"]),
            },
            ToolGroup {
                category: "🔧 Dev Tools".to_string(),
                tools: strings(&["Git", "GitHub", "Streamlit", "Salesforce / Apex"]),
            },
            ToolGroup {
                category: "📋 Productivity".to_string(),
                tools: strings(&["Google Workspace", "Notion", "Microsoft Office"]),
            },
        ],
        education: EducationSummary {
            degree: "Bachelor of Science in Information Technology".to_string(),
            status: "CITU · Currently Enrolled".to_string(),
            paragraphs: strings(&[
                "Studying Information Technology at CITU in Cebu, Philippines. Coursework covers programming fundamentals, systems analysis and design, database management, networking, web development, and software engineering.",
                "Through academic projects and personal initiatives, I've worked with Python, JavaScript, Java, and Apex — building real applications that solve real problems.",
            ]),
            dream: "🎨 Become a professional UI/UX Designer".to_string(),
            goals: strings(&[
                "Graduate from CITU with strong IT foundations",
                "Land a UI/UX design internship or role",
                "Build a polished Figma design portfolio",
                "Keep learning, keep designing, keep growing",
            ]),
        },
        certificates: [
            ("Google UX Design Certificate", "Google / Coursera", "In Progress"),
            ("UI/UX Design Essentials — Figma", "Udemy", "2024"),
            ("Introduction to User Experience Design", "Georgia Tech / Coursera", "2024"),
            ("Figma for Beginners: Design a Mobile App", "Coursera", "2024"),
        ]
        .into_iter()
        .map(|(title, issuer, status)| Certificate {
            title: title.to_string(),
            issuer: issuer.to_string(),
            status: status.to_string(),
        })
        .collect(),
        currently_learning: progress(&[
            ("UI/UX Design", 62),
            ("React & Front-End", 45),
            ("Java & OOP", 55),
            ("Python & Scripting", 60),
            ("Git & Version Control", 65),
        ]),
        contact: ContactInfo {
            email: "dinaponash26@gmail.com".to_string(),
            links: vec![
                ContactLink {
                    icon: "📧".to_string(),
                    label: "dinaponash26@gmail.com".to_string(),
                    url: Some("mailto:dinaponash26@gmail.com".to_string()),
                },
                ContactLink {
                    icon: "🐙".to_string(),
                    label: "github.com/alexandreinsh".to_string(),
                    url: Some("https://github.com/alexandreinsh".to_string()),
                },
                ContactLink {
                    icon: "🎨".to_string(),
                    label: "figma.com/@nashdinapo".to_string(),
                    url: Some("https://figma.com/@nashdinapo".to_string()),
                },
                ContactLink {
                    icon: "🏫".to_string(),
                    label: "CITU".to_string(),
                    url: None,
                },
                ContactLink {
                    icon: "📍".to_string(),
                    label: "Cebu, Philippines (UTC+8)".to_string(),
                    url: None,
                },
            ],
            open_to: progress(&[
                ("Internship Opportunities", 95),
                ("School Collaborations", 90),
                ("Open Source Projects", 80),
                ("Freelance / Side Projects", 70),
            ]),
            response_metrics: vec![ResponseMetric {
                label: "Response".to_string(),
                value: "< 24h".to_string(),
                delta: Some("↑ Quick".to_string()),
            }],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::loader::validate_catalog;

    #[test]
    fn test_default_catalog_is_valid() {
        validate_catalog(&default_catalog()).unwrap();
    }

    #[test]
    fn test_default_catalog_has_eight_projects() {
        let catalog = default_catalog();
        assert_eq!(catalog.projects.len(), 8);
        assert_eq!(catalog.radar.len(), 7);
    }

    #[test]
    fn test_first_name() {
        assert_eq!(default_catalog().profile.first_name(), "Alexandrei");
    }
}
