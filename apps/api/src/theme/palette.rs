//! Palette table — one record of style tokens per theme mode.
//!
//! Both modes live in a single `PALETTES` table indexed by `Theme`, so adding a token
//! means adding one field and two values. Everything here is `'static` and `Copy`:
//! resolving a palette never allocates and never depends on call order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Accent colour shared by both palettes.
pub const ACCENT_GOLD: &str = "#c9a84c";

// ────────────────────────────────────────────────────────────────────────────
// Theme
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[cfg(test)]
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// The other mode. Applying it twice yields the original value.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Label of the sidebar button, which names the mode the button switches *to*.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "🌙  Dark Mode",
            Theme::Dark => "☀️  Light Mode",
        }
    }

    fn index(self) -> usize {
        match self {
            Theme::Light => 0,
            Theme::Dark => 1,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme '{other}' (expected 'light' or 'dark')")),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Palette
// ────────────────────────────────────────────────────────────────────────────

/// Resolved style tokens for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub card_background: &'static str,
    pub card_border: &'static str,
    pub text: &'static str,
    /// Same as `text` in both modes so secondary copy never fades out.
    pub text_muted: &'static str,
    pub heading: &'static str,
    pub sidebar_background: &'static str,
    /// The sidebar is dark in both modes, so its text stays light.
    pub sidebar_text: &'static str,
    pub plot_text: &'static str,
    pub plot_grid: &'static str,
    pub quote_background: &'static str,
    pub quote_text: &'static str,
    pub stat_background: &'static str,
    pub contact_background: &'static str,
    pub input_background: &'static str,
    pub shadow: &'static str,
    pub skill_tag_background: &'static str,
    pub accent_gold: &'static str,
}

const PALETTES: [Palette; 2] = [
    // Theme::Light
    Palette {
        background: "#f5f0eb",
        card_background: "#ffffff",
        card_border: "rgba(201,168,76,0.2)",
        text: "#1a1a2e",
        text_muted: "#1a1a2e",
        heading: "#1a1a2e",
        sidebar_background: "#1a1a2e",
        sidebar_text: "#f0f0f5",
        plot_text: "#1a1a2e",
        plot_grid: "rgba(26,26,46,0.12)",
        quote_background: "#ffffff",
        quote_text: "#2a2a4e",
        stat_background: "#1a1a2e",
        contact_background: "#ffffff",
        input_background: "#ffffff",
        shadow: "rgba(0,0,0,0.08)",
        skill_tag_background: "#1a1a2e",
        accent_gold: ACCENT_GOLD,
    },
    // Theme::Dark
    Palette {
        background: "#0d0d1a",
        card_background: "#1a1a2e",
        card_border: "rgba(201,168,76,0.25)",
        text: "#eaeaf5",
        text_muted: "#eaeaf5",
        heading: "#ffffff",
        sidebar_background: "#08080f",
        sidebar_text: "#f0f0f5",
        plot_text: "#eaeaf5",
        plot_grid: "rgba(201,168,76,0.15)",
        quote_background: "#1a1a2e",
        quote_text: "#ddddf5",
        stat_background: "#1a1a2e",
        contact_background: "#1a1a2e",
        input_background: "#22223a",
        shadow: "rgba(0,0,0,0.4)",
        skill_tag_background: "#2a2a4a",
        accent_gold: ACCENT_GOLD,
    },
];

/// Maps a theme mode to its palette. Pure and total.
pub fn resolve(mode: Theme) -> Palette {
    PALETTES[mode.index()]
}

impl Palette {
    /// Every token as `(name, value)`, in field declaration order.
    pub fn tokens(&self) -> [(&'static str, &'static str); 18] {
        [
            ("background", self.background),
            ("card-background", self.card_background),
            ("card-border", self.card_border),
            ("text", self.text),
            ("text-muted", self.text_muted),
            ("heading", self.heading),
            ("sidebar-background", self.sidebar_background),
            ("sidebar-text", self.sidebar_text),
            ("plot-text", self.plot_text),
            ("plot-grid", self.plot_grid),
            ("quote-background", self.quote_background),
            ("quote-text", self.quote_text),
            ("stat-background", self.stat_background),
            ("contact-background", self.contact_background),
            ("input-background", self.input_background),
            ("shadow", self.shadow),
            ("skill-tag-background", self.skill_tag_background),
            ("accent-gold", self.accent_gold),
        ]
    }

    /// Renders the palette as a `:root` block of CSS custom properties.
    pub fn css_variables(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.tokens() {
            css.push_str(&format!("    --portfolio-{name}: {value};\n"));
        }
        css.push('}');
        css
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_deterministic() {
        for theme in Theme::ALL {
            assert_eq!(resolve(theme), resolve(theme));
        }
    }

    #[test]
    fn test_light_and_dark_differ() {
        assert_ne!(resolve(Theme::Light), resolve(Theme::Dark));
        assert_eq!(resolve(Theme::Light).background, "#f5f0eb");
        assert_eq!(resolve(Theme::Dark).background, "#0d0d1a");
    }

    #[test]
    fn test_gold_identical_in_both_palettes() {
        for theme in Theme::ALL {
            assert_eq!(resolve(theme).accent_gold, "#c9a84c");
        }
    }

    #[test]
    fn test_every_token_populated() {
        for theme in Theme::ALL {
            for (name, value) in resolve(theme).tokens() {
                assert!(!value.is_empty(), "{theme} palette has empty token {name}");
            }
        }
    }

    #[test]
    fn test_muted_text_matches_primary_text() {
        for theme in Theme::ALL {
            let p = resolve(theme);
            assert_eq!(p.text, p.text_muted);
        }
    }

    #[test]
    fn test_toggle_is_involution() {
        for theme in Theme::ALL {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn test_default_theme_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_toggle_label_names_target_mode() {
        assert_eq!(Theme::Light.toggle_label(), "🌙  Dark Mode");
        assert_eq!(Theme::Dark.toggle_label(), "☀️  Light Mode");
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" light ".parse::<Theme>().unwrap(), Theme::Light);
        assert!("dim".parse::<Theme>().is_err());
    }

    #[test]
    fn test_css_variables_lists_every_token() {
        let css = resolve(Theme::Dark).css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--portfolio-background: #0d0d1a;"));
        assert!(css.contains("--portfolio-accent-gold: #c9a84c;"));
        assert_eq!(css.matches("--portfolio-").count(), 18);
    }
}
