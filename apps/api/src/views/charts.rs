//! Chart series handed to the charting collaborator. Only data and colours live here;
//! plotting is the client's job.

use serde::Serialize;

use crate::catalog::models::RadarAxis;
use crate::theme::{Palette, ACCENT_GOLD};
use crate::views::filter::TechnologyCount;

/// Slice colours for the project breakdown donut, cycled when there are more slices.
const DONUT_COLORS: &[&str] = &["#c9a84c", "#1a1a2e", "#0f3460", "#4a4a6a"];
const DONUT_HOLE: f32 = 0.45;
const DONUT_SLICE_TEXT: &str = "#fff";

const RADAR_FILL: &str = "rgba(201,168,76,0.15)";
const RADAR_RANGE: [u8; 2] = [0, 100];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DonutChart {
    pub labels: Vec<String>,
    pub values: Vec<usize>,
    pub colors: Vec<&'static str>,
    pub hole: f32,
    pub slice_text_color: &'static str,
    pub legend_text_color: &'static str,
}

/// Builds the donut from a technology breakdown.
///
/// With a non-empty `focus`, only those technologies are charted, in `focus` order
/// (a focused technology no project uses is charted as 0). Otherwise every
/// technology is charted in breakdown order.
pub fn breakdown_chart(
    breakdown: &[TechnologyCount],
    focus: &[String],
    palette: &Palette,
) -> DonutChart {
    let slices: Vec<(String, usize)> = if focus.is_empty() {
        breakdown
            .iter()
            .map(|c| (c.technology.clone(), c.count))
            .collect()
    } else {
        focus
            .iter()
            .map(|tech| {
                let count = breakdown
                    .iter()
                    .find(|c| &c.technology == tech)
                    .map(|c| c.count)
                    .unwrap_or(0);
                (tech.clone(), count)
            })
            .collect()
    };

    let colors = (0..slices.len())
        .map(|i| DONUT_COLORS[i % DONUT_COLORS.len()])
        .collect();
    let (labels, values) = slices.into_iter().unzip();

    DonutChart {
        labels,
        values,
        colors,
        hole: DONUT_HOLE,
        slice_text_color: DONUT_SLICE_TEXT,
        legend_text_color: palette.plot_text,
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RadarChart {
    pub series_name: String,
    pub axes: Vec<RadarAxis>,
    pub range: [u8; 2],
    pub line_color: &'static str,
    pub fill_color: &'static str,
    pub grid_color: &'static str,
    pub text_color: &'static str,
}

pub fn skill_radar(series_name: &str, axes: &[RadarAxis], palette: &Palette) -> RadarChart {
    RadarChart {
        series_name: series_name.to_string(),
        axes: axes.to_vec(),
        range: RADAR_RANGE,
        line_color: ACCENT_GOLD,
        fill_color: RADAR_FILL,
        grid_color: palette.plot_grid,
        text_color: palette.plot_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::default_catalog;
    use crate::theme::{resolve, Theme};
    use crate::views::filter::technology_frequency;

    #[test]
    fn test_breakdown_chart_with_focus() {
        let catalog = default_catalog();
        let breakdown = technology_frequency(&catalog.projects);
        let chart = breakdown_chart(&breakdown, &catalog.breakdown_focus, &resolve(Theme::Light));

        assert_eq!(chart.labels, vec!["JavaScript", "Java", "Python", "Apex"]);
        assert_eq!(chart.values, vec![4, 3, 3, 1]);
        assert_eq!(chart.colors, vec!["#c9a84c", "#1a1a2e", "#0f3460", "#4a4a6a"]);
        assert_eq!(chart.legend_text_color, "#1a1a2e");
    }

    #[test]
    fn test_breakdown_chart_without_focus_cycles_colors() {
        let catalog = default_catalog();
        let breakdown = technology_frequency(&catalog.projects);
        let chart = breakdown_chart(&breakdown, &[], &resolve(Theme::Dark));

        assert_eq!(chart.labels.len(), breakdown.len());
        assert_eq!(chart.colors[4], DONUT_COLORS[0]);
        assert_eq!(chart.legend_text_color, "#eaeaf5");
    }

    #[test]
    fn test_focus_on_unused_technology_is_zero() {
        let chart = breakdown_chart(&[], &["Rust".to_string()], &resolve(Theme::Light));
        assert_eq!(chart.values, vec![0]);
    }

    #[test]
    fn test_radar_follows_palette() {
        let catalog = default_catalog();
        let dark = skill_radar("Me", &catalog.radar, &resolve(Theme::Dark));
        let light = skill_radar("Me", &catalog.radar, &resolve(Theme::Light));

        assert_eq!(dark.axes.len(), 7);
        assert_eq!(dark.line_color, "#c9a84c");
        assert_eq!(dark.grid_color, "rgba(201,168,76,0.15)");
        assert_eq!(light.grid_color, "rgba(26,26,46,0.12)");
        assert_eq!(dark.axes, light.axes);
    }
}
