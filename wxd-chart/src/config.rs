//! Typed Chart.js configurations.
//!
//! The structs serialize to the config object passed to `new Chart(...)`, plus
//! three extension keys the JS bridge consumes before handing it over:
//! `defaults` (global text colour and font), `valueUnit` (tooltip suffix) and
//! per-dataset `gradient` (vertical fill, turned into a canvas gradient).

use crate::theme::{with_alpha, Theme};
use serde::Serialize;
use wxd_data::{AlignedSeries, Field};

const FONT_FAMILY: &str = "system-ui, Arial, sans-serif";
const ANIMATION_MS: u32 = 250;
const TOOLTIP_BACKGROUND: &str = "rgba(0,0,0,0.75)";
const TOOLTIP_TEXT: &str = "#fff";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// A complete chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
    pub defaults: ChartDefaults,
    pub value_unit: &'static str,
}

impl ChartConfig {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Vertical fill from `from` at the top of the plot area to `to` at the bottom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientFill {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    /// `null` entries are gaps.
    pub data: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<GradientFill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span_gaps: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_skipped: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub animation: Animation,
    pub interaction: Interaction,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    pub duration: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub mode: &'static str,
    pub intersect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub use_point_style: bool,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub background_color: &'static str,
    pub title_color: &'static str,
    pub body_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<Ticks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<Grid>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_skip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rotation: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub color: &'static str,
}

/// Global Chart.js defaults applied before each chart is created.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDefaults {
    pub color: &'static str,
    pub font_family: &'static str,
}

/// One temperature line per active city, gradient-filled, spanning gaps.
pub fn temperature_chart(aligned: &AlignedSeries, theme: &Theme) -> ChartConfig {
    let datasets = aligned
        .cities
        .iter()
        .enumerate()
        .map(|(i, city)| {
            let color = theme.line_color(i);
            Dataset {
                label: format!("{} Temp (°C)", city.city),
                data: city.values(Field::Temp).to_vec(),
                border_color: Some(color.to_string()),
                gradient: Some(GradientFill {
                    from: with_alpha(color, "55"),
                    to: with_alpha(color, "00"),
                }),
                fill: Some(true),
                tension: Some(0.25),
                border_width: Some(2),
                point_radius: Some(2),
                point_hover_radius: Some(4),
                span_gaps: Some(true),
                ..Dataset::default()
            }
        })
        .collect();

    let x = Axis {
        ticks: Some(Ticks {
            color: theme.foreground,
            auto_skip: Some(true),
            max_rotation: Some(0),
        }),
        grid: Some(Grid { color: theme.grid }),
        ..Axis::default()
    };
    let y = Axis {
        begin_at_zero: Some(false),
        ticks: Some(axis_ticks(theme)),
        grid: Some(Grid { color: theme.grid }),
        ..Axis::default()
    };
    build(ChartKind::Line, aligned, datasets, Scales { x, y }, "°C", theme)
}

/// Grouped (side-by-side) precipitation bars per active city.
pub fn precipitation_chart(aligned: &AlignedSeries, theme: &Theme) -> ChartConfig {
    let datasets = aligned
        .cities
        .iter()
        .enumerate()
        .map(|(i, city)| Dataset {
            label: format!("{} Precip (mm)", city.city),
            data: city.values(Field::Precip).to_vec(),
            background_color: Some(theme.bar_color(i).to_string()),
            border_radius: Some(6),
            border_skipped: Some(false),
            ..Dataset::default()
        })
        .collect();

    let x = Axis {
        stacked: Some(false),
        ticks: Some(axis_ticks(theme)),
        grid: Some(Grid { color: theme.grid }),
        ..Axis::default()
    };
    let y = Axis {
        stacked: Some(false),
        begin_at_zero: Some(true),
        ticks: Some(axis_ticks(theme)),
        grid: Some(Grid { color: theme.grid }),
    };
    build(ChartKind::Bar, aligned, datasets, Scales { x, y }, "mm", theme)
}

fn axis_ticks(theme: &Theme) -> Ticks {
    Ticks {
        color: theme.foreground,
        auto_skip: None,
        max_rotation: None,
    }
}

fn build(
    kind: ChartKind,
    aligned: &AlignedSeries,
    datasets: Vec<Dataset>,
    scales: Scales,
    value_unit: &'static str,
    theme: &Theme,
) -> ChartConfig {
    ChartConfig {
        kind,
        data: ChartData {
            labels: aligned.labels.clone(),
            datasets,
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            animation: Animation {
                duration: ANIMATION_MS,
            },
            interaction: Interaction {
                mode: "index",
                intersect: false,
            },
            plugins: Plugins {
                legend: Legend {
                    labels: LegendLabels {
                        use_point_style: true,
                        color: theme.foreground,
                    },
                },
                tooltip: Tooltip {
                    background_color: TOOLTIP_BACKGROUND,
                    title_color: TOOLTIP_TEXT,
                    body_color: TOOLTIP_TEXT,
                },
            },
            scales,
        },
        defaults: ChartDefaults {
            color: theme.foreground,
            font_family: FONT_FAMILY,
        },
        value_unit,
    }
}
