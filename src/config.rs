use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Geometry and placement constants for one chart. Everything the layout
/// engine tunes on lives here so callers never reach for globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    pub width: f32,
    pub height: f32,
    pub margin_x: f32,
    pub margin_y: f32,
    /// Reserved bottom strip for the chart title/date row. Labels never
    /// enter it.
    pub band_height: f32,
    /// Vertical room kept free above the curve apex so a one-line label
    /// still fits above a marker sitting at progress 50.
    pub curve_headroom: f32,
    pub curve_samples: usize,
    pub wrap_chars: usize,
    pub char_width: f32,
    pub line_height: f32,
    pub label_padding_x: f32,
    pub label_padding_y: f32,
    pub marker_radius: f32,
    pub min_spacing: f32,
    pub nearby_threshold: f32,
    pub label_gap: f32,
    pub band_clearance: f32,
    pub search_step: f32,
    pub max_search_steps: usize,
    pub diagonal_gap_x: f32,
    pub diagonal_gap_y: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            margin_x: 40.0,
            margin_y: 40.0,
            band_height: 50.0,
            curve_headroom: 50.0,
            curve_samples: 50,
            wrap_chars: 18,
            char_width: 6.5,
            line_height: 14.0,
            label_padding_x: 6.0,
            label_padding_y: 4.0,
            marker_radius: 10.0,
            min_spacing: 8.0,
            nearby_threshold: 100.0,
            label_gap: 20.0,
            band_clearance: 5.0,
            search_step: 5.0,
            max_search_steps: 100,
            diagonal_gap_x: 15.0,
            diagonal_gap_y: 10.0,
        }
    }
}

impl ChartConfig {
    /// Top of the reserved band; the curve's endpoints sit on this line.
    pub fn baseline_y(&self) -> f32 {
        self.height - self.margin_y - self.band_height
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            background: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub chart: ChartConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        let theme = Theme::classic();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..Default::default()
        };
        Self {
            theme,
            chart: ChartConfig::default(),
            render,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<f32>,
    background: Option<String>,
    curve_color: Option<String>,
    baseline_color: Option<String>,
    uphill_color: Option<String>,
    crest_color: Option<String>,
    downhill_color: Option<String>,
    done_color: Option<String>,
    label_background: Option<String>,
    label_border: Option<String>,
    label_text_color: Option<String>,
    connector_color: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ChartConfigFile {
    width: Option<f32>,
    height: Option<f32>,
    margin_x: Option<f32>,
    margin_y: Option<f32>,
    band_height: Option<f32>,
    curve_headroom: Option<f32>,
    curve_samples: Option<usize>,
    wrap_chars: Option<usize>,
    char_width: Option<f32>,
    line_height: Option<f32>,
    label_padding_x: Option<f32>,
    label_padding_y: Option<f32>,
    marker_radius: Option<f32>,
    min_spacing: Option<f32>,
    nearby_threshold: Option<f32>,
    label_gap: Option<f32>,
    band_clearance: Option<f32>,
    search_step: Option<f32>,
    max_search_steps: Option<usize>,
    diagonal_gap_x: Option<f32>,
    diagonal_gap_y: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    chart: Option<ChartConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "modern" {
            config.theme = Theme::modern();
        } else if theme_name == "classic" || theme_name == "default" {
            config.theme = Theme::classic();
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size {
            config.theme.font_size = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v.clone();
            config.render.background = v;
        }
        if let Some(v) = vars.curve_color {
            config.theme.curve_color = v;
        }
        if let Some(v) = vars.baseline_color {
            config.theme.baseline_color = v;
        }
        if let Some(v) = vars.uphill_color {
            config.theme.uphill_color = v;
        }
        if let Some(v) = vars.crest_color {
            config.theme.crest_color = v;
        }
        if let Some(v) = vars.downhill_color {
            config.theme.downhill_color = v;
        }
        if let Some(v) = vars.done_color {
            config.theme.done_color = v;
        }
        if let Some(v) = vars.label_background {
            config.theme.label_background = v;
        }
        if let Some(v) = vars.label_border {
            config.theme.label_border = v;
        }
        if let Some(v) = vars.label_text_color {
            config.theme.label_text_color = v;
        }
        if let Some(v) = vars.connector_color {
            config.theme.connector_color = v;
        }
    }

    if let Some(chart) = parsed.chart {
        if let Some(v) = chart.width {
            config.chart.width = v;
        }
        if let Some(v) = chart.height {
            config.chart.height = v;
        }
        if let Some(v) = chart.margin_x {
            config.chart.margin_x = v;
        }
        if let Some(v) = chart.margin_y {
            config.chart.margin_y = v;
        }
        if let Some(v) = chart.band_height {
            config.chart.band_height = v;
        }
        if let Some(v) = chart.curve_headroom {
            config.chart.curve_headroom = v;
        }
        if let Some(v) = chart.curve_samples {
            config.chart.curve_samples = v;
        }
        if let Some(v) = chart.wrap_chars {
            config.chart.wrap_chars = v;
        }
        if let Some(v) = chart.char_width {
            config.chart.char_width = v;
        }
        if let Some(v) = chart.line_height {
            config.chart.line_height = v;
        }
        if let Some(v) = chart.label_padding_x {
            config.chart.label_padding_x = v;
        }
        if let Some(v) = chart.label_padding_y {
            config.chart.label_padding_y = v;
        }
        if let Some(v) = chart.marker_radius {
            config.chart.marker_radius = v;
        }
        if let Some(v) = chart.min_spacing {
            config.chart.min_spacing = v;
        }
        if let Some(v) = chart.nearby_threshold {
            config.chart.nearby_threshold = v;
        }
        if let Some(v) = chart.label_gap {
            config.chart.label_gap = v;
        }
        if let Some(v) = chart.band_clearance {
            config.chart.band_clearance = v;
        }
        if let Some(v) = chart.search_step {
            config.chart.search_step = v;
        }
        if let Some(v) = chart.max_search_steps {
            config.chart.max_search_steps = v;
        }
        if let Some(v) = chart.diagonal_gap_x {
            config.chart.diagonal_gap_x = v;
        }
        if let Some(v) = chart.diagonal_gap_y {
            config.chart.diagonal_gap_y = v;
        }
    }

    config.render.width = config.chart.width;
    config.render.height = config.chart.height;

    Ok(config)
}
