use crate::curve::Phase;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub background: String,
    pub curve_color: String,
    pub curve_width: f32,
    pub baseline_color: String,
    pub uphill_color: String,
    pub crest_color: String,
    pub downhill_color: String,
    pub done_color: String,
    pub marker_stroke: String,
    pub label_background: String,
    pub label_border: String,
    pub label_text_color: String,
    pub connector_color: String,
    pub connector_dasharray: String,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            font_family: "Helvetica, Arial, sans-serif".to_string(),
            font_size: 12.0,
            background: "#FFFFFF".to_string(),
            curve_color: "#999999".to_string(),
            curve_width: 1.5,
            baseline_color: "#CCCCCC".to_string(),
            uphill_color: "#E8A33D".to_string(),
            crest_color: "#D9534F".to_string(),
            downhill_color: "#5BC0DE".to_string(),
            done_color: "#5CB85C".to_string(),
            marker_stroke: "#FFFFFF".to_string(),
            label_background: "#FFFFFF".to_string(),
            label_border: "#DDDDDD".to_string(),
            label_text_color: "#333333".to_string(),
            connector_color: "#AAAAAA".to_string(),
            connector_dasharray: "4 3".to_string(),
        }
    }

    pub fn modern() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 12.0,
            background: "#FFFFFF".to_string(),
            curve_color: "#7A8AA6".to_string(),
            curve_width: 1.6,
            baseline_color: "#D7E0F0".to_string(),
            uphill_color: "#F59E0B".to_string(),
            crest_color: "#EF4444".to_string(),
            downhill_color: "#06B6D4".to_string(),
            done_color: "#10B981".to_string(),
            marker_stroke: "#FFFFFF".to_string(),
            label_background: "#F8FAFF".to_string(),
            label_border: "#C7D2E5".to_string(),
            label_text_color: "#1C2430".to_string(),
            connector_color: "#9AA8C0".to_string(),
            connector_dasharray: "4 3".to_string(),
        }
    }

    pub fn color_for_phase(&self, phase: Phase) -> &str {
        match phase {
            Phase::Uphill => &self.uphill_color,
            Phase::Crest => &self.crest_color,
            Phase::Downhill => &self.downhill_color,
            Phase::Done => &self.done_color,
        }
    }
}
