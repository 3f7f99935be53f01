//! Label layout for hill charts.
//!
//! The engine is a pure function of the marker set: every invocation
//! recomputes all placements from scratch and returns fresh output. There
//! is no incremental update path — marker counts are tens, not thousands,
//! and the greedy pass is cheap enough to rerun on every change.

mod label_placement;
mod text;

use serde::{Deserialize, Serialize};

pub use label_placement::layout_labels;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// A wrapped label measured at the chart's character-width estimate.
/// `width`/`height` are text extents; the label box adds padding on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    Above,
    Below,
    Angled(Corner),
}

/// Where one marker's label ended up. `is_default` is true only when the
/// label was accepted at its natural close position with no search; a
/// false value tells the renderer to draw the dashed connector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub anchor: Point,
    pub text: TextBlock,
    pub box_origin: Point,
    pub box_width: f32,
    pub box_height: f32,
    pub orientation: Orientation,
    pub is_default: bool,
}
