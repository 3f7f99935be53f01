//! Greedy label placement for hill chart markers.
//!
//! Markers are processed in anchor-x order (input order breaks ties) and
//! each label only dodges placements committed earlier in the same pass.
//! The asymmetry is intentional: it keeps the pass linear-to-quadratic and
//! makes the result deterministic for a fixed input order.

use std::collections::BTreeMap;

use crate::config::ChartConfig;
use crate::curve::map_to_canvas;
use crate::model::Marker;

use super::text::measure_label;
use super::{Corner, Orientation, Placement, Point, TextBlock};

/// Axis-aligned box as (x, y, w, h).
type Rect = (f32, f32, f32, f32);

const DIAGONAL_ORDER: [Corner; 4] = [
    Corner::TopRight,
    Corner::TopLeft,
    Corner::BottomRight,
    Corner::BottomLeft,
];

struct Entry {
    key: String,
    anchor: Point,
    text: TextBlock,
    box_w: f32,
    box_h: f32,
    /// Distance between the anchor and the near box edge at the default
    /// position: the base gap plus half a line per extra wrapped line.
    gap: f32,
}

struct Committed {
    anchor: Point,
    rect: Rect,
}

/// Place a label for every marker. Total: no input errors, and a marker
/// whose label fits nowhere is clamped into bounds with overlap accepted
/// rather than dropped.
pub fn layout_labels(markers: &[Marker], config: &ChartConfig) -> BTreeMap<String, Placement> {
    let entries: Vec<Entry> = markers
        .iter()
        .map(|marker| {
            let anchor = map_to_canvas(marker.progress, config);
            let text = measure_label(&marker.text, config);
            let box_w = text.width + 2.0 * config.label_padding_x;
            let box_h = text.height + 2.0 * config.label_padding_y;
            let extra = text.lines.len().saturating_sub(1) as f32 * config.line_height / 2.0;
            Entry {
                key: marker.key.clone(),
                anchor,
                text,
                box_w,
                box_h,
                gap: config.label_gap + extra,
            }
        })
        .collect();

    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| {
        entries[a]
            .anchor
            .x
            .partial_cmp(&entries[b].anchor.x)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let anchors: Vec<Point> = entries.iter().map(|entry| entry.anchor).collect();
    let mut committed: Vec<Committed> = Vec::with_capacity(entries.len());
    let mut placements = BTreeMap::new();

    for idx in order {
        let entry = &entries[idx];
        let placement = place_one(entry, &anchors, &committed, config);
        committed.push(Committed {
            anchor: entry.anchor,
            rect: (
                placement.box_origin.x,
                placement.box_origin.y,
                placement.box_width,
                placement.box_height,
            ),
        });
        placements.insert(entry.key.clone(), placement);
    }

    placements
}

fn place_one(
    entry: &Entry,
    anchors: &[Point],
    committed: &[Committed],
    config: &ChartConfig,
) -> Placement {
    let sides = match preferred_side(entry, committed, config) {
        Orientation::Below => [Orientation::Below, Orientation::Above],
        _ => [Orientation::Above, Orientation::Below],
    };

    let mut last_origin = default_origin(entry, sides[0]);
    let mut last_orientation = sides[0];

    for (attempt, side) in sides.into_iter().enumerate() {
        let origin = default_origin(entry, side);
        last_origin = origin;
        last_orientation = side;
        if is_valid(box_rect(origin, entry), anchors, committed, config, false) {
            // Only the preferred side's untouched default counts as a
            // default placement; everything else draws a connector.
            return build(entry, origin, side, attempt == 0);
        }

        for step in 1..=config.max_search_steps {
            let dy = step as f32 * config.search_step;
            let candidate = match side {
                Orientation::Above => Point {
                    x: origin.x,
                    y: origin.y - dy,
                },
                _ => Point {
                    x: origin.x,
                    y: origin.y + dy,
                },
            };
            if crosses_band(candidate, entry, side, config) {
                break;
            }
            last_origin = candidate;
            last_orientation = side;
            if is_valid(box_rect(candidate, entry), anchors, committed, config, false) {
                return build(entry, candidate, side, false);
            }
        }
    }

    for corner in DIAGONAL_ORDER {
        let origin = diagonal_origin(entry, corner, config);
        last_origin = origin;
        last_orientation = Orientation::Angled(corner);
        if is_valid(box_rect(origin, entry), anchors, committed, config, true) {
            return build(entry, origin, Orientation::Angled(corner), false);
        }
    }

    // Everything failed: clamp the last attempt into bounds and accept the
    // overlap. Every marker gets a placement.
    let clamped = clamp_into_bounds(last_origin, entry, config);
    build(entry, clamped, last_orientation, false)
}

fn preferred_side(entry: &Entry, committed: &[Committed], config: &ChartConfig) -> Orientation {
    let mut above = 0usize;
    let mut below = 0usize;
    for other in committed {
        if (other.anchor.x - entry.anchor.x).abs() > config.nearby_threshold {
            continue;
        }
        let center_y = other.rect.1 + other.rect.3 / 2.0;
        if center_y < other.anchor.y {
            above += 1;
        } else {
            below += 1;
        }
    }
    // Ties keep the primary side, matching the source behavior.
    if above > below {
        Orientation::Below
    } else {
        Orientation::Above
    }
}

fn default_origin(entry: &Entry, side: Orientation) -> Point {
    let x = entry.anchor.x - entry.box_w / 2.0;
    match side {
        Orientation::Above => Point {
            x,
            y: entry.anchor.y - entry.gap - entry.box_h,
        },
        _ => Point {
            x,
            y: entry.anchor.y + entry.gap,
        },
    }
}

fn diagonal_origin(entry: &Entry, corner: Corner, config: &ChartConfig) -> Point {
    let dx = entry.box_w / 2.0 + config.diagonal_gap_x;
    let dy = entry.box_h / 2.0 + config.diagonal_gap_y;
    let (sx, sy) = match corner {
        Corner::TopRight => (1.0, -1.0),
        Corner::TopLeft => (-1.0, -1.0),
        Corner::BottomRight => (1.0, 1.0),
        Corner::BottomLeft => (-1.0, 1.0),
    };
    Point {
        x: entry.anchor.x + sx * dx - entry.box_w / 2.0,
        y: entry.anchor.y + sy * dy - entry.box_h / 2.0,
    }
}

fn crosses_band(origin: Point, entry: &Entry, side: Orientation, config: &ChartConfig) -> bool {
    match side {
        Orientation::Above => origin.y < config.margin_y + config.band_clearance,
        _ => origin.y + entry.box_h > config.baseline_y() - config.band_clearance,
    }
}

fn box_rect(origin: Point, entry: &Entry) -> Rect {
    (origin.x, origin.y, entry.box_w, entry.box_h)
}

fn is_valid(
    rect: Rect,
    anchors: &[Point],
    committed: &[Committed],
    config: &ChartConfig,
    check_horizontal: bool,
) -> bool {
    let top = config.margin_y + config.band_clearance;
    let bottom = config.baseline_y() - config.band_clearance;
    if rect.1 < top || rect.1 + rect.3 > bottom {
        return false;
    }
    if check_horizontal
        && (rect.0 < config.margin_x || rect.0 + rect.2 > config.width - config.margin_x)
    {
        return false;
    }

    // Same closest-point test for the label's own marker and every other
    // marker: later markers' circles are obstacles even though their labels
    // are not committed yet.
    let clearance = config.marker_radius + config.min_spacing;
    for anchor in anchors {
        if point_rect_distance(*anchor, &rect) < clearance {
            return false;
        }
    }

    for other in committed {
        if rects_overlap(&rect, &inflate_y(other.rect, config.min_spacing)) {
            return false;
        }
    }
    true
}

fn build(entry: &Entry, origin: Point, orientation: Orientation, is_default: bool) -> Placement {
    Placement {
        anchor: entry.anchor,
        text: entry.text.clone(),
        box_origin: origin,
        box_width: entry.box_w,
        box_height: entry.box_h,
        orientation,
        is_default,
    }
}

fn clamp_into_bounds(origin: Point, entry: &Entry, config: &ChartConfig) -> Point {
    let top = config.margin_y + config.band_clearance;
    let bottom = config.baseline_y() - config.band_clearance - entry.box_h;
    let left = config.margin_x;
    let right = config.width - config.margin_x - entry.box_w;
    Point {
        x: origin.x.clamp(left, right.max(left)),
        y: origin.y.clamp(top, bottom.max(top)),
    }
}

fn point_rect_distance(point: Point, rect: &Rect) -> f32 {
    let min_x = rect.0;
    let min_y = rect.1;
    let max_x = rect.0 + rect.2;
    let max_y = rect.1 + rect.3;
    let dx = if point.x < min_x {
        min_x - point.x
    } else if point.x > max_x {
        point.x - max_x
    } else {
        0.0
    };
    let dy = if point.y < min_y {
        min_y - point.y
    } else if point.y > max_y {
        point.y - max_y
    } else {
        0.0
    };
    (dx * dx + dy * dy).sqrt()
}

fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.0 < b.0 + b.2 && a.0 + a.2 > b.0 && a.1 < b.1 + b.3 && a.1 + a.3 > b.1
}

fn inflate_y(rect: Rect, pad: f32) -> Rect {
    (rect.0, rect.1 - pad, rect.2, rect.3 + pad * 2.0)
}
