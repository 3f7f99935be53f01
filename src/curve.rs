//! Maps scalar progress values onto the fixed hill curve.

use crate::config::ChartConfig;
use crate::layout::Point;
use serde::{Deserialize, Serialize};

/// Which stretch of the hill a progress value falls on. Drives marker
/// color only; placement never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Uphill,
    Crest,
    Downhill,
    Done,
}

impl Phase {
    /// Boundary values belong to the upper interval.
    pub fn for_progress(progress: f32) -> Phase {
        if progress < 25.0 {
            Phase::Uphill
        } else if progress < 50.0 {
            Phase::Crest
        } else if progress < 80.0 {
            Phase::Downhill
        } else {
            Phase::Done
        }
    }
}

/// Map a progress value in [0, 100] to its canvas point on the hill.
///
/// The hump is `h(t) = 4t(1-t)`: zero at both ends, one at the midpoint.
/// The vertical rise stops `curve_headroom` short of the top margin so a
/// one-line label still fits above a marker at the apex. Out-of-range
/// progress is deliberately not clamped; the formulas extrapolate and the
/// caller owns the input range.
pub fn map_to_canvas(progress: f32, config: &ChartConfig) -> Point {
    let t = progress / 100.0;
    let hump = 4.0 * t * (1.0 - t);
    let x = config.margin_x + (config.width - 2.0 * config.margin_x) * t;
    let rise =
        config.height - 2.0 * config.margin_y - config.band_height - config.curve_headroom;
    Point {
        x,
        y: config.baseline_y() - rise * hump,
    }
}

/// Evenly spaced points along the hill for drawing the curve itself.
pub fn sample_curve(config: &ChartConfig) -> Vec<Point> {
    let samples = config.curve_samples.max(1);
    (0..=samples)
        .map(|i| {
            let progress = 100.0 * i as f32 / samples as f32;
            map_to_canvas(progress, config)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_sit_on_the_baseline() {
        let config = ChartConfig::default();
        let start = map_to_canvas(0.0, &config);
        let end = map_to_canvas(100.0, &config);
        assert!((start.y - config.baseline_y()).abs() < 1e-4);
        assert!((end.y - config.baseline_y()).abs() < 1e-4);
        assert!((start.x - config.margin_x).abs() < 1e-4);
        assert!((end.x - (config.width - config.margin_x)).abs() < 1e-4);
    }

    #[test]
    fn apex_is_the_minimum_y() {
        let config = ChartConfig::default();
        let apex = map_to_canvas(50.0, &config);
        for progress in [0.0, 10.0, 25.0, 49.0, 51.0, 75.0, 90.0, 100.0] {
            assert!(
                map_to_canvas(progress, &config).y >= apex.y,
                "progress {progress} sits above the apex"
            );
        }
        assert!(apex.y >= config.margin_y);
    }

    #[test]
    fn x_is_monotonic_in_progress() {
        let config = ChartConfig::default();
        let mut last_x = f32::NEG_INFINITY;
        for i in 0..=200 {
            let x = map_to_canvas(i as f32 / 2.0, &config).x;
            assert!(x >= last_x, "x regressed at progress {}", i as f32 / 2.0);
            last_x = x;
        }
    }

    #[test]
    fn out_of_range_progress_extrapolates() {
        let config = ChartConfig::default();
        // Negative hump height lands below the baseline. Not clamped on
        // purpose; see the open-question note in DESIGN.md.
        let below = map_to_canvas(-10.0, &config);
        assert!(below.y > config.baseline_y());
    }

    #[test]
    fn sample_curve_spans_the_drawable_width() {
        let config = ChartConfig::default();
        let points = sample_curve(&config);
        assert_eq!(points.len(), config.curve_samples + 1);
        assert!((points[0].x - config.margin_x).abs() < 1e-4);
        let last = points.last().expect("non-empty");
        assert!((last.x - (config.width - config.margin_x)).abs() < 1e-4);
    }

    #[test]
    fn phase_boundaries_belong_to_the_upper_interval() {
        assert_eq!(Phase::for_progress(0.0), Phase::Uphill);
        assert_eq!(Phase::for_progress(24.9), Phase::Uphill);
        assert_eq!(Phase::for_progress(25.0), Phase::Crest);
        assert_eq!(Phase::for_progress(49.9), Phase::Crest);
        assert_eq!(Phase::for_progress(50.0), Phase::Downhill);
        assert_eq!(Phase::for_progress(80.0), Phase::Done);
        assert_eq!(Phase::for_progress(100.0), Phase::Done);
    }
}
