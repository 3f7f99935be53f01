use std::path::Path;

use hillchart::{ChartConfig, Theme, layout_labels, parse_markers, render_svg};

fn assert_valid_svg(svg: &str, fixture: &str) {
    assert!(svg.contains("<svg"), "{fixture}: missing <svg tag");
    assert!(svg.contains("</svg>"), "{fixture}: missing </svg tag");
}

fn load_fixture(rel: &str) -> Vec<hillchart::Marker> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(rel);
    assert!(path.exists(), "fixture missing: {rel}");
    let input = std::fs::read_to_string(&path).expect("fixture read failed");
    parse_markers(&input).expect("parse failed")
}

#[test]
fn render_all_fixtures() {
    // Keep this list explicit so new fixtures must be added intentionally.
    let candidates = [
        "basic.json",
        "crowded.json",
        "apex_cluster.json",
        "edge_cases.json",
        "empty.json",
    ];

    let theme = Theme::modern();
    let config = ChartConfig::default();
    for rel in candidates {
        let markers = load_fixture(rel);
        let svg = render_svg(&markers, &theme, &config);
        assert_valid_svg(&svg, rel);
    }
}

#[test]
fn every_marker_gets_a_placement() {
    let config = ChartConfig::default();
    for rel in ["basic.json", "crowded.json", "apex_cluster.json", "edge_cases.json"] {
        let markers = load_fixture(rel);
        let placements = layout_labels(&markers, &config);
        assert_eq!(placements.len(), markers.len(), "{rel}: dropped a label");
        for marker in &markers {
            assert!(placements.contains_key(&marker.key), "{rel}: no entry for {}", marker.key);
        }
    }
}

#[test]
fn placements_stay_inside_vertical_band() {
    let config = ChartConfig::default();
    let baseline = config.baseline_y();
    for rel in ["basic.json", "crowded.json", "apex_cluster.json", "edge_cases.json"] {
        let markers = load_fixture(rel);
        for (key, placement) in layout_labels(&markers, &config) {
            let top = placement.box_origin.y;
            let bottom = top + placement.box_height;
            assert!(top >= config.margin_y, "{rel}/{key}: box above top margin");
            assert!(bottom <= baseline, "{rel}/{key}: box crosses the baseline");
        }
    }
}

#[test]
fn layout_is_deterministic_across_runs() {
    let config = ChartConfig::default();
    let markers = load_fixture("crowded.json");
    let first = layout_labels(&markers, &config);
    let second = layout_labels(&markers, &config);
    assert_eq!(first, second);
}

#[test]
fn well_separated_markers_keep_defaults() {
    let config = ChartConfig::default();
    let markers = load_fixture("basic.json");
    for (key, placement) in layout_labels(&markers, &config) {
        assert!(placement.is_default, "{key}: expected untouched default");
    }
}

#[test]
fn crowded_cluster_has_no_pairwise_overlap() {
    let config = ChartConfig::default();
    let markers = load_fixture("crowded.json");
    let placements = layout_labels(&markers, &config);
    let boxes: Vec<_> = placements
        .values()
        .map(|p| (p.box_origin.x, p.box_origin.y, p.box_width, p.box_height))
        .collect();
    for i in 0..boxes.len() {
        for j in (i + 1)..boxes.len() {
            let (ax, ay, aw, ah) = boxes[i];
            let (bx, by, bw, bh) = boxes[j];
            let disjoint = ax + aw <= bx || bx + bw <= ax || ay + ah <= by || by + bh <= ay;
            assert!(disjoint, "boxes {i} and {j} overlap");
        }
    }
}

#[test]
fn displaced_labels_draw_connectors() {
    let theme = Theme::classic();
    let config = ChartConfig::default();
    let markers = load_fixture("apex_cluster.json");
    let placements = layout_labels(&markers, &config);
    assert!(placements.values().any(|p| !p.is_default));
    let svg = render_svg(&markers, &theme, &config);
    assert!(svg.contains("stroke-dasharray"));
}

#[test]
fn empty_fixture_renders_curve_only() {
    let markers = load_fixture("empty.json");
    assert!(markers.is_empty());
    let svg = render_svg(&markers, &Theme::modern(), &ChartConfig::default());
    assert_valid_svg(&svg, "empty.json");
    assert!(!svg.contains("<circle"));
}
