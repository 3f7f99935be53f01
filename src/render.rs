use crate::config::ChartConfig;
use crate::curve::{Phase, sample_curve};
use crate::layout::{Placement, layout_labels};
use crate::model::Marker;
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

#[cfg(feature = "png")]
use crate::config::RenderConfig;

pub fn render_svg(markers: &[Marker], theme: &Theme, config: &ChartConfig) -> String {
    let placements = layout_labels(markers, config);
    let mut svg = String::new();
    let width = config.width;
    let height = config.height;

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));

    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background
    ));

    // Baseline under the hill, spanning the drawable width.
    let baseline = config.baseline_y();
    svg.push_str(&format!(
        "<line x1=\"{:.2}\" y1=\"{baseline:.2}\" x2=\"{:.2}\" y2=\"{baseline:.2}\" stroke=\"{}\" stroke-width=\"1\"/>",
        config.margin_x,
        config.width - config.margin_x,
        theme.baseline_color
    ));

    svg.push_str(&format!(
        "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
        curve_path(config),
        theme.curve_color,
        theme.curve_width
    ));

    // Connectors go under boxes and markers so dashes never cross text.
    for placement in placements.values() {
        if placement.is_default {
            continue;
        }
        let center_x = placement.box_origin.x + placement.box_width / 2.0;
        let center_y = placement.box_origin.y + placement.box_height / 2.0;
        svg.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{center_x:.2}\" y2=\"{center_y:.2}\" stroke=\"{}\" stroke-width=\"1\" stroke-dasharray=\"{}\"/>",
            placement.anchor.x,
            placement.anchor.y,
            theme.connector_color,
            theme.connector_dasharray
        ));
    }

    for placement in placements.values() {
        svg.push_str(&label_box_svg(placement, theme, config));
    }

    for marker in markers {
        let Some(placement) = placements.get(&marker.key) else {
            continue;
        };
        let color = theme.color_for_phase(Phase::for_progress(marker.progress));
        svg.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"{color}\" stroke=\"{}\" stroke-width=\"2\"/>",
            placement.anchor.x, placement.anchor.y, config.marker_radius, theme.marker_stroke
        ));
    }

    svg.push_str("</svg>");
    svg
}

fn curve_path(config: &ChartConfig) -> String {
    let points = sample_curve(config);
    let mut d = String::new();
    for (idx, point) in points.iter().enumerate() {
        if idx == 0 {
            d.push_str(&format!("M {:.2} {:.2}", point.x, point.y));
        } else {
            d.push_str(&format!(" L {:.2} {:.2}", point.x, point.y));
        }
    }
    d
}

fn label_box_svg(placement: &Placement, theme: &Theme, config: &ChartConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"4\" ry=\"4\" fill=\"{}\" stroke=\"{}\" stroke-width=\"0.8\"/>",
        placement.box_origin.x,
        placement.box_origin.y,
        placement.box_width,
        placement.box_height,
        theme.label_background,
        theme.label_border
    ));

    let center_x = placement.box_origin.x + placement.box_width / 2.0;
    // First baseline sits a font-size below the padded top edge.
    let first_y = placement.box_origin.y + config.label_padding_y + theme.font_size;
    out.push_str(&format!(
        "<text x=\"{center_x:.2}\" y=\"{first_y:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">",
        theme.font_family, theme.font_size, theme.label_text_color
    ));
    for (idx, line) in placement.text.lines.iter().enumerate() {
        let dy = if idx == 0 {
            0.0
        } else {
            config.line_height
        };
        out.push_str(&format!(
            "<tspan x=\"{center_x:.2}\" dy=\"{dy:.2}\">{}</tspan>",
            escape_xml(line)
        ));
    }
    out.push_str("</text>");
    out
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.default_size = usvg::Size::from_wh(render_cfg.width, render_cfg.height)
        .unwrap_or(usvg::Size::from_wh(800.0, 400.0).unwrap());

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(key: &str, progress: f32, text: &str) -> Marker {
        Marker {
            key: key.to_string(),
            progress,
            text: text.to_string(),
        }
    }

    #[test]
    fn render_svg_basic() {
        let markers = vec![marker("a", 30.0, "Design review"), marker("b", 75.0, "QA")];
        let svg = render_svg(&markers, &Theme::classic(), &ChartConfig::default());
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("Design review"));
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn displaced_labels_get_dashed_connectors() {
        let markers = vec![
            marker("a", 49.0, "first long label text here"),
            marker("b", 51.0, "second long label text here"),
        ];
        let svg = render_svg(&markers, &Theme::classic(), &ChartConfig::default());
        assert!(svg.contains("stroke-dasharray"));
    }

    #[test]
    fn labels_are_xml_escaped() {
        let markers = vec![marker("a", 50.0, "a < b & c")];
        let svg = render_svg(&markers, &Theme::classic(), &ChartConfig::default());
        assert!(svg.contains("a &lt; b &amp; c"));
        assert!(!svg.contains("a < b & c"));
    }
}
