// File: crates/scatter-core/src/svg.rs
// Summary: SVG backend; serializes a Scene as a standalone document with native hover tooltips.

use crate::axis::AxisSide;
use crate::config::ChartConfig;
use crate::scene::Scene;

const FONT_FAMILY: &str = "sans-serif";

pub fn render_svg(scene: &Scene, config: &ChartConfig) -> String {
    let theme = config.theme();
    let (width, height) = (scene.width, scene.height);
    let (pw, ph) = (scene.plot_width, scene.plot_height);
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str("<style>.axis-title{cursor:pointer}.axis-title.active{font-weight:bold}</style>");
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background.to_hex()
    ));
    svg.push_str(&format!(
        "<g transform=\"translate({}, {})\">",
        scene.insets.left, scene.insets.top
    ));

    svg.push_str(&format!("<g class=\"grid\" stroke=\"{}\">", theme.grid.to_hex()));
    for t in &scene.x_axis.ticks {
        svg.push_str(&format!("<line x1=\"{0:.2}\" y1=\"0\" x2=\"{0:.2}\" y2=\"{ph:.2}\"/>", t.px));
    }
    for t in &scene.y_axis.ticks {
        svg.push_str(&format!("<line x1=\"0\" y1=\"{0:.2}\" x2=\"{pw:.2}\" y2=\"{0:.2}\"/>", t.px));
    }
    svg.push_str("</g>");

    let axis = theme.axis_line.to_hex();
    let tick_font = config.tick_font_size;
    let tick_color = theme.tick.to_hex();
    svg.push_str(&format!(
        "<g class=\"x-axis\" data-field=\"{}\" transform=\"translate(0, {ph:.2})\" font-family=\"{FONT_FAMILY}\" font-size=\"{tick_font}\" fill=\"{tick_color}\" text-anchor=\"middle\">",
        scene.x_axis.field
    ));
    svg.push_str(&format!("<line x1=\"0\" y1=\"0\" x2=\"{pw:.2}\" y2=\"0\" stroke=\"{axis}\"/>"));
    for t in &scene.x_axis.ticks {
        svg.push_str(&format!(
            "<line x1=\"{0:.2}\" y1=\"0\" x2=\"{0:.2}\" y2=\"6\" stroke=\"{axis}\"/>",
            t.px
        ));
        if config.draw_labels {
            svg.push_str(&format!("<text x=\"{:.2}\" y=\"{:.2}\">{}</text>", t.px, 9.0 + tick_font, escape_xml(&t.label)));
        }
    }
    svg.push_str("</g>");

    svg.push_str(&format!(
        "<g class=\"y-axis\" data-field=\"{}\" font-family=\"{FONT_FAMILY}\" font-size=\"{tick_font}\" fill=\"{tick_color}\" text-anchor=\"end\">",
        scene.y_axis.field
    ));
    svg.push_str(&format!("<line x1=\"0\" y1=\"0\" x2=\"0\" y2=\"{ph:.2}\" stroke=\"{axis}\"/>"));
    for t in &scene.y_axis.ticks {
        svg.push_str(&format!(
            "<line x1=\"-6\" y1=\"{0:.2}\" x2=\"0\" y2=\"{0:.2}\" stroke=\"{axis}\"/>",
            t.px
        ));
        if config.draw_labels {
            svg.push_str(&format!("<text x=\"-9\" y=\"{:.2}\" dy=\"0.32em\">{}</text>", t.px, escape_xml(&t.label)));
        }
    }
    svg.push_str("</g>");

    let fill = theme.marker_fill.with_opacity(config.marker_opacity);
    svg.push_str(&format!(
        "<g class=\"markers\" fill=\"{}\" fill-opacity=\"{:.2}\">",
        fill.to_hex(),
        fill.opacity()
    ));
    for m in &scene.markers {
        svg.push_str(&format!(
            "<circle data-index=\"{}\" cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\"><title>{}</title></circle>",
            m.index,
            m.cx,
            m.cy,
            m.r,
            escape_xml(&m.tooltip.text())
        ));
    }
    svg.push_str("</g>");

    if config.draw_labels {
        svg.push_str(&format!(
            "<g class=\"labels\" font-family=\"{FONT_FAMILY}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"middle\" pointer-events=\"none\">",
            config.label_font_size,
            theme.marker_label.to_hex()
        ));
        for l in &scene.labels {
            svg.push_str(&format!("<text x=\"{:.2}\" y=\"{:.2}\">{}</text>", l.x, l.y, escape_xml(&l.text)));
        }
        svg.push_str("</g>");

        svg.push_str(&format!(
            "<g class=\"axis-titles\" font-family=\"{FONT_FAMILY}\" font-size=\"{}\" text-anchor=\"middle\">",
            config.title_font_size
        ));
        for t in &scene.titles {
            let (state, color) = if t.active {
                ("active", theme.axis_title)
            } else {
                ("inactive", theme.axis_title_inactive)
            };
            let (axis_name, rotate) = match t.side {
                AxisSide::Bottom => ("x", String::new()),
                AxisSide::Left => ("y", format!(" transform=\"rotate(-90 {:.2} {:.2})\"", t.x, t.y)),
            };
            svg.push_str(&format!(
                "<text class=\"axis-title {state}\" data-axis=\"{axis_name}\" data-field=\"{}\" x=\"{:.2}\" y=\"{:.2}\" fill=\"{}\"{rotate}>{}</text>",
                t.field,
                t.x,
                t.y,
                color.to_hex(),
                escape_xml(t.text)
            ));
        }
        svg.push_str("</g>");
    }

    svg.push_str("</g></svg>");
    svg
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
