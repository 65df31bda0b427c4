//! SVG renderer: converts `RenderCommand` lists into standalone SVG strings.
//!
//! The reference realization of the render protocol — stroke styles and font
//! shorthands pass through to SVG attributes untouched. Host-specific
//! surfaces (canvas contexts, retained scene graphs) implement the same
//! command loop on their side.

use tickline_protocol::RenderCommand;

/// Render a list of commands as an SVG document string.
///
/// `width` and `height` define the SVG viewBox dimensions. `background`
/// fills the surface first when given; `None` leaves it transparent.
pub fn render_svg(
    commands: &[RenderCommand],
    width: f64,
    height: f64,
    background: Option<&str>,
) -> String {
    let mut svg = String::with_capacity(commands.len() * 120);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#,
    ));

    if let Some(bg) = background {
        svg.push_str(&format!(
            r#"<rect width="{width}" height="{height}" fill="{}"/>"#,
            escape_xml(bg),
        ));
    }

    for cmd in commands {
        match cmd {
            RenderCommand::StrokePolyline {
                points,
                style,
                width: line_width,
            } => {
                let mut coords = String::with_capacity(points.len() * 12);
                for (i, p) in points.iter().enumerate() {
                    if i > 0 {
                        coords.push(' ');
                    }
                    coords.push_str(&format!("{},{}", p.x, p.y));
                }
                svg.push_str(&format!(
                    r#"<polyline points="{coords}" fill="none" stroke="{}" stroke-width="{line_width}"/>"#,
                    escape_xml(style),
                ));
            }
            RenderCommand::FillText {
                position,
                text,
                font,
                style,
            } => {
                svg.push_str(&format!(
                    r#"<text x="{}" y="{}" fill="{}" style="font:{}">{}</text>"#,
                    position.x,
                    position.y,
                    escape_xml(style),
                    escape_xml(font),
                    escape_xml(text),
                ));
            }
        }
    }

    svg.push_str("</svg>");
    svg
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickline_protocol::Point;

    #[test]
    fn basic_svg_output() {
        let commands = vec![
            RenderCommand::StrokePolyline {
                points: vec![Point::new(0.0, 50.0), Point::new(1000.0, 50.0)],
                style: "#FFF".into(),
                width: 3.0,
            },
            RenderCommand::FillText {
                position: Point::new(12.0, 96.0),
                text: "0.5".into(),
                font: "8pt Helvetiker, sans-serif".into(),
                style: "#FFF".into(),
            },
        ];
        let svg = render_svg(&commands, 1000.0, 100.0, Some("#000"));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"points="0,50 1000,50""#));
        assert!(svg.contains(r#"stroke-width="3""#));
        assert!(svg.contains(">0.5</text>"));
    }

    #[test]
    fn escapes_xml_entities() {
        let commands = vec![RenderCommand::FillText {
            position: Point::new(0.0, 0.0),
            text: "a < b & c".into(),
            font: "8pt sans-serif".into(),
            style: "#FFF".into(),
        }];
        let svg = render_svg(&commands, 100.0, 100.0, None);
        assert!(svg.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn no_background_by_default() {
        let svg = render_svg(&[], 100.0, 100.0, None);
        assert!(!svg.contains("<rect"));
    }
}
