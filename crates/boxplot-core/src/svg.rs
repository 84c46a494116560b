// File: crates/boxplot-core/src/svg.rs
// Summary: Serialize a scene to an SVG document (plot group translated by the layout insets).

use std::fmt::Write as _;

use crate::axis::{Axis, Orient, TICK_PADDING, TICK_SIZE};
use crate::scene::{Anchor, Element, Scene};
use crate::theme::{css, Theme};
use crate::types::Layout;

/// Half-pixel offset that keeps 1px strokes crisp.
const CRISP: f64 = 0.5;

pub fn to_svg(scene: &Scene, layout: &Layout, theme: &Theme) -> String {
    let mut out = String::with_capacity(4096);
    let (ox, oy) = layout.origin();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" style="background:{}">"#,
        layout.width,
        layout.height,
        css(theme.background)
    );
    let _ = write!(out, r#"<g transform="translate({}, {})">"#, num(ox), num(oy));

    let stroke = css(theme.stroke);
    for element in scene.elements() {
        match element {
            Element::Text(t) => {
                let _ = write!(out, r#"<text x="{}""#, num(t.x));
                if t.y != 0.0 {
                    let _ = write!(out, r#" y="{}""#, num(t.y));
                }
                let _ = write!(out, r#" text-anchor="{}""#, anchor(t.anchor));
                if let Some(deg) = t.rotate {
                    let _ = write!(out, r#" transform="rotate({})""#, num(deg));
                }
                let _ = write!(
                    out,
                    r#" fill="{}" style="font-size: {}px">{}</text>"#,
                    css(theme.text),
                    t.font_size,
                    escape(&t.content)
                );
            }
            Element::Axis(a) => write_axis(&mut out, a, theme),
            Element::Line(l) => {
                let _ = write!(
                    out,
                    r#"<line stroke="{}" x1="{}" x2="{}" y1="{}" y2="{}"></line>"#,
                    stroke,
                    num(l.x1),
                    num(l.x2),
                    num(l.y1),
                    num(l.y2)
                );
            }
            Element::Rect(r) => {
                let _ = write!(
                    out,
                    r#"<rect height="{}" width="{}" fill="{}" stroke="{}" x="{}" y="{}"></rect>"#,
                    num(r.height),
                    num(r.width),
                    css(theme.box_fill),
                    stroke,
                    num(r.x),
                    num(r.y)
                );
            }
            Element::Circle(c) => {
                let _ = write!(
                    out,
                    r#"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}"></circle>"#,
                    num(c.cx),
                    num(c.cy),
                    num(c.r),
                    css(theme.marker)
                );
            }
        }
    }

    out.push_str("</g></svg>");
    out
}

fn write_axis(out: &mut String, axis: &Axis, theme: &Theme) {
    let color = css(theme.axis);
    let (tx, ty) = axis.translate;
    let (r0, r1) = axis.extent;
    let (text_anchor, domain) = match axis.orient {
        Orient::Bottom => (
            "middle",
            format!("M{},{}V{}H{}V{}", num(r0 + CRISP), num(TICK_SIZE), num(CRISP), num(r1 + CRISP), num(TICK_SIZE)),
        ),
        Orient::Left => (
            "end",
            format!("M{},{}H{}V{}H{}", num(-TICK_SIZE), num(r0 + CRISP), num(CRISP), num(r1 + CRISP), num(-TICK_SIZE)),
        ),
    };
    let _ = write!(
        out,
        r#"<g id="axis" transform="translate({},{})" fill="none" font-size="10" font-family="sans-serif" text-anchor="{}">"#,
        num(tx),
        num(ty),
        text_anchor
    );
    let _ = write!(out, r#"<path class="domain" stroke="{}" d="{}"></path>"#, color, domain);
    let label_gap = TICK_SIZE + TICK_PADDING;
    for tick in &axis.ticks {
        match axis.orient {
            Orient::Bottom => {
                let _ = write!(
                    out,
                    r#"<g class="tick" transform="translate({},0)"><line stroke="{c}" y2="{}"></line><text fill="{c}" y="{}" dy="0.71em">{}</text></g>"#,
                    num(tick.position + CRISP),
                    num(TICK_SIZE),
                    num(label_gap),
                    escape(&tick.label),
                    c = color
                );
            }
            Orient::Left => {
                let _ = write!(
                    out,
                    r#"<g class="tick" transform="translate(0,{})"><line stroke="{c}" x2="{}"></line><text fill="{c}" x="{}" dy="0.32em">{}</text></g>"#,
                    num(tick.position + CRISP),
                    num(-TICK_SIZE),
                    num(-label_gap),
                    escape(&tick.label),
                    c = color
                );
            }
        }
    }
    out.push_str("</g>");
}

fn anchor(a: Anchor) -> &'static str {
    match a {
        Anchor::Middle => "middle",
        Anchor::End => "end",
    }
}

/// Coordinates rounded to 1/1000 px, trailing zeros dropped.
fn num(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 { "0".to_string() } else { format!("{}", r) }
}

/// Escape text for use in markup content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
