// File: crates/boxplot-core/src/raster.rs
// Summary: Headless PNG rendering of a scene using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::axis::{Axis, Orient, TICK_PADDING, TICK_SIZE};
use crate::error::ChartError;
use crate::scene::{Anchor, Element, Scene, Text};
use crate::theme::Theme;
use crate::types::Layout;

/// Rasterize `scene` and encode it as PNG.
pub fn render_png(scene: &Scene, layout: &Layout, theme: &Theme) -> Result<Vec<u8>, ChartError> {
    let mut surface = skia::surfaces::raster_n32_premul((layout.width as i32, layout.height as i32))
        .ok_or(ChartError::Raster("failed to create raster surface"))?;
    let canvas = surface.canvas();

    canvas.clear(theme.background);
    let (ox, oy) = layout.origin();
    canvas.translate((ox as f32, oy as f32));

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(1.0);
    stroke.set_color(theme.stroke);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.box_fill);

    let mut marker = stroke.clone();
    marker.set_color(theme.marker);

    for element in scene.elements() {
        match element {
            Element::Text(t) => draw_text(canvas, t, theme),
            Element::Axis(a) => draw_axis(canvas, a, theme),
            Element::Line(l) => {
                canvas.draw_line((l.x1 as f32, l.y1 as f32), (l.x2 as f32, l.y2 as f32), &stroke);
            }
            Element::Rect(r) => {
                let rect = skia::Rect::from_xywh(r.x as f32, r.y as f32, r.width as f32, r.height as f32);
                canvas.draw_rect(rect, &fill);
                canvas.draw_rect(rect, &stroke);
            }
            Element::Circle(c) => {
                canvas.draw_circle((c.cx as f32, c.cy as f32), c.r as f32, &marker);
            }
        }
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(ChartError::Raster("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render to a PNG file, creating parent directories as needed.
pub fn write_png(
    scene: &Scene,
    layout: &Layout,
    theme: &Theme,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<(), ChartError> {
    let bytes = render_png(scene, layout, theme)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn text_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(color);
    paint
}

fn draw_label(canvas: &skia::Canvas, text: &str, x: f32, y: f32, anchor: Anchor, font: &skia::Font, paint: &skia::Paint) {
    let (width, _) = font.measure_str(text, Some(paint));
    let x = match anchor {
        Anchor::Middle => x - width * 0.5,
        Anchor::End => x - width,
    };
    canvas.draw_str(text, (x, y), font, paint);
}

fn draw_text(canvas: &skia::Canvas, t: &Text, theme: &Theme) {
    let paint = text_paint(theme.text);
    let mut font = skia::Font::default();
    font.set_size(t.font_size);

    canvas.save();
    if let Some(deg) = t.rotate {
        canvas.rotate(deg as f32, None);
    }
    draw_label(canvas, &t.content, t.x as f32, t.y as f32, t.anchor, &font, &paint);
    canvas.restore();
}

fn draw_axis(canvas: &skia::Canvas, axis: &Axis, theme: &Theme) {
    let mut line = skia::Paint::default();
    line.set_anti_alias(true);
    line.set_style(skia::paint::Style::Stroke);
    line.set_stroke_width(1.0);
    line.set_color(theme.axis);

    let paint = text_paint(theme.axis);
    let mut font = skia::Font::default();
    font.set_size(10.0);

    let (tx, ty) = (axis.translate.0 as f32, axis.translate.1 as f32);
    let (r0, r1) = (axis.extent.0 as f32, axis.extent.1 as f32);
    let size = TICK_SIZE as f32;
    let gap = (TICK_SIZE + TICK_PADDING) as f32;

    canvas.save();
    canvas.translate((tx, ty));
    match axis.orient {
        Orient::Bottom => {
            canvas.draw_line((r0, 0.0), (r1, 0.0), &line);
            canvas.draw_line((r0, 0.0), (r0, size), &line);
            canvas.draw_line((r1, 0.0), (r1, size), &line);
            for tick in &axis.ticks {
                let x = tick.position as f32;
                canvas.draw_line((x, 0.0), (x, size), &line);
                draw_label(canvas, &tick.label, x, gap + 10.0 * 0.71 + 2.0, Anchor::Middle, &font, &paint);
            }
        }
        Orient::Left => {
            canvas.draw_line((0.0, r0), (0.0, r1), &line);
            canvas.draw_line((0.0, r0), (-size, r0), &line);
            canvas.draw_line((0.0, r1), (-size, r1), &line);
            for tick in &axis.ticks {
                let y = tick.position as f32;
                canvas.draw_line((0.0, y), (-size, y), &line);
                draw_label(canvas, &tick.label, -gap, y + 10.0 * 0.32, Anchor::End, &font, &paint);
            }
        }
    }
    canvas.restore();
}
