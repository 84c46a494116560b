// File: crates/boxplot-core/src/theme.rs
// Summary: Color themes shared by the SVG and PNG outputs.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub box_fill: skia::Color,
    pub stroke: skia::Color,
    pub marker: skia::Color,
    pub axis: skia::Color,
    pub text: skia::Color,
}

impl Theme {
    /// Black strokes and a green box on white.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            box_fill: skia::Color::from_argb(255, 0, 128, 0),
            stroke: skia::Color::from_argb(255, 0, 0, 0),
            marker: skia::Color::from_argb(255, 0, 0, 0),
            axis: skia::Color::from_argb(255, 0, 0, 0),
            text: skia::Color::from_argb(255, 0, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            box_fill: skia::Color::from_argb(255, 40, 200, 120),
            stroke: skia::Color::from_argb(255, 235, 235, 245),
            marker: skia::Color::from_argb(255, 255, 230, 70),
            axis: skia::Color::from_argb(255, 180, 180, 190),
            text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            box_fill: skia::Color::from_argb(255, 0x00, 0xff, 0x00),
            stroke: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            marker: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            axis: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            text: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

/// CSS color for SVG attributes.
pub fn css(c: skia::Color) -> String {
    if c.a() == 255 {
        format!("rgb({},{},{})", c.r(), c.g(), c.b())
    } else {
        format!("rgba({},{},{},{:.3})", c.r(), c.g(), c.b(), c.a() as f32 / 255.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive_with_fallback() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("nope").name, "light");
    }

    #[test]
    fn css_colors() {
        assert_eq!(css(Theme::light().box_fill), "rgb(0,128,0)");
        assert_eq!(css(skia::Color::from_argb(0, 1, 2, 3)), "rgba(1,2,3,0.000)");
    }
}
