// File: crates/playground-chart/src/text.rs
// Summary: Text width measurement for tooltip layout; glyph-advance estimate or Skia textlayout.

/// Measures rendered text width in pixels.
pub trait TextMeasure {
    fn measure_width(&self, text: &str, size: f32) -> f32;
}

/// Average-advance estimate for a proportional sans-serif face.
#[derive(Clone, Copy, Debug)]
pub struct ApproxTextMeasure {
    /// Average glyph advance as a fraction of the font size.
    pub advance: f32,
}

impl Default for ApproxTextMeasure {
    fn default() -> Self {
        Self { advance: 0.55 }
    }
}

impl TextMeasure for ApproxTextMeasure {
    fn measure_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size.max(1.0) * self.advance
    }
}

#[cfg(feature = "skia")]
pub use skia_text::SkiaTextMeasure;

#[cfg(feature = "skia")]
mod skia_text {
    use skia_safe as skia;
    use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

    use super::TextMeasure;

    /// Shapes text with the system font manager.
    pub struct SkiaTextMeasure {
        fonts: FontCollection,
    }

    impl SkiaTextMeasure {
        pub fn new() -> Self {
            let mut fc = FontCollection::new();
            fc.set_default_font_manager(skia::FontMgr::default(), None);
            Self { fonts: fc }
        }

        fn layout(&self, text: &str, size: f32) -> Paragraph {
            let mut pstyle = ParagraphStyle::new();
            pstyle.set_text_align(skia::textlayout::TextAlign::Left);
            let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
            let mut style = TextStyle::new();
            style.set_font_size(size.max(1.0));
            style.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
            builder.push_style(&style);
            builder.add_text(text);
            let mut paragraph = builder.build();
            paragraph.layout(10_000.0);
            paragraph
        }
    }

    impl Default for SkiaTextMeasure {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TextMeasure for SkiaTextMeasure {
        fn measure_width(&self, text: &str, size: f32) -> f32 {
            self.layout(text, size).longest_line()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_scales_with_length_and_size() {
        let m = ApproxTextMeasure::default();
        assert_eq!(m.measure_width("", 14.0), 0.0);
        let short = m.measure_width("42", 14.0);
        let long = m.measure_width("42°F on January 15, 2024", 14.0);
        assert!(long > short * 5.0);
        assert!(m.measure_width("abc", 28.0) > m.measure_width("abc", 14.0));
    }

    #[cfg(feature = "skia")]
    #[test]
    fn skia_widths_grow_with_length_and_size() {
        let m = SkiaTextMeasure::new();
        let short = m.measure_width("42", 14.0);
        let long = m.measure_width("42°F on January 15, 2024", 14.0);
        assert!(short > 0.0);
        assert!(long > short);
        assert!(m.measure_width("January", 28.0) > m.measure_width("January", 14.0));
    }

    #[cfg(feature = "skia")]
    #[test]
    fn skia_measure_drives_tooltip_width() {
        use crate::config::ChartConfig;
        use crate::tooltip::tooltip_width;

        let cfg = ChartConfig::default();
        let m = SkiaTextMeasure::default();
        let narrow = tooltip_width("1°F on May 1, 2024", &cfg, &m);
        let wide = tooltip_width("100.5°F on September 30, 2024", &cfg, &m);
        assert!(wide > narrow);
    }
}
