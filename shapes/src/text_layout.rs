use cosmic_text::{
    Attrs, AttrsList, BufferLine, Family, FontSystem, LayoutGlyph, LayoutLine, LineEnding, Shaping,
    Weight, Wrap,
};
use log::debug;

use crate::{GlyphRun, GlyphRunMetrics, RunGlyph};

#[derive(Debug)]
pub struct TextLayouter<'a> {
    text: &'a str,
    attributes: TextAttributes<'a>,
}

#[derive(Debug)]
pub struct TextAttributes<'a> {
    family: Family<'a>,
    weight: u16,
}

impl Default for TextAttributes<'_> {
    fn default() -> Self {
        Self {
            family: Family::SansSerif,
            weight: Weight::NORMAL.0,
        }
    }
}

impl<'a> TextAttributes<'a> {
    pub fn with_family(mut self, family: Family<'a>) -> Self {
        self.family = family;
        self
    }

    pub fn with_weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    fn to_attrs(&self) -> Attrs<'a> {
        Attrs::new().family(self.family).weight(Weight(self.weight))
    }
}

impl<'a> TextLayouter<'a> {
    /// Creates a default text shaper that uses the Sans-Serif family.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            attributes: TextAttributes::default(),
        }
    }

    pub fn with_attributes(mut self, attributes: TextAttributes<'a>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Shapes the text into a single, unwrapped line.
    pub fn layout(self, font_system: &mut FontSystem, font_size: f32) -> Option<GlyphRun> {
        let attrs_list = AttrsList::new(&self.attributes.to_attrs());
        let mut buffer =
            BufferLine::new(self.text, LineEnding::None, attrs_list, Shaping::Advanced);

        let layouted_lines = buffer.layout(font_system, font_size, None, Wrap::None, None, 0);
        let first_line = layouted_lines.first()?;
        let metrics = metrics(first_line);

        let glyphs: Vec<RunGlyph> = layouted_lines
            .iter()
            .flat_map(|l| &l.glyphs)
            .map(run_glyph)
            .collect();

        debug!(
            "Laid out {} glyphs, {} px wide",
            glyphs.len(),
            metrics.width
        );

        Some(GlyphRun::new(metrics, font_size, glyphs))
    }
}

fn metrics(line: &LayoutLine) -> GlyphRunMetrics {
    GlyphRunMetrics {
        max_ascent: line.max_ascent,
        max_descent: line.max_descent,
        width: line.w,
    }
}

fn run_glyph(glyph: &LayoutGlyph) -> RunGlyph {
    RunGlyph::new((glyph.x, glyph.y), glyph.w, glyph.glyph_id)
}
