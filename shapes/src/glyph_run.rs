use arctext_geometry::{Color, Point};
use arctext_mesh::{QUAD_VERTICES, TextVertex};

/// A line of shaped glyphs.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRun {
    pub metrics: GlyphRunMetrics,
    pub font_size: f32,
    pub glyphs: Vec<RunGlyph>,
}

impl GlyphRun {
    pub fn new(metrics: GlyphRunMetrics, font_size: f32, glyphs: Vec<RunGlyph>) -> Self {
        Self {
            metrics,
            font_size,
            glyphs,
        }
    }

    /// The advance box of `glyph` with y pointing up and the baseline at y = 0.
    pub fn glyph_box(&self, glyph: &RunGlyph) -> (Point, Point) {
        let (x, y) = glyph.pos;
        let bottom = -(self.metrics.max_descent + y);
        let top = self.metrics.max_ascent - y;
        (
            Point::new(x.into(), bottom.into()),
            Point::new((x + glyph.width).into(), top.into()),
        )
    }

    /// Two triangles per glyph, in glyph order.
    ///
    /// Texture coordinates span the unit square of each glyph, the atlas lookup is left to the
    /// renderer.
    pub fn quad_vertices(&self, color: Color) -> Vec<TextVertex> {
        let mut vertices = Vec::with_capacity(self.glyphs.len() * QUAD_VERTICES);
        for glyph in &self.glyphs {
            let (min, max) = self.glyph_box(glyph);
            let tl = TextVertex::new((min.x, max.y), (0.0, 0.0), color);
            let tr = TextVertex::new((max.x, max.y), (1.0, 0.0), color);
            let br = TextVertex::new((max.x, min.y), (1.0, 1.0), color);
            let bl = TextVertex::new((min.x, min.y), (0.0, 1.0), color);
            vertices.extend_from_slice(&[tl, tr, br, br, bl, tl]);
        }
        vertices
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphRunMetrics {
    /// The maximum ascent in pixels.
    pub max_ascent: f32,
    /// The maximum descent in pixels.
    pub max_descent: f32,
    /// The advance width of all the glyphs in the run.
    pub width: f32,
}

impl GlyphRunMetrics {
    pub fn height(&self) -> f32 {
        self.max_ascent + self.max_descent
    }
}

/// A glyph inside a [`GlyphRun`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunGlyph {
    /// The left / top position of the advance box relative to the start of the line.
    pub pos: (f32, f32),
    /// The advance width.
    pub width: f32,
    pub glyph_id: u16,
}

impl RunGlyph {
    pub fn new(pos: (f32, f32), width: f32, glyph_id: u16) -> Self {
        Self {
            pos,
            width,
            glyph_id,
        }
    }
}
