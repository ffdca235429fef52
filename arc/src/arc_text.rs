use arctext_geometry::Point;
use arctext_mesh::Vertex;

use crate::{ArcParameters, LayoutOutcome, Skip, bend};

/// The arc settings of one text element.
///
/// The host calls [`ArcText::recompute`] whenever the text's mesh was rebuilt, its dimensions
/// changed, or one of the settings here changed. Nothing is cached between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcText {
    parameters: ArcParameters,
    enabled: bool,
}

impl Default for ArcText {
    fn default() -> Self {
        Self::new(ArcParameters::default())
    }
}

impl ArcText {
    pub fn new(parameters: ArcParameters) -> Self {
        Self {
            parameters,
            enabled: true,
        }
    }

    pub fn parameters(&self) -> &ArcParameters {
        &self.parameters
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_arc_angle(&mut self, degrees: f64) {
        self.parameters.arc_angle = degrees;
    }

    pub fn set_spacing(&mut self, spacing: f64) {
        self.parameters.spacing = spacing;
    }

    /// Updates the text block's width and its font size.
    pub fn set_dimensions(&mut self, chord_width: f64, nominal_glyph_size: f64) {
        self.parameters.chord_width = chord_width;
        self.parameters.nominal_glyph_size = nominal_glyph_size;
    }

    pub fn set_anchor(&mut self, anchor: impl Into<Point>) {
        self.parameters.anchor = anchor.into();
    }

    /// Bends the freshly laid out text mesh in place.
    pub fn recompute<V: Vertex>(&self, vertices: &mut [V]) -> LayoutOutcome {
        if !self.enabled {
            return LayoutOutcome::skipped(Skip::Disabled);
        }
        bend(vertices, &self.parameters)
    }

    /// Returns a bent copy of the text mesh.
    pub fn modify<V: Vertex + Clone>(&self, vertices: &[V]) -> Vec<V> {
        let mut vertices = vertices.to_vec();
        self.recompute(&mut vertices);
        vertices
    }
}

#[cfg(test)]
mod tests {
    use arctext_geometry::Vector3;

    use super::*;

    fn glyphs() -> Vec<Vector3> {
        (0..4)
            .flat_map(|i| {
                let x = i as f64 * 10.0;
                let tl = Vector3::new(x, 10.0, 0.0);
                let tr = Vector3::new(x + 8.0, 10.0, 0.0);
                let br = Vector3::new(x + 8.0, 0.0, 0.0);
                let bl = Vector3::new(x, 0.0, 0.0);
                [tl, tr, br, br, bl, tl]
            })
            .collect()
    }

    #[test]
    fn disabled_text_stays_flat() {
        let mut text = ArcText::new(ArcParameters::new(90.0, 40.0, 10.0).centered());
        text.set_enabled(false);

        let mut vertices = glyphs();
        let outcome = text.recompute(&mut vertices);

        assert_eq!(outcome.skipped, Some(Skip::Disabled));
        assert_eq!(vertices, glyphs());
    }

    #[test]
    fn recompute_follows_setting_changes() {
        let mut text = ArcText::default();
        assert_eq!(text.modify(&glyphs()), glyphs());

        text.set_dimensions(40.0, 10.0);
        text.set_anchor((20.0, 0.0));
        text.set_arc_angle(90.0);
        let bent = text.modify(&glyphs());
        assert_ne!(bent, glyphs());

        text.set_spacing(0.5);
        let spread = text.modify(&glyphs());
        assert_ne!(spread, bent);
        assert_eq!(text.parameters().spacing, 0.5);

        text.set_arc_angle(0.0);
        assert_eq!(text.modify(&glyphs()), glyphs());
    }

    #[test]
    fn recompute_starts_from_the_given_mesh() {
        let text = ArcText::new(ArcParameters::new(60.0, 40.0, 10.0).centered());
        assert_eq!(text.modify(&glyphs()), text.modify(&glyphs()));

        let mut vertices = glyphs();
        let outcome = text.recompute(&mut vertices);
        assert_eq!(outcome.placed, 4);
        assert!(text.is_enabled());
    }
}
