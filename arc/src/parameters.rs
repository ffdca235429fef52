use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use arctext_geometry::Point;

/// The inputs of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArcParameters {
    /// The angle in degrees the whole block is bent across. Negative values bend downwards.
    pub arc_angle: f64,
    /// Stretches (positive) or compresses (negative) the angular distance between characters.
    pub spacing: f64,
    /// The width of the text block, used as the chord of the arc.
    pub chord_width: f64,
    /// Usually the font size. Half of it is added to the radius.
    pub nominal_glyph_size: f64,
    /// The origin of the block's coordinate system in vertex space.
    ///
    /// Character positions are measured relative to this point, so a character centered on it
    /// is not rotated. Blocks laid out from `x = 0` use `(chord_width / 2, 0)`.
    pub anchor: Point,
}

impl Default for ArcParameters {
    fn default() -> Self {
        Self {
            arc_angle: 0.0,
            spacing: 0.0,
            chord_width: 0.0,
            nominal_glyph_size: 0.0,
            anchor: Point::ZERO,
        }
    }
}

impl ArcParameters {
    pub fn new(arc_angle: f64, chord_width: f64, nominal_glyph_size: f64) -> Self {
        Self {
            arc_angle,
            chord_width,
            nominal_glyph_size,
            ..Self::default()
        }
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_anchor(mut self, anchor: impl Into<Point>) -> Self {
        self.anchor = anchor.into();
        self
    }

    /// Anchors the block at the center of its width, for blocks that start at `x = 0`.
    pub fn centered(self) -> Self {
        let anchor = Point::new(self.chord_width * 0.5, 0.0);
        self.with_anchor(anchor)
    }

    pub fn is_flat(&self) -> bool {
        self.arc_angle == 0.0
    }

    /// Warns about values outside of their conventional ranges.
    ///
    /// Nothing is clamped. Returns `true` if all values are in range.
    pub fn check(&self) -> bool {
        let mut in_range = true;
        if !(-180.0..=180.0).contains(&self.arc_angle) {
            warn!(
                "Arc angle {} is outside of -180..180 degrees, characters may overlap",
                self.arc_angle
            );
            in_range = false;
        }
        if !(-1.0..=1.0).contains(&self.spacing) {
            warn!("Spacing {} is outside of -1..1", self.spacing);
            in_range = false;
        }
        in_range
    }

    pub fn from_toml(toml: &str) -> Result<Self> {
        let parameters: Self =
            toml::from_str(toml).context("Failed to parse arc parameters")?;
        parameters.check();
        Ok(parameters)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let toml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read arc parameters from {}", path.display()))?;
        Self::from_toml(&toml).with_context(|| format!("In {}", path.display()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize arc parameters")
    }
}
