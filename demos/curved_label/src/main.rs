//! Lays out a line of text, bends it along an arc and prints the resulting vertices as JSON.
//!
//! Usage: `curved_label [config.toml]`

use std::{env, fs, io};

use anyhow::{Context, Result, bail};
use cosmic_text::FontSystem;
use log::info;
use serde::{Deserialize, Serialize};

use arctext_arc::{ArcParameters, ArcText, LayoutOutcome};
use arctext_geometry::Color;
use arctext_mesh::TextVertex;
use arctext_shapes::Size;

const DEFAULT_CONFIG: &str = include_str!("../curved_label.toml");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LabelConfig {
    text: String,
    font_size: f32,
    #[serde(default)]
    color: Color,
    /// Width, glyph size and anchor are taken from the laid out text.
    #[serde(default)]
    arc: ArcParameters,
}

#[derive(Debug, Serialize)]
struct Output<'a> {
    parameters: &'a ArcParameters,
    placed: usize,
    vertices: &'a [TextVertex],
}

fn main() -> Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => {
            fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?
        }
        None => DEFAULT_CONFIG.to_string(),
    };
    let config: LabelConfig = toml::from_str(&config).context("Failed to parse label config")?;
    config.arc.check();

    let mut font_system = FontSystem::new();
    let Some(run) = config
        .text
        .as_str()
        .size(config.font_size)
        .layout(&mut font_system)
    else {
        bail!("Nothing to lay out");
    };

    let mut vertices = run.quad_vertices(config.color);

    let mut arc_text = ArcText::new(config.arc);
    let width = f64::from(run.metrics.width);
    arc_text.set_dimensions(width, config.font_size.into());
    arc_text.set_anchor((width * 0.5, 0.0));

    let LayoutOutcome {
        placed, malformed, ..
    } = arc_text.recompute(&mut vertices);
    if let Some(malformed) = malformed {
        bail!("Text layout produced an incomplete quad: {malformed}");
    }
    info!("Placed {placed} of {} glyphs", run.glyphs.len());

    let output = Output {
        parameters: arc_text.parameters(),
        placed,
        vertices: &vertices,
    };
    serde_json::to_writer_pretty(io::stdout().lock(), &output)
        .context("Failed to write vertices")?;
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config: LabelConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.font_size, 32.0);
        assert_eq!(config.arc.arc_angle, 120.0);
        assert_eq!(config.arc.chord_width, 0.0);
        assert_eq!(config.color.alpha, 1.0);
    }
}
