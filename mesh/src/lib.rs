//! Text mesh vertices and their grouping into per-character quads.

mod quad;
mod vertex;

pub use quad::*;
pub use vertex::*;

/// The number of vertices of one character: two triangles.
pub const QUAD_VERTICES: usize = 6;
