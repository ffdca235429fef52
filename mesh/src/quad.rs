use std::ops::Range;

use derive_more::{Display, Error};
use log::warn;

use arctext_geometry::{BoundingBox, Bounds, Point};

use crate::{QUAD_VERTICES, Vertex};

/// A group of vertices that can not form a character quad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Malformed quad #{quad_index}: {vertex_count} vertices instead of 6")]
pub struct MalformedQuad {
    /// The index the quad would have had in the stream.
    pub quad_index: usize,
    pub vertex_count: usize,
}

/// The six vertices of one character together with their bounding rectangle.
///
/// The vertices are borrowed from the host's buffer.
#[derive(Debug)]
pub struct CharacterQuad<'a, V> {
    index: usize,
    vertices: &'a [V; QUAD_VERTICES],
    bounds: Bounds,
}

// Derived impls would require `V: Clone`.
impl<V> Clone for CharacterQuad<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for CharacterQuad<'_, V> {}

impl<'a, V: Vertex> CharacterQuad<'a, V> {
    /// Creates the quad at `index` of a stream, fails if `vertices` are not exactly six.
    pub fn new(index: usize, vertices: &'a [V]) -> Result<Self, MalformedQuad> {
        let vertices: &'a [V; QUAD_VERTICES] =
            vertices.try_into().map_err(|_| MalformedQuad {
                quad_index: index,
                vertex_count: vertices.len(),
            })?;

        let bounds = vertices
            .iter()
            .map(V::position_2d)
            .bounds()
            .unwrap_or_default();

        Ok(Self {
            index,
            vertices,
            bounds,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn vertices(&self) -> &'a [V; QUAD_VERTICES] {
        self.vertices
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The center of the bounding rectangle, the anchor of every transformation of this quad.
    pub fn pivot(&self) -> Point {
        self.bounds.center()
    }

    /// The range of this quad's vertices in the stream it was extracted from.
    pub fn vertex_range(&self) -> Range<usize> {
        let start = self.index * QUAD_VERTICES;
        start..start + QUAD_VERTICES
    }
}

/// The quads of a vertex stream.
#[derive(Debug)]
pub struct Quads<'a, V> {
    pub quads: Vec<CharacterQuad<'a, V>>,
    /// Set if the stream ended with an incomplete group. These vertices are not part of any quad.
    pub malformed: Option<MalformedQuad>,
}

impl<V> Quads<'_, V> {
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }
}

/// Splits a triangle stream into character quads of six vertices each, in stream order.
///
/// A trailing group with less than six vertices is reported and left out.
pub fn extract_quads<V: Vertex>(vertices: &[V]) -> Quads<'_, V> {
    let chunks = vertices.chunks_exact(QUAD_VERTICES);
    let remainder = chunks.remainder();

    let mut quads = Vec::with_capacity(vertices.len() / QUAD_VERTICES);
    let mut malformed = None;

    for (index, chunk) in chunks.enumerate() {
        match CharacterQuad::new(index, chunk) {
            Ok(quad) => quads.push(quad),
            Err(e) => {
                warn!("{e}");
                malformed = Some(e);
            }
        }
    }

    if !remainder.is_empty() {
        let e = MalformedQuad {
            quad_index: quads.len(),
            vertex_count: remainder.len(),
        };
        warn!("{e}, excluded from layout");
        malformed = Some(e);
    }

    Quads { quads, malformed }
}

#[cfg(test)]
mod tests {
    use arctext_geometry::Vector3;

    use super::*;

    fn quad_at(x: f64, y: f64, w: f64, h: f64) -> [Vector3; 6] {
        let tl = Vector3::new(x, y + h, 0.0);
        let tr = Vector3::new(x + w, y + h, 0.0);
        let br = Vector3::new(x + w, y, 0.0);
        let bl = Vector3::new(x, y, 0.0);
        [tl, tr, br, br, bl, tl]
    }

    fn stream(count: usize) -> Vec<Vector3> {
        (0..count)
            .flat_map(|i| quad_at(i as f64 * 10.0, 0.0, 8.0, 12.0))
            .collect()
    }

    #[test]
    fn groups_in_stream_order() {
        let vertices = stream(4);
        let quads = extract_quads(&vertices);

        assert_eq!(quads.len(), 4);
        assert!(quads.malformed.is_none());
        for (i, quad) in quads.quads.iter().enumerate() {
            assert_eq!(quad.index(), i);
            assert_eq!(quad.vertex_range(), i * 6..i * 6 + 6);
            assert_eq!(quad.vertices().as_slice(), &vertices[i * 6..i * 6 + 6]);
        }
    }

    #[test]
    fn bounds_and_pivot() {
        let vertices = quad_at(20.0, -4.0, 8.0, 12.0);
        let quad = CharacterQuad::new(0, &vertices).unwrap();

        assert_eq!(quad.bounds(), Bounds::new((20.0, -4.0), (28.0, 8.0)));
        assert_eq!(quad.pivot(), Point::new(24.0, 2.0));
    }

    #[test]
    fn wrong_vertex_count_is_not_a_quad() {
        let vertices = stream(1);
        assert_eq!(
            CharacterQuad::new(3, &vertices[..5]).unwrap_err(),
            MalformedQuad {
                quad_index: 3,
                vertex_count: 5
            }
        );
        assert!(CharacterQuad::new(0, &stream(2)).is_err());
    }

    #[test]
    fn trailing_partial_group_is_reported_once() {
        let mut vertices = stream(3);
        vertices.extend_from_slice(&quad_at(100.0, 0.0, 1.0, 1.0)[..4]);

        let quads = extract_quads(&vertices);

        assert_eq!(quads.len(), 3);
        assert_eq!(
            quads.malformed,
            Some(MalformedQuad {
                quad_index: 3,
                vertex_count: 4
            })
        );
    }

    #[test]
    fn fewer_than_six_vertices() {
        let vertices = stream(1);
        let quads = extract_quads(&vertices[..2]);
        assert!(quads.is_empty());
        assert_eq!(quads.malformed.map(|m| m.vertex_count), Some(2));
    }

    #[test]
    fn empty_stream() {
        let quads = extract_quads::<Vector3>(&[]);
        assert!(quads.is_empty());
        assert!(quads.malformed.is_none());
    }

    #[test]
    fn malformed_message() {
        let e = MalformedQuad {
            quad_index: 7,
            vertex_count: 2,
        };
        assert_eq!(e.to_string(), "Malformed quad #7: 2 vertices instead of 6");
    }
}
