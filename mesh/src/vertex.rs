use std::mem::size_of;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use static_assertions::const_assert_eq;

use arctext_geometry::{Color, Point, ToVector3, Vector3};

/// Access to the position of a vertex owned by the host's mesh buffer.
///
/// Everything else a vertex carries (colors, texture coordinates, normals) is opaque to the
/// layout and must be preserved by `set_position`.
pub trait Vertex {
    fn position(&self) -> Vector3;
    fn set_position(&mut self, position: Vector3);

    fn position_2d(&self) -> Point {
        self.position().into()
    }
}

/// The vertex format of a text mesh as it is uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct TextVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coords: [f32; 2],
    pub color: [f32; 4],
}

const_assert_eq!(size_of::<TextVertex>(), 12 * size_of::<f32>());

impl TextVertex {
    pub fn new(position: impl Into<Point>, uv: (f32, f32), color: Color) -> Self {
        let position = position.into();
        Self {
            position: [position.x as f32, position.y as f32, 0.0],
            normal: [0.0, 0.0, 1.0],
            tex_coords: [uv.0, uv.1],
            color: color.to_array(),
        }
    }
}

impl Vertex for TextVertex {
    fn position(&self) -> Vector3 {
        self.position.to_vector3()
    }

    fn set_position(&mut self, position: Vector3) {
        self.position = position.as_vec3().to_array();
    }
}

/// Bare positions, mostly useful for tests and for hosts that keep attributes elsewhere.
impl Vertex for Vector3 {
    fn position(&self) -> Vector3 {
        *self
    }

    fn set_position(&mut self, position: Vector3) {
        *self = position;
    }
}
