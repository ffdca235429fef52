//! Geometry primitives for placing glyph quads.

mod bounds;
mod color;
mod point;
mod transform;

pub use bounds::*;
pub use color::*;
pub use point::*;
pub use transform::*;

pub type Matrix4 = glam::DMat4;
pub type Vector3 = glam::DVec3;
pub type Quaternion = glam::DQuat;

pub trait ToVector3 {
    fn to_vector3(self) -> Vector3;
}

impl ToVector3 for Point {
    fn to_vector3(self) -> Vector3 {
        Vector3::new(self.x, self.y, 0.0)
    }
}

impl ToVector3 for [f32; 3] {
    fn to_vector3(self) -> Vector3 {
        let [x, y, z] = self;
        Vector3::new(x.into(), y.into(), z.into())
    }
}
