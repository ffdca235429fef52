//! Bends laid-out text quads along a circular arc.
//!
//! The host hands in the flat triangle stream of a text block, six vertices per character, and
//! the parameters of the arc. Every character quad is rotated around its center and moved onto
//! the arc, all other vertex attributes stay as they are.

mod arc_text;
mod layout;
mod parameters;

pub use arc_text::*;
pub use layout::*;
pub use parameters::*;
