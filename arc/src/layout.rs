use derive_more::Display;
use log::{debug, warn};

use arctext_geometry::{Matrix4, Point, Transform, Vector3};
use arctext_mesh::{CharacterQuad, MalformedQuad, QUAD_VERTICES, Vertex, extract_quads};

use crate::ArcParameters;

/// Why a layout pass left the vertices as they were.
#[derive(Debug, Clone, Copy, PartialEq, Display)]
pub enum Skip {
    #[display("Arc angle is zero")]
    Flat,
    #[display("Arc text is disabled")]
    Disabled,
    #[display("Text block width {_0} can not be bent")]
    DegenerateWidth(f64),
    #[display("Arc parameters do not describe a finite circle: {_0:?}")]
    NonFinite(ArcParameters),
}

/// What a layout pass did.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutOutcome {
    /// The number of quads moved onto the arc.
    pub placed: usize,
    pub malformed: Option<MalformedQuad>,
    pub skipped: Option<Skip>,
}

impl LayoutOutcome {
    pub fn skipped(skip: Skip) -> Self {
        Self {
            skipped: Some(skip),
            ..Self::default()
        }
    }
}

/// The circle a text block is bent around, derived from one set of [`ArcParameters`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcLayout {
    anchor: Point,
    arc_angle: f64,
    spacing: f64,
    /// The radius of the block's center line.
    radius: f64,
    /// The length of the arc the block is spread on.
    arc_length: f64,
    /// The distance from the circle's center to the middle of the chord.
    center_offset: f64,
}

impl ArcLayout {
    pub fn new(parameters: &ArcParameters) -> Result<Self, Skip> {
        let ArcParameters {
            arc_angle,
            spacing,
            chord_width,
            nominal_glyph_size,
            anchor,
        } = *parameters;

        if arc_angle == 0.0 {
            return Err(Skip::Flat);
        }
        if !(chord_width > 0.0) {
            return Err(Skip::DegenerateWidth(chord_width));
        }

        let half_angle = arc_angle.to_radians() * 0.5;
        // The glyphs' baselines are below their centers, move the circle out by half a glyph.
        let radius = (chord_width * 0.5) / half_angle.sin() + nominal_glyph_size * 0.5;
        let arc_length = arc_angle.to_radians() * radius;
        let center_offset = radius * half_angle.cos();

        let finite = [spacing, anchor.x, anchor.y, radius, arc_length, center_offset]
            .iter()
            .all(|v| v.is_finite());
        if !finite || arc_length == 0.0 {
            return Err(Skip::NonFinite(*parameters));
        }

        Ok(Self {
            anchor,
            arc_angle,
            spacing,
            radius,
            arc_length,
            center_offset,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn arc_length(&self) -> f64 {
        self.arc_length
    }

    pub fn center_offset(&self) -> f64 {
        self.center_offset
    }

    /// The angular position in degrees of a character centered at `x` relative to the anchor.
    ///
    /// This is `x / chord_width * arc_angle * (chord_width / arc_length) * (1 + spacing)`, with
    /// the chord width canceled out.
    pub fn angle_at(&self, x: f64) -> f64 {
        x * self.arc_angle / self.arc_length * (1.0 + self.spacing)
    }

    /// Computes the rigid transform that moves a character centered at `pivot` onto the arc.
    pub fn quad_transform(&self, pivot: Point) -> QuadTransform {
        let local = pivot - self.anchor;
        let radius = self.radius + local.y;
        let angle = self.angle_at(local.x);
        let (sin, cos) = angle.to_radians().sin_cos();
        let target = Point::new(radius * sin, radius * cos - self.center_offset);

        QuadTransform::new(pivot, angle, target - local)
    }

    pub fn transforms<V: Vertex>(&self, quads: &[CharacterQuad<'_, V>]) -> Vec<QuadTransform> {
        quads
            .iter()
            .map(|quad| self.quad_transform(quad.pivot()))
            .collect()
    }

    /// Bends all complete quads of `vertices` in place.
    pub fn apply<V: Vertex>(&self, vertices: &mut [V]) -> LayoutOutcome {
        // The quads borrow the vertices, so collect the transforms first.
        let (transforms, malformed) = {
            let quads = extract_quads(vertices);
            (self.transforms(&quads.quads), quads.malformed)
        };

        let quads = vertices.chunks_exact_mut(QUAD_VERTICES);
        for (transform, quad) in transforms.iter().zip(quads) {
            transform.apply_to(quad);
        }

        LayoutOutcome {
            placed: transforms.len(),
            malformed,
            skipped: None,
        }
    }
}

/// Rotation around a character's pivot followed by a translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadTransform {
    pivot: Point,
    angle: f64,
    transform: Transform,
    matrix: Matrix4,
}

impl QuadTransform {
    /// `angle` is the character's position on the arc in degrees, the character is rotated by
    /// its negation to stay tangential.
    pub fn new(pivot: Point, angle: f64, translation: Point) -> Self {
        let transform = Transform::planar(translation, -angle);
        Self {
            pivot,
            angle,
            transform,
            matrix: transform.to_matrix4(),
        }
    }

    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// The angular position on the arc in degrees.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The rotation around z in degrees, counter-clockwise.
    pub fn rotation(&self) -> f64 {
        -self.angle
    }

    pub fn translation(&self) -> Point {
        self.transform.translate.into()
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_point(&self, position: Vector3) -> Vector3 {
        let pivot = self.pivot.with_z(0.0);
        pivot + self.matrix.transform_point3(position - pivot)
    }

    pub fn apply_to<V: Vertex>(&self, vertices: &mut [V]) {
        for vertex in vertices {
            vertex.set_position(self.transform_point(vertex.position()));
        }
    }
}

/// Bends the text quads in `vertices` along the arc described by `parameters`.
///
/// Vertices are changed in place, only positions are written. A flat arc leaves everything
/// untouched, as do parameters that do not describe a circle. A trailing incomplete quad is
/// reported in the outcome and left where it is.
pub fn bend<V: Vertex>(vertices: &mut [V], parameters: &ArcParameters) -> LayoutOutcome {
    let layout = match ArcLayout::new(parameters) {
        Ok(layout) => layout,
        Err(skip) => {
            if skip != Skip::Flat {
                warn!("{skip}, leaving text flat");
            }
            return LayoutOutcome::skipped(skip);
        }
    };

    let outcome = layout.apply(vertices);
    debug!(
        "Bent {} quads along {}° (radius {:.2})",
        outcome.placed, parameters.arc_angle, layout.radius
    );
    outcome
}

/// Returns a bent copy of `vertices`.
pub fn bent<V: Vertex + Clone>(
    vertices: &[V],
    parameters: &ArcParameters,
) -> (Vec<V>, LayoutOutcome) {
    let mut result = vertices.to_vec();
    let outcome = bend(&mut result, parameters);
    (result, outcome)
}
