use crate::Point;

/// An axis-aligned bounding rectangle given by its minimum and maximum corner.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn new(min: impl Into<Point>, max: impl Into<Point>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    /// A zero sized bounds at `p`.
    pub fn at(p: Point) -> Self {
        Self { min: p, max: p }
    }

    #[must_use]
    pub fn including(&self, p: Point) -> Self {
        Self {
            min: Point::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        // Don't use (min + max) * 0.5, that might overflow before the 0.5.
        Point::new(
            self.min.x * 0.5 + self.max.x * 0.5,
            self.min.y * 0.5 + self.max.y * 0.5,
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

pub trait BoundingBox {
    /// The smallest [`Bounds`] enclosing all points, `None` if there are none.
    fn bounds(self) -> Option<Bounds>;
}

impl<T> BoundingBox for T
where
    T: Iterator<Item = Point>,
{
    fn bounds(self) -> Option<Bounds> {
        self.fold(None, |current, p| {
            Some(match current {
                Some(b) => b.including(p),
                None => Bounds::at(p),
            })
        })
    }
}
