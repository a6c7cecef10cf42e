//! The marshallable value model.
use std::fmt;

use crate::common::ByteStr;

/// Any datum the engine can move between host and postgres text form.
///
/// `Sequence` nests arbitrarily and is the decoded form of an array
/// literal. `Null` round-trips as the bare `NULL` token inside arrays,
/// while a [`Text`][Value::Text] spelling `null` stays quoted.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(ByteStr),
    Sequence(Vec<Value>),
    Point(Point),
    Segment(Segment),
    Path(Path),
    Polygon(Polygon),
    Circle(Circle),
}

impl Value {
    /// Shorthand for a [`Value::Text`].
    pub fn text(text: impl Into<ByteStr>) -> Value {
        Value::Text(text.into())
    }

    /// Returns `true` for [`Value::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// The `point` type, `(x,y)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A pair of points, the shape behind both `lseg`/`line` and `box`.
///
/// A box is the same two points read as corners, exposed through
/// [`ur`][Segment::ur] and [`ll`][Segment::ll].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub const fn new(a: Point, b: Point) -> Segment {
        Segment { a, b }
    }

    /// Builds the segment from four discrete coordinates.
    ///
    /// Renders identically to [`Segment::new`] with the same points.
    pub const fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment { a: Point::new(x1, y1), b: Point::new(x2, y2) }
    }

    /// The upper right corner of the box reading.
    pub const fn ur(&self) -> Point {
        self.a
    }

    /// The lower left corner of the box reading.
    pub const fn ll(&self) -> Point {
        self.b
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite()
    }
}

/// The `path` type, a point run that is either closed `(...)` or open
/// `[...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl Path {
    pub fn new(points: Vec<Point>, closed: bool) -> Path {
        Path { points, closed }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.points.iter().all(Point::is_finite)
    }
}

/// The `polygon` type, a closed point run.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Polygon {
        Polygon { points }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.points.iter().all(Point::is_finite)
    }
}

/// The `circle` type, `<(x,y),r>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub const fn new(center: Point, radius: f64) -> Circle {
        Circle { center, radius }
    }

    /// Builds the circle from three discrete coordinates.
    ///
    /// Renders identically to [`Circle::new`] with the same point.
    pub const fn from_coords(x: f64, y: f64, radius: f64) -> Circle {
        Circle { center: Point::new(x, y), radius }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }
}

// Display renders the postgres literal form, fixed 6 fraction digits.

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6},{:.6})", self.x, self.y)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.a, self.b)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = match self.closed {
            true => ('(', ')'),
            false => ('[', ']'),
        };
        write!(f, "{open}")?;
        fmt_run(&self.points, f)?;
        write!(f, "{close}")
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        fmt_run(&self.points, f)?;
        write!(f, ")")
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{},{:.6}>", self.center, self.radius)
    }
}

fn fmt_run(points: &[Point], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{point}")?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn point_literal() {
        assert_eq!(Point::new(1.5, -2.25).to_string(), "(1.500000,-2.250000)");
    }

    #[test]
    fn segment_literal() {
        let seg = Segment::from_coords(0.0, 0.5, 1.0, 2.0);
        assert_eq!(seg.to_string(), "((0.000000,0.500000),(1.000000,2.000000))");
        assert_eq!(seg, Segment::new(Point::new(0.0, 0.5), Point::new(1.0, 2.0)));
    }

    #[test]
    fn box_corners() {
        let b = Segment::from_coords(3.0, 4.0, 1.0, 2.0);
        assert_eq!(b.ur(), Point::new(3.0, 4.0));
        assert_eq!(b.ll(), Point::new(1.0, 2.0));
    }

    #[test]
    fn path_literal() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let closed = Path::new(points.clone(), true);
        assert_eq!(closed.to_string(), "((0.000000,0.000000),(1.000000,1.000000))");
        let open = Path::new(points, false);
        assert_eq!(open.to_string(), "[(0.000000,0.000000),(1.000000,1.000000)]");
    }

    #[test]
    fn polygon_literal() {
        let poly = Polygon::new(vec![Point::new(0.0, 0.0)]);
        assert_eq!(poly.to_string(), "((0.000000,0.000000))");
    }

    #[test]
    fn circle_literal() {
        assert_eq!(
            Circle::from_coords(1.0, 2.0, 3.0).to_string(),
            "<(1.000000,2.000000),3.000000>",
        );
    }
}
