//! Postgres geometric literal codec.
//!
//! Decoders for the six shape syntaxes. The encode direction is the
//! [`Display`][std::fmt::Display] implementation on each shape struct,
//! validated by the encode facade.
use std::fmt;

use crate::value::{Circle, Path, Point, Polygon, Segment};

/// Parses `(x,y)`.
pub fn parse_point(raw: &str) -> Result<Point, GeometryError> {
    point_body(raw, 0)
}

/// Parses a two point run wrapped in one delimiter pair, `((x1,y1),(x2,y2))`
/// or the `[...]` lseg spelling.
pub fn parse_segment(raw: &str) -> Result<Segment, GeometryError> {
    if !raw.starts_with(['(', '[']) {
        return Err(GeometryError::MissingDelimiter { offset: 0 });
    }
    let points = point_run(&raw[1..], 1, 1)?;
    pair(&points, raw.len())
}

/// Parses the unparenthesized `(x1,y1),(x2,y2)` form the server emits for
/// `box`, upper right corner first.
pub fn parse_box(raw: &str) -> Result<Segment, GeometryError> {
    let points = point_run(raw, 0, 0)?;
    pair(&points, raw.len())
}

/// Parses `((x1,y1),...)` closed or `[(x1,y1),...]` open.
pub fn parse_path(raw: &str) -> Result<Path, GeometryError> {
    let closed = match raw.as_bytes().first() {
        Some(b'(') => true,
        Some(b'[') => false,
        _ => return Err(GeometryError::MissingDelimiter { offset: 0 }),
    };
    let points = point_run(&raw[1..], 1, 1)?;
    Ok(Path { points, closed })
}

/// Parses `((x1,y1),...)`.
pub fn parse_polygon(raw: &str) -> Result<Polygon, GeometryError> {
    if !raw.starts_with('(') {
        return Err(GeometryError::MissingDelimiter { offset: 0 });
    }
    let points = point_run(&raw[1..], 1, 1)?;
    Ok(Polygon { points })
}

/// Parses `<(x,y),r>`.
pub fn parse_circle(raw: &str) -> Result<Circle, GeometryError> {
    let Some(body) = raw.strip_prefix('<') else {
        return Err(GeometryError::MissingDelimiter { offset: 0 });
    };
    let Some(sep) = pair_separator(body) else {
        return Err(GeometryError::MissingSeparator { offset: raw.len() });
    };
    let center = point_body(&body[..sep], 1)?;
    let rest = &body[sep + 1..];
    let Some(radius) = rest.strip_suffix('>') else {
        return Err(GeometryError::MissingDelimiter { offset: raw.len() });
    };
    let radius = number(radius, 1 + sep + 1)?;
    Ok(Circle { center, radius })
}

/// Walks a `(x,y),(x,y),...` run.
///
/// Each step locates the comma inside the current pair, then the comma
/// separating it from the next pair. The final pair has no following
/// separator and is instead trimmed of `trim` trailing delimiter bytes.
/// `at` is the run's offset inside the whole literal, for error reporting.
fn point_run(mut rest: &str, mut at: usize, trim: usize) -> Result<Vec<Point>, GeometryError> {
    let mut points = Vec::new();
    loop {
        match pair_separator(rest) {
            Some(sep) => {
                points.push(point_body(&rest[..sep], at)?);
                rest = &rest[sep + 1..];
                at += sep + 1;
            }
            None => {
                let last = rest
                    .len()
                    .checked_sub(trim)
                    .filter(|end| *end > 0)
                    .and_then(|end| rest.get(..end));
                let Some(last) = last else {
                    return Err(GeometryError::Truncated { offset: at + rest.len() });
                };
                points.push(point_body(last, at)?);
                return Ok(points);
            }
        }
    }
}

/// Offset of the comma after the leading `(x,y)` pair, when one follows.
fn pair_separator(rest: &str) -> Option<usize> {
    let mid = rest.find(',')?;
    let next = rest[mid + 1..].find(',')?;
    Some(mid + 1 + next)
}

fn point_body(text: &str, at: usize) -> Result<Point, GeometryError> {
    let Some(body) = text.strip_prefix('(') else {
        return Err(GeometryError::MissingDelimiter { offset: at });
    };
    let Some(body) = body.strip_suffix(')') else {
        return Err(GeometryError::MissingDelimiter { offset: at + text.len() });
    };
    let Some(comma) = body.find(',') else {
        return Err(GeometryError::MissingSeparator { offset: at + 1 });
    };
    let x = number(&body[..comma], at + 1)?;
    let y = number(&body[comma + 1..], at + comma + 2)?;
    Ok(Point { x, y })
}

fn number(text: &str, at: usize) -> Result<f64, GeometryError> {
    text.trim()
        .parse()
        .map_err(|_| GeometryError::InvalidNumber { offset: at })
}

fn pair(points: &[Point], len: usize) -> Result<Segment, GeometryError> {
    match points {
        [a, b, ..] => Ok(Segment { a: *a, b: *b }),
        _ => Err(GeometryError::Truncated { offset: len }),
    }
}

/// An error while decoding a geometric literal.
#[derive(PartialEq, Eq)]
pub enum GeometryError {
    /// Input ended before the expected shape was complete.
    Truncated { offset: usize },
    /// A `(`, `)`, `[`, `<` or `>` was expected.
    MissingDelimiter { offset: usize },
    /// A coordinate separating comma was expected.
    MissingSeparator { offset: usize },
    /// A coordinate did not parse as a decimal number.
    InvalidNumber { offset: usize },
}

impl std::error::Error for GeometryError { }

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("malformed geometric literal, ")?;
        match self {
            Self::Truncated { offset } => write!(f, "truncated at offset {offset}"),
            Self::MissingDelimiter { offset } => {
                write!(f, "missing delimiter at offset {offset}")
            }
            Self::MissingSeparator { offset } => {
                write!(f, "missing separator at offset {offset}")
            }
            Self::InvalidNumber { offset } => write!(f, "invalid number at offset {offset}"),
        }
    }
}

impl fmt::Debug for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}
