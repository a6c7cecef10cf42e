//! Parameter encoding facade.
use std::fmt::{self, Write as _};

use crate::{array, common::verbose, error::Result, value::Value};

/// Encodes a host value into the literal text bound as a query parameter.
///
/// A protocol level NULL parameter has no text form; bind
/// [`Value::Null`][Value::Null] out of band instead of encoding it.
/// Non finite floats are rejected, the engine emits only finite decimal
/// literals.
///
/// # Examples
///
/// ```
/// use pgtext::{encode_parameter, Value};
///
/// # fn main() -> pgtext::Result<()> {
/// let text = encode_parameter(&Value::Sequence(vec![
///     Value::Integer(1),
///     Value::Null,
///     Value::text("two words"),
/// ]))?;
///
/// assert_eq!(text, r#"{1,NULL,"two words"}"#);
/// # Ok(())
/// # }
/// ```
pub fn encode_parameter(value: &Value) -> Result<String> {
    let mut out = String::new();
    match value {
        Value::Null => return Err(EncodeError::Null.into()),
        Value::Text(text) => out.push_str(text),
        Value::Sequence(items) => array::encode(items, &mut out)?,
        other => scalar_literal(other, &mut out)?,
    }
    verbose!("encoded parameter, {} bytes", out.len());
    Ok(out)
}

/// Renders a non null, non sequence value into its bare literal text.
///
/// Shared with the array codec, which additionally quotes the result when
/// the element syntax requires it.
pub(crate) fn scalar_literal(value: &Value, out: &mut String) -> Result<(), EncodeError> {
    match value {
        Value::Bool(b) => out.push(if *b { 't' } else { 'f' }),
        Value::Integer(int) => out.push_str(itoa::Buffer::new().format(*int)),
        Value::Float(float) => {
            if !float.is_finite() {
                return Err(EncodeError::NonFinite);
            }
            let _ = write!(out, "{float}");
        }
        Value::Point(p) => write_shape(out, p, p.is_finite())?,
        Value::Segment(s) => write_shape(out, s, s.is_finite())?,
        Value::Path(p) => write_shape(out, p, p.is_finite())?,
        Value::Polygon(p) => write_shape(out, p, p.is_finite())?,
        Value::Circle(c) => write_shape(out, c, c.is_finite())?,
        Value::Null | Value::Text(_) | Value::Sequence(_) => {
            unreachable!("handled by the callers")
        }
    }
    Ok(())
}

fn write_shape(
    out: &mut String,
    shape: &dyn fmt::Display,
    finite: bool,
) -> Result<(), EncodeError> {
    if !finite {
        return Err(EncodeError::NonFinite);
    }
    let _ = write!(out, "{shape}");
    Ok(())
}

/// An encode request for a value with no text representation.
#[derive(PartialEq, Eq)]
pub enum EncodeError {
    /// NULL parameters are bound out of band, not encoded.
    Null,
    /// A NaN or infinite coordinate; literals are finite decimals only.
    NonFinite,
}

impl std::error::Error for EncodeError { }

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cannot encode value, ")?;
        match self {
            Self::Null => f.write_str("NULL has no parameter text"),
            Self::NonFinite => f.write_str("non finite number"),
        }
    }
}

impl fmt::Debug for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        error::ErrorKind,
        value::{Circle, Point, Segment},
    };

    fn param(value: Value) -> String {
        encode_parameter(&value).unwrap()
    }

    #[test]
    fn scalars() {
        assert_eq!(param(Value::Integer(42)), "42");
        assert_eq!(param(Value::Integer(-7)), "-7");
        assert_eq!(param(Value::Float(1.5)), "1.5");
        assert_eq!(param(Value::Bool(true)), "t");
        assert_eq!(param(Value::Bool(false)), "f");
    }

    #[test]
    fn text_is_raw() {
        // parameter text is bound as is, quoting only exists inside arrays
        assert_eq!(param(Value::text("two words")), "two words");
        assert_eq!(param(Value::text("null")), "null");
    }

    #[test]
    fn sequences() {
        assert_eq!(
            param(Value::Sequence(vec![Value::Integer(1), Value::Null])),
            "{1,NULL}",
        );
        assert_eq!(param(Value::Sequence(vec![])), "{}");
    }

    #[test]
    fn geometry() {
        assert_eq!(
            param(Value::Segment(Segment::from_coords(0.0, 0.0, 1.0, 1.0))),
            "((0.000000,0.000000),(1.000000,1.000000))",
        );
        assert_eq!(
            param(Value::Circle(Circle::from_coords(1.0, 2.0, 3.0))),
            "<(1.000000,2.000000),3.000000>",
        );
    }

    #[test]
    fn null_is_rejected() {
        let err = encode_parameter(&Value::Null).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Encode(EncodeError::Null)));
    }

    #[test]
    fn non_finite_is_rejected() {
        let err = encode_parameter(&Value::Float(f64::NAN)).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Encode(EncodeError::NonFinite)));

        let err = encode_parameter(&Value::Point(Point::new(f64::INFINITY, 0.0)))
            .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Encode(EncodeError::NonFinite)));

        let nested = Value::Sequence(vec![Value::Float(f64::NEG_INFINITY)]);
        assert!(encode_parameter(&nested).is_err());
    }
}
