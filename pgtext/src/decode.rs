//! Field decoding facade.
//!
//! The collaborator hands over the raw field text and a [`TypeHint`], and
//! never calls in for a protocol level NULL; those become
//! [`Value::Null`][crate::Value::Null] without touching the engine.
use crate::{
    array,
    common::{ByteStr, span, verbose},
    error::Result,
    geometry, pg_type,
    scalar::{self, ScalarKind},
    typemap::TypeHint,
    value::Value,
};

/// Decodes one non null field into a typed [`Value`].
///
/// # Examples
///
/// ```
/// use pgtext::{decode_field, ByteStr, TypeHint, Value};
///
/// # fn main() -> pgtext::Result<()> {
/// let raw = ByteStr::from_static("{1,{2,3},4}");
/// let value = decode_field(&raw, TypeHint::Array(23))?;
///
/// assert_eq!(value, Value::Sequence(vec![
///     Value::Integer(1),
///     Value::Sequence(vec![Value::Integer(2), Value::Integer(3)]),
///     Value::Integer(4),
/// ]));
/// # Ok(())
/// # }
/// ```
pub fn decode_field(raw: &ByteStr, hint: TypeHint) -> Result<Value> {
    span!("decode_field");
    let value = match hint {
        TypeHint::Auto(oid) => auto(raw, oid),
        TypeHint::String => Value::Text(raw.clone()),
        TypeHint::Array(elem) => {
            let kind = pg_type::scalar_kind(pg_type::element_of(elem));
            Value::Sequence(array::decode(raw, kind)?)
        }
        TypeHint::Point => Value::Point(geometry::parse_point(raw)?),
        TypeHint::Line => Value::Segment(geometry::parse_segment(raw)?),
        TypeHint::Box => Value::Segment(geometry::parse_box(raw)?),
        TypeHint::Path => Value::Path(geometry::parse_path(raw)?),
        TypeHint::Polygon => Value::Polygon(geometry::parse_polygon(raw)?),
        TypeHint::Circle => Value::Circle(geometry::parse_circle(raw)?),
    };
    Ok(value)
}

/// Classification by the server reported oid alone.
fn auto(raw: &ByteStr, oid: pg_type::Oid) -> Value {
    let kind = pg_type::scalar_kind(oid);
    verbose!("auto dispatch oid {oid} as {kind:?}");
    match kind {
        ScalarKind::Int => Value::Integer(scalar::leading_i64(raw)),
        ScalarKind::Float => Value::Float(scalar::leading_f64(raw)),
        ScalarKind::Bool => Value::Bool(raw.as_str() == "t"),
        ScalarKind::Text => Value::Text(raw.clone()),
    }
}
