//! Postgres type identifiers.
use crate::scalar::ScalarKind;

/// Postgres object identifier.
///
/// The oid type is implemented as an unsigned four-byte integer.
///
/// <https://www.postgresql.org/docs/current/datatype-oid.html>
pub type Oid = u32;

/// `bool` boolean, 'true'/'false', 1-byte storage
pub const BOOL: Oid = 16;
/// `int8` ~18 digit integer, 8-byte storage
pub const INT8: Oid = 20;
/// `int2` -32 thousand to 32 thousand, 2-byte storage
pub const INT2: Oid = 21;
/// `int4` -2 billion to 2 billion integer, 4-byte storage
pub const INT4: Oid = 23;
/// `float4` single-precision floating point number, 4-byte storage
pub const FLOAT4: Oid = 700;
/// `float8` double-precision floating point number, 8-byte storage
pub const FLOAT8: Oid = 701;
/// `numeric` arbitrary precision number
pub const NUMERIC: Oid = 1700;

pub const BOOL_ARRAY: Oid = 1000;
pub const INT2_ARRAY: Oid = 1005;
pub const INT4_ARRAY: Oid = 1007;
pub const INT8_ARRAY: Oid = 1016;
pub const FLOAT4_ARRAY: Oid = 1021;
pub const FLOAT8_ARRAY: Oid = 1022;
pub const NUMERIC_ARRAY: Oid = 1231;

/// Returns the scalar conversion for a server reported type identifier.
///
/// Identifiers outside the integer, floating and boolean families keep
/// their raw text.
pub fn scalar_kind(oid: Oid) -> ScalarKind {
    match oid {
        INT2 | INT4 | INT8 => ScalarKind::Int,
        FLOAT4 | FLOAT8 | NUMERIC => ScalarKind::Float,
        BOOL => ScalarKind::Bool,
        _ => ScalarKind::Text,
    }
}

/// Reduces an array family identifier to its element identifier.
///
/// Scalar identifiers pass through unchanged, so a caller may hand either
/// the column's array oid or the element oid itself. Anything unknown maps
/// to 0, which decodes as raw text.
pub fn element_of(oid: Oid) -> Oid {
    match oid {
        BOOL_ARRAY => BOOL,
        INT2_ARRAY => INT2,
        INT4_ARRAY => INT4,
        INT8_ARRAY => INT8,
        FLOAT4_ARRAY => FLOAT4,
        FLOAT8_ARRAY => FLOAT8,
        NUMERIC_ARRAY => NUMERIC,
        BOOL | INT2 | INT4 | INT8 | FLOAT4 | FLOAT8 | NUMERIC => oid,
        _ => 0,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classify() {
        assert_eq!(scalar_kind(INT4), ScalarKind::Int);
        assert_eq!(scalar_kind(INT8), ScalarKind::Int);
        assert_eq!(scalar_kind(NUMERIC), ScalarKind::Float);
        assert_eq!(scalar_kind(BOOL), ScalarKind::Bool);
        assert_eq!(scalar_kind(25), ScalarKind::Text);
        assert_eq!(scalar_kind(0), ScalarKind::Text);
    }

    #[test]
    fn array_elements() {
        assert_eq!(element_of(INT4_ARRAY), INT4);
        assert_eq!(element_of(BOOL_ARRAY), BOOL);
        assert_eq!(element_of(NUMERIC_ARRAY), NUMERIC);
        assert_eq!(element_of(FLOAT8), FLOAT8);
        assert_eq!(element_of(600), 0);
        assert_eq!(scalar_kind(element_of(INT8_ARRAY)), ScalarKind::Int);
    }
}
