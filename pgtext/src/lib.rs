//! Postgres text-format value marshalling.
//!
//! Converts host values into postgres textual literal syntax for query
//! parameters, and parses textual result fields back into typed values.
//! Networking, statement lifecycle and result sets belong to the
//! surrounding client library; this crate only ever sees one field's text
//! and a [`TypeHint`].
//!
//! # Examples
//!
//! Decoding fields with server reported oids and caller overrides:
//!
//! ```
//! use pgtext::{decode_field, ByteStr, TypeOverrideMap, Value};
//!
//! # fn main() -> pgtext::Result<()> {
//! // one result set: its column names, and per row the raw field text
//! // with the server reported oid
//! let map = TypeOverrideMap::parse("balance:String,visits:Array", &["id", "balance", "visits"])?;
//!
//! let id = decode_field(&ByteStr::from_static("7"), map.hint(0, 23))?;
//! let balance = decode_field(&ByteStr::from_static("12345678901234567890"), map.hint(1, 1700))?;
//! let visits = decode_field(&ByteStr::from_static("{3,NULL,9}"), map.hint(2, 1007))?;
//!
//! assert_eq!(id, Value::Integer(7));
//! // String override keeps every digit of a numeric too wide for i64
//! assert_eq!(balance, Value::text("12345678901234567890"));
//! assert_eq!(visits, Value::Sequence(vec![
//!     Value::Integer(3),
//!     Value::Null,
//!     Value::Integer(9),
//! ]));
//! # Ok(())
//! # }
//! ```
//!
//! Encoding parameters:
//!
//! ```
//! use pgtext::{encode_parameter, Point, Value};
//!
//! # fn main() -> pgtext::Result<()> {
//! let tags = encode_parameter(&Value::Sequence(vec![
//!     Value::text("alpha"),
//!     Value::text("two words"),
//! ]))?;
//! assert_eq!(tags, r#"{alpha,"two words"}"#);
//!
//! let origin = encode_parameter(&Value::Point(Point::new(1.5, -2.25)))?;
//! assert_eq!(origin, "(1.500000,-2.250000)");
//! # Ok(())
//! # }
//! ```

pub mod common;

// Literal primitives
pub mod escape;
mod scalar;
pub mod pg_type;

// Value model
mod value;

// Codec
pub mod array;
pub mod geometry;

// Dispatch
pub mod typemap;

// Facade
pub mod decode;
pub mod encode;

mod error;

pub mod types;

pub use common::ByteStr;
pub use pg_type::Oid;
pub use scalar::ScalarKind;
pub use value::{Circle, Path, Point, Polygon, Segment, Value};
pub use typemap::{TypeHint, TypeOverrideMap};
pub use decode::decode_field;
pub use encode::encode_parameter;
pub use error::{Error, ErrorKind, Result};
