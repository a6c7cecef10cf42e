//! Postgres array literal codec.
//!
//! Encodes a nested [`Value::Sequence`] into `{...}` syntax and parses
//! `{...}` syntax back into a nested sequence, delegating scalar element
//! conversion to a [`ScalarKind`].
use std::{borrow::Cow, fmt};

use crate::{
    common::{ByteStr, verbose},
    encode::{EncodeError, scalar_literal},
    escape,
    scalar::{self, ScalarKind},
    value::Value,
};

/// Nesting depth limit for array decode.
///
/// Postgres itself caps array dimensions far below this, the limit only
/// guards the parser recursion against adversarial input.
pub const MAX_DEPTH: usize = 64;

/// Parses an array literal into its element values.
///
/// The literal must begin with `{`. Trailing text after the matching close
/// brace is ignored, as a nested literal terminates at its own brace.
pub fn decode(raw: &ByteStr, kind: ScalarKind) -> Result<Vec<Value>, ArrayError> {
    let mut parser = Parser {
        raw,
        text: raw.as_str(),
        pos: 0,
        depth_left: MAX_DEPTH,
        kind,
    };
    let items = parser.parse_array()?;
    verbose!("decoded array literal, {} direct elements", items.len());
    Ok(items)
}

/// Encodes the elements of a sequence into `{...}` syntax, appending to
/// `out`.
pub fn encode(items: &[Value], out: &mut String) -> Result<(), EncodeError> {
    out.push('{');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        match item {
            Value::Null => out.push_str("NULL"),
            Value::Sequence(inner) => encode(inner, out)?,
            Value::Text(text) => quote_into(text, true, out),
            other => {
                let mut text = String::new();
                scalar_literal(other, &mut text)?;
                quote_into(&text, false, out);
            }
        }
    }
    out.push('}');
    Ok(())
}

fn quote_into(text: &str, text_typed: bool, out: &mut String) {
    if escape::needs_quoting(text, text_typed) {
        out.push('"');
        escape::escape_into(text, out);
        out.push('"');
    } else {
        out.push_str(text);
    }
}

struct Parser<'a> {
    raw: &'a ByteStr,
    text: &'a str,
    pos: usize,
    depth_left: usize,
    kind: ScalarKind,
}

impl Parser<'_> {
    /// Parses one `{...}` level. Returns with `pos` on the closing brace.
    fn parse_array(&mut self) -> Result<Vec<Value>, ArrayError> {
        if self.byte() != Some(b'{') {
            return Err(ArrayError::MissingBrace { offset: self.pos });
        }
        let Some(depth_left) = self.depth_left.checked_sub(1) else {
            return Err(ArrayError::TooDeep { offset: self.pos });
        };
        self.depth_left = depth_left;
        self.pos += 1;

        let mut items = Vec::new();
        if self.byte() == Some(b'}') {
            self.depth_left += 1;
            return Ok(items);
        }
        loop {
            let item = match self.byte() {
                Some(b'{') => {
                    let inner = self.parse_array()?;
                    self.pos += 1; // inner closing brace
                    Value::Sequence(inner)
                }
                Some(b'"') => self.quoted_item()?,
                _ => self.bare_item()?,
            };
            items.push(item);

            match self.byte() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.depth_left += 1;
                    return Ok(items);
                }
                Some(_) => return Err(ArrayError::Expected { offset: self.pos }),
                None => return Err(ArrayError::Unterminated { offset: self.pos }),
            }
        }
    }

    /// Parses a double quoted element. `pos` starts on the opening quote
    /// and ends on the separator after the closing quote.
    fn quoted_item(&mut self) -> Result<Value, ArrayError> {
        let open = self.pos;
        self.pos += 1;
        let mut start = self.pos;
        // owned buffer only once an escape shows up
        let mut buf: Option<String> = None;
        loop {
            match self.byte() {
                None => return Err(ArrayError::UnterminatedQuote { offset: open }),
                Some(b'"') => {
                    let tail = &self.text[start..self.pos];
                    let text = match buf.take() {
                        Some(mut owned) => {
                            owned.push_str(tail);
                            Cow::Owned(owned)
                        }
                        None => Cow::Borrowed(tail),
                    };
                    self.pos += 1;
                    match self.byte() {
                        Some(b',' | b'}') => {}
                        Some(_) => return Err(ArrayError::Expected { offset: self.pos }),
                        None => return Err(ArrayError::Unterminated { offset: self.pos }),
                    }
                    return Ok(self.convert(text));
                }
                Some(b'\\') => {
                    let owned = buf.get_or_insert_with(String::new);
                    owned.push_str(&self.text[start..self.pos]);
                    let Some(escaped) = self.text[self.pos + 1..].chars().next() else {
                        return Err(ArrayError::UnterminatedQuote { offset: open });
                    };
                    owned.push(escaped);
                    self.pos += 1 + escaped.len_utf8();
                    start = self.pos;
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    /// Parses an unquoted element up to the next separator.
    fn bare_item(&mut self) -> Result<Value, ArrayError> {
        let start = self.pos;
        loop {
            match self.byte() {
                None => return Err(ArrayError::Unterminated { offset: self.pos }),
                Some(b',' | b'}') => break,
                Some(_) => self.pos += 1,
            }
        }
        let text = &self.text[start..self.pos];
        // the bare NULL sentinel is exactly 4 unquoted characters
        if text.len() == 4 && escape::is_null_token(text) {
            return Ok(Value::Null);
        }
        Ok(self.convert(Cow::Borrowed(text)))
    }

    fn convert(&self, text: Cow<'_, str>) -> Value {
        match self.kind {
            ScalarKind::Int => Value::Integer(scalar::leading_i64(&text)),
            ScalarKind::Float => Value::Float(scalar::leading_f64(&text)),
            ScalarKind::Bool => Value::Bool(text == "t"),
            ScalarKind::Text => Value::Text(match text {
                Cow::Borrowed(sub) => self.raw.slice_ref(sub),
                Cow::Owned(owned) => ByteStr::from(owned),
            }),
        }
    }

    fn byte(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }
}

/// An error while decoding an array literal.
///
/// Every variant carries the byte offset of the offending position in the
/// raw text.
#[derive(PartialEq, Eq)]
pub enum ArrayError {
    /// Input does not start an array level with `{`.
    MissingBrace { offset: usize },
    /// Input ended before the closing `}`.
    Unterminated { offset: usize },
    /// A quoted element is never closed.
    UnterminatedQuote { offset: usize },
    /// A separator was expected after an element.
    Expected { offset: usize },
    /// Nesting beyond [`MAX_DEPTH`].
    TooDeep { offset: usize },
}

impl std::error::Error for ArrayError { }

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("malformed array literal, ")?;
        match self {
            Self::MissingBrace { offset } => write!(f, "expected `{{` at offset {offset}"),
            Self::Unterminated { offset } => write!(f, "unterminated array at offset {offset}"),
            Self::UnterminatedQuote { offset } => {
                write!(f, "unterminated quote opened at offset {offset}")
            }
            Self::Expected { offset } => write!(f, "expected `,` or `}}` at offset {offset}"),
            Self::TooDeep { offset } => write!(f, "nesting too deep at offset {offset}"),
        }
    }
}

impl fmt::Debug for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ints(raw: &'static str) -> Result<Vec<Value>, ArrayError> {
        decode(&ByteStr::from_static(raw), ScalarKind::Int)
    }

    fn texts(raw: &'static str) -> Vec<Value> {
        decode(&ByteStr::from_static(raw), ScalarKind::Text).unwrap()
    }

    #[test]
    fn flat() {
        assert_eq!(
            ints("{1,2,3}").unwrap(),
            [Value::Integer(1), Value::Integer(2), Value::Integer(3)],
        );
    }

    #[test]
    fn nested() {
        assert_eq!(
            ints("{1,{2,3},4}").unwrap(),
            [
                Value::Integer(1),
                Value::Sequence(vec![Value::Integer(2), Value::Integer(3)]),
                Value::Integer(4),
            ],
        );
    }

    #[test]
    fn empty() {
        assert!(texts("{}").is_empty());
        assert_eq!(texts("{{},{}}"), [Value::Sequence(vec![]), Value::Sequence(vec![])]);
    }

    #[test]
    fn null_sentinel() {
        assert_eq!(
            texts("{NULL,\"NULL\",null}"),
            [Value::Null, Value::text("NULL"), Value::Null],
        );
    }

    #[test]
    fn quoted_escapes() {
        assert_eq!(
            texts(r#"{"a\"b","c\\d","e,f"}"#),
            [Value::text("a\"b"), Value::text("c\\d"), Value::text("e,f")],
        );
    }

    #[test]
    fn quoted_number_converts() {
        assert_eq!(ints("{\"123\",7}").unwrap(), [Value::Integer(123), Value::Integer(7)]);
    }

    #[test]
    fn bools() {
        assert_eq!(
            decode(&ByteStr::from_static("{t,f,x}"), ScalarKind::Bool).unwrap(),
            [Value::Bool(true), Value::Bool(false), Value::Bool(false)],
        );
    }

    #[test]
    fn floats() {
        assert_eq!(
            decode(&ByteStr::from_static("{1.5,2,abc}"), ScalarKind::Float).unwrap(),
            [Value::Float(1.5), Value::Float(2.0), Value::Float(0.0)],
        );
    }

    #[test]
    fn permissive_int_garbage() {
        assert_eq!(ints("{12abc,xyz}").unwrap(), [Value::Integer(12), Value::Integer(0)]);
    }

    #[test]
    fn unterminated() {
        assert_eq!(ints("{1,2"), Err(ArrayError::Unterminated { offset: 4 }));
        assert_eq!(texts_err("{\"ab"), ArrayError::UnterminatedQuote { offset: 1 });
        assert_eq!(ints("1,2}"), Err(ArrayError::MissingBrace { offset: 0 }));
    }

    fn texts_err(raw: &'static str) -> ArrayError {
        decode(&ByteStr::from_static(raw), ScalarKind::Text).unwrap_err()
    }

    #[test]
    fn depth_guard() {
        let deep = ByteStr::from("{".repeat(MAX_DEPTH + 1));
        assert_eq!(
            decode(&deep, ScalarKind::Text),
            Err(ArrayError::TooDeep { offset: MAX_DEPTH }),
        );
    }

    #[test]
    fn encode_round_trip() {
        let seq = vec![
            Value::Integer(1),
            Value::Null,
            Value::Sequence(vec![Value::Integer(2), Value::Integer(3)]),
        ];
        let mut out = String::new();
        encode(&seq, &mut out).unwrap();
        assert_eq!(out, "{1,NULL,{2,3}}");
        assert_eq!(decode(&ByteStr::from(out), ScalarKind::Int).unwrap(), seq);
    }

    #[test]
    fn deep_mixed_round_trip() {
        // five levels, every leaf kind that survives a text round trip
        let seq = vec![
            Value::text("a,b"),
            Value::Sequence(vec![
                Value::Null,
                Value::Sequence(vec![
                    Value::text("null"),
                    Value::Sequence(vec![
                        Value::text(""),
                        Value::Sequence(vec![Value::text("x\\y")]),
                    ]),
                ]),
            ]),
        ];
        let mut out = String::new();
        encode(&seq, &mut out).unwrap();
        assert_eq!(decode(&ByteStr::from(out), ScalarKind::Text).unwrap(), seq);

        let nums = vec![
            Value::Float(1.5),
            Value::Sequence(vec![Value::Float(-0.25), Value::Null, Value::Float(120.0)]),
        ];
        let mut out = String::new();
        encode(&nums, &mut out).unwrap();
        assert_eq!(decode(&ByteStr::from(out), ScalarKind::Float).unwrap(), nums);
    }

    #[test]
    fn encode_quotes_null_spelling() {
        let mut out = String::new();
        encode(&[Value::text("null"), Value::Null], &mut out).unwrap();
        assert_eq!(out, "{\"null\",NULL}");

        let back = decode(&ByteStr::from(out), ScalarKind::Text).unwrap();
        assert_eq!(back, [Value::text("null"), Value::Null]);
    }

    #[test]
    fn encode_escapes_round_trip() {
        let seq = vec![Value::text("a\"b\\c"), Value::text("d e"), Value::text("")];
        let mut out = String::new();
        encode(&seq, &mut out).unwrap();
        assert_eq!(out, r#"{"a\"b\\c","d e",""}"#);
        assert_eq!(decode(&ByteStr::from(out), ScalarKind::Text).unwrap(), seq);
    }

    #[test]
    fn encode_scalars() {
        let mut out = String::new();
        encode(
            &[Value::Bool(true), Value::Bool(false), Value::Float(1.5), Value::Integer(-4)],
            &mut out,
        )
        .unwrap();
        assert_eq!(out, "{t,f,1.5,-4}");
    }

    #[test]
    fn encode_geometry_element() {
        use crate::value::Point;

        let mut out = String::new();
        encode(&[Value::Point(Point::new(1.0, 2.0))], &mut out).unwrap();
        assert_eq!(out, "{\"(1.000000,2.000000)\"}");
    }

    #[test]
    fn encode_empty() {
        let mut out = String::new();
        encode(&[], &mut out).unwrap();
        assert_eq!(out, "{}");
    }
}
