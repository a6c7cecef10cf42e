//! Column type dispatch and the caller supplied override map.
use std::{fmt, str::FromStr};

use crate::{
    common::verbose,
    pg_type::{self, Oid},
};

/// How to interpret the text of one column or parameter.
///
/// `Auto` defers to the server reported type identifier, every other
/// variant is an explicit caller override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeHint {
    /// Classify by the server reported oid.
    Auto(Oid),
    /// Keep the raw text unconverted, even when the oid is numeric. Guards
    /// big integers and numerics against precision loss.
    String,
    /// Decode an array literal, scalar conversion driven by the element
    /// oid. An array family oid is accepted and reduced to its element.
    Array(Oid),
    Point,
    Line,
    Box,
    Path,
    Polygon,
    Circle,
}

/// One parsed tag of the override micro syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    String,
    Array,
    Point,
    Line,
    Box,
    Path,
    Polygon,
    Circle,
}

impl FromStr for TypeTag {
    type Err = UnknownTag;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "String" => Ok(Self::String),
            "Array" => Ok(Self::Array),
            "Point" => Ok(Self::Point),
            "Line" => Ok(Self::Line),
            "Box" => Ok(Self::Box),
            "Path" => Ok(Self::Path),
            "Polygon" => Ok(Self::Polygon),
            "Circle" => Ok(Self::Circle),
            other => Err(UnknownTag { tag: other.into() }),
        }
    }
}

/// Per column decode overrides for one result set.
///
/// Built once from the compact `name:Tag,name:Tag` syntax against the
/// result's column names, then consulted by position. The map is meant to
/// live for exactly one decode pass; drop it afterwards so a stale mapping
/// never leaks onto an unrelated result.
#[derive(Debug, Default)]
pub struct TypeOverrideMap {
    slots: Box<[Option<TypeTag>]>,
}

impl TypeOverrideMap {
    /// Parses the override syntax against the result's column names.
    ///
    /// Entries naming no known column are silently ignored, as are entries
    /// without a `:`. A name matching several columns tags them all, and a
    /// later entry for the same column wins. An unrecognized tag is an
    /// error.
    pub fn parse(spec: &str, columns: &[&str]) -> Result<TypeOverrideMap, UnknownTag> {
        let mut slots = vec![None; columns.len()].into_boxed_slice();
        for entry in spec.split(',') {
            let Some((name, tag)) = entry.split_once(':') else {
                continue;
            };
            let tag = tag.parse::<TypeTag>()?;
            for (slot, _) in columns.iter().enumerate().filter(|(_, col)| **col == name) {
                slots[slot] = Some(tag);
            }
        }
        verbose!(
            "parsed override map, {} of {} columns tagged",
            slots.iter().flatten().count(),
            slots.len(),
        );
        Ok(TypeOverrideMap { slots })
    }

    /// Resolves the hint for one column given its reported oid.
    ///
    /// An untagged column is `Auto`; the `Array` tag picks up the column's
    /// reported oid reduced to its element.
    pub fn hint(&self, column: usize, oid: Oid) -> TypeHint {
        match self.slots.get(column).copied().flatten() {
            None => TypeHint::Auto(oid),
            Some(TypeTag::String) => TypeHint::String,
            Some(TypeTag::Array) => TypeHint::Array(pg_type::element_of(oid)),
            Some(TypeTag::Point) => TypeHint::Point,
            Some(TypeTag::Line) => TypeHint::Line,
            Some(TypeTag::Box) => TypeHint::Box,
            Some(TypeTag::Path) => TypeHint::Path,
            Some(TypeTag::Polygon) => TypeHint::Polygon,
            Some(TypeTag::Circle) => TypeHint::Circle,
        }
    }

    /// Returns `true` when no column is tagged.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

/// An override map named a tag the dispatcher does not recognize.
#[derive(PartialEq, Eq)]
pub struct UnknownTag {
    tag: Box<str>,
}

impl UnknownTag {
    /// The unrecognized tag text.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl std::error::Error for UnknownTag { }

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown type tag: {:?}", self.tag)
    }
}

impl fmt::Debug for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pg_type::{INT4, INT4_ARRAY};

    #[test]
    fn parse_and_resolve() {
        let map = TypeOverrideMap::parse(
            "age:String,tags:Array,loc:Point",
            &["age", "tags", "loc", "other"],
        )
        .unwrap();
        assert_eq!(map.hint(0, INT4), TypeHint::String);
        assert_eq!(map.hint(1, INT4_ARRAY), TypeHint::Array(INT4));
        assert_eq!(map.hint(2, 600), TypeHint::Point);
        assert_eq!(map.hint(3, INT4), TypeHint::Auto(INT4));
    }

    #[test]
    fn unknown_names_ignored() {
        let map = TypeOverrideMap::parse("ghost:Point", &["age"]).unwrap();
        assert!(map.is_empty());
        assert_eq!(map.hint(0, INT4), TypeHint::Auto(INT4));
    }

    #[test]
    fn unknown_tag_rejected() {
        let err = TypeOverrideMap::parse("age:Wat", &["age"]).unwrap_err();
        assert_eq!(err.tag(), "Wat");
    }

    #[test]
    fn entries_without_colon_skipped() {
        let map = TypeOverrideMap::parse("justaname,age:String", &["age"]).unwrap();
        assert_eq!(map.hint(0, INT4), TypeHint::String);
    }

    #[test]
    fn duplicate_columns_both_tagged() {
        let map = TypeOverrideMap::parse("a:Circle", &["a", "a"]).unwrap();
        assert_eq!(map.hint(0, 0), TypeHint::Circle);
        assert_eq!(map.hint(1, 0), TypeHint::Circle);
    }

    #[test]
    fn later_entry_wins() {
        let map = TypeOverrideMap::parse("a:Point,a:Box", &["a"]).unwrap();
        assert_eq!(map.hint(0, 0), TypeHint::Box);
    }

    #[test]
    fn tag_spelling_is_exact() {
        assert!("point".parse::<TypeTag>().is_err());
        assert_eq!("Polygon".parse::<TypeTag>(), Ok(TypeTag::Polygon));
    }

    #[test]
    fn out_of_range_column_is_auto() {
        let map = TypeOverrideMap::parse("", &[]).unwrap();
        assert_eq!(map.hint(5, INT4), TypeHint::Auto(INT4));
    }
}
