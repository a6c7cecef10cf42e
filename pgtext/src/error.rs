//! `pgtext` error types.
use std::fmt;

use crate::{array::ArrayError, encode::EncodeError, geometry::GeometryError, typemap::UnknownTag};

/// A specialized [`Result`] type for `pgtext` operation.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// All possible error from the `pgtext` library.
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }
}

/// All possible error kind from the `pgtext` library.
///
/// Every kind is a local decode or encode failure; the caller decides
/// whether to abort a whole result pass or substitute a placeholder.
pub enum ErrorKind {
    Array(ArrayError),
    Geometry(GeometryError),
    Encode(EncodeError),
    Tag(UnknownTag),
}

macro_rules! from {
    (<$ty:ty>$pat:pat => $body:expr) => {
        impl From<$ty> for Error {
            fn from($pat: $ty) -> Self {
                Self { kind: $body }
            }
        }
    };
}

from!(<ErrorKind>e => e);
from!(<ArrayError>e => ErrorKind::Array(e));
from!(<GeometryError>e => ErrorKind::Geometry(e));
from!(<EncodeError>e => ErrorKind::Encode(e));
from!(<UnknownTag>e => ErrorKind::Tag(e));

impl std::error::Error for Error { }

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

impl std::error::Error for ErrorKind { }

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array(e) => e.fmt(f),
            Self::Geometry(e) => e.fmt(f),
            Self::Encode(e) => e.fmt(f),
            Self::Tag(e) => e.fmt(f),
        }
    }
}

impl fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}
