//! Type integration with external types.
//!
//! Available for:
//!
//! - [`serde`]'s [`Serialize`][serde::Serialize] over [`Value`][crate::Value]
//!   and the geometry shapes, requires `serde` feature

#[cfg(feature = "serde")]
mod serde;
