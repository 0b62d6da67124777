//! Core types for orthotope bridge grids.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! [`Coord`] vector type shared by every other crate, the closed set of
//! [`GridError`] kinds, and the canonical [`CoordKey`] string codec used to
//! name cells outside the engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod key;

pub use error::GridError;
pub use key::{decode, encode, CoordKey, KEY_SEPARATOR};

use smallvec::SmallVec;

/// A cell coordinate: one integer per axis, axis 0 first.
///
/// Eight inline slots cover every grid the simulations realistically use
/// without a heap allocation; higher-dimensional coordinates spill.
pub type Coord = SmallVec<[i32; 8]>;
