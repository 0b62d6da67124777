//! Canonical string keys for coordinates.
//!
//! A key joins the decimal components of a coordinate with
//! [`KEY_SEPARATOR`], placed only between elements. The separator never
//! occurs in the decimal form of an `i32` (negative values included), so
//! `[12]` and `[1, 2]` encode to `"12"` and `"1,2"` and cannot collide.
//! The 0-dimensional coordinate encodes to the empty key.

use crate::error::GridError;
use crate::Coord;
use std::fmt::{self, Write as _};
use std::str::FromStr;

/// Separator between coordinate components in a [`CoordKey`].
pub const KEY_SEPARATOR: char = ',';

/// Canonical string encoding of a coordinate.
///
/// Two keys are equal iff their coordinates have the same arity and the
/// same components.
///
/// # Examples
///
/// ```
/// use orth_core::{decode, encode};
///
/// let key = encode(&[1, 2, 3]);
/// assert_eq!(key.as_str(), "1,2,3");
/// assert_eq!(decode(key.as_str()).unwrap().as_slice(), &[1, 2, 3]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoordKey(String);

impl CoordKey {
    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode this key back into a coordinate.
    ///
    /// Cannot fail for keys built by [`encode`]; a key obtained any other
    /// way has already been validated by [`FromStr`].
    pub fn coord(&self) -> Result<Coord, GridError> {
        decode(&self.0)
    }

    /// Consume the key, returning the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CoordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CoordKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CoordKey {
    type Err = GridError;

    /// Parse and canonicalise a key (`"01"` becomes `"1"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coord = decode(s)?;
        Ok(encode(&coord))
    }
}

impl From<&Coord> for CoordKey {
    fn from(coord: &Coord) -> Self {
        encode(coord)
    }
}

/// Encode a coordinate as its canonical key.
pub fn encode(coord: &[i32]) -> CoordKey {
    let mut out = String::with_capacity(coord.len() * 4);
    for (i, c) in coord.iter().enumerate() {
        if i > 0 {
            out.push(KEY_SEPARATOR);
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{c}");
    }
    CoordKey(out)
}

/// Decode a key into a coordinate.
///
/// The empty key decodes to the empty (0-dimensional) coordinate. Any
/// component that is not an `i32`, including the empty component produced
/// by a leading, trailing or doubled separator, is rejected with
/// [`GridError::InvalidKeyFormat`].
pub fn decode(key: &str) -> Result<Coord, GridError> {
    let mut coord = Coord::new();
    if key.is_empty() {
        return Ok(coord);
    }
    for component in key.split(KEY_SEPARATOR) {
        let value = component
            .parse::<i32>()
            .map_err(|_| GridError::InvalidKeyFormat {
                key: key.to_string(),
                component: component.to_string(),
            })?;
        coord.push(value);
    }
    Ok(coord)
}
