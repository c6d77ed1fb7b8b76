// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

/// An error related to array shape.
///
/// This is the only recoverable error of the crate: it reports input that
/// cannot describe an array of the requested shape, such as a ragged nested
/// literal. Violations of an operation's contract (an index out of bounds,
/// an inverted slice) panic instead.
#[derive(Clone)]
pub struct ShapeError {
    // we want to be able to change this representation later
    repr: ErrorKind,
}

/// The error produced when nested input does not describe a rectangular
/// array.
pub type InvalidShapeError = ShapeError;

impl ShapeError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.repr
    }

    /// Create a new `ShapeError`
    pub fn from_kind(error: ErrorKind) -> Self {
        from_kind(error)
    }
}

/// Error code for an error related to array shape.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// sibling sequences of a nested literal differ in length, or mix
    /// scalars and sequences
    InvalidShape,
    /// nesting depth does not match the rank of the array
    RankMismatch,
    /// element count does not match the shape
    IncompatibleShape,
    /// the element count of the shape overflows `isize`
    Overflow,
}

#[inline(always)]
pub fn from_kind(k: ErrorKind) -> ShapeError {
    ShapeError { repr: k }
}

impl PartialEq for ShapeError {
    #[inline(always)]
    fn eq(&self, rhs: &Self) -> bool {
        self.repr == rhs.repr
    }
}

impl Error for ShapeError {}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self.kind() {
            ErrorKind::InvalidShape => "invalid shape: inconsistent nested sequences",
            ErrorKind::RankMismatch => "nesting depth does not match array rank",
            ErrorKind::IncompatibleShape => "incompatible shape and element count",
            ErrorKind::Overflow => "arithmetic overflow in shape",
        };
        write!(f, "ShapeError/{:?}: {}", self.kind(), description)
    }
}

impl fmt::Debug for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
