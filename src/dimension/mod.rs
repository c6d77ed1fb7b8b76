// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Index and offset arithmetic.
//!
//! Every element address in the crate is computed here, as
//! `Σ (rebase(index[k]) * strides[k] + offsets[k])` over the axes involved.
//! Functions taking origin-based indices are generic over the
//! [`Origin`]; the `stride_offset` family takes zero-based ones.

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::{Ix, Origin};

pub use self::ndindex::NdIndex;

mod ndindex;

/// Return the linear offset of the zero-based `index`.
#[inline]
pub fn stride_offset<const N: usize>(index: &[Ix; N], strides: &[Ix; N]) -> Ix {
    let mut offset = 0;
    for (&i, &s) in index.iter().zip(strides) {
        offset += i * s;
    }
    offset
}

/// Return the linear offset of the origin-based `index`.
///
/// ```
/// use ndview::dimension::offset_of;
/// use ndview::{Layout, ColumnMajor, ZeroBased, OneBased};
///
/// let (strides, _) = ColumnMajor::calculate_strides(&[2, 3]);
/// assert_eq!(offset_of::<ZeroBased, 2>(&[1, 2], &strides), 5);
/// assert_eq!(offset_of::<OneBased, 2>(&[2, 3], &strides), 5);
/// ```
#[inline]
pub fn offset_of<O: Origin, const N: usize>(index: &[Ix; N], strides: &[Ix; N]) -> Ix {
    let mut offset = 0;
    for (&i, &s) in index.iter().zip(strides) {
        offset += O::rebase(i) * s;
    }
    offset
}

/// Return the linear offset of the origin-based `index`, including the
/// per-axis `offsets` of a view.
#[inline]
pub fn offset_with_offsets<O: Origin, const N: usize>(
    index: &[Ix; N], strides: &[Ix; N], offsets: &[Ix; N],
) -> Ix {
    offset_of::<O, N>(index, strides) + offsets.iter().sum::<Ix>()
}

/// Return the offset contributed by fixing the first `K` axes of a source
/// with the given `dim`, `strides` and `offsets` at the origin-based indices
/// `fixed`.
///
/// **Panics** if `K` exceeds `N` or an index is out of bounds.
pub fn leading_offset<O: Origin, const K: usize, const N: usize>(
    fixed: &[Ix; K], dim: &[Ix; N], strides: &[Ix; N], offsets: &[Ix; N],
) -> Ix {
    partial_offset::<O, K, N>(fixed, 0, dim, strides, offsets)
}

/// Return the offset contributed by fixing the last `K` axes of a source
/// with the given `dim`, `strides` and `offsets` at the origin-based indices
/// `fixed`.
///
/// The kept leading axes are taken at their first index, so they contribute
/// nothing.
///
/// **Panics** if `K` exceeds `N` or an index is out of bounds.
pub fn trailing_offset<O: Origin, const K: usize, const N: usize>(
    fixed: &[Ix; K], dim: &[Ix; N], strides: &[Ix; N], offsets: &[Ix; N],
) -> Ix {
    assert!(K <= N, "trailing_offset: {} fixed indices for rank {}", K, N);
    partial_offset::<O, K, N>(fixed, N - K, dim, strides, offsets)
}

fn partial_offset<O: Origin, const K: usize, const N: usize>(
    fixed: &[Ix; K], first_axis: usize, dim: &[Ix; N], strides: &[Ix; N], offsets: &[Ix; N],
) -> Ix {
    assert!(first_axis + K <= N, "{} fixed indices for rank {}", K, N);
    let mut offset = 0;
    for (k, &index) in fixed.iter().enumerate() {
        let axis = first_axis + k;
        let i = O::rebase(index);
        ndassert!(
            i < dim[axis],
            "fixed index {} out of bounds for axis {} of length {}",
            index,
            axis,
            dim[axis]
        );
        offset += i * strides[axis] + offsets[axis];
    }
    offset
}

/// Return the number of elements of `shape`.
///
/// Returns an error if the product of the non-zero axis lengths overflows
/// `isize`, which would make the buffer unaddressable.
pub fn size_of_shape_checked<const N: usize>(shape: &[Ix; N]) -> Result<usize, ShapeError> {
    let size_nonzero = shape
        .iter()
        .filter(|&&d| d != 0)
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| from_kind(ErrorKind::Overflow))?;
    if size_nonzero > isize::MAX as usize {
        Err(from_kind(ErrorKind::Overflow))
    } else {
        Ok(shape.iter().product())
    }
}

/// Rebase an origin-based index to zero.
#[inline]
pub(crate) fn rebase_index<O: Origin, const N: usize>(index: [Ix; N]) -> [Ix; N] {
    index.map(O::rebase)
}

/// Translate a zero-based index to origin `O`.
#[inline]
pub(crate) fn origin_index<O: Origin, const N: usize>(index: [Ix; N]) -> [Ix; N] {
    index.map(O::from_zero)
}
