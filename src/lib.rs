// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![crate_name = "ndview"]
#![doc(html_root_url = "https://docs.rs/ndview/0.1/")]
#![allow(
    clippy::many_single_char_names,
    clippy::deref_addrof,
    clippy::unreadable_literal,
    clippy::manual_map, // is not an error
    clippy::while_let_on_iterator, // is not an error
    clippy::from_iter_instead_of_collect, // using from_iter is good style
    clippy::incompatible_msrv, // false positive PointerExt::offset
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! The `ndview` crate provides a fixed-rank *n*-dimensional container for
//! general elements and lightweight strided views into it.
//!
//! In *n*-dimensional we include, for example, 1-dimensional rows or columns,
//! 2-dimensional matrices, and higher dimensional arrays. The rank is part of
//! the type: `Array<A, 3>` always has three axes.
//!
//! ## Highlights
//!
//! - Generic *n*-dimensional array, [`Array`], owning a single contiguous
//!   buffer.
//! - Memory layout chosen by type: [`RowMajor`] (last axis varies fastest,
//!   the default) or [`ColumnMajor`] (first axis varies fastest).
//! - Index convention chosen by type: [`ZeroBased`] (the default) or
//!   [`OneBased`]. All public indices and slice bounds are in the array's own
//!   convention.
//! - Read-only and read-write views, [`ArrayView`] and [`ArrayViewMut`],
//!   borrowing either an array or another view:
//!   - slicing every axis with a start, stop and step ([`Slice`], [`s!`]),
//!   - fixing leading or trailing indices to drop axes ([`ViewSpec`]),
//!   - or a combination of the two.
//! - Iteration in the layout's own order, correct for any strides and offsets
//!   a view can produce.
//!
//! ## Crate Summary and Status
//!
//! - There is no arithmetic, no broadcasting and no dynamic rank.
//! - Rank 0 is not supported; read single elements with indexing or `get`.
//! - Views never own their storage. The borrow checker ties every view to
//!   its source, so an array cannot be resized while a view into it is live.
//!
//! ## Crate Feature Flags
//!
//! - `approx`: implementations of traits from the [`approx`] crate for
//!   approximate equality of arrays with floating point elements.
//!
//! [`approx`]: https://docs.rs/approx
//!
//! ## Example
//!
//! ```
//! use ndview::{array, s, Array, ArrayView};
//!
//! let a: Array<f64, 2> = array![[0., 1., 2., 3.],
//!                                [4., 5., 6., 7.],
//!                                [8., 9., 10., 11.]].unwrap();
//!
//! let v = a.slice(s![1..3, 0..4;2]);
//! assert_eq!(v.shape(), &[2, 2]);
//! assert_eq!(v[(1, 1)], 10.);
//!
//! let row: ArrayView<f64, 1> = a.fix_leading([1]);
//! assert_eq!(row.to_string(), "[4,5,6,7]");
//! ```

use std::marker::PhantomData;
use std::ptr::NonNull;

pub use crate::aliases::*;
pub use crate::data_repr::OwnedRepr;
pub use crate::data_traits::{Data, DataMut, DataOwned, RawData, RawDataClone};
pub use crate::dimension::NdIndex;
pub use crate::error::{ErrorKind, InvalidShapeError, ShapeError};
pub use crate::iterators::{Indices, IndexedIter, Iter, IterMut};
pub use crate::layout::{ColumnMajor, Layout, Order, RowMajor};
pub use crate::nested::Nested;
pub use crate::origin::{OneBased, Origin, ZeroBased};
pub use crate::slice::{Slice, ViewSpec};

#[macro_use]
mod macro_utils;
#[macro_use]
mod private;
#[macro_use]
mod slice;
#[macro_use]
mod nested;
mod aliases;
#[cfg(feature = "approx")]
mod array_approx;
mod arrayformat;
mod arraytraits;
mod data_repr;
mod data_traits;
pub mod dimension;
mod error;
mod impl_constructors;
mod impl_methods;
mod impl_owned_array;
mod impl_views;
mod iterators;
pub mod layout;
mod origin;
pub mod prelude;

/// Array index and shape element type.
pub type Ix = usize;

/// An *n*-dimensional array.
///
/// The array is a general container of elements. It cannot grow or shrink
/// except through [`resize`](ArrayBase::resize), but the number of axes is
/// fixed by the const parameter `N`.
///
/// The `ArrayBase<S, N, L, O>` is parameterized by `S` for the data
/// container, `N` for the number of axes, `L` for the memory layout and `O`
/// for the index origin.
///
/// Type aliases [`Array`], [`ArrayView`] and [`ArrayViewMut`] refer to
/// `ArrayBase` with different types for the data container.
///
/// ## Contents
///
/// + [Array](#array)
/// + [ArrayView and ArrayViewMut](#arrayview-and-arrayviewmut)
/// + [Indexing and Dimension](#indexing-and-dimension)
/// + [Slicing](#slicing)
///
/// ## `Array`
///
/// [`Array`] is an owned array that owns the underlying array elements
/// directly (just like a `Vec`). Cloning it copies every element; moving it
/// moves the buffer. [`take`](ArrayBase::take) moves the buffer out and
/// leaves an empty array with an all-zero shape behind.
///
/// ## `ArrayView` and `ArrayViewMut`
///
/// [`ArrayView`] and [`ArrayViewMut`] are read-only and read-write array
/// views respectively. They use dimensionality, indexing, and almost all
/// other methods the same way as the other array types.
///
/// A view keeps a pointer to the start of the buffer it aliases (its *base*),
/// the length of that buffer, and its own shape, strides and per-axis
/// offsets. The element at zero-based index `i` lives at
/// `base + Σ (i[k] * strides[k] + offsets[k])`.
///
/// ## Indexing and Dimension
///
/// Indices are in the array's [`Origin`]: `a[(0, 0)]` is the first element of
/// a zero-based array, `a[(1, 1)]` of a one-based array. Indices can be given
/// as tuples, as a fixed size `[usize; N]`, or as a bare `usize` for
/// one-dimensional arrays; see [`NdIndex`].
///
/// The strides of a freshly allocated array follow its [`Layout`]:
///
/// ```
/// use ndview::{Array, ColumnMajor};
///
/// let a = Array::<f32, 2>::zeros([2, 3]);
/// assert_eq!(a.strides(), &[3, 1]);
///
/// let f = Array::<f32, 2, ColumnMajor>::zeros([2, 3]);
/// assert_eq!(f.strides(), &[1, 2]);
/// ```
///
/// ## Slicing
///
/// A [`Slice`] per axis selects `start..stop` with a step. The [`s!`] macro
/// builds the whole list at once.
///
/// ```
/// use ndview::{s, Array};
///
/// let a = Array::<i32, 2>::from_shape_fn([4, 4], |[i, j]| (10 * i + j) as i32);
/// let v = a.slice(s![1.., ..;2]);
/// assert_eq!(v.shape(), &[3, 2]);
/// assert_eq!(v[(0, 1)], 12);
/// ```
pub struct ArrayBase<S, const N: usize, L = RowMajor, O = ZeroBased>
where
    S: RawData,
{
    /// Data buffer / ownership information. (If owned, contains the data
    /// buffer; if borrowed, contains the lifetime and mutability.)
    data: S,
    /// The start of the aliased buffer; offsets are relative to it.
    ptr: NonNull<S::Elem>,
    /// Number of elements in the aliased buffer, for bounds assertions.
    base_len: usize,
    /// The lengths of the axes.
    dim: [Ix; N],
    /// The element count stride per axis.
    strides: [Ix; N],
    /// Per-axis additive contribution to every element address.
    offsets: [Ix; N],
    layout: PhantomData<(L, O)>,
}

/// An array that owns its data uniquely.
///
/// `Array` is the main n-dimensional array type, and it owns all its array
/// elements.
///
/// ```
/// use ndview::Array;
///
/// let mut a = Array::<u8, 2>::from_elem([2, 3], 7);
/// a[(1, 2)] = 0;
/// assert_eq!(a.size(), 6);
/// ```
pub type Array<A, const N: usize, L = RowMajor, O = ZeroBased> = ArrayBase<OwnedRepr<A>, N, L, O>;

/// A read-only array view.
///
/// An array view represents an array or a part of it, created from
/// an iterator, subview or slice of an array.
///
/// The `ArrayView<'a, A, N>` is parameterized by `'a` for the scope of the
/// borrow, `A` for the element type and `N` for the number of axes.
pub type ArrayView<'a, A, const N: usize, L = RowMajor, O = ZeroBased> =
    ArrayBase<ViewRepr<&'a A>, N, L, O>;

/// A read-write array view.
///
/// Writes go straight through to the aliased buffer.
pub type ArrayViewMut<'a, A, const N: usize, L = RowMajor, O = ZeroBased> =
    ArrayBase<ViewRepr<&'a mut A>, N, L, O>;

unsafe impl<S, const N: usize, L, O> Send for ArrayBase<S, N, L, O> where S: Send + RawData {}

unsafe impl<S, const N: usize, L, O> Sync for ArrayBase<S, N, L, O> where S: Sync + RawData {}

/// Compile time check of the ranks involved in a view construction: `K`
/// fixed indices taken from an `N`-dimensional source leave `M` axes.
pub(crate) struct RankCheck<const N: usize, const K: usize, const M: usize>;

impl<const N: usize, const K: usize, const M: usize> RankCheck<N, K, M> {
    pub(crate) const OK: () = {
        assert!(K + M == N, "ndview: fixed indices plus remaining axes must equal the source rank");
        assert!(M >= 1, "ndview: a view must keep at least one axis");
    };
}

/// Compile time check that an array has at least one axis.
pub(crate) struct NonZeroRank<const N: usize>;

impl<const N: usize> NonZeroRank<N> {
    pub(crate) const OK: () = assert!(N >= 1, "ndview: rank 0 arrays are not supported");
}

/// Array view’s representation.
///
/// *Don’t use this type directly. Use the type aliases
/// [`ArrayView`] / [`ArrayViewMut`] for the array type!*
#[derive(Debug)]
pub struct ViewRepr<A> {
    /// A borrow of the array's data, kept only for its lifetime and
    /// mutability.
    life: PhantomData<A>,
}

copy_and_clone! {['a, A] ViewRepr<&'a A>}
