// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::dimension::size_of_shape_checked;
use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::{ArrayBase, ArrayView, ArrayViewMut, Ix, Layout, NonZeroRank, Origin, ViewRepr};

/// # Methods Specific to Array Views
///
/// Methods for read-only array views `ArrayView<'a, A, N, L, O>`
///
/// Note that array views implement traits like `IntoIterator` too.
impl<'a, A, const N: usize, L, O> ArrayView<'a, A, N, L, O>
where
    L: Layout,
    O: Origin,
{
    /// Create a read-only array view borrowing its data from a slice.
    ///
    /// The view has the canonical strides of layout `L` for `shape` and
    /// aliases the front of `xs`; `xs` may be longer than the view.
    ///
    /// ***Errors*** if `xs` holds fewer elements than `shape` needs.
    ///
    /// ```
    /// use ndview::{ArrayView, ColumnMajor};
    ///
    /// let s = [0, 1, 2, 3, 4, 5];
    /// let a = ArrayView::<_, 2, ColumnMajor>::from_shape([2, 3], &s).unwrap();
    /// assert_eq!(a[(1, 2)], 5);
    /// assert_eq!(a[(1, 0)], 1);
    /// ```
    pub fn from_shape(shape: [Ix; N], xs: &'a [A]) -> Result<Self, ShapeError> {
        let size = size_of_shape_checked(&shape)?;
        if size > xs.len() {
            return Err(from_kind(ErrorKind::IncompatibleShape));
        }
        let (strides, _) = L::calculate_strides(&shape);
        unsafe {
            Ok(Self::new_(
                NonNull::from(xs).cast(),
                xs.len(),
                shape,
                strides,
                [0; N],
            ))
        }
    }

    /// Create an `ArrayView` from shape information and a raw pointer to the
    /// elements.
    ///
    /// `base_len` is the number of elements readable from `ptr`.
    ///
    /// # Safety
    ///
    /// The caller is responsible for ensuring that `ptr` is non-null and
    /// valid for reads of `base_len` elements for the lifetime `'a`, that
    /// the elements are not mutated meanwhile, and that every index of
    /// `shape` falls inside `base_len` with the given `strides` and
    /// `offsets`.
    pub unsafe fn from_shape_ptr(
        shape: [Ix; N], strides: [Ix; N], offsets: [Ix; N], ptr: *const A, base_len: usize,
    ) -> Self {
        Self::new_(NonNull::new_unchecked(ptr as *mut A), base_len, shape, strides, offsets)
    }

    /// Create a new `ArrayView`
    ///
    /// Unsafe because: `ptr` must be valid for the given dimension, strides
    /// and offsets.
    #[inline(always)]
    pub(crate) unsafe fn new_(
        ptr: NonNull<A>, base_len: usize, dim: [Ix; N], strides: [Ix; N], offsets: [Ix; N],
    ) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = NonZeroRank::<N>::OK;
        ArrayBase {
            data: ViewRepr::new(),
            ptr,
            base_len,
            dim,
            strides,
            offsets,
            layout: PhantomData,
        }
    }
}

/// Methods for read-write array views `ArrayViewMut<'a, A, N, L, O>`
///
/// Note that array views implement traits like `IntoIterator` too.
impl<'a, A, const N: usize, L, O> ArrayViewMut<'a, A, N, L, O>
where
    L: Layout,
    O: Origin,
{
    /// Create a read-write array view borrowing its data from a slice.
    ///
    /// The view has the canonical strides of layout `L` for `shape` and
    /// aliases the front of `xs`.
    ///
    /// ***Errors*** if `xs` holds fewer elements than `shape` needs.
    ///
    /// ```
    /// use ndview::ArrayViewMut;
    ///
    /// let mut s = [0; 6];
    /// {
    ///     let mut a = ArrayViewMut::<_, 2>::from_shape([2, 3], &mut s).unwrap();
    ///     a[(1, 0)] = 7;
    /// }
    /// assert_eq!(s, [0, 0, 0, 7, 0, 0]);
    /// ```
    pub fn from_shape(shape: [Ix; N], xs: &'a mut [A]) -> Result<Self, ShapeError> {
        let size = size_of_shape_checked(&shape)?;
        if size > xs.len() {
            return Err(from_kind(ErrorKind::IncompatibleShape));
        }
        let (strides, _) = L::calculate_strides(&shape);
        let base_len = xs.len();
        unsafe { Ok(Self::new_(NonNull::from(xs).cast(), base_len, shape, strides, [0; N])) }
    }

    /// Create an `ArrayViewMut` from shape information and a raw pointer to
    /// the elements.
    ///
    /// # Safety
    ///
    /// As for [`ArrayView::from_shape_ptr`], and in addition no other
    /// reference to the addressed elements may exist for the lifetime `'a`.
    pub unsafe fn from_shape_ptr(
        shape: [Ix; N], strides: [Ix; N], offsets: [Ix; N], ptr: *mut A, base_len: usize,
    ) -> Self {
        Self::new_(NonNull::new_unchecked(ptr), base_len, shape, strides, offsets)
    }

    /// Create a new `ArrayViewMut`
    ///
    /// Unsafe because: `ptr` must be valid for the given dimension, strides
    /// and offsets, and not aliased elsewhere.
    #[inline(always)]
    pub(crate) unsafe fn new_(
        ptr: NonNull<A>, base_len: usize, dim: [Ix; N], strides: [Ix; N], offsets: [Ix; N],
    ) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = NonZeroRank::<N>::OK;
        ArrayBase {
            data: ViewRepr::new(),
            ptr,
            base_len,
            dim,
            strides,
            offsets,
            layout: PhantomData,
        }
    }
}
