// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::slice;

use super::build_view_parts;
use crate::{ArrayView, ArrayViewMut, Iter, IterMut, Layout, Origin, ViewSpec};

/// Methods for read-only array views.
impl<'a, A, const N: usize, L, O> ArrayView<'a, A, N, L, O>
where
    L: Layout,
    O: Origin,
{
    /// Convert the view into an `ArrayView<'b, A, N, L, O>` where `'b` is a
    /// lifetime outlived by `'a`.
    pub fn reborrow<'b>(self) -> ArrayView<'b, A, N, L, O>
    where
        'a: 'b,
    {
        unsafe { ArrayView::new_(self.ptr, self.base_len, self.dim, self.strides, self.offsets) }
    }

    /// Return the view's elements as a slice, if they are contiguous in the
    /// order of the layout. Return `None` otherwise.
    ///
    /// Note that while the method is similar to [`ArrayBase::as_slice()`],
    /// this method transfers the view's lifetime to the slice.
    ///
    /// [`ArrayBase::as_slice()`]: crate::ArrayBase::as_slice
    pub fn to_slice(&self) -> Option<&'a [A]> {
        if self.is_empty() {
            Some(&[])
        } else if self.is_standard_layout() {
            unsafe { Some(slice::from_raw_parts(self.first_ptr(), self.size())) }
        } else {
            None
        }
    }

    /// Derive a view of `spec` that borrows for the full lifetime `'a`.
    ///
    /// This is [`ArrayBase::view_with`] for a view that is consumed, so the
    /// result can outlive the view it was made from.
    ///
    /// ```
    /// use ndview::{s, Array, ArrayView, ViewSpec};
    ///
    /// fn middle_row<'a>(v: ArrayView<'a, i32, 2>) -> ArrayView<'a, i32, 1> {
    ///     let r = v.len_of(0) / 2;
    ///     v.into_view_with(ViewSpec::FixedLeading([r]))
    /// }
    ///
    /// let a = Array::<i32, 2>::from_shape_fn([3, 2], |[i, j]| (2 * i + j) as i32);
    /// assert_eq!(middle_row(a.view()).to_string(), "[2,3]");
    /// ```
    ///
    /// [`ArrayBase::view_with`]: crate::ArrayBase::view_with
    pub fn into_view_with<const K: usize, const M: usize>(
        self, spec: ViewSpec<K, M>,
    ) -> ArrayView<'a, A, M, L, O> {
        let (dim, strides, offsets) =
            build_view_parts::<L, O, N, K, M>(&self.dim, &self.strides, &self.offsets, &spec);
        unsafe { ArrayView::new_(self.ptr, self.base_len, dim, strides, offsets) }
    }

    #[inline]
    pub(crate) fn into_iter_(self) -> Iter<'a, A, N, L> {
        unsafe { Iter::new(self.first_ptr(), self.dim, self.strides) }
    }
}

/// Methods for read-write array views.
impl<'a, A, const N: usize, L, O> ArrayViewMut<'a, A, N, L, O>
where
    L: Layout,
    O: Origin,
{
    /// Turn the view into a read-only view with the same lifetime.
    pub fn into_view(self) -> ArrayView<'a, A, N, L, O> {
        unsafe { ArrayView::new_(self.ptr, self.base_len, self.dim, self.strides, self.offsets) }
    }

    /// Return the view's elements as a mutable slice, if they are contiguous
    /// in the order of the layout. Return `None` otherwise.
    pub fn into_slice(self) -> Option<&'a mut [A]> {
        if self.is_empty() {
            Some(&mut [])
        } else if self.is_standard_layout() {
            unsafe { Some(slice::from_raw_parts_mut(self.first_ptr(), self.size())) }
        } else {
            None
        }
    }

    /// Derive a read-write view of `spec` that borrows for the full lifetime
    /// `'a`.
    pub fn into_view_with<const K: usize, const M: usize>(
        self, spec: ViewSpec<K, M>,
    ) -> ArrayViewMut<'a, A, M, L, O> {
        let (dim, strides, offsets) =
            build_view_parts::<L, O, N, K, M>(&self.dim, &self.strides, &self.offsets, &spec);
        unsafe { ArrayViewMut::new_(self.ptr, self.base_len, dim, strides, offsets) }
    }

    #[inline]
    pub(crate) fn into_iter_(self) -> IterMut<'a, A, N, L> {
        unsafe { IterMut::new(self.first_ptr(), self.dim, self.strides) }
    }
}
