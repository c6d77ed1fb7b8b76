// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::mem;

use crate::dimension::size_of_shape_checked;
use crate::{Array, Ix, Layout, Origin};

/// Methods specific to `Array`.
///
/// ***See also all methods for [`ArrayBase`]***
///
/// [`ArrayBase`]: crate::ArrayBase
impl<A, const N: usize, L, O> Array<A, N, L, O>
where
    L: Layout,
    O: Origin,
{
    /// Return a vector of the elements in the array, in the way they are
    /// stored internally.
    pub fn into_raw_vec(self) -> Vec<A> {
        self.data.into_vec()
    }

    /// Return the number of elements the array can hold without
    /// reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserve capacity for at least `additional` more elements.
    ///
    /// The shape is unchanged; the extra capacity is only used by a later
    /// [`resize`](Self::resize).
    pub fn reserve(&mut self, additional: usize) {
        self.ptr = self.data.reserve(additional);
    }

    /// Release capacity beyond the current element count.
    pub fn shrink_to_fit(&mut self) {
        self.ptr = self.data.shrink_to_fit();
    }

    /// Move the elements out into a new array and leave `self` empty, with
    /// an all-zero shape.
    ///
    /// ```
    /// use ndview::Array;
    ///
    /// let mut a = Array::<i32, 2>::from_elem([2, 2], 1);
    /// let b = a.take();
    /// assert_eq!(b.shape(), &[2, 2]);
    /// assert_eq!(a.shape(), &[0, 0]);
    /// assert!(a.is_empty());
    /// ```
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Change the shape of the array to `shape`, in place.
    ///
    /// The buffer is treated as a flat sequence in storage order: it is
    /// truncated, or extended with copies of `fill`, to the new element
    /// count, and the canonical strides of the new shape are recomputed.
    /// Values therefore keep their *linear* position, not their logical
    /// index. Only a change of the slowest varying axis (the first for
    /// [`RowMajor`](crate::RowMajor), the last for
    /// [`ColumnMajor`](crate::ColumnMajor)) keeps every surviving element at
    /// its old index.
    ///
    /// Views of the array must be gone before it can be resized.
    ///
    /// **Panics** if the product of non-zero axis lengths overflows `isize`.
    ///
    /// ```
    /// use ndview::{array, Array};
    ///
    /// let mut a: Array<i32, 2> = array![[0, 1], [2, 3]].unwrap();
    /// a.resize([2, 3], 0);
    /// assert_eq!(a.as_slice(), Some(&[0, 1, 2, 3, 0, 0][..]));
    /// assert_eq!(a.to_string(), "[[0,1,2],[3,0,0]]");
    /// ```
    pub fn resize(&mut self, shape: [Ix; N], fill: A)
    where
        A: Clone,
    {
        let size = match size_of_shape_checked(&shape) {
            Ok(sz) => sz,
            Err(_) => panic!("ndview: Shape too large, product of non-zero axis lengths overflows isize"),
        };
        let mut v = self.take().into_raw_vec();
        v.resize(size, fill);
        *self = unsafe { Array::from_shape_vec_unchecked(shape, v) };
    }
}
