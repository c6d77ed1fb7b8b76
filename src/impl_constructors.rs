// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for owned arrays
//!

#![allow(clippy::match_wild_err_arm)]

use std::marker::PhantomData;
use std::ptr::NonNull;

use num_traits::{One, Zero};

use crate::dimension::size_of_shape_checked;
use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::iterators::Baseiter;
use crate::{ArrayBase, DataOwned, Indices, Ix, Layout, Nested, NonZeroRank, Origin, RowMajor};

/// # Constructor Methods for Owned Arrays
///
/// Note that the constructor methods apply to `Array`, the array type that
/// owns its data.
///
/// Every constructor allocates the canonical strides of the layout `L` and
/// all-zero offsets.
impl<S, A, const N: usize, L, O> ArrayBase<S, N, L, O>
where
    S: DataOwned<Elem = A>,
    L: Layout,
    O: Origin,
{
    /// Create an array with copies of `elem`, shape `shape`.
    ///
    /// **Panics** if the product of non-zero axis lengths overflows `isize`.
    ///
    /// ```
    /// use ndview::{Array, ColumnMajor};
    ///
    /// let a = Array::<f64, 3, ColumnMajor>::from_elem([2, 2, 2], 1.);
    ///
    /// assert_eq!(a.strides(), &[1, 2, 4]);
    /// assert!(a.iter().all(|&x| x == 1.));
    /// ```
    pub fn from_elem(shape: [Ix; N], elem: A) -> Self
    where
        A: Clone,
    {
        let size = match size_of_shape_checked(&shape) {
            Ok(sz) => sz,
            Err(_) => panic!("ndview: Shape too large, product of non-zero axis lengths overflows isize"),
        };
        let v = vec![elem; size];
        unsafe { Self::from_shape_vec_unchecked(shape, v) }
    }

    /// Create an array with zeros, shape `shape`.
    ///
    /// **Panics** if the product of non-zero axis lengths overflows `isize`.
    pub fn zeros(shape: [Ix; N]) -> Self
    where
        A: Clone + Zero,
    {
        Self::from_elem(shape, A::zero())
    }

    /// Create an array with ones, shape `shape`.
    ///
    /// **Panics** if the product of non-zero axis lengths overflows `isize`.
    pub fn ones(shape: [Ix; N]) -> Self
    where
        A: Clone + One,
    {
        Self::from_elem(shape, A::one())
    }

    /// Create an array with default values, shape `shape`
    ///
    /// **Panics** if the product of non-zero axis lengths overflows `isize`.
    #[allow(clippy::should_implement_trait)]
    pub fn default(shape: [Ix; N]) -> Self
    where
        A: Default,
    {
        Self::from_shape_simple_fn(shape, A::default)
    }

    /// Create an array with values created by the function `f`.
    ///
    /// `f` is called with no argument, and it should return the element to
    /// create. The elements are created in the order of the layout.
    ///
    /// **Panics** if the product of non-zero axis lengths overflows `isize`.
    pub fn from_shape_simple_fn<F>(shape: [Ix; N], mut f: F) -> Self
    where
        F: FnMut() -> A,
    {
        let size = match size_of_shape_checked(&shape) {
            Ok(sz) => sz,
            Err(_) => panic!("ndview: Shape too large, product of non-zero axis lengths overflows isize"),
        };
        let v = (0..size).map(|_| f()).collect();
        unsafe { Self::from_shape_vec_unchecked(shape, v) }
    }

    /// Create an array with values created by the function `f`.
    ///
    /// `f` is called with the index of the element to create, in the array's
    /// origin; the elements are visited in the order of the layout.
    ///
    /// **Panics** if the product of non-zero axis lengths overflows `isize`.
    ///
    /// ```
    /// use ndview::{Array, OneBased, RowMajor};
    ///
    /// let a = Array::<usize, 2, RowMajor, OneBased>::from_shape_fn([2, 3], |[i, j]| 10 * i + j);
    /// assert_eq!(a[(1, 1)], 11);
    /// assert_eq!(a.to_string(), "[[11,12,13],[21,22,23]]");
    /// ```
    pub fn from_shape_fn<F>(shape: [Ix; N], f: F) -> Self
    where
        F: FnMut([Ix; N]) -> A,
    {
        if size_of_shape_checked(&shape).is_err() {
            panic!("ndview: Shape too large, product of non-zero axis lengths overflows isize");
        }
        let v = Indices::<N, L, O>::new(shape).map(f).collect();
        unsafe { Self::from_shape_vec_unchecked(shape, v) }
    }

    /// Create an array with the given shape from a vector. The vector holds
    /// the elements in the order of the layout `L`.
    ///
    /// ***Errors*** if `shape` does not correspond to the number of elements
    /// in `v` or if the shape/strides would result in overflowing `isize`.
    ///
    /// ```
    /// use ndview::{Array, ColumnMajor, ErrorKind};
    ///
    /// let a = Array::<i32, 2, ColumnMajor>::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(a.to_string(), "[[1,3],[2,4]]");
    ///
    /// let e = Array::<i32, 2>::from_shape_vec([2, 2], vec![1, 2, 3]).unwrap_err();
    /// assert_eq!(e.kind(), ErrorKind::IncompatibleShape);
    /// ```
    pub fn from_shape_vec(shape: [Ix; N], v: Vec<A>) -> Result<Self, ShapeError> {
        let size = size_of_shape_checked(&shape)?;
        if size != v.len() {
            return Err(from_kind(ErrorKind::IncompatibleShape));
        }
        unsafe { Ok(Self::from_shape_vec_unchecked(shape, v)) }
    }

    /// Create an array from a nested literal.
    ///
    /// The literal is read in row major order regardless of the layout: the
    /// outermost list runs along axis 0. The elements are then stored in the
    /// order of the layout `L`.
    ///
    /// ***Errors*** with [`ErrorKind::InvalidShape`] if the literal is not
    /// rectangular and with [`ErrorKind::RankMismatch`] if it is not `N`
    /// levels deep. See also the [`array!`](crate::array) macro.
    ///
    /// ```
    /// use ndview::{nested, Array, ColumnMajor};
    ///
    /// let a = Array::<i32, 2, ColumnMajor>::from_nested(nested![[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!(a.as_slice(), Some(&[1, 4, 2, 5, 3, 6][..]));
    /// assert_eq!(a[(0, 2)], 3);
    /// ```
    pub fn from_nested(nested: Nested<A>) -> Result<Self, ShapeError> {
        let shape = nested.shape::<N>()?;
        size_of_shape_checked(&shape)?;
        let mut v = Vec::new();
        nested.flatten_into(&mut v);
        if L::ORDER.is_column_major() && N > 1 {
            v = reorder_from_row_major::<A, L, N>(v, &shape);
        }
        unsafe { Ok(Self::from_shape_vec_unchecked(shape, v)) }
    }

    /// Create an array from a vector with the canonical strides of `L`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the product of the axis lengths equals
    /// `v.len()` and does not overflow `isize`.
    pub(crate) unsafe fn from_shape_vec_unchecked(shape: [Ix; N], v: Vec<A>) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = NonZeroRank::<N>::OK;
        let (strides, size) = L::calculate_strides(&shape);
        debug_assert_eq!(size, v.len());
        let base_len = v.len();
        let mut v = v;
        let ptr = NonNull::new_unchecked(v.as_mut_ptr());
        ArrayBase {
            data: DataOwned::new(v),
            ptr,
            base_len,
            dim: shape,
            strides,
            offsets: [0; N],
            layout: PhantomData,
        }
    }
}

/// Move the row major elements of `v` into the order of `L`.
fn reorder_from_row_major<A, L: Layout, const N: usize>(v: Vec<A>, shape: &[Ix; N]) -> Vec<A> {
    let (c_strides, _) = RowMajor::calculate_strides(shape);
    let mut slots: Vec<Option<A>> = v.into_iter().map(Some).collect();
    let mut out = Vec::with_capacity(slots.len());
    unsafe {
        // walks the row major buffer in the order of L
        let mut iter = Baseiter::<Option<A>, N, L>::new(slots.as_mut_ptr(), *shape, c_strides);
        while let Some(slot) = iter.next() {
            if let Some(elt) = (*slot).take() {
                out.push(elt);
            }
        }
    }
    out
}
