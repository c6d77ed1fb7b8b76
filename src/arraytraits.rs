// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::hash;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

use crate::{
    Array, ArrayBase, ArrayView, ArrayViewMut, Data, DataMut, DataOwned, Iter, IterMut, Layout, NdIndex, Origin,
    RawDataClone,
};

#[cold]
#[inline(never)]
pub(crate) fn array_out_of_bounds() -> ! {
    panic!("ndview: index out of bounds");
}

/// Access the element at **index**.
///
/// **Panics** if index is out of bounds.
impl<S, const N: usize, L, O, I> Index<I> for ArrayBase<S, N, L, O>
where
    S: Data,
    L: Layout,
    O: Origin,
    I: NdIndex<N>,
{
    type Output = S::Elem;
    #[inline]
    fn index(&self, index: I) -> &S::Elem {
        self.get(index).unwrap_or_else(|| array_out_of_bounds())
    }
}

/// Access the element at **index** mutably.
///
/// **Panics** if index is out of bounds.
impl<S, const N: usize, L, O, I> IndexMut<I> for ArrayBase<S, N, L, O>
where
    S: DataMut,
    L: Layout,
    O: Origin,
    I: NdIndex<N>,
{
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut S::Elem {
        match self.get_mut(index) {
            Some(elt) => elt,
            None => array_out_of_bounds(),
        }
    }
}

/// Return `true` if the array shapes and all elements of `self` and `rhs`
/// are equal. Return `false` otherwise.
///
/// Strides and offsets do not take part: a view compares equal to a dense
/// copy of itself.
impl<A, B, S, S2, const N: usize, L, O> PartialEq<ArrayBase<S2, N, L, O>> for ArrayBase<S, N, L, O>
where
    A: PartialEq<B>,
    S: Data<Elem = A>,
    S2: Data<Elem = B>,
    L: Layout,
    O: Origin,
{
    fn eq(&self, rhs: &ArrayBase<S2, N, L, O>) -> bool {
        if self.shape() != rhs.shape() {
            return false;
        }
        self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

impl<S, const N: usize, L, O> Eq for ArrayBase<S, N, L, O>
where
    S: Data,
    S::Elem: Eq,
    L: Layout,
    O: Origin,
{
}

impl<S, const N: usize, L, O> hash::Hash for ArrayBase<S, N, L, O>
where
    S: Data,
    S::Elem: hash::Hash,
    L: Layout,
    O: Origin,
{
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.shape().hash(state);
        for elt in self.iter() {
            elt.hash(state)
        }
    }
}

impl<S: RawDataClone, const N: usize, L, O> Clone for ArrayBase<S, N, L, O> {
    fn clone(&self) -> ArrayBase<S, N, L, O> {
        unsafe {
            let (data, ptr) = self.data.clone_with_ptr(self.ptr);
            ArrayBase {
                data,
                ptr,
                base_len: self.base_len,
                dim: self.dim,
                strides: self.strides,
                offsets: self.offsets,
                layout: PhantomData,
            }
        }
    }
}

impl<S: RawDataClone + Copy, const N: usize, L, O> Copy for ArrayBase<S, N, L, O> {}

/// Create an owned array with an all-zero shape and no elements.
///
/// This is the state [`take`](ArrayBase::take) leaves behind, and what
/// `std::mem::take` swaps in.
impl<A, S, const N: usize, L, O> Default for ArrayBase<S, N, L, O>
where
    S: DataOwned<Elem = A>,
    L: Layout,
    O: Origin,
{
    fn default() -> Self {
        unsafe { ArrayBase::from_shape_vec_unchecked([0; N], Vec::new()) }
    }
}

impl<'a, S, const N: usize, L, O> IntoIterator for &'a ArrayBase<S, N, L, O>
where
    S: Data,
    L: Layout,
    O: Origin,
{
    type Item = &'a S::Elem;
    type IntoIter = Iter<'a, S::Elem, N, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, S, const N: usize, L, O> IntoIterator for &'a mut ArrayBase<S, N, L, O>
where
    S: DataMut,
    L: Layout,
    O: Origin,
{
    type Item = &'a mut S::Elem;
    type IntoIter = IterMut<'a, S::Elem, N, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<'a, A, const N: usize, L, O> IntoIterator for ArrayView<'a, A, N, L, O>
where
    L: Layout,
    O: Origin,
{
    type Item = &'a A;
    type IntoIter = Iter<'a, A, N, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_iter_()
    }
}

impl<'a, A, const N: usize, L, O> IntoIterator for ArrayViewMut<'a, A, N, L, O>
where
    L: Layout,
    O: Origin,
{
    type Item = &'a mut A;
    type IntoIter = IterMut<'a, A, N, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_iter_()
    }
}

/// Implementation of `ArrayView::from(&S)` where `S` is a slice or sliceable.
///
/// The view is one-dimensional and covers the whole slice.
impl<'a, A, Slice: ?Sized, L, O> From<&'a Slice> for ArrayView<'a, A, 1, L, O>
where
    Slice: AsRef<[A]>,
    L: Layout,
    O: Origin,
{
    fn from(slice: &'a Slice) -> Self {
        let xs = slice.as_ref();
        unsafe { ArrayView::new_(NonNull::from(xs).cast(), xs.len(), [xs.len()], [1], [0]) }
    }
}

/// Implementation of `ArrayViewMut::from(&mut S)` where `S` is a slice or
/// sliceable.
impl<'a, A, Slice: ?Sized, L, O> From<&'a mut Slice> for ArrayViewMut<'a, A, 1, L, O>
where
    Slice: AsMut<[A]>,
    L: Layout,
    O: Origin,
{
    fn from(slice: &'a mut Slice) -> Self {
        let xs = slice.as_mut();
        let len = xs.len();
        unsafe { ArrayViewMut::new_(NonNull::from(xs).cast(), len, [len], [1], [0]) }
    }
}

/// Create a one-dimensional array from a vector (no copying needed).
impl<A, L, O> From<Vec<A>> for Array<A, 1, L, O>
where
    L: Layout,
    O: Origin,
{
    fn from(v: Vec<A>) -> Self {
        unsafe { Array::from_shape_vec_unchecked([v.len()], v) }
    }
}

/// Create a one-dimensional array from an iterable.
impl<A, L, O> FromIterator<A> for Array<A, 1, L, O>
where
    L: Layout,
    O: Origin,
{
    fn from_iter<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        Self::from(iterable.into_iter().collect::<Vec<A>>())
    }
}
