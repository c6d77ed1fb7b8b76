// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::slice;

use crate::dimension::rebase_index;
use crate::impl_views::build_view_parts;
use crate::{
    Array, ArrayBase, ArrayView, ArrayViewMut, Data, DataMut, IndexedIter, Indices, Iter, IterMut, Ix, Layout,
    NdIndex, Order, Origin, RawData, Slice, ViewSpec,
};

/// # Methods For All Array Types
impl<A, S, const N: usize, L, O> ArrayBase<S, N, L, O>
where
    S: RawData<Elem = A>,
    L: Layout,
    O: Origin,
{
    /// Return the total number of elements in the array.
    pub fn len(&self) -> usize {
        self.dim.iter().product()
    }

    /// Return the total number of elements in the array; the same as
    /// [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Return the length of `axis`.
    ///
    /// **Panics** if the axis is out of bounds.
    pub fn len_of(&self, axis: usize) -> usize {
        self.dim[axis]
    }

    /// Return whether the array has any elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of dimensions (axes) in the array
    pub fn ndim(&self) -> usize {
        N
    }

    /// Return the shape of the array.
    pub fn dim(&self) -> [Ix; N] {
        self.dim
    }

    /// Return the shape of the array as a reference to the axis lengths.
    pub fn shape(&self) -> &[Ix; N] {
        &self.dim
    }

    /// Return the strides of the array.
    ///
    /// The stride of an axis is the number of elements between consecutive
    /// indices along it.
    pub fn strides(&self) -> &[Ix; N] {
        &self.strides
    }

    /// Return the per-axis offsets of the array.
    ///
    /// The element at zero-based index `i` sits `Σ (i[k] * strides[k] +
    /// offsets[k])` elements after [`base_data`](Self::base_data). A freshly
    /// allocated array has all-zero offsets.
    pub fn offsets(&self) -> &[Ix; N] {
        &self.offsets
    }

    /// Return the memory order of the array's layout.
    pub fn order(&self) -> Order {
        L::ORDER
    }

    /// Return the number of elements in the buffer the array aliases.
    ///
    /// For an owned array this is its length. A view reports the length of
    /// the buffer of the array (or slice) it was derived from.
    pub fn base_size(&self) -> usize {
        self.base_len
    }

    /// Return a pointer to the start of the aliased buffer.
    pub fn base_data(&self) -> *const A {
        self.ptr.as_ptr()
    }

    /// Return a pointer to the first element in the array, with the offsets
    /// applied.
    ///
    /// The pointer must only be dereferenced if the array is not empty.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const A {
        self.first_ptr()
    }

    /// Return a mutable pointer to the first element in the array.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut A
    where
        S: DataMut,
    {
        self.first_ptr()
    }

    /// Return `true` if the elements are contiguous and in the order of the
    /// layout, which makes them available as one slice.
    pub fn is_standard_layout(&self) -> bool {
        let (strides, _) = L::calculate_strides(&self.dim);
        self.dim
            .iter()
            .zip(strides.iter().zip(&self.strides))
            .all(|(&d, (&s, &t))| d <= 1 || s == t)
    }

    #[inline(always)]
    pub(crate) fn first_ptr(&self) -> *mut A {
        self.ptr.as_ptr().wrapping_add(self.offsets.iter().sum())
    }

    /// Return an iterator over every index of the array, in the order of the
    /// layout and in the array's origin.
    pub fn indices(&self) -> Indices<N, L, O> {
        Indices::new(self.dim)
    }
}

/// # Methods For Readable Arrays
impl<A, S, const N: usize, L, O> ArrayBase<S, N, L, O>
where
    S: Data<Elem = A>,
    L: Layout,
    O: Origin,
{
    /// Return a read-only view of the array
    pub fn view(&self) -> ArrayView<'_, A, N, L, O> {
        self.view_with(ViewSpec::<0, N>::Whole)
    }

    /// Return a read-only view derived from `spec`.
    ///
    /// Every other view constructor is a shorthand for one of the variants of
    /// [`ViewSpec`].
    ///
    /// **Panics** if a fixed index or a slice bound is out of bounds.
    ///
    /// ```
    /// use ndview::{s, Array, ViewSpec};
    ///
    /// let a = Array::<i32, 3>::from_shape_fn([2, 3, 4], |[i, j, k]| (100 * i + 10 * j + k) as i32);
    /// let v = a.view_with(ViewSpec::SlicesFixedTrailing(s![.., 1..3], [2]));
    /// assert_eq!(v.to_string(), "[[12,22],[112,122]]");
    /// ```
    pub fn view_with<const K: usize, const M: usize>(&self, spec: ViewSpec<K, M>) -> ArrayView<'_, A, M, L, O> {
        let (dim, strides, offsets) =
            build_view_parts::<L, O, N, K, M>(&self.dim, &self.strides, &self.offsets, &spec);
        unsafe { ArrayView::new_(self.ptr, self.base_len, dim, strides, offsets) }
    }

    /// Return a sliced view of the array.
    ///
    /// Each [`Slice`] applies to the axis at the same position and is in the
    /// array's origin; see also the [`s!`](crate::s) macro.
    ///
    /// **Panics** if a slice is out of bounds.
    pub fn slice(&self, slices: [Slice; N]) -> ArrayView<'_, A, N, L, O> {
        self.view_with(ViewSpec::<0, N>::Slices(slices))
    }

    /// Return a view with the first `K` axes fixed at `index`; the view has
    /// the remaining `M` axes.
    ///
    /// **Panics** if an index is out of bounds.
    ///
    /// ```
    /// use ndview::{Array, ArrayView};
    ///
    /// let a = Array::<i32, 2>::from_shape_fn([3, 4], |[i, j]| (4 * i + j) as i32);
    /// let row: ArrayView<i32, 1> = a.fix_leading([1]);
    /// assert_eq!(row.to_string(), "[4,5,6,7]");
    /// ```
    pub fn fix_leading<const K: usize, const M: usize>(&self, index: [Ix; K]) -> ArrayView<'_, A, M, L, O> {
        self.view_with(ViewSpec::FixedLeading(index))
    }

    /// Return a view with the first `K` axes fixed at `index` and the
    /// remaining `M` axes sliced.
    pub fn fix_leading_slice<const K: usize, const M: usize>(
        &self, index: [Ix; K], slices: [Slice; M],
    ) -> ArrayView<'_, A, M, L, O> {
        self.view_with(ViewSpec::FixedLeadingSlices(index, slices))
    }

    /// Return a view with the first `M` axes sliced and the last `K` axes
    /// fixed at `index`.
    pub fn slice_fix_trailing<const K: usize, const M: usize>(
        &self, slices: [Slice; M], index: [Ix; K],
    ) -> ArrayView<'_, A, M, L, O> {
        self.view_with(ViewSpec::SlicesFixedTrailing(slices, index))
    }

    /// Return a reference to the element at `index`, or return `None` if the
    /// index is out of bounds.
    ///
    /// ```
    /// use ndview::{Array, OneBased, RowMajor};
    ///
    /// let a = Array::<i32, 2, RowMajor, OneBased>::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(a.get((1, 1)), Some(&1));
    /// assert_eq!(a.get((0, 1)), None);
    /// assert_eq!(a.get((2, 3)), None);
    /// ```
    pub fn get<I>(&self, index: I) -> Option<&A>
    where
        I: NdIndex<N>,
    {
        let ptr = self.ptr;
        index
            .index_checked::<O>(&self.dim, &self.strides, &self.offsets)
            .map(move |offset| {
                debug_assert!(offset < self.base_len);
                unsafe { &*ptr.as_ptr().add(offset) }
            })
    }

    /// Perform *unchecked* array indexing.
    ///
    /// Return a reference to the element at `index`.
    ///
    /// **Note:** only unchecked for non-debug builds of ndview.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the index is in-bounds.
    #[inline]
    pub unsafe fn uget<I>(&self, index: I) -> &A
    where
        I: NdIndex<N>,
    {
        let index = index.into_index();
        debug_bounds_check!(self.dim, rebase_index::<O, N>(index));
        let offset = index.index_unchecked::<O>(&self.strides, &self.offsets);
        &*self.ptr.as_ptr().add(offset)
    }

    /// Return an iterator of references to the elements of the array.
    ///
    /// Elements are visited in the order of the layout: the last axis varies
    /// fastest for [`RowMajor`](crate::RowMajor), the first for
    /// [`ColumnMajor`](crate::ColumnMajor).
    ///
    /// Iterator element type is `&A`.
    pub fn iter(&self) -> Iter<'_, A, N, L> {
        self.view().into_iter_()
    }

    /// Return an iterator of indexes and references to the elements of the
    /// array, in the order of the layout.
    ///
    /// Iterator element type is `([Ix; N], &A)`, with the index in the
    /// array's origin.
    pub fn indexed_iter(&self) -> IndexedIter<'_, A, N, L, O> {
        unsafe { IndexedIter::new(self.first_ptr(), self.dim, self.strides) }
    }

    /// Return the array's data as a slice, if it is contiguous and in the
    /// order of the layout. Return `None` otherwise.
    pub fn as_slice(&self) -> Option<&[A]> {
        self.view().to_slice()
    }

    /// Return an owned array with a copy of the elements, the same shape and
    /// the same layout. The copy is dense: its offsets are zero.
    pub fn to_owned(&self) -> Array<A, N, L, O>
    where
        A: Clone,
    {
        unsafe { Array::from_shape_vec_unchecked(self.dim, self.to_vec()) }
    }

    /// Return a vector with a copy of the elements, in the order of the
    /// layout.
    pub fn to_vec(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Call `f` by reference on each element and create a new array with the
    /// new values, the same shape and the same layout.
    pub fn map<'a, B, F>(&'a self, f: F) -> Array<B, N, L, O>
    where
        F: FnMut(&'a A) -> B,
        A: 'a,
    {
        unsafe { Array::from_shape_vec_unchecked(self.dim, self.iter().map(f).collect()) }
    }
}

/// # Methods For Writable Arrays
impl<A, S, const N: usize, L, O> ArrayBase<S, N, L, O>
where
    S: DataMut<Elem = A>,
    L: Layout,
    O: Origin,
{
    /// Return a read-write view of the array
    pub fn view_mut(&mut self) -> ArrayViewMut<'_, A, N, L, O> {
        self.view_mut_with(ViewSpec::<0, N>::Whole)
    }

    /// Return a read-write view derived from `spec`.
    ///
    /// **Panics** if a fixed index or a slice bound is out of bounds.
    pub fn view_mut_with<const K: usize, const M: usize>(
        &mut self, spec: ViewSpec<K, M>,
    ) -> ArrayViewMut<'_, A, M, L, O> {
        let (dim, strides, offsets) =
            build_view_parts::<L, O, N, K, M>(&self.dim, &self.strides, &self.offsets, &spec);
        unsafe { ArrayViewMut::new_(self.ptr, self.base_len, dim, strides, offsets) }
    }

    /// Return a sliced read-write view of the array.
    ///
    /// **Panics** if a slice is out of bounds.
    pub fn slice_mut(&mut self, slices: [Slice; N]) -> ArrayViewMut<'_, A, N, L, O> {
        self.view_mut_with(ViewSpec::<0, N>::Slices(slices))
    }

    /// Return a read-write view with the first `K` axes fixed at `index`.
    ///
    /// ```
    /// use ndview::{Array, ArrayViewMut, ColumnMajor};
    ///
    /// let mut a = Array::<i32, 2, ColumnMajor>::zeros([2, 3]);
    /// {
    ///     let mut row: ArrayViewMut<i32, 1, ColumnMajor> = a.fix_leading_mut([1]);
    ///     row.fill(5);
    /// }
    /// assert_eq!(a.to_string(), "[[0,0,0],[5,5,5]]");
    /// ```
    pub fn fix_leading_mut<const K: usize, const M: usize>(
        &mut self, index: [Ix; K],
    ) -> ArrayViewMut<'_, A, M, L, O> {
        self.view_mut_with(ViewSpec::FixedLeading(index))
    }

    /// Return a read-write view with the first `K` axes fixed at `index` and
    /// the remaining `M` axes sliced.
    pub fn fix_leading_slice_mut<const K: usize, const M: usize>(
        &mut self, index: [Ix; K], slices: [Slice; M],
    ) -> ArrayViewMut<'_, A, M, L, O> {
        self.view_mut_with(ViewSpec::FixedLeadingSlices(index, slices))
    }

    /// Return a read-write view with the first `M` axes sliced and the last
    /// `K` axes fixed at `index`.
    pub fn slice_fix_trailing_mut<const K: usize, const M: usize>(
        &mut self, slices: [Slice; M], index: [Ix; K],
    ) -> ArrayViewMut<'_, A, M, L, O> {
        self.view_mut_with(ViewSpec::SlicesFixedTrailing(slices, index))
    }

    /// Return a mutable reference to the element at `index`, or return `None`
    /// if the index is out of bounds.
    pub fn get_mut<I>(&mut self, index: I) -> Option<&mut A>
    where
        I: NdIndex<N>,
    {
        let ptr = self.ptr;
        let base_len = self.base_len;
        index
            .index_checked::<O>(&self.dim, &self.strides, &self.offsets)
            .map(move |offset| {
                debug_assert!(offset < base_len);
                unsafe { &mut *ptr.as_ptr().add(offset) }
            })
    }

    /// Perform *unchecked* array indexing.
    ///
    /// Return a mutable reference to the element at `index`.
    ///
    /// **Note:** only unchecked for non-debug builds of ndview.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the index is in-bounds.
    #[inline]
    pub unsafe fn uget_mut<I>(&mut self, index: I) -> &mut A
    where
        I: NdIndex<N>,
    {
        let index = index.into_index();
        debug_bounds_check!(self.dim, rebase_index::<O, N>(index));
        let offset = index.index_unchecked::<O>(&self.strides, &self.offsets);
        &mut *self.ptr.as_ptr().add(offset)
    }

    /// Return an iterator of mutable references to the elements of the
    /// array, in the order of the layout.
    ///
    /// Iterator element type is `&mut A`.
    pub fn iter_mut(&mut self) -> IterMut<'_, A, N, L> {
        self.view_mut().into_iter_()
    }

    /// Return the array's data as a mutable slice, if it is contiguous and in
    /// the order of the layout. Return `None` otherwise.
    pub fn as_slice_mut(&mut self) -> Option<&mut [A]> {
        if self.is_empty() {
            Some(&mut [])
        } else if self.is_standard_layout() {
            unsafe { Some(slice::from_raw_parts_mut(self.first_ptr(), self.len())) }
        } else {
            None
        }
    }

    /// Set all elements in the array to `x`.
    pub fn fill(&mut self, x: A)
    where
        A: Clone,
    {
        for elt in self.iter_mut() {
            elt.clone_from(&x);
        }
    }

    /// Perform an elementwise assigment to `self` from `rhs`.
    ///
    /// Elements are paired by index, so the two arrays may have different
    /// strides and offsets.
    ///
    /// **Panics** if the shapes disagree.
    pub fn assign<S2>(&mut self, rhs: &ArrayBase<S2, N, L, O>)
    where
        S2: Data<Elem = A>,
        A: Clone,
    {
        assert_eq!(
            self.dim, rhs.dim,
            "assign: shape {:?} does not match shape {:?}",
            self.dim, rhs.dim
        );
        for (x, y) in self.iter_mut().zip(rhs.iter()) {
            x.clone_from(y);
        }
    }
}
