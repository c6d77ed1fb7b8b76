// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod indices;

use std::marker::PhantomData;

use rawpointer::PointerExt;

use crate::dimension::origin_index;
use crate::{Ix, Layout, Origin};

pub use self::indices::Indices;

/// Base for array iterators
///
/// Iterator element type is `*mut A`.
///
/// The cursor is a mixed radix counter over `dim`: advancing bumps the
/// fastest varying axis of the layout and carries into slower axes when an
/// axis wraps, adjusting the running `offset` by the strides involved.
pub(crate) struct Baseiter<A, const N: usize, L> {
    /// Address of the first element of the view.
    ptr: *mut A,
    dim: [Ix; N],
    strides: [Ix; N],
    /// Zero-based index of the next element; `None` once exhausted.
    index: Option<[Ix; N]>,
    /// Offset of the next element from `ptr`.
    offset: Ix,
    remaining: usize,
    layout: PhantomData<L>,
}

impl<A, const N: usize, L: Layout> Baseiter<A, N, L> {
    /// Creating a Baseiter is unsafe because shape and stride parameters need
    /// to be correct to avoid performing an unsafe pointer offset while
    /// iterating.
    #[inline]
    pub unsafe fn new(ptr: *mut A, dim: [Ix; N], strides: [Ix; N]) -> Baseiter<A, N, L> {
        let remaining = dim.iter().product();
        Baseiter {
            ptr,
            dim,
            strides,
            index: if remaining == 0 { None } else { Some([0; N]) },
            offset: 0,
            remaining,
            layout: PhantomData,
        }
    }

    /// Move the cursor one element forward.
    #[inline]
    fn step(&mut self) {
        let mut index = match self.index {
            None => return,
            Some(ix) => ix,
        };
        self.remaining -= 1;
        if N == 1 {
            // flat walk
            index[0] += 1;
            if index[0] < self.dim[0] {
                self.offset += self.strides[0];
                self.index = Some(index);
            } else {
                self.index = None;
            }
            return;
        }
        for k in 0..N {
            let axis = L::axis_from_fastest(N, k);
            index[axis] += 1;
            if index[axis] < self.dim[axis] {
                self.offset += self.strides[axis];
                self.index = Some(index);
                return;
            }
            // wrap this axis and carry into the next slower one
            self.offset -= (self.dim[axis] - 1) * self.strides[axis];
            index[axis] = 0;
        }
        self.offset = 0;
        self.index = None;
    }

    #[inline]
    pub fn next(&mut self) -> Option<*mut A> {
        self.index?;
        let elt = unsafe { self.ptr.add(self.offset) };
        self.step();
        Some(elt)
    }

    #[inline]
    fn next_with_index(&mut self) -> Option<([Ix; N], *mut A)> {
        let index = self.index?;
        let elt = unsafe { self.ptr.add(self.offset) };
        self.step();
        Some((index, elt))
    }

    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }

    /// Visit the remaining elements, walking each run along the fastest
    /// varying axis in a tight loop.
    fn fold<Acc, G>(mut self, init: Acc, mut g: G) -> Acc
    where
        G: FnMut(Acc, *mut A) -> Acc,
    {
        let mut accum = init;
        while let Some(mut index) = self.index {
            let inner = L::axis_from_fastest(N, 0);
            let stride = self.strides[inner] as isize;
            let len = self.dim[inner];
            let start = index[inner];
            unsafe {
                let row_ptr = self.ptr.add(self.offset);
                for i in 0..len - start {
                    accum = g(accum, row_ptr.stride_offset(stride, i));
                }
            }
            // park on the last element of the run and let `step` carry
            self.offset += (len - 1 - start) * self.strides[inner];
            self.remaining -= len - 1 - start;
            index[inner] = len - 1;
            self.index = Some(index);
            self.step();
        }
        accum
    }
}

impl<A, const N: usize, L> Clone for Baseiter<A, N, L> {
    fn clone(&self) -> Self {
        Baseiter {
            ptr: self.ptr,
            dim: self.dim,
            strides: self.strides,
            index: self.index,
            offset: self.offset,
            remaining: self.remaining,
            layout: PhantomData,
        }
    }
}

impl<A, const N: usize, L> PartialEq for Baseiter<A, N, L> {
    /// Two cursors are equal when they walk the same view and sit at the same
    /// position; exhausted cursors over the same view are equal.
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
            && self.dim == other.dim
            && self.strides == other.strides
            && self.index == other.index
    }
}

/// An iterator over the elements of an array, in the order of its layout.
///
/// Iterator element type is `&'a A`.
///
/// Two iterators compare equal when they walk the same view and are at the
/// same position, so an exhausted iterator equals any other exhausted
/// iterator over the same view.
///
/// See [`.iter()`](crate::ArrayBase::iter) for more information.
pub struct Iter<'a, A, const N: usize, L> {
    inner: Baseiter<A, N, L>,
    life: PhantomData<&'a A>,
}

/// An iterator over the elements of an array, in the order of its layout.
///
/// Iterator element type is `&'a mut A`.
///
/// See [`.iter_mut()`](crate::ArrayBase::iter_mut) for more information.
pub struct IterMut<'a, A, const N: usize, L> {
    inner: Baseiter<A, N, L>,
    life: PhantomData<&'a mut A>,
}

/// An iterator over the indexes and elements of an array.
///
/// Indices are in the array's origin.
///
/// See [`.indexed_iter()`](crate::ArrayBase::indexed_iter) for more information.
pub struct IndexedIter<'a, A, const N: usize, L, O> {
    inner: Baseiter<A, N, L>,
    life: PhantomData<(&'a A, O)>,
}

impl<'a, A, const N: usize, L: Layout> Iter<'a, A, N, L> {
    pub(crate) unsafe fn new(ptr: *const A, dim: [Ix; N], strides: [Ix; N]) -> Self {
        Iter {
            inner: Baseiter::new(ptr as *mut A, dim, strides),
            life: PhantomData,
        }
    }
}

impl<'a, A, const N: usize, L: Layout> IterMut<'a, A, N, L> {
    pub(crate) unsafe fn new(ptr: *mut A, dim: [Ix; N], strides: [Ix; N]) -> Self {
        IterMut {
            inner: Baseiter::new(ptr, dim, strides),
            life: PhantomData,
        }
    }
}

impl<'a, A, const N: usize, L: Layout, O> IndexedIter<'a, A, N, L, O> {
    pub(crate) unsafe fn new(ptr: *const A, dim: [Ix; N], strides: [Ix; N]) -> Self {
        IndexedIter {
            inner: Baseiter::new(ptr as *mut A, dim, strides),
            life: PhantomData,
        }
    }
}

impl<'a, A, const N: usize, L: Layout> Iterator for Iter<'a, A, N, L> {
    type Item = &'a A;

    #[inline]
    fn next(&mut self) -> Option<&'a A> {
        self.inner.next().map(|p| unsafe { &*p })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }

    fn fold<Acc, G>(self, init: Acc, mut g: G) -> Acc
    where
        G: FnMut(Acc, Self::Item) -> Acc,
    {
        unsafe { self.inner.fold(init, move |acc, ptr| g(acc, &*ptr)) }
    }
}

impl<'a, A, const N: usize, L: Layout> ExactSizeIterator for Iter<'a, A, N, L> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, A, const N: usize, L> Clone for Iter<'a, A, N, L> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
            life: PhantomData,
        }
    }
}

impl<'a, A, const N: usize, L> PartialEq for Iter<'a, A, N, L> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<'a, A, const N: usize, L: Layout> Iterator for IterMut<'a, A, N, L> {
    type Item = &'a mut A;

    #[inline]
    fn next(&mut self) -> Option<&'a mut A> {
        self.inner.next().map(|p| unsafe { &mut *p })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }

    fn fold<Acc, G>(self, init: Acc, mut g: G) -> Acc
    where
        G: FnMut(Acc, Self::Item) -> Acc,
    {
        unsafe { self.inner.fold(init, move |acc, ptr| g(acc, &mut *ptr)) }
    }
}

impl<'a, A, const N: usize, L: Layout> ExactSizeIterator for IterMut<'a, A, N, L> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, A, const N: usize, L> PartialEq for IterMut<'a, A, N, L> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<'a, A, const N: usize, L: Layout, O: Origin> Iterator for IndexedIter<'a, A, N, L, O> {
    type Item = ([Ix; N], &'a A);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next_with_index()
            .map(|(index, p)| (origin_index::<O, N>(index), unsafe { &*p }))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<'a, A, const N: usize, L: Layout, O: Origin> ExactSizeIterator for IndexedIter<'a, A, N, L, O> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, A, const N: usize, L, O> Clone for IndexedIter<'a, A, N, L, O> {
    fn clone(&self) -> Self {
        IndexedIter {
            inner: self.inner.clone(),
            life: PhantomData,
        }
    }
}

// Safe to share across threads under the same conditions as the references
// they hand out.
unsafe impl<'a, A: Sync, const N: usize, L> Send for Iter<'a, A, N, L> {}
unsafe impl<'a, A: Sync, const N: usize, L> Sync for Iter<'a, A, N, L> {}
unsafe impl<'a, A: Send, const N: usize, L> Send for IterMut<'a, A, N, L> {}
unsafe impl<'a, A: Sync, const N: usize, L> Sync for IterMut<'a, A, N, L> {}
