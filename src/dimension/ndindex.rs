use std::fmt::Debug;

use super::offset_with_offsets;
use crate::{Ix, Origin};

/// Tuple or fixed size arrays that can be used to index an array.
///
/// The indices are in the origin of the indexed array.
///
/// ```
/// use ndview::Array;
///
/// let mut a = Array::<i32, 2>::from_shape_vec([2, 2], vec![0, 1, 2, 3]).unwrap();
/// assert_eq!(a[[0, 1]], 1);
/// assert_eq!(a[[1, 1]], 3);
/// a[[1, 1]] += 1;
/// assert_eq!(a[(1, 1)], 4);
/// ```
///
/// ***Don't implement this trait, it is sealed.***
pub trait NdIndex<const N: usize>: Debug {
    /// Convert to a fixed size index.
    fn into_index(self) -> [Ix; N];

    /// Return the offset of the element, or `None` if any index is out of
    /// bounds.
    #[doc(hidden)]
    #[inline]
    fn index_checked<O: Origin>(self, dim: &[Ix; N], strides: &[Ix; N], offsets: &[Ix; N]) -> Option<Ix>
    where
        Self: Sized,
    {
        let index = self.into_index();
        for (&i, &d) in index.iter().zip(dim) {
            if O::rebase(i) >= d {
                return None;
            }
        }
        Some(offset_with_offsets::<O, N>(&index, strides, offsets))
    }

    /// Return the offset of the element without checking bounds.
    #[doc(hidden)]
    #[inline]
    fn index_unchecked<O: Origin>(self, strides: &[Ix; N], offsets: &[Ix; N]) -> Ix
    where
        Self: Sized,
    {
        offset_with_offsets::<O, N>(&self.into_index(), strides, offsets)
    }

    private_decl! {}
}

impl<const N: usize> NdIndex<N> for [Ix; N] {
    #[inline(always)]
    fn into_index(self) -> [Ix; N] {
        self
    }
    private_impl! {}
}

impl<'a, const N: usize> NdIndex<N> for &'a [Ix; N] {
    #[inline(always)]
    fn into_index(self) -> [Ix; N] {
        *self
    }
    private_impl! {}
}

impl NdIndex<1> for Ix {
    #[inline(always)]
    fn into_index(self) -> [Ix; 1] {
        [self]
    }
    private_impl! {}
}

macro_rules! tuple_index {
    (@ty $ix:ident) => { Ix };
    ($n:expr; $($ix:ident),+) => {
        impl NdIndex<$n> for ($(tuple_index!(@ty $ix),)+) {
            #[inline]
            fn into_index(self) -> [Ix; $n] {
                let ($($ix,)+) = self;
                [$($ix),+]
            }
            private_impl! {}
        }
    };
}

tuple_index!(1; i0);
tuple_index!(2; i0, i1);
tuple_index!(3; i0, i1, i2);
tuple_index!(4; i0, i1, i2, i3);
tuple_index!(5; i0, i1, i2, i3, i4);
tuple_index!(6; i0, i1, i2, i3, i4, i5);
