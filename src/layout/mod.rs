//! Memory layout policies.
//!
//! A layout decides which end of the axis list varies fastest in the linear
//! buffer. It is chosen by type, as the `L` parameter of
//! [`ArrayBase`](crate::ArrayBase), and drives three things: the canonical
//! strides of a freshly allocated buffer, the order iterators visit
//! elements in, and the axis that absorbs the offset carried over from fixed
//! indices when a view drops axes.

use std::fmt::Debug;

use crate::slice::Slice;
use crate::{Ix, Origin};

mod order;

pub use self::order::Order;

/// A memory layout policy; see the [module documentation](self).
///
/// ***Don't implement this trait, it is sealed.***
pub trait Layout: Copy + Debug + Default + Send + Sync + 'static {
    /// The runtime name of the policy.
    const ORDER: Order;

    /// Return the axis that is `k`-th fastest varying in an `ndim`
    /// dimensional buffer; `k == 0` is the fastest.
    fn axis_from_fastest(ndim: usize, k: usize) -> usize;

    /// Compute the canonical strides of a dense buffer of `shape`, together
    /// with its element count.
    ///
    /// The fastest varying axis gets stride 1 and every other axis the
    /// product of the lengths of all faster axes.
    ///
    /// The caller must have checked that the element count does not overflow.
    fn calculate_strides<const N: usize>(shape: &[Ix; N]) -> ([Ix; N], usize) {
        let mut strides = [0; N];
        let mut count = 1;
        for k in 0..N {
            let axis = Self::axis_from_fastest(N, k);
            strides[axis] = count;
            count *= shape[axis];
        }
        (strides, count)
    }

    /// The axis whose offset absorbs a scalar offset carried over from
    /// fixing indices: the last axis in row major, the first in column major.
    #[inline]
    fn carry_axis(ndim: usize) -> usize {
        Self::axis_from_fastest(ndim, 0)
    }

    /// Fold the scalar offset `rel` into `offsets`.
    #[inline]
    fn update_offsets<const N: usize>(offsets: &mut [Ix; N], rel: Ix) {
        offsets[Self::carry_axis(N)] += rel;
    }

    /// Compute the offsets of a sliced view.
    ///
    /// `offsets` and `strides` are the source's, *before* they are scaled by
    /// the slice steps. Each axis gains its slice start times its stride and
    /// the carried scalar `rel` is folded in with
    /// [`update_offsets`](Layout::update_offsets).
    fn calculate_offsets<O: Origin, const N: usize>(
        rel: Ix, offsets: &[Ix; N], strides: &[Ix; N], slices: &[Slice; N],
    ) -> [Ix; N] {
        let mut out = *offsets;
        for ((off, &stride), slice) in out.iter_mut().zip(strides).zip(slices) {
            *off += O::rebase(slice.resolved_start::<O>()) * stride;
        }
        Self::update_offsets(&mut out, rel);
        out
    }

    private_decl! {}
}

/// Row major ("C") layout: the last axis varies fastest. This is the default.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RowMajor;

/// Column major ("F") layout: the first axis varies fastest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColumnMajor;

impl Layout for RowMajor {
    const ORDER: Order = Order::RowMajor;

    #[inline(always)]
    fn axis_from_fastest(ndim: usize, k: usize) -> usize {
        ndim - 1 - k
    }

    private_impl! {}
}

impl Layout for ColumnMajor {
    const ORDER: Order = Order::ColumnMajor;

    #[inline(always)]
    fn axis_from_fastest(_ndim: usize, k: usize) -> usize {
        k
    }

    private_impl! {}
}
