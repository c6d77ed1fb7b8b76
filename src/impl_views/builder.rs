// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::dimension::{leading_offset, trailing_offset};
use crate::{Ix, Layout, Origin, RankCheck, Slice, ViewSpec};

/// Shape, strides and offsets of a view.
pub(crate) type ViewParts<const M: usize> = ([Ix; M], [Ix; M], [Ix; M]);

/// Derive the shape, strides and offsets of a view of rank `M` from a source
/// of rank `N` with the given parts.
///
/// **Panics** if a fixed index or slice bound is out of bounds, or if a
/// `Whole` or `Slices` request is made with `K != 0`.
pub(crate) fn build_view_parts<L, O, const N: usize, const K: usize, const M: usize>(
    dim: &[Ix; N], strides: &[Ix; N], offsets: &[Ix; N], spec: &ViewSpec<K, M>,
) -> ViewParts<M>
where
    L: Layout,
    O: Origin,
{
    #[allow(clippy::let_unit_value)]
    let () = RankCheck::<N, K, M>::OK;
    match spec {
        ViewSpec::Whole => {
            assert_eq!(K, 0, "a whole view cannot fix indices");
            (sub(dim, 0), sub(strides, 0), sub(offsets, 0))
        }
        ViewSpec::Slices(slices) => {
            assert_eq!(K, 0, "a sliced view cannot fix indices");
            slice_parts::<L, O, M>(sub(dim, 0), sub(strides, 0), sub(offsets, 0), slices, 0)
        }
        ViewSpec::FixedLeading(fixed) => {
            let rel = leading_offset::<O, K, N>(fixed, dim, strides, offsets);
            let mut new_offsets = sub(offsets, K);
            L::update_offsets(&mut new_offsets, rel);
            (sub(dim, K), sub(strides, K), new_offsets)
        }
        ViewSpec::FixedLeadingSlices(fixed, slices) => {
            let rel = leading_offset::<O, K, N>(fixed, dim, strides, offsets);
            slice_parts::<L, O, M>(sub(dim, K), sub(strides, K), sub(offsets, K), slices, rel)
        }
        ViewSpec::SlicesFixedTrailing(slices, fixed) => {
            let rel = trailing_offset::<O, K, N>(fixed, dim, strides, offsets);
            slice_parts::<L, O, M>(sub(dim, 0), sub(strides, 0), sub(offsets, 0), slices, rel)
        }
    }
}

/// Copy `M` consecutive axes starting at `first`.
#[inline]
fn sub<const N: usize, const M: usize>(src: &[Ix; N], first: usize) -> [Ix; M] {
    let mut out = [0; M];
    out.copy_from_slice(&src[first..first + M]);
    out
}

fn slice_parts<L, O, const M: usize>(
    dim: [Ix; M], strides: [Ix; M], offsets: [Ix; M], slices: &[Slice; M], rel: Ix,
) -> ViewParts<M>
where
    L: Layout,
    O: Origin,
{
    let mut new_dim = [0; M];
    for (axis, (&n, slice)) in dim.iter().zip(slices).enumerate() {
        let start = slice.resolved_start::<O>();
        let stop = slice.resolved_stop::<O>(n);
        ndassert!(slice.step >= 1, "slice step must be at least 1 on axis {}", axis);
        ndassert!(
            start >= O::BASE,
            "slice start {} is below the first index {} on axis {}",
            start,
            O::BASE,
            axis
        );
        ndassert!(
            stop <= O::BASE + n,
            "slice stop {} out of bounds for axis {} of length {}",
            stop,
            axis,
            n
        );
        new_dim[axis] = slice.len::<O>(n);
    }
    // offsets take the start times the source stride, before scaling by step
    let new_offsets = L::calculate_offsets::<O, M>(rel, &offsets, &strides, slices);
    let mut new_strides = strides;
    for (s, slice) in new_strides.iter_mut().zip(slices) {
        *s *= slice.step;
    }
    (new_dim, new_strides, new_offsets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{s, ColumnMajor, OneBased, RowMajor, ZeroBased};

    #[test]
    fn slices_with_step() {
        let (strides, _) = RowMajor::calculate_strides(&[3, 4]);
        let spec = ViewSpec::<0, 2>::Slices(s![1..3, 0..4;2]);
        let (dim, st, off) = build_view_parts::<RowMajor, ZeroBased, 2, 0, 2>(&[3, 4], &strides, &[0, 0], &spec);
        assert_eq!(dim, [2, 2]);
        assert_eq!(st, [4, 2]);
        assert_eq!(off, [4, 0]);
    }

    #[test]
    fn fixed_leading_carries_into_last_axis() {
        let (strides, _) = RowMajor::calculate_strides(&[3, 4]);
        let spec = ViewSpec::<1, 1>::FixedLeading([1]);
        let parts = build_view_parts::<RowMajor, ZeroBased, 2, 1, 1>(&[3, 4], &strides, &[0, 0], &spec);
        assert_eq!(parts, ([4], [1], [4]));
    }

    #[test]
    fn fixed_leading_carries_into_first_axis() {
        let (strides, _) = ColumnMajor::calculate_strides(&[2, 3, 4]);
        assert_eq!(strides, [1, 2, 6]);
        let spec = ViewSpec::<1, 2>::FixedLeading([1]);
        let parts = build_view_parts::<ColumnMajor, ZeroBased, 3, 1, 2>(&[2, 3, 4], &strides, &[0; 3], &spec);
        assert_eq!(parts, ([3, 4], [2, 6], [1, 0]));
    }

    #[test]
    fn fixed_trailing() {
        let (strides, _) = ColumnMajor::calculate_strides(&[2, 3]);
        let spec = ViewSpec::<1, 1>::SlicesFixedTrailing(s![..], [2]);
        let parts = build_view_parts::<ColumnMajor, ZeroBased, 2, 1, 1>(&[2, 3], &strides, &[0, 0], &spec);
        assert_eq!(parts, ([2], [1], [4]));
    }

    #[test]
    fn one_based_bounds() {
        let (strides, _) = RowMajor::calculate_strides(&[3, 4]);
        let spec = ViewSpec::<1, 1>::FixedLeadingSlices([2], s![2..5]);
        let parts = build_view_parts::<RowMajor, OneBased, 2, 1, 1>(&[3, 4], &strides, &[0, 0], &spec);
        assert_eq!(parts, ([3], [1], [5]));
    }

    #[test]
    fn inherited_offsets_are_kept() {
        let spec = ViewSpec::<0, 2>::Slices(s![1.., ..]);
        let parts = build_view_parts::<RowMajor, ZeroBased, 2, 0, 2>(&[2, 2], &[8, 2], &[3, 1], &spec);
        assert_eq!(parts, ([1, 2], [8, 2], [11, 1]));
    }

    #[test]
    #[should_panic]
    fn stop_out_of_bounds() {
        let spec = ViewSpec::<0, 1>::Slices(s![0..5]);
        build_view_parts::<RowMajor, ZeroBased, 1, 0, 1>(&[4], &[1], &[0], &spec);
    }

    #[test]
    #[should_panic]
    fn one_based_start_below_origin() {
        let spec = ViewSpec::<0, 1>::Slices(s![0..2]);
        build_view_parts::<RowMajor, OneBased, 1, 0, 1>(&[4], &[1], &[0], &spec);
    }

    #[test]
    #[should_panic]
    fn fixed_index_out_of_bounds() {
        let spec = ViewSpec::<1, 1>::FixedLeading([3]);
        build_view_parts::<RowMajor, ZeroBased, 2, 1, 1>(&[3, 4], &[4, 1], &[0, 0], &spec);
    }
}
