use std::marker::PhantomData;

use crate::dimension::origin_index;
use crate::{Ix, Layout, Origin};

/// An iterator over the indices of a shape, in the order of layout `L`.
///
/// Indices are in origin `O`.
///
/// ```
/// use ndview::{Indices, ColumnMajor, RowMajor, ZeroBased};
///
/// let c: Vec<_> = Indices::<2, RowMajor, ZeroBased>::new([2, 2]).collect();
/// assert_eq!(c, [[0, 0], [0, 1], [1, 0], [1, 1]]);
///
/// let f: Vec<_> = Indices::<2, ColumnMajor, ZeroBased>::new([2, 2]).collect();
/// assert_eq!(f, [[0, 0], [1, 0], [0, 1], [1, 1]]);
/// ```
#[derive(Clone, Debug)]
pub struct Indices<const N: usize, L, O> {
    dim: [Ix; N],
    index: Option<[Ix; N]>,
    remaining: usize,
    layout: PhantomData<(L, O)>,
}

impl<const N: usize, L: Layout, O: Origin> Indices<N, L, O> {
    /// Create an iterator over every index of `shape`.
    pub fn new(shape: [Ix; N]) -> Self {
        let remaining = shape.iter().product();
        Indices {
            dim: shape,
            index: if remaining == 0 { None } else { Some([0; N]) },
            remaining,
            layout: PhantomData,
        }
    }
}

impl<const N: usize, L: Layout, O: Origin> Iterator for Indices<N, L, O> {
    type Item = [Ix; N];

    fn next(&mut self) -> Option<[Ix; N]> {
        let current = self.index?;
        self.remaining -= 1;
        let mut index = current;
        self.index = None;
        for k in 0..N {
            let axis = L::axis_from_fastest(N, k);
            index[axis] += 1;
            if index[axis] < self.dim[axis] {
                self.index = Some(index);
                break;
            }
            index[axis] = 0;
        }
        Some(origin_index::<O, N>(current))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const N: usize, L: Layout, O: Origin> ExactSizeIterator for Indices<N, L, O> {}
