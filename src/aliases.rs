//! Type aliases for common array sizes
//!

use crate::{Array, ArrayView, ArrayViewMut, ColumnMajor, OneBased};

/// one-dimensional array
pub type Array1<A> = Array<A, 1>;
/// two-dimensional array
pub type Array2<A> = Array<A, 2>;
/// three-dimensional array
pub type Array3<A> = Array<A, 3>;
/// four-dimensional array
pub type Array4<A> = Array<A, 4>;

/// one-dimensional array view
pub type ArrayView1<'a, A> = ArrayView<'a, A, 1>;
/// two-dimensional array view
pub type ArrayView2<'a, A> = ArrayView<'a, A, 2>;
/// three-dimensional array view
pub type ArrayView3<'a, A> = ArrayView<'a, A, 3>;
/// four-dimensional array view
pub type ArrayView4<'a, A> = ArrayView<'a, A, 4>;

/// one-dimensional read-write array view
pub type ArrayViewMut1<'a, A> = ArrayViewMut<'a, A, 1>;
/// two-dimensional read-write array view
pub type ArrayViewMut2<'a, A> = ArrayViewMut<'a, A, 2>;
/// three-dimensional read-write array view
pub type ArrayViewMut3<'a, A> = ArrayViewMut<'a, A, 3>;
/// four-dimensional read-write array view
pub type ArrayViewMut4<'a, A> = ArrayViewMut<'a, A, 4>;

/// An array in column major layout with one based indices, the convention
/// of Fortran.
pub type FortranArray<A, const N: usize> = Array<A, N, ColumnMajor, OneBased>;
