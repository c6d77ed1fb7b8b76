// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::dimension::stride_offset;
use crate::{ArrayBase, Data, Ix, Layout, Origin};

/// Write the elements of `view` as nested brackets, in row major logical
/// order whatever the layout: `[[a,b],[c,d]]`.
fn format_array<A, S, const N: usize, L, O, F>(
    view: &ArrayBase<S, N, L, O>, f: &mut fmt::Formatter<'_>, mut format: F,
) -> fmt::Result
where
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
    S: Data<Elem = A>,
    L: Layout,
    O: Origin,
{
    let mut index = [0; N];
    format_axis(view, f, &mut index, 0, &mut format)
}

fn format_axis<A, S, const N: usize, L, O, F>(
    view: &ArrayBase<S, N, L, O>, f: &mut fmt::Formatter<'_>, index: &mut [Ix; N], axis: usize, format: &mut F,
) -> fmt::Result
where
    F: FnMut(&A, &mut fmt::Formatter<'_>) -> fmt::Result,
    S: Data<Elem = A>,
    L: Layout,
    O: Origin,
{
    f.write_str("[")?;
    for i in 0..view.dim[axis] {
        if i > 0 {
            f.write_str(",")?;
        }
        index[axis] = i;
        if axis + 1 == N {
            let offset = stride_offset(index, &view.strides) + view.offsets.iter().sum::<Ix>();
            let elt = unsafe { &*view.ptr.as_ptr().add(offset) };
            format(elt, f)?;
        } else {
            format_axis(view, f, index, axis + 1, format)?;
        }
    }
    f.write_str("]")
}

/// Format the array using `Display` and apply the formatting parameters used
/// to each element.
///
/// The array is shown in compact style, without whitespace.
impl<A: fmt::Display, S, const N: usize, L, O> fmt::Display for ArrayBase<S, N, L, O>
where
    S: Data<Elem = A>,
    L: Layout,
    O: Origin,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}

/// Format the array using `Debug` and apply the formatting parameters used
/// to each element.
///
/// The elements are followed by the shape, strides, offsets, layout and
/// origin of the array.
impl<A: fmt::Debug, S, const N: usize, L, O> fmt::Debug for ArrayBase<S, N, L, O>
where
    S: Data<Elem = A>,
    L: Layout,
    O: Origin,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Add extra information for Debug
        format_array(self, f, <_>::fmt)?;
        write!(
            f,
            " shape={:?}, strides={:?}, offsets={:?}, layout={:?}, origin={}",
            self.shape(),
            self.strides(),
            self.offsets(),
            L::ORDER,
            O::BASE
        )
    }
}

/// Format the array using `LowerExp` and apply the formatting parameters used
/// to each element.
impl<A: fmt::LowerExp, S, const N: usize, L, O> fmt::LowerExp for ArrayBase<S, N, L, O>
where
    S: Data<Elem = A>,
    L: Layout,
    O: Origin,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}

/// Format the array using `UpperExp` and apply the formatting parameters used
/// to each element.
impl<A: fmt::UpperExp, S, const N: usize, L, O> fmt::UpperExp for ArrayBase<S, N, L, O>
where
    S: Data<Elem = A>,
    L: Layout,
    O: Origin,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}

/// Format the array using `LowerHex` and apply the formatting parameters used
/// to each element.
impl<A: fmt::LowerHex, S, const N: usize, L, O> fmt::LowerHex for ArrayBase<S, N, L, O>
where
    S: Data<Elem = A>,
    L: Layout,
    O: Origin,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <_>::fmt)
    }
}
