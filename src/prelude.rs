// Copyright 2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! ndview prelude.
//!
//! This module contains the most used types, type aliases, traits and macros
//! that you can import easily as a group.
//!
//! ```
//! use ndview::prelude::*;
//!
//! let a: Array2<f32> = Array::zeros([2, 2]);
//! let v: ArrayView1<f32> = a.fix_leading([0]);
//! assert_eq!(v.len(), 2);
//! ```

#[doc(no_inline)]
pub use crate::{Array, ArrayBase, ArrayView, ArrayViewMut};

#[doc(no_inline)]
pub use crate::{Array1, Array2, Array3, Array4, FortranArray};

#[doc(no_inline)]
pub use crate::{ArrayView1, ArrayView2, ArrayView3, ArrayView4};

#[doc(no_inline)]
pub use crate::{ArrayViewMut1, ArrayViewMut2, ArrayViewMut3, ArrayViewMut4};

#[doc(no_inline)]
pub use crate::{ColumnMajor, Layout, OneBased, Origin, RowMajor, ZeroBased};

#[doc(no_inline)]
pub use crate::{Data, DataMut, NdIndex, Slice, ViewSpec};

pub use crate::{array, nested, s};
