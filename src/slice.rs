// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use num_integer::Integer;

use crate::{Ix, Origin};

/// A slice (range with step size).
///
/// `start` and `stop` are in the origin of the array the slice is applied
/// to. An unspecified `start` is the first index of the axis, an unspecified
/// `stop` is one past its last index. The selected range is half open,
/// `[start, stop)`, and visits every `step`-th index.
///
/// ## Examples
///
/// `Slice::new(None, None, 1)` is the full range of an axis. It can also be
/// created with `Slice::from(..)` or [`Slice::full()`].
///
/// `Slice::new(Some(a), Some(b), 2)` is every second element from `a` until
/// `b`. It can also be created with `Slice::from(a..b).step_by(2)`.
///
/// ```
/// use ndview::{Slice, ZeroBased, OneBased};
///
/// let s = Slice::from(1..7).step_by(2);
/// assert_eq!(s.len::<ZeroBased>(10), 3);
///
/// // the same bounds resolved against a one based axis of length 4
/// let s = Slice::from(..);
/// assert_eq!(s.resolved_start::<OneBased>(), 1);
/// assert_eq!(s.resolved_stop::<OneBased>(4), 5);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slice {
    pub start: Option<Ix>,
    pub stop: Option<Ix>,
    pub step: Ix,
}

impl Slice {
    /// Create a new `Slice` with the given extents.
    ///
    /// See also the `From` impls, converting from ranges; for example
    /// `Slice::from(i..)` or `Slice::from(j..k)`.
    ///
    /// **Panics** if `step` is zero, or if both bounds are given and `stop`
    /// is less than `start`.
    pub fn new(start: Option<Ix>, stop: Option<Ix>, step: Ix) -> Slice {
        assert!(step >= 1, "Slice::new: step must be at least 1");
        if let (Some(a), Some(b)) = (start, stop) {
            assert!(b >= a, "Slice::new: stop {} is less than start {}", b, a);
        }
        Slice { start, stop, step }
    }

    /// The full range of an axis.
    #[inline]
    pub fn full() -> Slice {
        Slice { start: None, stop: None, step: 1 }
    }

    /// Create a new `Slice` with the given step size (multiplied with the
    /// previous step size).
    ///
    /// **Panics** if `step` is zero.
    #[inline]
    pub fn step_by(self, step: Ix) -> Self {
        assert!(step >= 1, "Slice::step_by: step must be at least 1");
        Slice { step: self.step * step, ..self }
    }

    /// The first index of the slice, in origin `O`.
    #[inline]
    pub fn resolved_start<O: Origin>(&self) -> Ix {
        self.start.unwrap_or(O::BASE)
    }

    /// One past the last index of the slice on an axis of length `n`, in
    /// origin `O`.
    #[inline]
    pub fn resolved_stop<O: Origin>(&self, n: Ix) -> Ix {
        self.stop.unwrap_or(O::BASE + n)
    }

    /// Number of indices the slice selects on an axis of length `n`.
    ///
    /// **Panics** if the resolved stop is less than the resolved start.
    #[inline]
    pub fn len<O: Origin>(&self, n: Ix) -> Ix {
        let start = self.resolved_start::<O>();
        let stop = self.resolved_stop::<O>(n);
        assert!(
            stop >= start,
            "Slice::len: stop {} is less than start {}",
            stop,
            start
        );
        Integer::div_ceil(&(stop - start), &self.step)
    }

    /// Return `true` if the slice selects no index on an axis of length `n`.
    #[inline]
    pub fn is_empty<O: Origin>(&self, n: Ix) -> bool {
        self.len::<O>(n) == 0
    }
}

impl Default for Slice {
    #[inline]
    fn default() -> Self {
        Slice::full()
    }
}

impl From<Range<Ix>> for Slice {
    #[inline]
    fn from(r: Range<Ix>) -> Slice {
        Slice::new(Some(r.start), Some(r.end), 1)
    }
}

impl From<RangeFrom<Ix>> for Slice {
    #[inline]
    fn from(r: RangeFrom<Ix>) -> Slice {
        Slice { start: Some(r.start), stop: None, step: 1 }
    }
}

impl From<RangeTo<Ix>> for Slice {
    #[inline]
    fn from(r: RangeTo<Ix>) -> Slice {
        Slice { start: None, stop: Some(r.end), step: 1 }
    }
}

impl From<RangeFull> for Slice {
    #[inline]
    fn from(_: RangeFull) -> Slice {
        Slice::full()
    }
}

/// Renders in the syntax of the [`s!`] macro, `start..stop;step`.
impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{}", start)?;
        }
        write!(f, "..")?;
        if let Some(stop) = self.stop {
            write!(f, "{}", stop)?;
        }
        if self.step != 1 {
            write!(f, ";{}", self.step)?;
        }
        Ok(())
    }
}

/// Slice argument constructor.
///
/// `s![]` takes a list of ranges, separated by comma, with optional step
/// sizes that are separated from the range by a semicolon. It produces a
/// `[Slice; n]` with one entry per range.
///
/// Each range is anything that converts into a [`Slice`]: `a..b`, `a..`,
/// `..b` and `..` for the whole axis. The step is written `;step`.
///
/// ```
/// use ndview::{s, Slice};
///
/// let slices = s![1..3, ..;2, 4..];
/// assert_eq!(slices[0], Slice::from(1..3));
/// assert_eq!(slices[1], Slice::new(None, None, 2));
/// assert_eq!(slices[2], Slice::from(4..));
/// ```
#[macro_export]
macro_rules! s {
    ($($r:expr $(;$step:expr)?),+ $(,)?) => {
        [$($crate::Slice::from($r)$(.step_by($step))?),+]
    };
}

/// A request describing how to derive a view from a source of rank `K + M`.
///
/// `K` is the number of fixed indices (axes dropped) and `M` the rank of the
/// resulting view. Every view constructor of the crate builds one of these
/// and hands it to the same routine; [`ArrayBase::view_with`] and
/// [`ArrayBase::view_mut_with`] accept them directly.
///
/// Fixed indices are in the source's origin. Slices are resolved against the
/// lengths of the axes they apply to.
///
/// [`ArrayBase::view_with`]: crate::ArrayBase::view_with
/// [`ArrayBase::view_mut_with`]: crate::ArrayBase::view_mut_with
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ViewSpec<const K: usize, const M: usize> {
    /// The whole source, with the same shape, strides and offsets.
    Whole,
    /// One slice per axis of the source.
    Slices([Slice; M]),
    /// Fix the first `K` axes at the given indices and keep the rest whole.
    FixedLeading([Ix; K]),
    /// Fix the first `K` axes and slice the remaining `M`.
    FixedLeadingSlices([Ix; K], [Slice; M]),
    /// Slice the first `M` axes and fix the last `K`.
    SlicesFixedTrailing([Slice; M], [Ix; K]),
}
