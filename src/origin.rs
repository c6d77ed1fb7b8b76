// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt::Debug;

use crate::Ix;

/// Index origin of an array: the smallest legal index along any axis.
///
/// Every public index and slice bound is expressed in the array's origin and
/// rebased to zero before any address arithmetic happens.
///
/// ***Don't implement this trait, it is sealed.***
pub trait Origin: Copy + Debug + Default + Send + Sync + 'static {
    /// The first index along an axis.
    const BASE: Ix;

    /// Translate an origin-based index to a zero-based one.
    ///
    /// An index below `BASE` wraps around to a huge value, which any bounds
    /// check then rejects.
    #[inline(always)]
    fn rebase(index: Ix) -> Ix {
        index.wrapping_sub(Self::BASE)
    }

    /// Translate a zero-based index to this origin.
    #[inline(always)]
    fn from_zero(index: Ix) -> Ix {
        index + Self::BASE
    }

    private_decl! {}
}

/// Indices start at 0, like Rust slices. This is the default.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ZeroBased;

/// Indices start at 1, like Fortran or Matlab.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct OneBased;

impl Origin for ZeroBased {
    const BASE: Ix = 0;
    private_impl! {}
}

impl Origin for OneBased {
    const BASE: Ix = 1;
    private_impl! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebase_round_trip() {
        assert_eq!(ZeroBased::rebase(3), 3);
        assert_eq!(OneBased::rebase(3), 2);
        assert_eq!(OneBased::from_zero(OneBased::rebase(7)), 7);
    }

    #[test]
    fn below_base_wraps() {
        assert_eq!(OneBased::rebase(0), usize::MAX);
    }
}
