mod approx_methods {
    use crate::{ArrayBase, Data, Layout, Origin};

    impl<A, S, const N: usize, L, O> ArrayBase<S, N, L, O>
    where
        S: Data<Elem = A>,
        L: Layout,
        O: Origin,
    {
        /// A test for equality that uses the elementwise absolute difference to compute the
        /// approximate equality of two arrays.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn abs_diff_eq<S2>(&self, other: &ArrayBase<S2, N, L, O>, epsilon: A::Epsilon) -> bool
        where
            A: ::approx::AbsDiffEq<S2::Elem>,
            A::Epsilon: Clone,
            S2: Data,
        {
            <Self as ::approx::AbsDiffEq<_>>::abs_diff_eq(self, other, epsilon)
        }

        /// A test for equality that uses an elementwise relative comparison if the values are far
        /// apart; and the absolute difference otherwise.
        ///
        /// **Requires crate feature `"approx"`**
        pub fn relative_eq<S2>(
            &self, other: &ArrayBase<S2, N, L, O>, epsilon: A::Epsilon, max_relative: A::Epsilon,
        ) -> bool
        where
            A: ::approx::RelativeEq<S2::Elem>,
            A::Epsilon: Clone,
            S2: Data,
        {
            <Self as ::approx::RelativeEq<_>>::relative_eq(self, other, epsilon, max_relative)
        }
    }
}

mod approx_traits {
    use approx::{AbsDiffEq, RelativeEq, UlpsEq};

    use crate::{ArrayBase, Data, Layout, Origin};

    /// Elements are paired by index; arrays of different shapes are never
    /// equal.
    ///
    /// **Requires crate feature `"approx"`.**
    impl<A, B, S, S2, const N: usize, L, O> AbsDiffEq<ArrayBase<S2, N, L, O>> for ArrayBase<S, N, L, O>
    where
        A: AbsDiffEq<B>,
        A::Epsilon: Clone,
        S: Data<Elem = A>,
        S2: Data<Elem = B>,
        L: Layout,
        O: Origin,
    {
        type Epsilon = A::Epsilon;

        fn default_epsilon() -> A::Epsilon {
            A::default_epsilon()
        }

        fn abs_diff_eq(&self, other: &ArrayBase<S2, N, L, O>, epsilon: A::Epsilon) -> bool {
            if self.shape() != other.shape() {
                return false;
            }

            self.iter()
                .zip(other.iter())
                .all(move |(a, b)| A::abs_diff_eq(a, b, epsilon.clone()))
        }
    }

    /// **Requires crate feature `"approx"`.**
    impl<A, B, S, S2, const N: usize, L, O> RelativeEq<ArrayBase<S2, N, L, O>> for ArrayBase<S, N, L, O>
    where
        A: RelativeEq<B>,
        A::Epsilon: Clone,
        S: Data<Elem = A>,
        S2: Data<Elem = B>,
        L: Layout,
        O: Origin,
    {
        fn default_max_relative() -> A::Epsilon {
            A::default_max_relative()
        }

        fn relative_eq(
            &self, other: &ArrayBase<S2, N, L, O>, epsilon: A::Epsilon, max_relative: A::Epsilon,
        ) -> bool {
            if self.shape() != other.shape() {
                return false;
            }

            self.iter()
                .zip(other.iter())
                .all(move |(a, b)| A::relative_eq(a, b, epsilon.clone(), max_relative.clone()))
        }
    }

    /// **Requires crate feature `"approx"`.**
    impl<A, B, S, S2, const N: usize, L, O> UlpsEq<ArrayBase<S2, N, L, O>> for ArrayBase<S, N, L, O>
    where
        A: UlpsEq<B>,
        A::Epsilon: Clone,
        S: Data<Elem = A>,
        S2: Data<Elem = B>,
        L: Layout,
        O: Origin,
    {
        fn default_max_ulps() -> u32 {
            A::default_max_ulps()
        }

        fn ulps_eq(&self, other: &ArrayBase<S2, N, L, O>, epsilon: A::Epsilon, max_ulps: u32) -> bool {
            if self.shape() != other.shape() {
                return false;
            }

            self.iter()
                .zip(other.iter())
                .all(move |(a, b)| A::ulps_eq(a, b, epsilon.clone(), max_ulps))
        }
    }

}
