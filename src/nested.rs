//! Nested literals: the input of [`ArrayBase::from_nested`].
//!
//! [`ArrayBase::from_nested`]: crate::ArrayBase::from_nested

use crate::error::{from_kind, ErrorKind, ShapeError};
use crate::Ix;

/// A nested sequence of elements, as written in a brace literal.
///
/// A rectangular `Nested` of depth `N` describes an `N`-dimensional array in
/// row major order: the outermost list runs along axis 0 and every list at
/// the same depth must have the same length. Build one with the [`nested!`]
/// macro or directly.
///
/// ```
/// use ndview::{nested, Nested, ErrorKind};
///
/// let n = nested![[0, 1, 2], [3, 4, 5]];
/// assert_eq!(n.shape::<2>(), Ok([2, 3]));
///
/// let ragged = nested![[0, 1, 2], [3, 4]];
/// assert_eq!(ragged.shape::<2>().unwrap_err().kind(), ErrorKind::InvalidShape);
///
/// assert_eq!(Nested::List(vec![Nested::Scalar(1)]).shape::<1>(), Ok([1]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Nested<A> {
    /// A single element.
    Scalar(A),
    /// A sequence of sub-literals one level deeper.
    List(Vec<Nested<A>>),
}

impl<A> Nested<A> {
    /// Infer the shape of an `N`-dimensional array from the literal.
    ///
    /// ***Errors*** with [`ErrorKind::InvalidShape`] if sibling lists differ
    /// in length or a level mixes scalars and lists, and with
    /// [`ErrorKind::RankMismatch`] if the literal is uniformly nested but not
    /// `N` levels deep.
    pub fn shape<const N: usize>(&self) -> Result<[Ix; N], ShapeError> {
        let mut shape = [0; N];
        let mut level: Vec<&Nested<A>> = vec![self];
        for axis in shape.iter_mut() {
            check_kinds(&level, false)?;
            let mut next = Vec::new();
            let mut len = None;
            for node in &level {
                if let Nested::List(items) = node {
                    match len {
                        None => len = Some(items.len()),
                        Some(l) if l != items.len() => return Err(from_kind(ErrorKind::InvalidShape)),
                        Some(_) => {}
                    }
                    next.extend(items.iter());
                }
            }
            *axis = len.unwrap_or(0);
            level = next;
        }
        check_kinds(&level, true)?;
        Ok(shape)
    }

    /// Append the scalars to `out` depth first, which is row major order.
    pub(crate) fn flatten_into(self, out: &mut Vec<A>) {
        match self {
            Nested::Scalar(x) => out.push(x),
            Nested::List(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }
}

/// Check that all nodes of one nesting level are of the expected kind.
fn check_kinds<A>(level: &[&Nested<A>], expect_scalars: bool) -> Result<(), ShapeError> {
    let scalars = level.iter().filter(|n| matches!(n, Nested::Scalar(_))).count();
    let expected = if expect_scalars { level.len() } else { 0 };
    if scalars == expected {
        Ok(())
    } else if scalars == 0 || scalars == level.len() {
        Err(from_kind(ErrorKind::RankMismatch))
    } else {
        Err(from_kind(ErrorKind::InvalidShape))
    }
}

/// Build a [`Nested`] literal from bracketed, comma separated elements.
///
/// A bracketed group is a list, anything else is a scalar expression.
///
/// ```
/// use ndview::{nested, Nested};
///
/// let n = nested![[1, -2], [3, 4]];
/// assert_eq!(
///     n,
///     Nested::List(vec![
///         Nested::List(vec![Nested::Scalar(1), Nested::Scalar(-2)]),
///         Nested::List(vec![Nested::Scalar(3), Nested::Scalar(4)]),
///     ])
/// );
/// ```
#[macro_export]
macro_rules! nested {
    ($($body:tt)*) => {
        $crate::Nested::List($crate::__nested_items!([] $($body)*))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __nested_items {
    ([$($done:expr,)*]) => {
        ::std::vec![$($done),*]
    };
    ([$($done:expr,)*] [$($group:tt)*] $(, $($rest:tt)*)?) => {
        $crate::__nested_items!(
            [$($done,)* $crate::Nested::List($crate::__nested_items!([] $($group)*)),]
            $($($rest)*)?
        )
    };
    ([$($done:expr,)*] $x:expr $(, $($rest:tt)*)?) => {
        $crate::__nested_items!([$($done,)* $crate::Nested::Scalar($x),] $($($rest)*)?)
    };
}

/// Create an [`Array`](crate::Array) from a nested literal.
///
/// Expands to [`ArrayBase::from_nested`](crate::ArrayBase::from_nested) and
/// so returns a `Result`: the rows of the literal may be ragged.
///
/// ```
/// use ndview::{array, Array, ErrorKind};
///
/// let a: Array<i32, 2> = array![[1, 2], [3, 4]].unwrap();
/// assert_eq!(a.shape(), &[2, 2]);
///
/// let b: Result<Array<i32, 2>, _> = array![[0, 1, 2], [3, 4]];
/// assert_eq!(b.unwrap_err().kind(), ErrorKind::InvalidShape);
/// ```
#[macro_export]
macro_rules! array {
    ($($body:tt)*) => {
        $crate::Array::from_nested($crate::nested!($($body)*))
    };
}
