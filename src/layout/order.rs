
/// Array order
///
/// Order refers to indexing order, or how a linear sequence is translated
/// into a two-dimensional or multi-dimensional array.
///
/// - `RowMajor` means that the index along the row is the most rapidly changing
/// - `ColumnMajor` means that the index along the column is the most rapidly changing
///
/// Given a sequence like: 1, 2, 3, 4, 5, 6
///
/// If it is laid it out in a 2 x 3 matrix using row major ordering, it results in:
///
/// ```text
/// 1  2  3
/// 4  5  6
/// ```
///
/// If it is laid using column major ordering, it results in:
///
/// ```text
/// 1  3  5
/// 2  4  6
/// ```
///
/// `Order` is the runtime name of a [`Layout`](crate::Layout) policy, as
/// reported by [`ArrayBase::order`](crate::ArrayBase::order).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Row major or "C" order
    RowMajor,
    /// Column major or "F" order
    ColumnMajor,
}

impl Order {
    /// "C" is an alias for row major ordering
    pub const C: Order = Order::RowMajor;

    /// "F" (for Fortran) is an alias for column major ordering
    pub const F: Order = Order::ColumnMajor;

    /// Return true if input is Order::RowMajor, false otherwise
    #[inline]
    pub fn is_row_major(self) -> bool {
        match self {
            Order::RowMajor => true,
            Order::ColumnMajor => false,
        }
    }

    /// Return true if input is Order::ColumnMajor, false otherwise
    #[inline]
    pub fn is_column_major(self) -> bool {
        !self.is_row_major()
    }
}

#[cfg(test)]
mod tests {
    use super::Order;
    use crate::{ColumnMajor, Layout, RowMajor};

    #[test]
    fn aliases_name_the_layout_policies() {
        assert_eq!(Order::C, RowMajor::ORDER);
        assert_eq!(Order::F, ColumnMajor::ORDER);
        assert!(Order::C.is_row_major());
        assert!(!Order::C.is_column_major());
        assert!(Order::F.is_column_major());
        assert!(!Order::F.is_row_major());
    }
}
