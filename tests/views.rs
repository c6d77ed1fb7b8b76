use ndview::prelude::*;
use ndview::ErrorKind;

fn counting<L: Layout>(rows: usize, cols: usize) -> Array<i32, 2, L> {
    Array::from_shape_fn([rows, cols], |[i, j]| (i * cols + j) as i32)
}

#[test]
fn slice_with_step() {
    let a = counting::<RowMajor>(3, 4);
    let v = a.slice(s![1..3, 0..4;2]);
    assert_eq!(v.shape(), &[2, 2]);
    assert_eq!(v.strides(), &[4, 2]);
    assert_eq!(v.offsets(), &[4, 0]);
    assert_eq!(v.iter().cloned().collect::<Vec<_>>(), vec![4, 6, 8, 10]);
}

#[test]
fn slice_with_step_column_major() {
    let a = counting::<ColumnMajor>(3, 4);
    let v = a.slice(s![1..3, 0..4;2]);
    assert_eq!(v.shape(), &[2, 2]);
    assert_eq!(v.to_string(), "[[4,6],[8,10]]");
    assert_eq!(v.iter().cloned().collect::<Vec<_>>(), vec![4, 8, 6, 10]);
}

#[test]
fn fix_leading_row() {
    let a = counting::<RowMajor>(3, 4);
    let row: ArrayView<i32, 1> = a.fix_leading([1]);
    assert_eq!(row.shape(), &[4]);
    assert_eq!(row.to_vec(), vec![4, 5, 6, 7]);
    assert_eq!(row.offsets(), &[4]);
}

#[test]
fn column_major_strides_and_offset() {
    let a = counting::<ColumnMajor>(2, 3);
    assert_eq!(a.strides(), &[1, 2]);
    let elt: *const i32 = &a[(1, 2)];
    assert_eq!(unsafe { elt.offset_from(a.as_ptr()) }, 5);
    assert_eq!(a[(1, 2)], 5);
}

#[test]
fn fix_leading_column_major_carries_into_first_axis() {
    let a = Array::<i32, 3, ColumnMajor>::from_shape_fn([2, 3, 4], |[i, j, k]| (100 * i + 10 * j + k) as i32);
    let m: ArrayView<i32, 2, ColumnMajor> = a.fix_leading([1]);
    assert_eq!(m.shape(), &[3, 4]);
    assert_eq!(m.strides(), &[2, 6]);
    assert_eq!(m.offsets(), &[1, 0]);
    assert_eq!(m[(2, 3)], 123);
    assert_eq!(m.to_string(), "[[100,101,102,103],[110,111,112,113],[120,121,122,123]]");
}

#[test]
fn slice_fix_trailing() {
    let a = Array::<i32, 3>::from_shape_fn([2, 3, 4], |[i, j, k]| (100 * i + 10 * j + k) as i32);
    let m: ArrayView<i32, 2> = a.slice_fix_trailing(s![.., 1..], [3]);
    assert_eq!(m.to_string(), "[[13,23],[113,123]]");
    assert_eq!(m.offsets(), &[0, 7]);
}

#[test]
fn fix_leading_slice() {
    let a = counting::<RowMajor>(4, 6);
    let v: ArrayView<i32, 1> = a.fix_leading_slice([2], s![1..;2]);
    assert_eq!(v.to_vec(), vec![13, 15, 17]);
}

#[test]
fn identity_slice() {
    let a = counting::<RowMajor>(3, 5);
    let v = a.slice(s![.., ..]);
    assert_eq!(v, a);
    assert_eq!(v.strides(), a.strides());
    assert_eq!(v.offsets(), &[0, 0]);

    let f = counting::<ColumnMajor>(3, 5);
    let w = f.slice(s![.., ..]);
    assert_eq!(w, f);
    assert_eq!(w.strides(), f.strides());
}

#[test]
fn view_of_view_inherits_offsets() {
    let a = counting::<RowMajor>(4, 6);
    let v = a.slice(s![1.., 1..;2]);
    assert_eq!(v.shape(), &[3, 3]);
    assert_eq!(v.offsets(), &[6, 1]);
    let w: ArrayView<i32, 1> = v.fix_leading([1]);
    assert_eq!(w.offsets(), &[13]);
    assert_eq!(w.to_vec(), vec![13, 15, 17]);

    let direct: ArrayView<i32, 1> = a.fix_leading_slice([2], s![1..;2]);
    assert_eq!(w, direct);

    let ww = v.slice(s![1.., 1..]);
    assert_eq!(ww.to_string(), "[[15,17],[21,23]]");
}

#[test]
fn view_of_view_column_major() {
    let a = counting::<ColumnMajor>(4, 6);
    let v = a.slice(s![1.., 1..;2]);
    let w: ArrayView<i32, 1, ColumnMajor> = v.fix_leading([1]);
    assert_eq!(w.to_vec(), vec![13, 15, 17]);
    let ww = v.slice(s![1.., 1..]);
    assert_eq!(ww.to_string(), "[[15,17],[21,23]]");
}

#[test]
fn writes_alias_the_source() {
    let mut a = Array::<i32, 2>::zeros([3, 4]);
    {
        let mut v = a.slice_mut(s![1..3, 1..;2]);
        assert_eq!(v.shape(), &[2, 2]);
        v[(0, 1)] = 7;
        for x in v.iter_mut() {
            *x += 1;
        }
    }
    assert_eq!(a.to_string(), "[[0,0,0,0],[0,1,0,8],[0,1,0,1]]");
}

#[test]
fn writes_alias_the_source_column_major() {
    let mut a = Array::<i32, 2, ColumnMajor>::zeros([3, 4]);
    {
        let mut v = a.slice_mut(s![1..3, 1..;2]);
        v[(0, 1)] = 7;
        for x in v.iter_mut() {
            *x += 1;
        }
    }
    assert_eq!(a.to_string(), "[[0,0,0,0],[0,1,0,8],[0,1,0,1]]");

    let mut col: ArrayViewMut<i32, 1, ColumnMajor> = a.slice_fix_trailing_mut(s![..], [0]);
    col.fill(-1);
    assert_eq!(a.to_string(), "[[-1,0,0,0],[-1,1,0,8],[-1,1,0,1]]");
}

#[test]
fn mutable_views_compose() {
    let mut a = Array::<i32, 3>::zeros([2, 3, 4]);
    {
        let mut plane: ArrayViewMut<i32, 2> = a.fix_leading_mut([1]);
        let mut row: ArrayViewMut<i32, 1> = plane.fix_leading_slice_mut([2], s![..;3]);
        row.fill(9);
    }
    assert_eq!(a[(1, 2, 0)], 9);
    assert_eq!(a[(1, 2, 3)], 9);
    assert_eq!(a.iter().filter(|&&x| x == 9).count(), 2);
}

#[test]
fn one_based_views() {
    let a = FortranArray::<i32, 2>::from_shape_fn([3, 4], |[i, j]| (10 * i + j) as i32);
    assert_eq!(a[(1, 1)], 11);
    let v = a.slice(s![2..4, 1..;2]);
    assert_eq!(v.shape(), &[2, 2]);
    assert_eq!(v[(1, 1)], 21);
    assert_eq!(v.to_string(), "[[21,23],[31,33]]");
    let row: ArrayView<i32, 1, ColumnMajor, OneBased> = a.fix_leading([3]);
    assert_eq!(row.to_vec(), vec![31, 32, 33, 34]);
    assert_eq!(row[4], 34);
}

#[test]
fn view_with_matches_shorthands() {
    let a = counting::<RowMajor>(3, 4);
    assert_eq!(a.view_with(ViewSpec::<0, 2>::Whole), a.view());
    assert_eq!(a.view_with(ViewSpec::<0, 2>::Slices(s![1.., ..2])), a.slice(s![1.., ..2]));
    let r: ArrayView<i32, 1> = a.view_with(ViewSpec::FixedLeading([2]));
    assert_eq!(r, a.fix_leading::<1, 1>([2]));
}

#[test]
fn empty_slice() {
    let a = counting::<RowMajor>(3, 4);
    let v = a.slice(s![1..1, ..]);
    assert_eq!(v.shape(), &[0, 4]);
    assert!(v.is_empty());
    assert_eq!(v.iter().count(), 0);
    let w = a.slice(s![3.., 4..]);
    assert_eq!(w.shape(), &[0, 0]);
}

#[test]
#[should_panic]
fn slice_stop_out_of_bounds() {
    let a = counting::<RowMajor>(3, 4);
    let _ = a.slice(s![0..4, ..]);
}

#[test]
#[should_panic]
fn one_based_slice_below_origin() {
    let a = FortranArray::<i32, 2>::zeros([3, 4]);
    let _ = a.slice(s![0..2, ..]);
}

#[test]
#[should_panic]
fn fixed_index_out_of_bounds() {
    let a = counting::<RowMajor>(3, 4);
    let _: ArrayView<i32, 1> = a.fix_leading([3]);
}

#[test]
#[should_panic]
fn whole_view_cannot_fix_indices() {
    let a = counting::<RowMajor>(3, 4);
    let _ = a.view_with(ViewSpec::<1, 1>::Whole);
}

#[test]
fn views_from_slices() {
    let data = [0, 1, 2, 3, 4, 5, 6];
    let v = ArrayView::<i32, 2>::from_shape([2, 3], &data).unwrap();
    assert_eq!(v.to_string(), "[[0,1,2],[3,4,5]]");
    assert_eq!(v.base_size(), 7);
    assert_eq!(v.base_data(), data.as_ptr());

    let e = ArrayView::<i32, 2>::from_shape([3, 3], &data).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::IncompatibleShape);

    let mut buf = vec![0; 6];
    {
        let mut m = ArrayViewMut::<i32, 2, ColumnMajor>::from_shape([2, 3], &mut buf).unwrap();
        m[(1, 0)] = 1;
        m[(0, 1)] = 2;
    }
    assert_eq!(buf, [0, 1, 2, 0, 0, 0]);

    let one = ArrayView1::from(&data[..3]);
    assert_eq!(one.to_vec(), vec![0, 1, 2]);
}

#[test]
fn view_from_raw_parts() {
    let data = [1., 2., 3., 4., 5., 6.];
    let v = unsafe { ArrayView::<f64, 2>::from_shape_ptr([2, 2], [3, 1], [0, 1], data.as_ptr(), data.len()) };
    assert_eq!(v.to_string(), "[[2,3],[5,6]]");
    assert_eq!(v.as_ptr(), data[1..].as_ptr());
}

#[test]
fn conversions_keep_the_lifetime() {
    fn last_row<'a>(v: ArrayView<'a, i32, 2>) -> ArrayView<'a, i32, 1> {
        let r = v.len_of(0) - 1;
        v.into_view_with(ViewSpec::FixedLeading([r]))
    }
    let a = counting::<RowMajor>(3, 2);
    assert_eq!(last_row(a.view()).to_vec(), vec![4, 5]);
    assert_eq!(a.view().reborrow(), a.view());

    assert_eq!(a.view().to_slice(), Some(&[0, 1, 2, 3, 4, 5][..]));
    assert_eq!(a.slice(s![.., ..1]).to_slice(), None);
    assert_eq!(a.slice(s![1.., ..]).to_slice(), Some(&[2, 3, 4, 5][..]));

    let mut b = counting::<RowMajor>(2, 2);
    {
        let v = b.view_mut();
        let r = v.into_view();
        assert_eq!(r.len(), 4);
    }
    {
        let s = b.view_mut().into_slice().unwrap();
        s[3] = 30;
    }
    let rest: ArrayViewMut<i32, 1> = b.view_mut().into_view_with(ViewSpec::FixedLeading([0]));
    assert_eq!(rest.to_vec(), vec![0, 1]);
    assert_eq!(b[(1, 1)], 30);
}
