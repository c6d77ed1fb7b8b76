#![allow(clippy::many_single_char_names, clippy::float_cmp)]

use defmac::defmac;
use ndview::prelude::*;
use ndview::Order;

#[test]
fn indexing_forms_agree() {
    let a = Array::<i32, 3>::from_shape_fn([2, 3, 4], |[i, j, k]| (100 * i + 10 * j + k) as i32);
    assert_eq!(a[(1, 2, 3)], 123);
    assert_eq!(a[[1, 2, 3]], 123);
    assert_eq!(a[&[1, 2, 3]], 123);
    assert_eq!(a.get((1, 2, 3)), Some(&123));
    assert_eq!(a.get((2, 0, 0)), None);
    assert_eq!(unsafe { *a.uget([0, 1, 2]) }, 12);

    let b: Array1<i32> = (0..5).collect();
    assert_eq!(b[3], 3);
    assert_eq!(b[(4,)], 4);
}

#[test]
fn one_based_indexing() {
    let mut a = Array::<i32, 2, RowMajor, OneBased>::zeros([2, 3]);
    a[(1, 1)] = 1;
    a[(2, 3)] = 6;
    assert_eq!(a.as_slice(), Some(&[1, 0, 0, 0, 0, 6][..]));
    assert_eq!(a.get((0, 1)), None);
    assert_eq!(a.get_mut((2, 4)), None);
    *a.get_mut((1, 2)).unwrap() = 2;
    assert_eq!(a[[1, 2]], 2);
    unsafe {
        *a.uget_mut((2, 1)) = 4;
    }
    assert_eq!(a.to_string(), "[[1,2,0],[4,0,6]]");
}

#[test]
#[should_panic]
fn index_out_of_bounds() {
    let a = Array::<i32, 2>::zeros([2, 3]);
    let _ = a[(0, 3)];
}

#[test]
#[should_panic]
fn one_based_index_zero() {
    let a = FortranArray::<i32, 2>::zeros([2, 3]);
    let _ = a[(0, 1)];
}

#[test]
fn accessors() {
    let a = Array::<f32, 3, ColumnMajor>::zeros([2, 3, 4]);
    assert_eq!(a.ndim(), 3);
    assert_eq!(a.dim(), [2, 3, 4]);
    assert_eq!(a.shape(), &[2, 3, 4]);
    assert_eq!(a.len_of(2), 4);
    assert_eq!(a.size(), 24);
    assert_eq!(a.len(), 24);
    assert_eq!(a.base_size(), 24);
    assert_eq!(a.strides(), &[1, 2, 6]);
    assert_eq!(a.offsets(), &[0, 0, 0]);
    assert_eq!(a.order(), Order::ColumnMajor);
    assert_eq!(a.as_ptr(), a.base_data());
    assert!(a.is_standard_layout());
    assert!(!a.is_empty());
}

#[test]
fn clone_is_deep() {
    let a = Array::<i32, 2>::from_shape_fn([2, 2], |[i, j]| (2 * i + j) as i32);
    let mut b = a.clone();
    assert_eq!(a, b);
    assert_ne!(a.as_ptr(), b.as_ptr());
    b[(0, 0)] = 42;
    assert_eq!(a[(0, 0)], 0);
    assert_eq!(b[(0, 0)], 42);
    assert_ne!(a, b);
}

#[test]
fn take_leaves_empty_source() {
    let mut a = Array::<i32, 2, ColumnMajor>::from_shape_fn([2, 3], |[i, j]| (3 * i + j) as i32);
    let original = a.clone();
    let moved = a.take();
    assert_eq!(moved, original);
    assert_eq!(a.shape(), &[0, 0]);
    assert_eq!(a.size(), 0);
    assert!(a.is_empty());

    let mut c = original.clone();
    let d = std::mem::take(&mut c);
    assert_eq!(d, original);
    assert_eq!(c.shape(), &[0, 0]);
}

#[test]
fn equality_across_storages() {
    let a = Array::<i32, 2>::from_shape_fn([3, 3], |[i, j]| (3 * i + j) as i32);
    let v = a.slice(s![1.., ..]);
    let owned = v.to_owned();
    assert_eq!(owned.offsets(), &[0, 0]);
    assert_eq!(v, owned);
    assert_eq!(owned, v);
    assert_ne!(a.view(), owned.view());
    let smaller = Array::<i32, 2>::zeros([1, 3]);
    assert!(smaller != owned);
}

#[test]
fn fill_and_assign() {
    let mut a = Array::<i32, 2>::zeros([3, 4]);
    a.slice_mut(s![.., 1..;2]).fill(1);
    assert_eq!(a.to_string(), "[[0,1,0,1],[0,1,0,1],[0,1,0,1]]");

    let src = Array::<i32, 2>::from_shape_fn([3, 2], |[i, j]| (10 * i + j) as i32);
    a.slice_mut(s![.., ..;2]).assign(&src);
    assert_eq!(a.to_string(), "[[0,1,1,1],[10,1,11,1],[20,1,21,1]]");

    let column: Array1<i32> = src.slice_fix_trailing(s![..], [1]).to_owned();
    let mut row: ArrayViewMut1<i32> = a.fix_leading_mut([0]);
    row.slice_mut(s![..3]).assign(&column);
    assert_eq!(a.fix_leading::<1, 1>([0]).to_vec(), vec![1, 11, 21, 1]);
}

#[test]
#[should_panic]
fn assign_shape_mismatch() {
    let mut a = Array::<i32, 2>::zeros([2, 2]);
    let b = Array::<i32, 2>::zeros([2, 3]);
    a.assign(&b);
}

#[test]
fn map_keeps_shape_and_layout() {
    let a = Array::<i32, 2, ColumnMajor>::from_shape_fn([2, 3], |[i, j]| (3 * i + j) as i32);
    let b = a.slice(s![.., 1..]).map(|&x| x as f64 / 2.);
    assert_eq!(b.shape(), &[2, 2]);
    assert_eq!(b.strides(), &[1, 2]);
    assert_eq!(b[(1, 1)], 2.5);
}

#[test]
fn as_slice_follows_layout() {
    defmac!(storage a => a.as_slice().map(|s| s.to_vec()));
    let c = Array::<i32, 2>::from_shape_fn([2, 2], |[i, j]| (2 * i + j) as i32);
    let f = Array::<i32, 2, ColumnMajor>::from_shape_fn([2, 2], |[i, j]| (2 * i + j) as i32);
    assert_eq!(storage!(&c), Some(vec![0, 1, 2, 3]));
    assert_eq!(storage!(&f), Some(vec![0, 2, 1, 3]));
    assert_eq!(storage!(c.slice(s![.., ..1])), None);

    let mut m = c.clone();
    m.as_slice_mut().unwrap()[1] = 9;
    assert_eq!(m[(0, 1)], 9);
    assert_eq!(m.into_raw_vec(), vec![0, 9, 2, 3]);
}

#[test]
fn indices_are_in_origin_and_layout_order() {
    let a = FortranArray::<u8, 2>::zeros([2, 2]);
    let ix: Vec<_> = a.indices().collect();
    assert_eq!(ix, vec![[1, 1], [2, 1], [1, 2], [2, 2]]);
}

#[test]
fn arrays_are_send_and_sync() {
    fn is_send<T: Send>(_t: &T) {}
    fn is_sync<T: Sync>(_t: &T) {}
    let a = Array::<f64, 2>::zeros([2, 2]);
    is_send(&a);
    is_sync(&a);
    is_send(&a.view());
    is_sync(&a.view());
}

#[test]
#[cfg(feature = "approx")]
fn approx_comparison() {
    use approx::{assert_abs_diff_eq, assert_relative_ne};

    let a = Array::<f64, 1>::from(vec![1., 2., 3.]);
    let b = a.map(|&x| x + 1e-12);
    assert_abs_diff_eq!(a, b, epsilon = 1e-9);
    assert_relative_ne!(a, a.map(|&x| x * 2.));
    assert!(a.abs_diff_eq(&b, 1e-9));
}
