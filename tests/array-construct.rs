#![allow(clippy::float_cmp)]

use defmac::defmac;
use ndview::prelude::*;
use ndview::{ErrorKind, Nested};

#[test]
fn test_from_shape_fn() {
    let step = 3.1;
    let h = Array::<f64, 2>::from_shape_fn([5, 5], |[i, j]| f64::sin(i as f64 / step) * f64::cos(j as f64 / step));
    assert_eq!(h.shape(), &[5, 5]);
    assert_eq!(h[(0, 3)], 0.);
}

#[test]
fn from_shape_fn_visits_in_layout_order() {
    let mut calls = Vec::new();
    let _ = Array::<u8, 2, ColumnMajor>::from_shape_fn([2, 2], |ix| {
        calls.push(ix);
        0
    });
    assert_eq!(calls, vec![[0, 0], [1, 0], [0, 1], [1, 1]]);

    let mut n = 0;
    let a = Array::<i32, 2, ColumnMajor>::from_shape_simple_fn([2, 3], || {
        n += 1;
        n
    });
    assert_eq!(a.as_slice(), Some(&[1, 2, 3, 4, 5, 6][..]));
    assert_eq!(a.to_string(), "[[1,3,5],[2,4,6]]");
}

#[test]
fn filled_constructors() {
    let a = Array::<f32, 3>::zeros([2, 3, 4]);
    assert_eq!(a.size(), 24);
    assert!(a.iter().all(|&x| x == 0.));
    let b = Array::<u16, 2, ColumnMajor, OneBased>::ones([3, 2]);
    assert!(b.iter().all(|&x| x == 1));
    assert_eq!(b.strides(), &[1, 3]);
    let c = Array::<String, 2>::from_elem([2, 2], "x".to_string());
    assert_eq!(c[(1, 1)], "x");
    let d = Array::<Option<u8>, 1>::default([3]);
    assert_eq!(d.to_vec(), vec![None, None, None]);
}

#[test]
fn test_dimension_zero() {
    defmac!(empty shape => Array::<f32, 3>::zeros(shape));
    for shape in [[0, 2, 2], [2, 0, 2], [2, 2, 0], [0, 0, 0]] {
        let a = empty!(shape);
        assert_eq!(a.shape(), &shape);
        assert_eq!(a.size(), 0);
        assert!(a.is_empty());
        assert_eq!(a.into_raw_vec(), Vec::<f32>::new());
    }
}

#[test]
fn default_is_all_zero_shape() {
    let a = <Array<i32, 3, ColumnMajor> as Default>::default();
    assert_eq!(a.shape(), &[0, 0, 0]);
    assert_eq!(a.strides(), &[1, 0, 0]);
    assert_eq!(a.base_size(), 0);
}

#[test]
fn test_from_shape_vec() {
    let a = Array::<i32, 2>::from_shape_vec([2, 3], (0..6).collect()).unwrap();
    assert_eq!(a[(1, 0)], 3);
    let f = Array::<i32, 2, ColumnMajor>::from_shape_vec([2, 3], (0..6).collect()).unwrap();
    assert_eq!(f[(1, 0)], 1);

    let e = Array::<i32, 2>::from_shape_vec([2, 3], vec![0; 5]).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::IncompatibleShape);
    let e = Array::<i32, 2>::from_shape_vec([2, 3], vec![0; 7]).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::IncompatibleShape);
    let e = Array::<i32, 2>::from_shape_vec([usize::MAX, 2], vec![]).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Overflow);
}

#[test]
#[should_panic]
fn deny_wraparound_zeros() {
    let _ = Array::<i8, 3>::zeros([1 << 40, 1 << 40, 1 << 40]);
}

#[test]
#[should_panic]
fn deny_wraparound_from_shape_fn() {
    let _ = Array::<i8, 2>::from_shape_fn([usize::MAX, 2], |_| 0);
}

#[test]
fn array_macro() {
    let a: Array2<i32> = array![[0, 1, 2], [3, 4, 5]].unwrap();
    assert_eq!(a.shape(), &[2, 3]);
    assert_eq!(a.strides(), &[3, 1]);
    assert_eq!(a.into_raw_vec(), vec![0, 1, 2, 3, 4, 5]);

    let b: Array3<f64> = array![[[1., 2.]], [[3., 4.]], [[5., 6.]]].unwrap();
    assert_eq!(b.shape(), &[3, 1, 2]);
    assert_eq!(b[(2, 0, 1)], 6.);

    let c: Array1<u8> = array![7, 8, 9].unwrap();
    assert_eq!(c.to_vec(), vec![7, 8, 9]);

    let row: Array2<i32> = array![[1, 2]].unwrap();
    assert_eq!(row.shape(), &[1, 2]);
}

#[test]
fn array_macro_errors() {
    let ragged: Result<Array2<i32>, _> = array![[0, 1, 2], [3, 4]];
    assert_eq!(ragged.unwrap_err().kind(), ErrorKind::InvalidShape);

    let mixed: Result<Array2<i32>, _> = array![[0, 1], 2];
    assert_eq!(mixed.unwrap_err().kind(), ErrorKind::InvalidShape);

    let too_shallow: Result<Array3<i32>, _> = array![[0, 1], [2, 3]];
    assert_eq!(too_shallow.unwrap_err().kind(), ErrorKind::RankMismatch);

    let too_deep: Result<Array1<i32>, _> = array![[0, 1], [2, 3]];
    assert_eq!(too_deep.unwrap_err().kind(), ErrorKind::RankMismatch);
}

#[test]
fn empty_literals() {
    let a: Array2<i32> = array![[], [], []].unwrap();
    assert_eq!(a.shape(), &[3, 0]);
    let b: Array2<i32> = array![].unwrap();
    assert_eq!(b.shape(), &[0, 0]);
}

#[test]
fn from_nested_column_major() {
    let a = Array::<i32, 3, ColumnMajor>::from_nested(nested![[[1, 2], [3, 4]], [[5, 6], [7, 8]]]).unwrap();
    assert_eq!(a.as_slice(), Some(&[1, 5, 3, 7, 2, 6, 4, 8][..]));
    assert_eq!(a[(1, 0, 1)], 6);
    assert_eq!(a.to_string(), "[[[1,2],[3,4]],[[5,6],[7,8]]]");

    let f = FortranArray::<i32, 2>::from_nested(nested![[11, 12], [21, 22]]).unwrap();
    assert_eq!(f[(2, 1)], 21);
}

#[test]
fn from_nested_built_by_hand() {
    let n = Nested::List(vec![
        Nested::List(vec![Nested::Scalar('a'), Nested::Scalar('b')]),
        Nested::List(vec![Nested::Scalar('c'), Nested::Scalar('d')]),
    ]);
    let a = Array::<char, 2>::from_nested(n).unwrap();
    assert_eq!(a.to_string(), "[[a,b],[c,d]]");
}

#[test]
fn from_vec_and_iterator() {
    let a = Array1::from(vec![1, 2, 3]);
    assert_eq!(a.shape(), &[3]);
    let b: Array<i32, 1, ColumnMajor, OneBased> = (1..=4).map(|x| x * x).collect();
    assert_eq!(b[4], 16);
    assert_eq!(b.len(), 4);
}
