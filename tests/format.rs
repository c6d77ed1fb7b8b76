use ndview::prelude::*;

#[test]
fn formatting() {
    let a = Array1::<f32>::from(vec![1., 2., 3., 4.]);
    assert_eq!(format!("{}", a), "[1,2,3,4]");
    assert_eq!(format!("{:4}", a), "[   1,   2,   3,   4]");
    assert_eq!(format!("{:.1}", a), "[1.0,2.0,3.0,4.0]");

    let b = Array::<f32, 3>::from_shape_vec([2, 1, 2], vec![1., 2., 3., 4.]).unwrap();
    assert_eq!(format!("{}", b), "[[[1,2]],[[3,4]]]");
    assert_eq!(format!("{:e}", b), "[[[1e0,2e0]],[[3e0,4e0]]]");
    assert_eq!(format!("{:E}", b), "[[[1E0,2E0]],[[3E0,4E0]]]");
}

#[test]
fn layouts_print_the_same() {
    let c: Array2<i32> = array![[1, 2, 3], [4, 5, 6]].unwrap();
    let f = Array::<i32, 2, ColumnMajor>::from_nested(nested![[1, 2, 3], [4, 5, 6]]).unwrap();
    assert_eq!(c.to_string(), "[[1,2,3],[4,5,6]]");
    assert_eq!(f.to_string(), c.to_string());
}

#[test]
fn views_print_their_elements() {
    let a = Array::<i32, 2>::from_shape_fn([4, 4], |[i, j]| (4 * i + j) as i32);
    let v = a.slice(s![1..;2, ..;2]);
    assert_eq!(v.to_string(), "[[4,6],[12,14]]");
    assert_eq!(
        format!("{:?}", v),
        "[[4,6],[12,14]] shape=[2, 2], strides=[8, 2], offsets=[4, 0], layout=RowMajor, origin=0"
    );
}

#[test]
fn debug_format_column_major_one_based() {
    let a = FortranArray::<u8, 2>::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(
        format!("{:?}", a),
        "[[1,3,5],[2,4,6]] shape=[2, 3], strides=[1, 2], offsets=[0, 0], layout=ColumnMajor, origin=1"
    );
    assert_eq!(format!("{:02x}", a.slice(s![2..3, ..])), "[[02,04,06]]");
}

#[test]
fn empty_and_degenerate() {
    let a = Array::<f64, 2>::zeros([0, 3]);
    assert_eq!(a.to_string(), "[]");
    let b = Array::<f64, 3>::zeros([1, 2, 0]);
    assert_eq!(b.to_string(), "[[[],[]]]");
    let c = Array::<i32, 1>::from(vec![7]);
    assert_eq!(c.to_string(), "[7]");
}
