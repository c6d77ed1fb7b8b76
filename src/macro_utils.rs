/// Derive Copy and Clone using the parameters (and bounds) as specified in []
macro_rules! copy_and_clone {
    ([$($parm:tt)*] $type_:ty) => {
        impl<$($parm)*> Copy for $type_ { }
        impl<$($parm)*> Clone for $type_ {
            #[inline(always)]
            fn clone(&self) -> Self { *self }
        }
    };
    ($type_:ty) => {
        copy_and_clone!{ [] $type_ }
    }
}

/// This assertion is always enabled but only verbose (formatting when
/// debug assertions are enabled).
#[cfg(debug_assertions)]
macro_rules! ndassert {
    ($e:expr, $($t:tt)*) => { assert!($e, $($t)*) }
}

#[cfg(not(debug_assertions))]
macro_rules! ndassert {
    ($e:expr, $($_ignore:tt)*) => { assert!($e) }
}

/// Check a zero-based index against every axis length and panic with the
/// offending index when it is out of bounds.
macro_rules! bounds_check {
    ($dim:expr, $index:expr) => {{
        let dim = $dim;
        let index = $index;
        for (&d, &i) in dim.iter().zip(index.iter()) {
            if i >= d {
                $crate::arraytraits::array_out_of_bounds();
            }
        }
    }};
}

/// Like `bounds_check!`, but only with debug assertions on.
macro_rules! debug_bounds_check {
    ($dim:expr, $index:expr) => {
        if cfg!(debug_assertions) {
            bounds_check!($dim, $index);
        }
    };
}
