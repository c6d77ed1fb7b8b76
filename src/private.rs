//! Sealing for the public traits of the crate.
//!
//! [`Layout`](crate::Layout), [`Origin`](crate::Origin) and the data
//! representation traits are public because they appear as bounds on public
//! methods, but only this crate provides implementations. That leaves room
//! to add required items to them later.

/// If this type is pub but not publicly reachable, third parties
/// can't name it and can't implement traits using it.
pub struct PrivateMarker;

macro_rules! private_decl {
    () => {
        /// This trait is private to implement; this method exists to make it
        /// impossible to implement outside the crate.
        #[doc(hidden)]
        fn __private__(&self) -> crate::private::PrivateMarker;
    };
}

macro_rules! private_impl {
    () => {
        fn __private__(&self) -> crate::private::PrivateMarker {
            crate::private::PrivateMarker
        }
    };
}
