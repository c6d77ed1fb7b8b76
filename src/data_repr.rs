use std::mem::ManuallyDrop;
use std::ptr::NonNull;
use std::slice;

use crate::ViewRepr;

/// Array's representation.
///
/// *Don’t use this type directly. Use the type alias
/// [`Array`](crate::Array) for the array type!*
// Like a Vec, but the array keeps its own pointer into the buffer, so the
// parts are stored separately instead of behind a Vec.
#[derive(Debug)]
#[repr(C)]
pub struct OwnedRepr<A> {
    ptr: NonNull<A>,
    len: usize,
    capacity: usize,
}

impl<A> OwnedRepr<A> {
    pub(crate) fn from(v: Vec<A>) -> Self {
        let mut v = ManuallyDrop::new(v);
        let len = v.len();
        let capacity = v.capacity();
        // Vec's pointer is never null, even when it has not allocated
        let ptr = unsafe { NonNull::new_unchecked(v.as_mut_ptr()) };
        Self { ptr, len, capacity }
    }

    pub(crate) fn into_vec(self) -> Vec<A> {
        ManuallyDrop::new(self).take_as_vec()
    }

    pub(crate) fn as_slice(&self) -> &[A] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn as_ptr(&self) -> *const A {
        self.ptr.as_ptr()
    }

    pub(crate) fn as_nonnull_mut(&mut self) -> NonNull<A> {
        self.ptr
    }

    /// Reserve `additional` elements; return the new pointer
    ///
    /// ## Safety
    ///
    /// Note that existing pointers into the data are invalidated
    #[must_use = "must use new pointer to update existing pointers"]
    pub(crate) fn reserve(&mut self, additional: usize) -> NonNull<A> {
        self.modify_as_vec(|mut v| {
            v.reserve(additional);
            v
        });
        self.as_nonnull_mut()
    }

    /// Drop excess capacity; return the new pointer
    #[must_use = "must use new pointer to update existing pointers"]
    pub(crate) fn shrink_to_fit(&mut self) -> NonNull<A> {
        self.modify_as_vec(|mut v| {
            v.shrink_to_fit();
            v
        });
        self.as_nonnull_mut()
    }

    fn modify_as_vec(&mut self, f: impl FnOnce(Vec<A>) -> Vec<A>) {
        let v = self.take_as_vec();
        *self = Self::from(f(v));
    }

    fn take_as_vec(&mut self) -> Vec<A> {
        let capacity = self.capacity;
        let len = self.len;
        self.len = 0;
        self.capacity = 0;
        unsafe { Vec::from_raw_parts(self.ptr.as_ptr(), len, capacity) }
    }
}

impl<A> Clone for OwnedRepr<A>
where
    A: Clone,
{
    fn clone(&self) -> Self {
        Self::from(self.as_slice().to_owned())
    }
}

impl<A> Drop for OwnedRepr<A> {
    fn drop(&mut self) {
        // capacity 0 means either never allocated or already taken
        if self.capacity > 0 || self.len > 0 {
            self.take_as_vec();
        }
    }
}

unsafe impl<A> Sync for OwnedRepr<A> where A: Sync {}
unsafe impl<A> Send for OwnedRepr<A> where A: Send {}

impl<A> ViewRepr<A> {
    #[inline(always)]
    pub(crate) fn new() -> Self {
        ViewRepr { life: std::marker::PhantomData }
    }
}
