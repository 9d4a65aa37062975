//! Ownership of native reference-counted handles.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr::NonNull;

use crate::Sealed;
use crate::identity::{IdentityCache, Registry};

/// A kind of native object: the pointee type, its retain/release pair, and the identity cache it is tracked in.
///
/// # Safety
///
/// `retain` and `release` must increment and decrement the reference count of a live object of type [`Self::Raw`].
pub unsafe trait HandleKind: Sealed + Sized + 'static {
    /// Opaque native type the handle points to.
    type Raw;

    /// Human-readable name, used in logs.
    const NAME: &'static str;

    /// Increments the native reference count.
    ///
    /// # Safety
    ///
    /// `ptr` must point to a live object.
    unsafe fn retain(ptr: NonNull<Self::Raw>);

    /// Decrements the native reference count, possibly destroying the object.
    ///
    /// # Safety
    ///
    /// `ptr` must point to a live object on which the caller owns a reference.
    unsafe fn release(ptr: NonNull<Self::Raw>);

    /// The cache in `registry` that tracks wrappers of this kind.
    fn cache(registry: &Registry) -> &IdentityCache<Self>;
}

/// Declares a zero-sized [`HandleKind`] marker.
macro_rules! handle_kind {
    (
        $(#[$meta:meta])*
        $vis:vis $kind:ident {
            raw: $raw:ty,
            name: $name:literal,
            retain: $retain:path,
            release: $release:path,
            cache: $cache:ident $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $kind {}

        impl $crate::Sealed for $kind {}

        unsafe impl $crate::handle::HandleKind for $kind {
            type Raw = $raw;

            const NAME: &'static str = $name;

            unsafe fn retain(ptr: std::ptr::NonNull<Self::Raw>) {
                unsafe {
                    $retain(ptr.as_ptr());
                }
            }

            unsafe fn release(ptr: std::ptr::NonNull<Self::Raw>) {
                unsafe { $release(ptr.as_ptr()) }
            }

            fn cache(registry: &$crate::identity::Registry) -> &$crate::identity::IdentityCache<Self> {
                &registry.$cache
            }
        }
    };
}

pub(crate) use handle_kind;

/// Exclusive ownership of one native reference.
///
/// The handle is released exactly once, when the owner is dropped. It is neither `Copy` nor `Clone`; sharing goes through the wrapper types, which count references on the Rust side.
/// Two handles are equal when they point to the same native object.
pub struct OwnedHandle<K: HandleKind> {
    ptr: NonNull<K::Raw>,
}

impl<K: HandleKind> OwnedHandle<K> {
    /// Takes a new reference on `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must point to a live object of kind `K`.
    pub unsafe fn retain(ptr: NonNull<K::Raw>) -> Self {
        unsafe { K::retain(ptr) };
        tracing::trace!(kind = K::NAME, ptr = ?ptr, "retained native handle");
        Self { ptr }
    }

    /// Takes over a reference the engine already handed out, such as the result of a `create` or `clone` function.
    ///
    /// # Safety
    ///
    /// `ptr` must point to a live object of kind `K`, and the caller must own the reference being transferred.
    pub unsafe fn adopt(ptr: NonNull<K::Raw>) -> Self {
        tracing::trace!(kind = K::NAME, ptr = ?ptr, "adopted native handle");
        Self { ptr }
    }

    /// Returns the raw pointer. The reference stays owned by `self`.
    pub fn as_ptr(&self) -> *mut K::Raw {
        self.ptr.as_ptr()
    }

    pub(crate) fn addr(&self) -> usize {
        self.ptr.as_ptr() as usize
    }
}

impl<K: HandleKind> Drop for OwnedHandle<K> {
    fn drop(&mut self) {
        tracing::trace!(kind = K::NAME, ptr = ?self.ptr, "released native handle");
        unsafe { K::release(self.ptr) }
    }
}

impl<K: HandleKind> PartialEq for OwnedHandle<K> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr == other.ptr
    }
}

impl<K: HandleKind> Eq for OwnedHandle<K> {}

impl<K: HandleKind> Hash for OwnedHandle<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ptr.hash(state);
    }
}

impl<K: HandleKind> fmt::Debug for OwnedHandle<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OwnedHandle")
            .field(&K::NAME)
            .field(&self.ptr)
            .finish()
    }
}
