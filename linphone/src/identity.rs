//! One wrapper per live native handle.
//!
//! The engine only knows raw pointers; the same object can come back through many accessors (the core of a call, the call of a log, ...).
//! A [`Context`] remembers which wrapper currently owns a reference on each pointer so that every lookup of a live handle yields that same wrapper.
//! Entries are kept in a per-thread side-table owned by this crate; nothing is written into the engine's user-data slots.
//! Every context of a thread shares that table, so a handle reached through two cores still has a single wrapper.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::ptr::NonNull;
use std::rc::{Rc, Weak};

use slotmap::SlotMap;

use crate::Sealed;
use crate::address::AddressKind;
use crate::call::CallKind;
use crate::call_log::CallLogKind;
use crate::core::CoreKind;
use crate::handle::{HandleKind, OwnedHandle};

slotmap::new_key_type! {
    /// Generational key of an identity-cache entry.
    pub struct CacheKey;
}

/// Raw pointee type of a resource.
pub type RawOf<R> = <<R as Resource>::Kind as HandleKind>::Raw;

/// A safe wrapper type built on top of a cached [`Wrapped`] handle.
pub trait Resource: Sealed + Sized {
    /// The kind of native object this resource wraps.
    type Kind: HandleKind;

    #[doc(hidden)]
    fn from_wrapped(wrapped: Rc<Wrapped<Self::Kind>>) -> Self;

    #[doc(hidden)]
    fn wrapped(&self) -> &Rc<Wrapped<Self::Kind>>;

    /// Returns the raw handle. The reference stays owned by the wrapper.
    fn as_ptr(&self) -> *mut RawOf<Self> {
        self.wrapped().handle.as_ptr()
    }

    /// The context this resource was resolved through.
    fn context(&self) -> &Context {
        &self.wrapped().context
    }

    /// Checks if `self` and `other` are the same wrapper, not merely wrappers of the same handle.
    fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self.wrapped(), other.wrapped())
    }
}

/// The shared state behind every wrapper of one native handle.
pub struct Wrapped<K: HandleKind> {
    handle: OwnedHandle<K>,
    context: Context,
    key: CacheKey,
}

impl<K: HandleKind> Wrapped<K> {
    /// The owned native reference.
    pub fn handle(&self) -> &OwnedHandle<K> {
        &self.handle
    }
}

impl<K: HandleKind> Drop for Wrapped<K> {
    fn drop(&mut self) {
        // Runs before `handle` is released.
        K::cache(&self.context.0).evict(self.handle.addr(), self.key);
    }
}

impl<K: HandleKind> fmt::Debug for Wrapped<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapped")
            .field("handle", &self.handle)
            .field("key", &self.key)
            .finish()
    }
}

/// Live wrappers of one handle kind, keyed by handle address.
pub struct IdentityCache<K: HandleKind> {
    entries: RefCell<SlotMap<CacheKey, Weak<Wrapped<K>>>>,
    by_address: RefCell<HashMap<usize, CacheKey>>,
}

impl<K: HandleKind> IdentityCache<K> {
    /// Number of live wrappers.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Checks if no wrapper of this kind is alive.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, ptr: NonNull<K::Raw>) -> Option<Rc<Wrapped<K>>> {
        let key = *self.by_address.borrow().get(&(ptr.as_ptr() as usize))?;
        self.entries.borrow().get(key)?.upgrade()
    }

    fn insert(&self, handle: OwnedHandle<K>, context: &Context) -> Rc<Wrapped<K>> {
        let address = handle.addr();
        let wrapped = Rc::new_cyclic(|weak| {
            let key = self.entries.borrow_mut().insert(weak.clone());
            Wrapped {
                handle,
                context: context.clone(),
                key,
            }
        });

        // A dead entry for the same address belongs to a wrapper whose drop has not finished yet.
        if let Some(stale) = self
            .by_address
            .borrow_mut()
            .insert(address, wrapped.key)
        {
            self.entries.borrow_mut().remove(stale);
        }
        wrapped
    }

    fn evict(&self, address: usize, key: CacheKey) {
        self.entries.borrow_mut().remove(key);

        let mut by_address = self.by_address.borrow_mut();
        if by_address.get(&address) == Some(&key) {
            by_address.remove(&address);
            tracing::debug!(kind = K::NAME, address, "evicted identity cache entry");
        }
    }
}

impl<K: HandleKind> Default for IdentityCache<K> {
    fn default() -> Self {
        Self {
            entries: RefCell::new(SlotMap::with_key()),
            by_address: RefCell::new(HashMap::new()),
        }
    }
}

impl<K: HandleKind> fmt::Debug for IdentityCache<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityCache")
            .field("kind", &K::NAME)
            .field("len", &self.len())
            .finish()
    }
}

/// One identity cache per handle kind.
#[derive(Debug, Default)]
pub struct Registry {
    pub(crate) cores: IdentityCache<CoreKind>,
    pub(crate) calls: IdentityCache<CallKind>,
    pub(crate) addresses: IdentityCache<AddressKind>,
    pub(crate) call_logs: IdentityCache<CallLogKind>,
}

thread_local! {
    static REGISTRY: Rc<Registry> = Rc::new(Registry::default());
}

/// The context every wrapper is resolved through.
///
/// A context is a handle on the identity side-table of the current thread: all contexts created on a thread share it.
/// Each wrapper keeps its context, so the table outlives every wrapper registered in it.
/// It is not `Send`: the engine must be driven from a single thread.
#[derive(Clone)]
pub struct Context(Rc<Registry>);

impl Context {
    /// Returns a handle on the current thread's side-table.
    pub fn new() -> Self {
        Self(REGISTRY.with(Rc::clone))
    }

    /// Returns the wrapper of `ptr`, taking a native reference if no wrapper of it is alive.
    ///
    /// A null `ptr` yields `None` without touching the engine.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or point to a live object of the resource's kind.
    pub unsafe fn resolve<R: Resource>(&self, ptr: *mut RawOf<R>) -> Option<R> {
        let ptr = NonNull::new(ptr)?;
        let cache = R::Kind::cache(&self.0);

        if let Some(wrapped) = cache.lookup(ptr) {
            tracing::debug!(kind = R::Kind::NAME, ?ptr, "identity cache hit");
            return Some(R::from_wrapped(wrapped));
        }

        tracing::debug!(kind = R::Kind::NAME, ?ptr, "identity cache miss");
        let handle = unsafe { OwnedHandle::retain(ptr) };
        Some(R::from_wrapped(cache.insert(handle, self)))
    }

    /// Like [`Self::resolve`], for a reference the engine handed over to the caller.
    ///
    /// No reference is taken. If a wrapper of `ptr` is already alive, the transferred reference is released immediately.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or point to a live object of the resource's kind, and the caller must own the reference being transferred.
    pub unsafe fn adopt<R: Resource>(&self, ptr: *mut RawOf<R>) -> Option<R> {
        let ptr = NonNull::new(ptr)?;
        let cache = R::Kind::cache(&self.0);
        let handle = unsafe { OwnedHandle::adopt(ptr) };

        if let Some(wrapped) = cache.lookup(ptr) {
            tracing::debug!(kind = R::Kind::NAME, ?ptr, "identity cache hit");
            drop(handle);
            return Some(R::from_wrapped(wrapped));
        }

        tracing::debug!(kind = R::Kind::NAME, ?ptr, "identity cache miss");
        Some(R::from_wrapped(cache.insert(handle, self)))
    }

    /// Number of live wrappers of resource type `R` on this context's thread.
    pub fn cached<R: Resource>(&self) -> usize {
        R::Kind::cache(&self.0).len()
    }

    /// Checks if `self` and `other` share a side-table, which holds for any two contexts of one thread.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Context").field(&*self.0).finish()
    }
}

#[cfg(all(test, not(feature = "native")))]
mod tests {
    use super::*;
    use crate::address::Address;
    use linphone_sys::sim;

    struct Fixture {
        core: *mut linphone_sys::LinphoneCore,
        address: *mut linphone_sys::LinphoneAddress,
    }

    impl Fixture {
        fn new() -> Self {
            unsafe {
                let core = linphone_sys::linphone_factory_create_core_3(
                    linphone_sys::linphone_factory_get(),
                    std::ptr::null(),
                    std::ptr::null(),
                    std::ptr::null_mut(),
                );
                let address =
                    linphone_sys::linphone_core_create_address(core, c"sip:alice@example.org".as_ptr());
                Self { core, address }
            }
        }
    }

    impl Drop for Fixture {
        fn drop(&mut self) {
            unsafe {
                linphone_sys::linphone_address_unref(self.address);
                linphone_sys::linphone_core_unref(self.core);
            }
        }
    }

    #[test]
    fn test_resolve_null() {
        let context = Context::new();
        let resolved = unsafe { context.resolve::<Address>(std::ptr::null_mut()) };
        assert!(resolved.is_none());
        assert_eq!(context.cached::<Address>(), 0);
    }

    #[test]
    fn test_resolve_twice_retains_once() {
        let fixture = Fixture::new();
        let context = Context::new();

        let first = unsafe { context.resolve::<Address>(fixture.address) }.unwrap();
        let second = unsafe { context.resolve::<Address>(fixture.address) }.unwrap();

        assert!(first.ptr_eq(&second));
        assert_eq!(unsafe { sim::retain_count(fixture.address) }, 1);
        assert_eq!(context.cached::<Address>(), 1);
    }

    #[test]
    fn test_eviction_releases_once() {
        let fixture = Fixture::new();
        let context = Context::new();

        let first = unsafe { context.resolve::<Address>(fixture.address) }.unwrap();
        let second = first.clone();
        drop(first);
        assert_eq!(context.cached::<Address>(), 1);
        assert_eq!(unsafe { sim::release_count(fixture.address) }, 0);

        drop(second);
        assert_eq!(context.cached::<Address>(), 0);
        assert_eq!(unsafe { sim::release_count(fixture.address) }, 1);
        assert_eq!(unsafe { sim::ref_count(fixture.address) }, 1);
    }

    #[test]
    fn test_resolve_after_eviction_builds_new_wrapper() {
        let fixture = Fixture::new();
        let context = Context::new();

        drop(unsafe { context.resolve::<Address>(fixture.address) });
        let again = unsafe { context.resolve::<Address>(fixture.address) }.unwrap();

        assert_eq!(again.as_ptr(), fixture.address);
        assert_eq!(unsafe { sim::retain_count(fixture.address) }, 2);
        assert_eq!(unsafe { sim::release_count(fixture.address) }, 1);
    }

    #[test]
    fn test_adopt_existing_releases_transferred_reference() {
        let fixture = Fixture::new();
        let context = Context::new();

        let resolved = unsafe { context.resolve::<Address>(fixture.address) }.unwrap();
        unsafe { linphone_sys::linphone_address_ref(fixture.address) };
        let adopted = unsafe { context.adopt::<Address>(fixture.address) }.unwrap();

        assert!(resolved.ptr_eq(&adopted));
        assert_eq!(unsafe { sim::ref_count(fixture.address) }, 2);
    }

    #[test]
    fn test_contexts_share_the_thread_table() {
        let fixture = Fixture::new();
        let first = Context::new();
        let second = Context::new();

        let a = unsafe { first.resolve::<Address>(fixture.address) }.unwrap();
        let b = unsafe { second.resolve::<Address>(fixture.address) }.unwrap();

        assert!(a.ptr_eq(&b));
        assert!(first.ptr_eq(&second));
        assert_eq!(unsafe { sim::retain_count(fixture.address) }, 1);
        assert_eq!(second.cached::<Address>(), 1);
    }

    #[test]
    fn test_threads_have_separate_tables() {
        let fixture = Fixture::new();
        let here = Context::new();
        let _address = unsafe { here.resolve::<Address>(fixture.address) }.unwrap();

        let there = std::thread::spawn(|| Context::new().cached::<Address>())
            .join()
            .unwrap();
        assert_eq!(here.cached::<Address>(), 1);
        assert_eq!(there, 0);
    }
}
