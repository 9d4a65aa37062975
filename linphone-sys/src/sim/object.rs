use std::os::raw::c_void;

/// Bookkeeping shared by every engine object; always the first field so that any object pointer can be read as a header.
#[repr(C)]
#[derive(Debug)]
pub(crate) struct Header {
    refs: usize,
    retains: usize,
    releases: usize,
    pub(crate) user_data: *mut c_void,
}

impl Header {
    pub(crate) fn new() -> Self {
        Self {
            refs: 1,
            retains: 0,
            releases: 0,
            user_data: std::ptr::null_mut(),
        }
    }
}

/// An engine object carrying a [`Header`] as its first field.
///
/// # Safety
///
/// Implementors must be `#[repr(C)]` with a [`Header`] as their first field.
pub(crate) unsafe trait Object: Sized {}

/// Moves `value` to the heap with a reference count of one.
pub(crate) fn allocate<T: Object>(value: T) -> *mut T {
    Box::into_raw(Box::new(value))
}

pub(crate) unsafe fn header<'a, T>(ptr: *const T) -> &'a Header {
    &*(ptr as *const Header)
}

pub(crate) unsafe fn header_mut<'a, T>(ptr: *mut T) -> &'a mut Header {
    &mut *(ptr as *mut Header)
}

pub(crate) unsafe fn retain<T: Object>(ptr: *mut T) -> *mut T {
    if ptr.is_null() {
        return ptr;
    }
    let header = header_mut(ptr);
    header.refs += 1;
    header.retains += 1;
    ptr
}

/// Drops one reference and frees the object when none remain.
pub(crate) unsafe fn release<T: Object>(ptr: *mut T) {
    if ptr.is_null() {
        return;
    }
    let header = header_mut(ptr);
    assert!(header.refs > 0, "released an engine object with no outstanding reference");
    header.refs -= 1;
    header.releases += 1;
    if header.refs == 0 {
        drop(Box::from_raw(ptr));
    }
}

/// Current reference count of a live engine object.
///
/// # Safety
///
/// `ptr` must point to a live object created by this engine.
pub unsafe fn ref_count<T>(ptr: *const T) -> usize {
    header(ptr).refs
}

/// Number of retains issued on a live engine object since its creation; the creation reference is not counted.
///
/// # Safety
///
/// `ptr` must point to a live object created by this engine.
pub unsafe fn retain_count<T>(ptr: *const T) -> usize {
    header(ptr).retains
}

/// Number of releases issued on a live engine object since its creation.
///
/// # Safety
///
/// `ptr` must point to a live object created by this engine.
pub unsafe fn release_count<T>(ptr: *const T) -> usize {
    header(ptr).releases
}
