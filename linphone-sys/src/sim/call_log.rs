use std::ffi::CString;
use std::os::raw::c_int;

use super::address::Address;
use super::object::{self, Header, Object};
use crate::types::*;

#[repr(C)]
#[derive(Debug)]
pub(crate) struct CallLog {
    header: Header,
    pub(crate) dir: LinphoneCallDir,
    pub(crate) status: LinphoneCallStatus,
    pub(crate) duration: c_int,
    pub(crate) quality: f32,
    pub(crate) call_id: CString,
    pub(crate) from: *mut Address,
    pub(crate) to: *mut Address,
    pub(crate) start_date: time_t,
}

unsafe impl Object for CallLog {}

impl CallLog {
    /// Takes over one reference to each of `from` and `to`.
    pub(crate) fn new(dir: LinphoneCallDir, call_id: CString, from: *mut Address, to: *mut Address) -> Self {
        let start_date = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs() as time_t)
            .unwrap_or_default();

        Self {
            header: Header::new(),
            dir,
            status: LinphoneCallAborted,
            duration: 0,
            quality: -1.0,
            call_id,
            from,
            to,
            start_date,
        }
    }

    pub(crate) fn remote(&self) -> *mut Address {
        if self.dir == LinphoneCallOutgoing {
            self.to
        } else {
            self.from
        }
    }
}

impl Drop for CallLog {
    fn drop(&mut self) {
        unsafe {
            object::release(self.from);
            object::release(self.to);
        }
    }
}
