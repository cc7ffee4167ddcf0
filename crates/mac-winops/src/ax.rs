use std::{cell::RefCell, collections::HashMap, ffi::c_void, ptr, thread_local};

use core_foundation::{
    array::{CFArray, CFArrayGetCount, CFArrayGetValueAtIndex},
    base::{CFRelease, CFRetain, CFTypeRef, TCFType},
    boolean::kCFBooleanTrue,
    string::{CFString, CFStringRef},
};
use tracing::debug;

use crate::error::{Error, Result};

#[link(name = "ApplicationServices", kind = "framework")]
unsafe extern "C" {
    fn AXUIElementCreateApplication(pid: i32) -> *mut c_void;
    fn AXUIElementCopyAttributeValue(
        element: *mut c_void,
        attr: CFStringRef,
        value: *mut CFTypeRef,
    ) -> i32;
    fn AXUIElementSetAttributeValue(element: *mut c_void, attr: CFStringRef, value: CFTypeRef)
    -> i32;
    fn AXUIElementPerformAction(element: *mut c_void, action: CFStringRef) -> i32;
}

thread_local! {
    static ATTR_STRINGS: RefCell<HashMap<&'static str, CFString>> = RefCell::new(HashMap::new());
}

/// Stable CFStringRef for an attribute or action name.
///
/// Static strings are not toll-free bridged; recent macOS versions trip
/// pointer authentication when CoreFoundation treats them as NSStrings.
pub(crate) fn cfstr(name: &'static str) -> CFStringRef {
    ATTR_STRINGS.with(|cell| {
        let mut m = cell.borrow_mut();
        let s = m.entry(name).or_insert_with(|| CFString::new(name));
        s.as_concrete_TypeRef()
    })
}

pub(crate) fn ax_check() -> Result<()> {
    if permissions::accessibility_ok() {
        Ok(())
    } else {
        Err(Error::Permission)
    }
}

/// RAII guard that releases a retained AX element on drop.
pub(crate) struct AXElem(*mut c_void);

impl AXElem {
    /// Take ownership of an element returned by a Create/Copy call.
    fn from_create(ptr: *mut c_void) -> Option<Self> {
        if ptr.is_null() { None } else { Some(Self(ptr)) }
    }

    /// Retain an element borrowed from a container that is about to be released.
    fn retain_from_borrowed(ptr: *mut c_void) -> Option<Self> {
        if ptr.is_null() {
            return None;
        }
        unsafe { CFRetain(ptr as CFTypeRef) };
        Some(Self(ptr))
    }

    #[inline]
    fn as_ptr(&self) -> *mut c_void {
        self.0
    }
}

impl Drop for AXElem {
    fn drop(&mut self) {
        unsafe { CFRelease(self.0 as CFTypeRef) };
    }
}

/// Find the AX window of `pid` whose title equals `title`.
fn ax_find_window_by_title(pid: i32, title: &str) -> Result<Option<AXElem>> {
    let app = unsafe { AXElem::from_create(AXUIElementCreateApplication(pid)) }
        .ok_or(Error::AppElement)?;

    let mut wins_ref: CFTypeRef = ptr::null_mut();
    let err =
        unsafe { AXUIElementCopyAttributeValue(app.as_ptr(), cfstr("AXWindows"), &mut wins_ref) };
    if err != 0 || wins_ref.is_null() {
        return Err(Error::AxCode(err));
    }
    let arr = unsafe { CFArray::<*const c_void>::wrap_under_create_rule(wins_ref as _) };

    for i in 0..unsafe { CFArrayGetCount(arr.as_concrete_TypeRef()) } {
        let w = unsafe { CFArrayGetValueAtIndex(arr.as_concrete_TypeRef(), i) } as *mut c_void;
        if w.is_null() {
            continue;
        }
        let mut t_ref: CFTypeRef = ptr::null_mut();
        let terr = unsafe { AXUIElementCopyAttributeValue(w, cfstr("AXTitle"), &mut t_ref) };
        if terr != 0 || t_ref.is_null() {
            continue;
        }
        let t = unsafe { CFString::wrap_under_create_rule(t_ref as CFStringRef) }.to_string();
        if t == title {
            return Ok(AXElem::retain_from_borrowed(w));
        }
    }
    Ok(None)
}

/// Mark the window titled `title` as main and raise it.
///
/// Returns `false` when the app has no AX window with that title, which
/// happens for windows on other Spaces; app activation alone then decides
/// which window ends up in front.
pub(crate) fn ax_raise_window_titled(pid: i32, title: &str) -> Result<bool> {
    let Some(win) = ax_find_window_by_title(pid, title)? else {
        debug!(pid, title, "ax_raise: no AX window with title");
        return Ok(false);
    };
    // Best-effort hint; raising below is what counts.
    let main_err = unsafe {
        AXUIElementSetAttributeValue(win.as_ptr(), cfstr("AXMain"), kCFBooleanTrue as CFTypeRef)
    };
    if main_err != 0 {
        debug!(pid, title, code = main_err, "ax_raise: AXMain not set");
    }
    let err = unsafe { AXUIElementPerformAction(win.as_ptr(), cfstr("AXRaise")) };
    if err != 0 {
        return Err(Error::AxCode(err));
    }
    debug!(pid, title, "ax_raise: raised");
    Ok(true)
}
