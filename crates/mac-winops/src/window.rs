use std::ffi::c_void;

use core_foundation::{
    array::{CFArray, CFArrayGetCount, CFArrayGetValueAtIndex},
    base::{CFTypeRef, TCFType},
    dictionary::CFDictionaryRef,
};
use core_graphics::window as cgw;
use tracing::{trace, warn};

use crate::{
    WindowInfo,
    cfutil::{dict_get_i32, dict_get_string},
};

#[link(name = "CoreGraphics", kind = "framework")]
unsafe extern "C" {
    fn CGWindowListCopyWindowInfo(option: u32, relativeToWindow: u32) -> CFTypeRef; // CFArrayRef
}

const K_CG_WINDOW_LIST_OPTION_ON_SCREEN_ONLY: u32 = 1 << 0;
const K_CG_WINDOW_LIST_OPTION_EXCLUDE_DESKTOP_ELEMENTS: u32 = 1 << 4;

/// On-screen layer-0 windows in front-to-back order.
pub fn list_windows() -> Vec<WindowInfo> {
    trace!("list_windows");
    let mut out = Vec::new();
    unsafe {
        let arr_ref = CGWindowListCopyWindowInfo(
            K_CG_WINDOW_LIST_OPTION_ON_SCREEN_ONLY
                | K_CG_WINDOW_LIST_OPTION_EXCLUDE_DESKTOP_ELEMENTS,
            0,
        );
        if arr_ref.is_null() {
            warn!("list_windows: CGWindowListCopyWindowInfo returned null");
            return out;
        }
        let arr: CFArray<*const c_void> = CFArray::wrap_under_create_rule(arr_ref as _);
        #[allow(non_snake_case)]
        unsafe extern "C" {
            fn CFGetTypeID(cf: CFTypeRef) -> u64;
            fn CFDictionaryGetTypeID() -> u64;
        }
        for i in 0..CFArrayGetCount(arr.as_concrete_TypeRef()) {
            let item = CFArrayGetValueAtIndex(arr.as_concrete_TypeRef(), i) as CFTypeRef;
            if item.is_null() || CFGetTypeID(item) != CFDictionaryGetTypeID() {
                continue;
            }
            let d = item as CFDictionaryRef;
            // Menu bar, HUDs and overlays live above layer 0.
            if dict_get_i32(d, cgw::kCGWindowLayer).is_some_and(|l| l != 0) {
                continue;
            }
            let Some(pid) = dict_get_i32(d, cgw::kCGWindowOwnerPID) else {
                continue;
            };
            let id = match dict_get_i32(d, cgw::kCGWindowNumber) {
                Some(n) if n > 0 => n as u32,
                _ => continue,
            };
            out.push(WindowInfo {
                app: dict_get_string(d, cgw::kCGWindowOwnerName).unwrap_or_default(),
                title: dict_get_string(d, cgw::kCGWindowName).unwrap_or_default(),
                pid,
                id,
            });
        }
    }
    trace!(count = out.len(), "list_windows done");
    out
}
