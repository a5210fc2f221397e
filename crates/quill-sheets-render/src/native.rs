//! Native renderer over the C ABI
//!
//! The renderer library exposes two symbols: an export function taking the
//! document JSON as a NUL-terminated string and returning a heap-allocated,
//! base64-encoded, NUL-terminated payload, and a free function for that
//! payload. The returned pointer is owned by the foreign allocator and must
//! be released exactly once, on every exit path; [`ForeignBuffer`] scopes
//! that ownership so the pointer never escapes this module.

use crate::{RenderError, Renderer};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use quill_sheets_doc::Document;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// The renderer's export entry point
pub type ExportFn = unsafe extern "C" fn(*const c_char) -> *mut c_char;

/// The renderer's buffer-release entry point
pub type FreeFn = unsafe extern "C" fn(*mut c_char);

/// A [`Renderer`] backed by a loaded native library
pub struct NativeRenderer {
    export: ExportFn,
    free: FreeFn,
}

impl NativeRenderer {
    /// Wrap the renderer's entry points
    ///
    /// # Safety
    ///
    /// `export` must return either null or a NUL-terminated buffer that
    /// stays valid until passed to `free`, and `free` must accept every
    /// non-null pointer `export` returned, exactly once.
    pub unsafe fn from_symbols(export: ExportFn, free: FreeFn) -> Self {
        Self { export, free }
    }
}

/// Scoped ownership of a foreign buffer; releases it on drop
struct ForeignBuffer {
    ptr: *mut c_char,
    free: FreeFn,
}

impl ForeignBuffer {
    fn payload(&self) -> Option<&CStr> {
        if self.ptr.is_null() {
            None
        } else {
            // Non-null pointers uphold the from_symbols contract
            Some(unsafe { CStr::from_ptr(self.ptr) })
        }
    }
}

impl Drop for ForeignBuffer {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            unsafe { (self.free)(self.ptr) };
        }
    }
}

impl Renderer for NativeRenderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>, RenderError> {
        let json = document
            .to_json()
            .map_err(|e| RenderError::Payload(e.to_string()))?;
        // JSON escapes control characters, so the payload is NUL-free
        let json = CString::new(json).map_err(|e| RenderError::Payload(e.to_string()))?;

        let buffer = ForeignBuffer {
            ptr: unsafe { (self.export)(json.as_ptr()) },
            free: self.free,
        };

        let payload = buffer
            .payload()
            .ok_or_else(|| RenderError::Native("renderer returned null".into()))?;

        let bytes = BASE64
            .decode(payload.to_bytes())
            .map_err(|e| RenderError::Payload(e.to_string()))?;

        if bytes.is_empty() {
            return Err(RenderError::EmptyOutput);
        }
        Ok(bytes)
        // buffer drops here, releasing the foreign allocation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_sheets_doc::Workbook;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    static FREED: AtomicUsize = AtomicUsize::new(0);
    // The free counter is process-global; hold this across each test so
    // parallel test threads don't interleave counts.
    static COUNTER_LOCK: Mutex<()> = Mutex::new(());

    unsafe extern "C" fn export_ok(_json: *const c_char) -> *mut c_char {
        CString::new(BASE64.encode(b"rendered-bytes"))
            .expect("nul-free")
            .into_raw()
    }

    unsafe extern "C" fn export_null(_json: *const c_char) -> *mut c_char {
        std::ptr::null_mut()
    }

    unsafe extern "C" fn export_empty(_json: *const c_char) -> *mut c_char {
        CString::new("").expect("nul-free").into_raw()
    }

    unsafe extern "C" fn export_garbage(_json: *const c_char) -> *mut c_char {
        CString::new("!!not-base64!!").expect("nul-free").into_raw()
    }

    unsafe extern "C" fn free_counting(ptr: *mut c_char) {
        if !ptr.is_null() {
            drop(CString::from_raw(ptr));
            FREED.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn doc() -> Document {
        Workbook::new().serialize().unwrap()
    }

    #[test]
    fn test_render_decodes_payload_and_frees() {
        let _guard = COUNTER_LOCK.lock().unwrap();
        let before = FREED.load(Ordering::SeqCst);
        let renderer = unsafe { NativeRenderer::from_symbols(export_ok, free_counting) };
        let bytes = renderer.render(&doc()).unwrap();
        assert_eq!(bytes, b"rendered-bytes");
        assert_eq!(FREED.load(Ordering::SeqCst), before + 1);
    }

    #[test]
    fn test_null_result_is_an_error() {
        let renderer = unsafe { NativeRenderer::from_symbols(export_null, free_counting) };
        assert!(matches!(
            renderer.render(&doc()),
            Err(RenderError::Native(_))
        ));
    }

    #[test]
    fn test_empty_payload_is_an_error() {
        let _guard = COUNTER_LOCK.lock().unwrap();
        let before = FREED.load(Ordering::SeqCst);
        let renderer = unsafe { NativeRenderer::from_symbols(export_empty, free_counting) };
        assert!(matches!(
            renderer.render(&doc()),
            Err(RenderError::EmptyOutput)
        ));
        // The buffer is released on the failure path too
        assert_eq!(FREED.load(Ordering::SeqCst), before + 1);
    }

    #[test]
    fn test_undecodable_payload_is_freed() {
        let _guard = COUNTER_LOCK.lock().unwrap();
        let before = FREED.load(Ordering::SeqCst);
        let renderer = unsafe { NativeRenderer::from_symbols(export_garbage, free_counting) };
        assert!(matches!(
            renderer.render(&doc()),
            Err(RenderError::Payload(_))
        ));
        assert_eq!(FREED.load(Ordering::SeqCst), before + 1);
    }
}
