// Take a look at the license at the top of the repository in the LICENSE file.

use libc::{c_int, c_uint, c_void, size_t};

#[cfg(not(target_os = "linux"))]
use libc::c_char;

/// Equivalent of [`sysctl`][crate::sysctl] for C callers, reproducing the
/// native calling convention of the kernel facility: `*len` holds the
/// destination capacity on entry and the number of bytes written on exit.
/// Returns 0 on success; on failure the result is nonzero and `errno` holds
/// the kernel's error code, untouched by this boundary.
///
/// # Safety
///
/// `name` must point to `name_len` readable identifier codes, `len` must be a
/// valid pointer, and `value` must be null or point to `*len` writable bytes,
/// all for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sysquery_sysctl(
    name: *mut c_int,
    name_len: c_uint,
    value: *mut c_void,
    len: *mut size_t,
) -> c_int {
    unsafe { crate::sys::sysctl(name, name_len, value, len) }
}

/// Equivalent of [`sysctl_by_name`][crate::sysctl_by_name] for C callers,
/// with the same result and `errno` contract as
/// [`sysquery_sysctl`]. Absent on kernel families without a name-based
/// lookup.
///
/// # Safety
///
/// `name` must point to a null-terminated string, `len` must be a valid
/// pointer, and `value` must be null or point to `*len` writable bytes, all
/// for the duration of the call.
#[cfg(not(target_os = "linux"))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sysquery_sysctlbyname(
    name: *const c_char,
    value: *mut c_void,
    len: *mut size_t,
) -> c_int {
    unsafe { crate::sys::sysctlbyname(name, value, len) }
}
