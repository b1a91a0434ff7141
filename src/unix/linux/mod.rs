// Take a look at the license at the top of the repository in the LICENSE file.

use libc::{c_int, c_uint, c_ulong, c_void, size_t};

/// `true` if this platform exposes the sysctl query facility.
pub const IS_SUPPORTED_SYSTEM: bool = true;

// Argument block of the legacy `_sysctl` system call. The kernel declares the
// path length as a signed `int`, one step narrower than the `c_uint` the
// public shim accepts.
#[repr(C)]
struct SysctlArgs {
    name: *mut c_int,
    nlen: c_int,
    oldval: *mut c_void,
    oldlenp: *mut size_t,
    newval: *mut c_void,
    newlen: size_t,
    unused: [c_ulong; 4],
}

/// Checked narrowing of the public path-length width to the kernel's declared
/// `int`. `None` means the count is not representable and the call must fail
/// before reaching the kernel.
fn kernel_name_len(len: c_uint) -> Option<c_int> {
    c_int::try_from(len).ok()
}

/// Read-only call into the kernel's MIB lookup, issued through the legacy
/// `_sysctl` system call (glibc no longer ships a wrapper for it). `len`
/// carries the destination capacity on entry and the number of bytes written
/// on exit; both roles belong to the kernel, not to this shim. No replacement
/// value is ever supplied (`newval` stays null). Kernels built without the
/// legacy facility report `ENOSYS`, which is passed through untouched.
pub(crate) unsafe fn sysctl(
    name: *mut c_int,
    name_len: c_uint,
    value: *mut c_void,
    len: *mut size_t,
) -> c_int {
    let nlen = match kernel_name_len(name_len) {
        Some(nlen) => nlen,
        None => {
            unsafe {
                *crate::unix::libc_errno() = libc::EINVAL;
            }
            return -1;
        }
    };
    let mut args = SysctlArgs {
        name,
        nlen,
        oldval: value,
        oldlenp: len,
        newval: std::ptr::null_mut(),
        newlen: 0,
        unused: [0; 4],
    };
    unsafe { libc::syscall(libc::SYS__sysctl, &mut args as *mut SysctlArgs) as c_int }
}
