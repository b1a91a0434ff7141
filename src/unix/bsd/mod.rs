// Take a look at the license at the top of the repository in the LICENSE file.

use libc::{c_char, c_int, c_uint, c_void, size_t};

/// `true` if this platform exposes the sysctl query facility.
pub const IS_SUPPORTED_SYSTEM: bool = true;

/// Read-only call into the kernel's MIB lookup. `len` carries the destination
/// capacity on entry and the number of bytes written on exit; both roles
/// belong to the kernel, not to this shim. No replacement value is ever
/// supplied (`newp` stays null).
pub(crate) unsafe fn sysctl(
    name: *mut c_int,
    name_len: c_uint,
    value: *mut c_void,
    len: *mut size_t,
) -> c_int {
    unsafe {
        libc::sysctl(
            name.cast_const(),
            name_len,
            value,
            len,
            std::ptr::null_mut(),
            0,
        )
    }
}

/// Read-only call into the kernel's name-based lookup, same `len` contract as
/// [`sysctl`].
pub(crate) unsafe fn sysctlbyname(
    name: *const c_char,
    value: *mut c_void,
    len: *mut size_t,
) -> c_int {
    unsafe { libc::sysctlbyname(name, value, len, std::ptr::null_mut(), 0) }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn raw_mib_lookup() {
        let mut mib = [libc::CTL_KERN, libc::KERN_OSTYPE];
        let mut len: size_t = 0;

        // Size-only probe, then the actual read.
        unsafe {
            assert_eq!(
                sysctl(
                    mib.as_mut_ptr(),
                    mib.len() as c_uint,
                    std::ptr::null_mut(),
                    &mut len,
                ),
                0
            );
        }
        assert!(len > 0);

        let mut buf = vec![0u8; len];
        unsafe {
            assert_eq!(
                sysctl(
                    mib.as_mut_ptr(),
                    mib.len() as c_uint,
                    buf.as_mut_ptr() as *mut _,
                    &mut len,
                ),
                0
            );
        }
        assert!(len <= buf.len());
    }

    #[test]
    fn raw_name_lookup() {
        let mut len: size_t = 0;

        unsafe {
            assert_eq!(
                sysctlbyname(c"kern.ostype".as_ptr(), std::ptr::null_mut(), &mut len),
                0
            );
        }
        assert!(len > 0);
    }
}
