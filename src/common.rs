// Take a look at the license at the top of the repository in the LICENSE file.

use std::fmt;

use libc::{c_int, c_uint, size_t};

#[cfg(not(target_os = "linux"))]
use std::ffi::CStr;

/// Raw error code of a failed kernel query, taken verbatim from the
/// last-error slot right after the call. This boundary never interprets or
/// remaps it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Errno(c_int);

impl Errno {
    pub(crate) fn last() -> Self {
        Self(std::io::Error::last_os_error().raw_os_error().unwrap_or(0))
    }

    /// The underlying kernel error code (`ENOENT`, `ENOMEM`, ...).
    pub fn raw(self) -> c_int {
        self.0
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&std::io::Error::from_raw_os_error(self.0), f)
    }
}

impl std::error::Error for Errno {}

/// Queries a kernel parameter by its numeric identifier path (MIB).
///
/// With `Some(buf)`, up to `buf.len()` bytes of the current value are written
/// into `buf` and the number of bytes the kernel produced is returned. With
/// `None`, nothing is written and the returned length is the size required to
/// hold the value (the kernel's "size only" probe).
///
/// The bytes are returned as-is; interpreting them is entirely up to the
/// caller.
///
/// ```no_run
/// // kern.ostype is MIB [1, 1] on the BSD families.
/// let mut buf = [0u8; 256];
/// let written = sysquery::sysctl(&[1, 1], Some(&mut buf)).unwrap();
/// println!("{:?}", &buf[..written]);
/// ```
pub fn sysctl(mib: &[c_int], value: Option<&mut [u8]>) -> Result<usize, Errno> {
    let name_len = c_uint::try_from(mib.len()).map_err(|_| Errno(libc::EINVAL))?;
    let mut len: size_t = value.as_deref().map_or(0, <[u8]>::len);
    let ptr = value.map_or(std::ptr::null_mut(), |v| v.as_mut_ptr().cast());

    if unsafe { crate::sys::sysctl(mib.as_ptr().cast_mut(), name_len, ptr, &mut len) } == 0 {
        Ok(len)
    } else {
        Err(Errno::last())
    }
}

/// Queries a kernel parameter by its symbolic name, with the same buffer and
/// length contract as [`sysctl`].
///
/// This operation only exists on kernel families providing a name-based
/// lookup; Linux is numeric-path only and does not compile it in.
///
/// ```no_run
/// let mut buf = [0u8; 256];
/// let written = sysquery::sysctl_by_name(c"kern.ostype", Some(&mut buf)).unwrap();
/// println!("{:?}", &buf[..written]);
/// ```
#[cfg(not(target_os = "linux"))]
pub fn sysctl_by_name(name: &CStr, value: Option<&mut [u8]>) -> Result<usize, Errno> {
    let mut len: size_t = value.as_deref().map_or(0, <[u8]>::len);
    let ptr = value.map_or(std::ptr::null_mut(), |v| v.as_mut_ptr().cast());

    if unsafe { crate::sys::sysctlbyname(name.as_ptr(), ptr, &mut len) } == 0 {
        Ok(len)
    } else {
        Err(Errno::last())
    }
}

/// Convenience form of [`sysctl`]: probes the required size, allocates, and
/// reads the value in one go. No retry is attempted if the value grows
/// between the two calls; the kernel's error is returned instead.
pub fn sysctl_vec(mib: &[c_int]) -> Result<Vec<u8>, Errno> {
    let size = sysctl(mib, None)?;
    let mut buf = vec![0u8; size];
    match sysctl(mib, Some(&mut buf)) {
        Ok(written) => {
            buf.truncate(written);
            Ok(buf)
        }
        Err(e) => {
            sysquery_debug!("sysctl read after size probe failed: {e}");
            Err(e)
        }
    }
}

/// Convenience form of [`sysctl_by_name`], same two-step behavior as
/// [`sysctl_vec`].
#[cfg(not(target_os = "linux"))]
pub fn sysctl_by_name_vec(name: &CStr) -> Result<Vec<u8>, Errno> {
    let size = sysctl_by_name(name, None)?;
    let mut buf = vec![0u8; size];
    match sysctl_by_name(name, Some(&mut buf)) {
        Ok(written) => {
            buf.truncate(written);
            Ok(buf)
        }
        Err(e) => {
            sysquery_debug!("sysctlbyname read after size probe failed: {e}");
            Err(e)
        }
    }
}
