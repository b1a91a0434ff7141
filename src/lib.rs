// Take a look at the license at the top of the repository in the LICENSE file.

#![doc = include_str!("../README.md")]
#![allow(unknown_lints)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

#[macro_use]
mod macros;

cfg_if::cfg_if! {
    if #[cfg(feature = "unknown-ci")] {
        // This is used in CI to check that the build for unknown targets is compiling fine.
        mod unknown;
        use crate::unknown as sys;
    } else if #[cfg(any(
        target_os = "macos", target_os = "ios",
        target_os = "freebsd", target_os = "netbsd",
        all(
            target_os = "linux",
            target_env = "gnu",
            any(target_arch = "x86", target_arch = "x86_64"),
        )))]
    {
        mod unix;
        use crate::unix::sys as sys;

        mod common;

        pub use crate::common::{sysctl, sysctl_vec, Errno};
        #[cfg(not(target_os = "linux"))]
        pub use crate::common::{sysctl_by_name, sysctl_by_name_vec};

        #[cfg(feature = "c-interface")]
        mod c_interface;
        #[cfg(feature = "c-interface")]
        pub use crate::c_interface::*;
    } else {
        // Kernel families without the sysctl query facility: the query
        // operations are absent entirely, so dependent code fails to compile
        // instead of failing at runtime.
        mod unknown;
        use crate::unknown as sys;
    }
}

pub use crate::sys::IS_SUPPORTED_SYSTEM;
