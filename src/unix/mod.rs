// Take a look at the license at the top of the repository in the LICENSE file.

cfg_if::cfg_if! {
    if #[cfg(any(target_os = "macos", target_os = "ios"))] {
        pub(crate) mod apple;
        pub(crate) use apple as sys;

        #[allow(unused)]
        pub(crate) use libc::__error as libc_errno;
    } else if #[cfg(any(target_os = "freebsd", target_os = "netbsd"))] {
        pub(crate) mod bsd;
        pub(crate) use bsd as sys;

        #[cfg(target_os = "freebsd")]
        #[allow(unused)]
        pub(crate) use libc::__error as libc_errno;
        #[cfg(target_os = "netbsd")]
        #[allow(unused)]
        pub(crate) use libc::__errno as libc_errno;
    } else if #[cfg(target_os = "linux")] {
        pub(crate) mod linux;
        pub(crate) use linux as sys;

        pub(crate) use libc::__errno_location as libc_errno;
    } else {
        compile_error!("Invalid cfg!");
    }
}
