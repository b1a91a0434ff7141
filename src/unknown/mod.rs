// Take a look at the license at the top of the repository in the LICENSE file.

/// `false`: this platform does not expose the sysctl query facility, so none
/// of the query operations exist here.
pub const IS_SUPPORTED_SYSTEM: bool = false;
