//! Filesystem candidates for a resource, in probe order.
//!
//! Candidates are computed purely from the two input strings; nothing here
//! touches the filesystem.

use super::ResourceOrigin;
use std::path::{PathBuf, is_separator};

/// Join `home` and `resource` with exactly one separator between them.
///
/// Trailing separators on `home` collapse into one, so `"/etc/app/conf"` and
/// `"/etc/app/conf/"` join identically. `home` is not canonicalized.
///
/// ```rust
/// use layered_resources::resolver::join_home;
///
/// assert_eq!(join_home("/etc/app/conf", "schema.xml"), "/etc/app/conf/schema.xml");
/// assert_eq!(join_home("/etc/app/conf//", "schema.xml"), "/etc/app/conf/schema.xml");
/// assert_eq!(join_home("conf", "schema.xml"), "conf/schema.xml");
/// ```
pub fn join_home(home: &str, resource: &str) -> String {
    let base = home.trim_end_matches(is_separator);
    format!("{}/{}", base, resource)
}

/// Filesystem candidates for `resource`, home-relative first.
///
/// An absolute resource is its own only candidate. A relative resource is
/// tried under `home` (unless `home` is empty) and then as given, relative to
/// the working directory.
pub(crate) fn plan(home: &str, resource: &str) -> Vec<ResourceOrigin> {
    let direct = PathBuf::from(resource);
    if direct.is_absolute() || home.is_empty() {
        return vec![ResourceOrigin::Direct(direct)];
    }

    // The joined path always carries the home prefix, so it never equals the
    // direct path here and both are probed.
    vec![
        ResourceOrigin::HomeRelative(PathBuf::from(join_home(home, resource))),
        ResourceOrigin::Direct(direct),
    ]
}
