//! Filesystem helpers for reading and writing skill packages.
//!
//! Existence checks use `symlink_metadata()` so that a dangling symlink still
//! counts as an occupied path.

use std::io;
use std::path::Path;

/// Returns `true` if anything (file, directory, or symlink) occupies `path`.
#[must_use]
pub(crate) fn path_occupied(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

/// Returns `true` if any of the owner/group/other execute bits is set.
///
/// Always `true` on platforms without Unix permissions.
#[cfg(unix)]
#[must_use]
pub(crate) fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
#[must_use]
pub(crate) fn is_executable(_path: &Path) -> bool {
    true
}

/// Set mode `0o755` on `path`. No-op on non-Unix platforms.
#[cfg(unix)]
pub(crate) fn make_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
pub(crate) fn make_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}
