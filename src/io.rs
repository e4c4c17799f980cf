use std::path::Path;

use log::trace;

/// Probe `path` for existence, following symbolic links.
///
/// An error from the probe (permission denied, an invalid path, any other
/// I/O failure) is reported as "does not exist" so that a single unreadable
/// directory cannot abort an upward search. The error is logged at trace
/// level.
pub(crate) fn path_exists(path: &Path) -> bool {
    match path.try_exists() {
        Ok(exists) => exists,
        Err(err) => {
            trace!("Treating {:?} as absent: {}", path, err);
            false
        }
    }
}
