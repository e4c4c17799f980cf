use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use log::{debug, trace};

use crate::{error::Error, io::path_exists, path::resolve};

/// When an upward traversal should stop before reaching the filesystem root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StopPolicy {
    /// Process directories up to and including this one, then stop. A
    /// boundary at the filesystem root stops before processing the root.
    Boundary(PathBuf),
    /// Stop after processing the first directory containing this file.
    Marker(OsString),
    /// Continue to the filesystem root.
    Unrestricted,
}

#[derive(Debug)]
enum Step {
    Continue,
    Last,
    Stop,
}

impl StopPolicy {
    fn step(&self, boundary_parent: Option<&Path>, current: &Path) -> Step {
        match self {
            StopPolicy::Boundary(_) => match boundary_parent {
                Some(parent) if parent == current => Step::Stop,
                _ => Step::Continue,
            },
            StopPolicy::Marker(filename) => {
                if path_exists(&current.join(filename)) {
                    Step::Last
                } else {
                    Step::Continue
                }
            }
            StopPolicy::Unrestricted => Step::Continue,
        }
    }
}

/// Walk from `start_dir` towards the filesystem root, collecting every path
/// produced by `path_generator` that exists on disk.
///
/// Results are in traversal order, nearest directory first. The walk ends
/// when `stop_policy` says so, when `max_results` matches have been found
/// (`Some(0)` means no cap), or at the filesystem root, whichever comes
/// first. Each directory is visited at most once.
///
/// Existence probes that fail are treated as misses. The only error is
/// failing to read the working directory while resolving a relative
/// `start_dir`.
pub fn traverse_ancestor_directories<P, F>(
    start_dir: P,
    mut path_generator: F,
    stop_policy: &StopPolicy,
    max_results: Option<usize>,
) -> Result<Vec<PathBuf>, Error>
where
    P: AsRef<Path>,
    F: FnMut(&Path) -> PathBuf,
{
    let boundary_parent = match stop_policy {
        StopPolicy::Boundary(boundary) => {
            let boundary = resolve(boundary)?;
            // The filesystem root is its own parent
            Some(boundary.parent().map(ToOwned::to_owned).unwrap_or(boundary))
        }
        _ => None,
    };
    let max_results = max_results.filter(|&max| max > 0);

    let mut paths = Vec::new();
    let mut current = resolve(start_dir)?;

    loop {
        let step = stop_policy.step(boundary_parent.as_deref(), &current);
        if let Step::Stop = step {
            trace!("Reached boundary at {:?}", current);
            break;
        }

        let generated_path = path_generator(&current);
        if path_exists(&generated_path) {
            trace!("Found {:?}", generated_path);
            paths.push(generated_path);
        }

        if let Step::Last = step {
            trace!("Stopping at marker in {:?}", current);
            break;
        }
        if max_results.map_or(false, |max| paths.len() >= max) {
            break;
        }
        match current.parent() {
            Some(parent) => current = parent.to_owned(),
            // Filesystem root
            None => break,
        }
    }

    debug!("traverse_ancestor_directories: {:?}", paths);
    Ok(paths)
}
