use std::path::{Path, PathBuf};

use crate::{
    error::Error,
    find_up::{traverse_ancestor_directories, StopPolicy},
    path::join_segments,
};

pub const NODE_MODULES: &str = "node_modules";
pub const PACKAGE_JSON: &str = "package.json";

fn stop_policy(root_path: Option<&Path>) -> StopPolicy {
    match root_path.filter(|root_path| !root_path.as_os_str().is_empty()) {
        Some(root_path) => StopPolicy::Boundary(root_path.to_owned()),
        None => StopPolicy::Marker(PACKAGE_JSON.into()),
    }
}

/// Find every installed copy of `module_name` in `node_modules` directories
/// of `start_dir` and its ancestors, nearest first.
///
/// `module_name` may be scoped (`@scope/name`). When `root_path` is given the
/// search covers `root_path` and stops there; otherwise, or when it is empty,
/// the search stops after the first directory containing a `package.json`.
pub fn find_module_instances<P>(
    start_dir: P,
    module_name: &str,
    root_path: Option<&Path>,
) -> Result<Vec<PathBuf>, Error>
where
    P: AsRef<Path>,
{
    traverse_ancestor_directories(
        start_dir,
        |directory| join_segments(&directory.join(NODE_MODULES), module_name),
        &stop_policy(root_path),
        None,
    )
}

/// Find every `node_modules` directory in `start_dir` and its ancestors,
/// nearest first. Stops like [`find_module_instances`].
pub fn find_node_modules_dirs<P>(start_dir: P, root_path: Option<&Path>) -> Result<Vec<PathBuf>, Error>
where
    P: AsRef<Path>,
{
    traverse_ancestor_directories(
        start_dir,
        |directory| directory.join(NODE_MODULES),
        &stop_policy(root_path),
        None,
    )
}
