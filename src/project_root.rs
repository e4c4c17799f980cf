use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    error::Error,
    find_up::{traverse_ancestor_directories, StopPolicy},
};

/// Package manager lockfiles recognized as project root markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lockfile {
    Yarn,
    Npm,
    Pnpm,
}

impl Lockfile {
    /// All lockfile kinds, in the order they are searched.
    pub const ALL: [Lockfile; 3] = [Lockfile::Yarn, Lockfile::Npm, Lockfile::Pnpm];

    pub fn file_name(self) -> &'static str {
        match self {
            Lockfile::Yarn => "yarn.lock",
            Lockfile::Npm => "package-lock.json",
            Lockfile::Pnpm => "pnpm-lock.yaml",
        }
    }
}

impl Display for Lockfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// Find the nearest lockfile of each kind in `start_dir` or its ancestors.
///
/// The result follows the order of [`Lockfile::ALL`] and omits kinds that
/// were not found.
pub fn find_lockfiles<P>(start_dir: P) -> Result<Vec<(Lockfile, PathBuf)>, Error>
where
    P: AsRef<Path>,
{
    let found: Vec<(Lockfile, PathBuf)> = Lockfile::ALL
        .iter()
        .map(|&lockfile| -> Result<Option<(Lockfile, PathBuf)>, Error> {
            let mut paths = traverse_ancestor_directories(
                start_dir.as_ref(),
                |directory| directory.join(lockfile.file_name()),
                &StopPolicy::Unrestricted,
                Some(1),
            )?;
            Ok(paths.pop().map(|path| (lockfile, path)))
        })
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .flatten()
        .collect();

    debug!("find_lockfiles: {:?}", found);
    Ok(found)
}

/// Determine the root directory of the project containing `start_dir`.
///
/// The root is the directory of the deepest lockfile found by
/// [`find_lockfiles`], so a nested package with its own lockfile wins over
/// an enclosing workspace. On equal depth the earlier kind in
/// [`Lockfile::ALL`] wins. Without any lockfile, `start_dir` is returned as
/// given.
pub fn resolve_project_root<P>(start_dir: P) -> Result<PathBuf, Error>
where
    P: AsRef<Path>,
{
    let mut project_root: Option<&Path> = None;
    let lockfiles = find_lockfiles(start_dir.as_ref())?;
    for lockfile_directory in lockfiles.iter().filter_map(|(_, path)| path.parent()) {
        let is_deeper = project_root.map_or(true, |root| {
            lockfile_directory.as_os_str().len() > root.as_os_str().len()
        });
        if is_deeper {
            project_root = Some(lockfile_directory);
        }
    }

    let project_root = project_root
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| start_dir.as_ref().to_owned());
    debug!("resolve_project_root: {:?}", project_root);
    Ok(project_root)
}
