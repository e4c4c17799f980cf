use std::path::{Component, Path, PathBuf};

use crate::error::Error;

/// Resolve `path` to an absolute, normalized path.
///
/// Relative paths are joined onto the current working directory. `.`
/// components are dropped and `..` removes the preceding component, never
/// climbing above the root. The filesystem is not consulted: the path need
/// not exist and symbolic links are left as written.
pub fn resolve<P: AsRef<Path>>(path: P) -> Result<PathBuf, Error> {
    fn inner(path: &Path) -> Result<PathBuf, Error> {
        if path.is_absolute() {
            return Ok(normalize(path));
        }
        let cwd = std::env::current_dir().map_err(|source| Error::CurrentDirectory {
            source,
            path: path.to_owned(),
        })?;
        Ok(normalize(&cwd.join(path)))
    }
    inner(path.as_ref())
}

pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                normalized.push(component)
            }
            Component::CurDir => {}
            Component::ParentDir => {
                // `pop` refuses to remove the root
                normalized.pop();
            }
        }
    }
    normalized
}

/// Join a `/`-separated relative name (such as a scoped package name)
/// onto `directory` one segment at a time.
pub(crate) fn join_segments(directory: &Path, name: &str) -> PathBuf {
    name.split('/')
        .filter(|segment| !segment.is_empty())
        .fold(directory.to_owned(), |path, segment| path.join(segment))
}
