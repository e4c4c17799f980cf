//! Locate `node_modules` directories, installed modules, and project roots
//! by walking up from a starting directory.
//!
//! Every search here is a configuration of one primitive,
//! [`traverse_ancestor_directories`]: visit a directory, ask a path
//! generator for a candidate path, keep the candidate if it exists, move to
//! the parent. The walk ends at a [`StopPolicy`] boundary, after a maximum
//! number of results, or at the filesystem root.
//!
//! - [`find_module_instances`] lists every installed copy of a module, e.g.
//!   `a/b/node_modules/react` and `a/node_modules/react`.
//! - [`find_node_modules_dirs`] lists the `node_modules` directories
//!   themselves.
//! - [`resolve_project_root`] picks the directory of the deepest
//!   `yarn.lock`, `package-lock.json` or `pnpm-lock.yaml`, so a nested
//!   package with its own lockfile is preferred over the enclosing
//!   workspace.
//!
//! Without a root path, module searches stop after the first directory that
//! contains a `package.json`. That directory is still searched.
//!
//! Only existence is probed, file contents are never read. A probe that
//! fails (for example on an unreadable directory) counts as a miss rather
//! than an error.

#![forbid(unsafe_code)]
#![deny(missing_debug_implementations)]

mod error;
pub mod find_up;
mod io;
pub mod path;
pub mod project_root;
pub mod search;

pub use error::Error;
pub use find_up::{traverse_ancestor_directories, StopPolicy};
pub use project_root::{find_lockfiles, resolve_project_root, Lockfile};
pub use search::{find_module_instances, find_node_modules_dirs, NODE_MODULES, PACKAGE_JSON};
