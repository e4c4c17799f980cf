use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Error reading the current directory to resolve {path:?}")]
    CurrentDirectory {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
}
