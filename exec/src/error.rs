use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("cannot determine the path of the running program: {0}")]
    CurrentExe(#[source] std::io::Error),

    #[error("cannot resolve symlinks in {path:?}: {source}")]
    Canonicalize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("real vmtoolsd not found at {path:?}: {source}")]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("failed to start {program:?}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(unix)]
    #[error("failed to exec {program:?}: {source}")]
    Exec {
        program: PathBuf,
        #[source]
        source: nix::errno::Errno,
    },

    #[error("argument contains a NUL byte: {0}")]
    NulByte(String),
}
