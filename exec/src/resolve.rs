use crate::error::ResolveError;
use dsproxy_core::Config;
use std::path::{Path, PathBuf};

/// Appended to the resolved path of this program to find the real daemon.
pub const REAL_BINARY_SUFFIX: &str = ".bin";

/// Locate the real vmtoolsd.
///
/// A configured override is returned as-is. Otherwise the path is derived
/// from the running executable. Existence is checked separately by
/// [`verify`].
pub fn resolve(config: &Config) -> Result<PathBuf, ResolveError> {
    if let Some(path) = config
        .vmtoolsd
        .as_ref()
        .filter(|p| !p.as_os_str().is_empty())
    {
        return Ok(path.clone());
    }

    let exe = std::env::current_exe().map_err(ResolveError::CurrentExe)?;
    real_binary_for(&exe)
}

/// Resolve every symlink in `exe` and append [`REAL_BINARY_SUFFIX`].
pub fn real_binary_for(exe: &Path) -> Result<PathBuf, ResolveError> {
    let resolved = std::fs::canonicalize(exe).map_err(|source| ResolveError::Canonicalize {
        path: exe.to_path_buf(),
        source,
    })?;

    let mut path = resolved.into_os_string();
    path.push(REAL_BINARY_SUFFIX);
    Ok(PathBuf::from(path))
}

pub fn verify(path: &Path) -> Result<(), ResolveError> {
    std::fs::metadata(path)
        .map(|_| ())
        .map_err(|source| ResolveError::Missing {
            path: path.to_path_buf(),
            source,
        })
}
