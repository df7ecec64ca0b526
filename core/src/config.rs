use std::ffi::OsString;
use std::path::PathBuf;

pub const DEBUG_ENV: &str = "DSP_DEBUG";
pub const VMTOOLSD_ENV: &str = "DSP_VMTOOLSD";

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Trace argument vectors to stderr.
    pub debug: bool,
    /// Absolute path of the real daemon, bypassing path derivation.
    pub vmtoolsd: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    /// Build from a variable lookup. Values are OS strings so a path
    /// override that is not valid UTF-8 is still honoured.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let debug = lookup(DEBUG_ENV)
            .and_then(|v| v.to_str().and_then(parse_bool))
            .unwrap_or(false);
        let vmtoolsd = lookup(VMTOOLSD_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self { debug, vmtoolsd }
    }
}

/// Boolean spellings accepted by the legacy tooling.
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
