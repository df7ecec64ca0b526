use std::ffi::OsStr;

/// Conditional tracing of argument vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgTrace {
    enabled: bool,
}

impl ArgTrace {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn trace<S: AsRef<OsStr>>(&self, label: &str, values: &[S]) {
        if !self.enabled {
            return;
        }
        tracing::debug!("{}", format_args_line(label, values));
    }
}

pub fn format_args_line<S: AsRef<OsStr>>(label: &str, values: &[S]) -> String {
    let joined = values
        .iter()
        .map(|v| v.as_ref().to_string_lossy())
        .collect::<Vec<_>>()
        .join(",");
    format!("{} len={}, val={}", label, values.len(), joined)
}
