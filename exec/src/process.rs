use crate::error::LaunchError;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Exit code used when a failure has no code of its own.
pub const FAILURE_CODE: i32 = 1;
pub const SUCCESS_CODE: i32 = 0;

/// How a child invocation of the daemon ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildStatus {
    Exited(i32),
    /// Terminated without an exit code, e.g. by a signal.
    Unknown,
}

impl ChildStatus {
    pub fn success(&self) -> bool {
        matches!(self, ChildStatus::Exited(SUCCESS_CODE))
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ChildStatus::Exited(code) => *code,
            ChildStatus::Unknown => FAILURE_CODE,
        }
    }
}

impl From<ExitStatus> for ChildStatus {
    fn from(status: ExitStatus) -> Self {
        status.code().map_or(ChildStatus::Unknown, ChildStatus::Exited)
    }
}

/// Process control used to reach the real daemon.
pub trait ProcessControl {
    /// Hand this process over to `program`, with `argv[0]` as its program
    /// name.
    ///
    /// Where the platform can replace the process image this returns only
    /// on failure. Elsewhere it runs `program` with `argv[1..]` as a child
    /// and returns how it ended.
    fn replace(&self, program: &Path, argv: &[OsString]) -> Result<ChildStatus, LaunchError>;

    /// Run `program` with `args` as a child with inherited stdio and wait
    /// for it.
    fn run(&self, program: &Path, args: &[OsString]) -> Result<ChildStatus, LaunchError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcess;

impl ProcessControl for SystemProcess {
    #[cfg(unix)]
    fn replace(&self, program: &Path, argv: &[OsString]) -> Result<ChildStatus, LaunchError> {
        use nix::unistd::execv;
        use std::ffi::{CString, OsStr};
        use std::os::unix::ffi::OsStrExt;

        fn c_string(value: &OsStr) -> Result<CString, LaunchError> {
            CString::new(value.as_bytes())
                .map_err(|_| LaunchError::NulByte(value.to_string_lossy().into_owned()))
        }

        let path = c_string(program.as_os_str())?;
        let mut c_argv = argv
            .iter()
            .map(|arg| c_string(arg))
            .collect::<Result<Vec<_>, _>>()?;
        if c_argv.is_empty() {
            c_argv.push(path.clone());
        }

        tracing::debug!(program = ?program, "Replacing process image");

        let Err(errno) = execv(&path, &c_argv);
        Err(LaunchError::Exec {
            program: program.to_path_buf(),
            source: errno,
        })
    }

    #[cfg(not(unix))]
    fn replace(&self, program: &Path, argv: &[OsString]) -> Result<ChildStatus, LaunchError> {
        self.run(program, argv.get(1..).unwrap_or_default())
    }

    fn run(&self, program: &Path, args: &[OsString]) -> Result<ChildStatus, LaunchError> {
        tracing::debug!(program = ?program, "Running child process");

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: program.to_path_buf(),
                source,
            })?;

        tracing::debug!(program = ?program, status = ?status, "Child process exited");
        Ok(status.into())
    }
}
