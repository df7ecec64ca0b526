use crate::error::LaunchError;
use crate::process::{ProcessControl, SUCCESS_CODE};
use dsproxy_core::{ArgTrace, CMD_FLAG, RewrittenArguments};
use std::ffi::OsString;
use std::path::PathBuf;

/// Invokes the real daemon for a set of rewritten arguments.
pub struct Dispatcher<P> {
    program: PathBuf,
    process: P,
    trace: ArgTrace,
}

impl<P: ProcessControl> Dispatcher<P> {
    pub fn new(program: impl Into<PathBuf>, process: P, trace: ArgTrace) -> Self {
        Self {
            program: program.into(),
            process,
            trace,
        }
    }

    /// Invoke the daemon and return the exit code this process should
    /// terminate with.
    ///
    /// With zero or one generated command the daemon takes over the
    /// process. With more, each command runs as its own child in order and
    /// the first failure ends the run with that child's code. Commands run
    /// before a failure are not undone.
    pub fn dispatch(&self, args: RewrittenArguments) -> Result<i32, LaunchError> {
        let RewrittenArguments {
            mut common,
            generated,
        } = args;

        match generated.as_slice() {
            [] => self.replace(&common),
            [command] => {
                common.push(CMD_FLAG.into());
                common.push(command.into());
                self.replace(&common)
            }
            commands => self.run_each(common.get(1..).unwrap_or_default(), commands),
        }
    }

    fn replace(&self, argv: &[OsString]) -> Result<i32, LaunchError> {
        self.trace.trace("replace", argv);
        let status = self.process.replace(&self.program, argv)?;
        Ok(status.exit_code())
    }

    fn run_each(&self, base: &[OsString], commands: &[String]) -> Result<i32, LaunchError> {
        for command in commands {
            let mut args = Vec::with_capacity(base.len() + 2);
            args.extend_from_slice(base);
            args.push(OsString::from(CMD_FLAG));
            args.push(OsString::from(command));

            self.trace.trace("run", &args);
            let status = self.process.run(&self.program, &args)?;
            if !status.success() {
                tracing::debug!(command = %command, status = ?status, "Guestinfo command failed");
                return Ok(status.exit_code());
            }
        }

        Ok(SUCCESS_CODE)
    }
}
