use crate::error::ProxyError;
use dsproxy_core::{ArgTrace, Config, rewrite};
use dsproxy_exec::{Dispatcher, ProcessControl, SystemProcess, resolve, verify};
use std::ffi::OsString;

/// Resolve the real daemon, translate `args` and hand over to it.
///
/// Returns the exit code to terminate with. When the daemon replaces this
/// process the call does not return on success.
pub fn run(config: &Config, args: &[OsString]) -> Result<i32, ProxyError> {
    run_with(config, args, SystemProcess)
}

fn run_with<P: ProcessControl>(
    config: &Config,
    args: &[OsString],
    process: P,
) -> Result<i32, ProxyError> {
    let vmtoolsd = resolve(config)?;
    verify(&vmtoolsd)?;

    let trace = ArgTrace::new(config.debug);
    trace.trace("args", args);

    let rewritten = rewrite(args)?;
    trace.trace("common", &rewritten.common);
    trace.trace("generated", &rewritten.generated);

    let dispatcher = Dispatcher::new(vmtoolsd, process, trace);
    Ok(dispatcher.dispatch(rewritten)?)
}
