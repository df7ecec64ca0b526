//! dsproxy - stands in for vmtoolsd and translates `datasets-*` commands
//! into the guestinfo commands older daemons understand.
//!
//! Usage: install in place of vmtoolsd with the real daemon next to it as
//! `<resolved path>.bin`, or point `DSP_VMTOOLSD` at it. Set `DSP_DEBUG=1`
//! to trace argument vectors on stderr.

mod error;
mod logging;
mod proxy;

use dsproxy_core::Config;
use dsproxy_exec::FAILURE_CODE;
use std::ffi::OsString;

fn main() {
    let config = Config::from_env();
    logging::init(&config);

    let args: Vec<OsString> = std::env::args_os().collect();

    let code = match proxy::run(&config, &args) {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "dsproxy failed");
            eprintln!("dsproxy: {}", e);
            FAILURE_CODE
        }
    };

    std::process::exit(code);
}
