use dsproxy_core::DecodeError;
use dsproxy_exec::{LaunchError, ResolveError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Launch(#[from] LaunchError),
}
