//! Locating and invoking the real vmtoolsd.

mod dispatch;
mod error;
mod process;
mod resolve;

pub use dispatch::Dispatcher;
pub use error::{LaunchError, ResolveError};
pub use process::{ChildStatus, FAILURE_CODE, ProcessControl, SUCCESS_CODE, SystemProcess};
pub use resolve::{REAL_BINARY_SUFFIX, real_binary_for, resolve, verify};
