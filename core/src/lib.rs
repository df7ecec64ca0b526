//! Translation of `datasets-*` commands into legacy guestinfo commands.
//!
//! Everything in this crate is pure: no process control and no environment
//! access beyond [`Config::from_env`].

mod command;
mod config;
mod error;
mod keymap;
mod payload;
mod rewrite;
mod trace;

pub use command::{DatasetCommand, GET_ENTRY, SET_ENTRY};
pub use config::{Config, DEBUG_ENV, VMTOOLSD_ENV};
pub use error::DecodeError;
pub use keymap::guestinfo_key;
pub use payload::{DatasetEntry, DatasetGetRequest, DatasetSetRequest, decode_get, decode_set};
pub use rewrite::{CMD_FLAG, RewrittenArguments, rewrite};
pub use trace::{ArgTrace, format_args_line};
