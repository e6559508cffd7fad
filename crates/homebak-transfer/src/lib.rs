//! homebak transfer plumbing
//!
//! Everything between a finished rule set and a completed rsync run:
//! - Destination validation and per-user directory creation
//! - Locating the transfer program on PATH
//! - Assembling and running the transfer command

pub mod command;
pub mod destination;
pub mod tool;

pub use command::{TransferCommand, TransferFlags, DEFAULT_PROGRAM};
pub use destination::{Destination, DESTINATION_MODE};
pub use tool::resolve_tool;
