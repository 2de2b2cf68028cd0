//! CLI command implementations.

pub mod init;
pub mod mine;
pub mod show;
