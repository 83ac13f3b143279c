//! Library side of the `roster` binary: logging setup and the convert command.

pub mod commands;
pub mod logging;
