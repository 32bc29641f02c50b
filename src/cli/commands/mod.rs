//! Command implementations

pub mod init;
pub mod redact;
pub mod scan;
pub mod validate;
