//! Plain console output

pub mod console;
