//! Single-user contact directory: an ordered in-memory store with add,
//! remove, search and list operations, persisted to a flat
//! `first,last,phone,email` text file.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod helper;
pub mod prelude;
pub mod storage;
