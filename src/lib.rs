//! Oracle core - command interpretation, task model, and durable storage
//!
//! The session loop in `main.rs` consumes this library through three
//! seams: [`parser::parse`], [`command::Command::execute`], and
//! [`storage::Storage`].

pub mod command;
pub mod error;
pub mod parser;
pub mod storage;
pub mod task;
