// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod csv;
pub mod error;
pub mod file;
pub mod net;
pub mod runner;
pub mod sanitize;
pub mod scrape;
pub mod store;
