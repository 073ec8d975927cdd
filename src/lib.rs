// src/lib.rs

pub mod checks;
pub mod config;
pub mod preview;
pub mod probe;
pub mod report;
