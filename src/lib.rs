// src/lib.rs

pub mod cli;
pub mod core;
pub mod diff;
pub mod error;
pub mod net;
pub mod params;
pub mod records;
pub mod report;
pub mod runner;
pub mod sources;
pub mod store;
