//! Runtime configuration of the portal server.

pub mod config;
