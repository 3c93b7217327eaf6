/// Strato Cloud CLI library
///
/// The binary in `main.rs` is a thin clap front end over these modules.
pub mod api;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod services;
