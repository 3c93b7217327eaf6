/// Strato Cloud API client implementation
pub mod client;
pub mod models;
pub mod pagination;

pub use client::ApiClient;
