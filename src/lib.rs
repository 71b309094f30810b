// Library exports for the mailfetch crate
// This allows the integration tests to drive the pipeline with a fake provider

pub mod cleanup;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod gmail_client;
pub mod logging;
pub mod provider;
pub mod store;
