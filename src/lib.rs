pub mod app;
pub mod aqi;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openweather;
pub mod report;
pub mod routes;

// Re-export key functions for convenience
pub use app::{create_app, init_tracing};
