/// Login and session state
pub mod auth;
/// Application configuration module
pub mod config;
/// CSV and JSON writers
pub mod export;
/// The ratings exporter
pub mod exporter;
