pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod discovery;
pub mod languages;
pub mod logging;
pub mod output;
pub mod voice;
