//! Core senti library (config, logging, sentiment client, form controller).

pub mod config;
pub mod form;
pub mod logging;
pub mod sentiment;
