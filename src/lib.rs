pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod screens;
pub mod share;
pub mod ui;
