//! API handlers.

pub mod config;
pub mod orders;
pub mod pages;
pub mod tokens;
