//! Command implementations for the CLI
//!
//! - start: Start the landing page server
//! - plans: Resolve the pricing catalog once and print it
//! - test: Test configuration validity
//! - config: Configuration display and validation

pub mod config;
pub mod plans;
pub mod start;
pub mod test;
