//! Core operations.
//!
//! This module contains the business logic for pagegen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod cron;
pub mod generate;

pub use check::check;
pub use generate::generate;
