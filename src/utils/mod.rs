//! Utility functions shared by the transformer and the command-line tool

pub mod date_utils;
pub mod logging;

pub use date_utils::parse_date_string;
