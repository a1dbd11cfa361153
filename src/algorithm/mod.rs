//! Algorithm implementations for treatment history analysis

pub mod lot;
