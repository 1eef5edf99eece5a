//! Format implementations

pub mod markdown;
