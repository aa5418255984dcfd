//! Noto website data CLI library.

pub mod cli;
pub mod dev;
