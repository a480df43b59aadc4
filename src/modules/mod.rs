//! Biological data modules

pub mod seq;
pub mod search_io;
