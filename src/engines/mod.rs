//! Low-level engines shared by the search result model

pub mod compute;
