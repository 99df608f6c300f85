//! Stored password records and their display form

mod types;

pub use types::*;
