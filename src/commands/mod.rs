//! Command implementations

pub mod info;
pub mod simple;
pub mod suggest;

pub use info::{IndexInfo, index_info};
pub use simple::{SessionOptions, pick_one, run_session};
pub use suggest::{SuggestConfig, SuggestResult, run_suggest};
