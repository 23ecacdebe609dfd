pub mod common;
pub mod completions;
pub mod config;
pub mod normalize;
pub mod replay;
pub mod writing;
