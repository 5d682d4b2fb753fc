pub mod common;
pub mod frontier;
pub mod neighbors;
pub mod path;
pub mod search;
