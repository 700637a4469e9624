pub mod coordinates;
pub mod fetcher;
pub mod push;
pub mod rewrite;

pub use crate::utils::error::Result;
